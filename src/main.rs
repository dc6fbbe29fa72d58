mod board;
mod cli;
mod database;
mod editor;
mod game;
mod logging;
mod models;
mod ui;

use anyhow::Result;
use board::{AddOutcome, Board};
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use database::Database;
use ui::run_tui;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = logging::init(&cli.log_level)?;

    let db = match cli.db.as_deref() {
        Some(path) => Database::open(path)?,
        None => Database::new()?,
    };
    let mut board = Board::load(db)?;

    match cli.command {
        Some(Commands::Add { title }) => {
            match board.add_task(&title, &mut rand::thread_rng())? {
                AddOutcome::Added => println!("added '{}'", title.trim()),
                AddOutcome::LaunchGame => {
                    println!("an empty title starts the mini-game — run `pinboard tui`")
                }
            }
        }
        Some(Commands::List) => {
            for (i, task) in board.tasks.iter().enumerate() {
                let mark = if task.completed { "x" } else { " " };
                let when = if task.time.is_empty() {
                    task.date.clone()
                } else {
                    format!("{} {}", task.date, task.time)
                };
                println!("{}. [{mark}] {} ({when}) — {}", i + 1, task.title, task.content);
            }
        }
        Some(Commands::Toggle { position }) => {
            let Some(index) = position.checked_sub(1) else {
                println!("positions start at 1");
                return Ok(());
            };
            board.toggle_complete(index)?;
        }
        Some(Commands::Delete { position }) => {
            let Some(index) = position.checked_sub(1) else {
                println!("positions start at 1");
                return Ok(());
            };
            board.delete_task(index)?;
        }
        Some(Commands::Clear) => {
            board.clear()?;
            println!("board cleared");
        }
        Some(Commands::Completions { shell }) => {
            use clap_complete::{generate, Shell};
            let shell_enum = match shell.to_lowercase().as_str() {
                "bash" => Shell::Bash,
                "zsh" => Shell::Zsh,
                "fish" => Shell::Fish,
                "elvish" => Shell::Elvish,
                "powershell" => Shell::PowerShell,
                other => {
                    println!("Unsupported shell: {other}");
                    return Ok(());
                }
            };
            let mut cmd = Cli::command();
            generate(shell_enum, &mut cmd, "pinboard", &mut std::io::stdout());
        }
        Some(Commands::Tui) | None => {
            run_tui(board)?;
        }
    }

    Ok(())
}

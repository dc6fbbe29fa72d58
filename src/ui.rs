use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::ThreadRng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::board::{drop_anchor, AddOutcome, Board, NoteRect};
use crate::editor::InputField;
use crate::game::{Game, GamePhase, FIELD_H, FIELD_W};
use crate::models::GameMode;

// Terminal cells are coarser than the abstract note pixels, so dimensions
// and resize-drag deltas are converted at a fixed rate per axis.
const PX_PER_COL: u16 = 10;
const PX_PER_ROW: u16 = 20;

const FRAME: Duration = Duration::from_millis(33); // ~30 fps

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Board,
    Game,
}

/// Board interaction state. Drag, resize and the edit popups are mutually
/// exclusive, so they live in one enum instead of loose flags.
pub enum Mode {
    Idle,
    Dragging { index: usize, pointer_y: u16 },
    Resizing { index: usize, origin: (u16, u16), base_w: u16, base_h: u16 },
    EditContent { index: usize, field: InputField },
    EditDate { index: usize, field: InputField },
    EditTime { index: usize, field: InputField },
}

pub struct App {
    pub board: Board,
    pub view: View,
    pub mode: Mode,
    pub title_input: InputField,
    pub selected: usize,
    pub scroll: usize,
    pub difficulty: GameMode,
    pub game: Option<Game>,
    pub should_quit: bool,
    /// Geometry of the notes as last rendered, for mouse hit testing and
    /// the drop-anchor scan.
    note_areas: Vec<(usize, Rect)>,
    rng: ThreadRng,
}

impl App {
    pub fn new(board: Board) -> Self {
        App {
            board,
            view: View::Board,
            mode: Mode::Idle,
            title_input: InputField::new(),
            selected: 0,
            scroll: 0,
            difficulty: GameMode::Easy,
            game: None,
            should_quit: false,
            note_areas: Vec::new(),
            rng: rand::thread_rng(),
        }
    }

    fn note_rects(&self) -> Vec<NoteRect> {
        self.note_areas
            .iter()
            .map(|(index, rect)| NoteRect {
                index: *index,
                top: rect.y,
                height: rect.height,
            })
            .collect()
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.board.tasks.len() {
            self.selected = self.board.tasks.len().saturating_sub(1);
        }
    }

    fn start_game(&mut self) {
        self.mode = Mode::Idle;
        self.game = Some(Game::start(self.difficulty, Instant::now()));
        self.view = View::Game;
    }

    /// Leaving the game drops the whole session, which is the idle reset:
    /// the next start builds a fresh one from the difficulty selector.
    fn return_to_board(&mut self) {
        self.game = None;
        self.view = View::Board;
    }

    fn submit_title(&mut self) -> Result<()> {
        let title = self.title_input.value();
        match self.board.add_task(&title, &mut self.rng)? {
            AddOutcome::LaunchGame => self.start_game(),
            AddOutcome::Added => {
                self.title_input.clear();
                self.selected = self.board.tasks.len() - 1;
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }
        match self.view {
            View::Game => self.handle_game_key(key),
            View::Board => self.handle_board_key(key),
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char(' ') => {
                if let Some(game) = self.game.as_mut() {
                    game.jump();
                }
            }
            KeyCode::Char('r') => self.start_game(),
            KeyCode::Char('b') | KeyCode::Esc => self.return_to_board(),
            _ => {}
        }
        Ok(())
    }

    fn handle_board_key(&mut self, key: KeyEvent) -> Result<()> {
        // Edit popups capture all input until committed or abandoned.
        if let Mode::EditContent { .. } | Mode::EditDate { .. } | Mode::EditTime { .. } =
            self.mode
        {
            match key.code {
                KeyCode::Enter => match std::mem::replace(&mut self.mode, Mode::Idle) {
                    Mode::EditContent { index, field } => {
                        self.board.commit_content(index, &field.value())?
                    }
                    Mode::EditDate { index, field } => {
                        self.board.set_date(index, &field.value())?
                    }
                    Mode::EditTime { index, field } => {
                        self.board.set_time(index, &field.value())?
                    }
                    _ => {}
                },
                KeyCode::Esc => self.mode = Mode::Idle,
                code => {
                    if let Mode::EditContent { field, .. }
                    | Mode::EditDate { field, .. }
                    | Mode::EditTime { field, .. } = &mut self.mode
                    {
                        match code {
                            KeyCode::Char(c) => field.insert_char(c),
                            KeyCode::Backspace => field.backspace(),
                            KeyCode::Delete => field.delete(),
                            KeyCode::Left => field.move_left(),
                            KeyCode::Right => field.move_right(),
                            KeyCode::Home => field.move_home(),
                            KeyCode::End => field.move_end(),
                            _ => {}
                        }
                    }
                }
            }
            return Ok(());
        }
        if let Mode::Dragging { .. } | Mode::Resizing { .. } = self.mode {
            if key.code == KeyCode::Esc {
                self.mode = Mode::Idle;
            }
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('e') if ctrl => self.open_editor(EditKind::Content),
            KeyCode::Char('d') if ctrl => self.open_editor(EditKind::Date),
            KeyCode::Char('t') if ctrl => self.open_editor(EditKind::Time),
            KeyCode::Char('o') if ctrl => {
                self.board.toggle_complete(self.selected)?;
            }
            KeyCode::Char('k') if ctrl => {
                self.board.delete_task(self.selected)?;
                self.clamp_selection();
            }
            KeyCode::Char(c) if !ctrl => self.title_input.insert_char(c),
            KeyCode::Backspace => self.title_input.backspace(),
            KeyCode::Delete => self.title_input.delete(),
            KeyCode::Left => self.title_input.move_left(),
            KeyCode::Right => self.title_input.move_right(),
            KeyCode::Home => self.title_input.move_home(),
            KeyCode::End => self.title_input.move_end(),
            KeyCode::Enter => self.submit_title()?,
            KeyCode::Tab => self.difficulty = self.difficulty.toggled(),
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < self.board.tasks.len() {
                    self.selected += 1;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn open_editor(&mut self, kind: EditKind) {
        let Some(task) = self.board.tasks.get(self.selected) else {
            return;
        };
        let index = self.selected;
        self.mode = match kind {
            EditKind::Content => Mode::EditContent {
                index,
                field: InputField::with_value(&task.content),
            },
            EditKind::Date => Mode::EditDate {
                index,
                field: InputField::with_value(&task.date),
            },
            EditKind::Time => Mode::EditTime {
                index,
                field: InputField::with_value(&task.time),
            },
        };
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        match self.view {
            View::Game => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    if let Some(game) = self.game.as_mut() {
                        game.jump();
                    }
                }
                Ok(())
            }
            View::Board => self.handle_board_mouse(mouse),
        }
    }

    fn handle_board_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !matches!(self.mode, Mode::Idle) {
                    return Ok(());
                }
                let Some((index, rect)) = self.note_at(mouse.column, mouse.row) else {
                    return Ok(());
                };
                self.selected = index;

                // Bottom-right border corner is the resize handle.
                if mouse.column == rect.right().saturating_sub(1)
                    && mouse.row == rect.bottom().saturating_sub(1)
                {
                    let task = &self.board.tasks[index];
                    self.mode = Mode::Resizing {
                        index,
                        origin: (mouse.column, mouse.row),
                        base_w: task.width_px(),
                        base_h: task.min_height_px(),
                    };
                    return Ok(());
                }

                // The title row: its right edge deletes, the rest toggles.
                if mouse.row == rect.y + 1 {
                    if mouse.column >= rect.right().saturating_sub(4) {
                        self.board.delete_task(index)?;
                        self.clamp_selection();
                    } else {
                        self.board.toggle_complete(index)?;
                    }
                    return Ok(());
                }

                // Anywhere else on the note starts a reorder drag.
                self.mode = Mode::Dragging {
                    index,
                    pointer_y: mouse.row,
                };
                Ok(())
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                match self.mode {
                    Mode::Dragging { index, .. } => {
                        self.mode = Mode::Dragging {
                            index,
                            pointer_y: mouse.row,
                        };
                    }
                    Mode::Resizing {
                        index,
                        origin,
                        base_w,
                        base_h,
                    } => {
                        let dx = (mouse.column as i32 - origin.0 as i32) * PX_PER_COL as i32;
                        let dy = (mouse.row as i32 - origin.1 as i32) * PX_PER_ROW as i32;
                        self.board
                            .resize_live(index, base_w as i32 + dx, base_h as i32 + dy);
                    }
                    _ => {}
                }
                Ok(())
            }
            MouseEventKind::Up(MouseButton::Left) => {
                match std::mem::replace(&mut self.mode, Mode::Idle) {
                    Mode::Dragging { index, .. } => {
                        let anchor = drop_anchor(index, mouse.row, &self.note_rects());
                        self.board.reorder(index, anchor)?;
                    }
                    Mode::Resizing { .. } => self.board.finish_resize()?,
                    other => self.mode = other,
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn note_at(&self, column: u16, row: u16) -> Option<(usize, Rect)> {
        self.note_areas
            .iter()
            .find(|(_, rect)| {
                column >= rect.x
                    && column < rect.right()
                    && row >= rect.y
                    && row < rect.bottom()
            })
            .copied()
    }
}

enum EditKind {
    Content,
    Date,
    Time,
}

pub fn run_tui(board: Board) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(board);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let frame_start = Instant::now();
        terminal.draw(|f| ui(f, app))?;

        let game_running = app.game.as_ref().is_some_and(|g| g.is_running());
        // While the game runs the loop is paced; otherwise it just waits
        // for input.
        let mut wait = if game_running {
            Duration::ZERO
        } else {
            Duration::from_millis(100)
        };

        while event::poll(wait)? {
            wait = Duration::ZERO;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
                Event::Mouse(mouse) => app.handle_mouse(mouse)?,
                _ => {}
            }
            if app.should_quit {
                return Ok(());
            }
        }

        if let Some(game) = app.game.as_mut() {
            if game.is_running() {
                let now = Instant::now();
                game.maybe_spawn(now, &mut app.rng);
                game.update(now);

                let elapsed = frame_start.elapsed();
                if elapsed < FRAME {
                    std::thread::sleep(FRAME - elapsed);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    match app.view {
        View::Board => render_board(f, app),
        View::Game => render_game(f, app),
    }
}

// ---------------------------------------------------------------------------
// Board view

fn render_board(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_title_input(f, app, chunks[0]);
    render_notes(f, app, chunks[1]);
    render_footer(f, app, chunks[2]);

    if let Mode::EditContent { field, .. }
    | Mode::EditDate { field, .. }
    | Mode::EditTime { field, .. } = &app.mode
    {
        let title = match app.mode {
            Mode::EditContent { .. } => "Edit note",
            Mode::EditDate { .. } => "Edit date (YYYY-MM-DD)",
            _ => "Edit time (HH:MM)",
        };
        render_edit_popup(f, title, field);
    }
}

fn render_title_input(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("New note — Enter adds, empty Enter starts the game");
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(input_line(&app.title_input), inner);
}

/// Input line with a visible cell cursor.
fn input_line(field: &InputField) -> Paragraph<'static> {
    let value = field.value();
    let chars: Vec<char> = value.chars().collect();
    let before: String = chars[..field.cursor].iter().collect();
    let at = chars
        .get(field.cursor)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = chars[field.cursor.min(chars.len())..]
        .iter()
        .skip(1)
        .collect();

    Paragraph::new(Line::from(vec![
        Span::raw(before),
        Span::styled(at, Style::default().bg(Color::Cyan).fg(Color::Black)),
        Span::raw(after),
    ]))
}

fn render_notes(f: &mut Frame, app: &mut App, area: Rect) {
    app.note_areas.clear();
    if app.board.tasks.is_empty() {
        let hint = Paragraph::new("No notes yet. Type a title above and press Enter.")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hint, area);
        return;
    }

    let heights: Vec<u16> = app
        .board
        .tasks
        .iter()
        .map(|t| (t.min_height_px() / PX_PER_ROW).clamp(5, area.height.max(5)))
        .collect();
    adjust_scroll(app, area.height, &heights);

    // Lay every visible note out first so the live drop indicator can use
    // the same geometry the hit testing sees.
    let mut y = area.y;
    for index in app.scroll..app.board.tasks.len() {
        let task = &app.board.tasks[index];
        let height = heights[index];
        if y + height > area.bottom() {
            break;
        }
        let width = (task.width_px() / PX_PER_COL)
            .clamp(24, area.width.saturating_sub(3).max(24));
        let x = area.x + tilt_indent(&task.rotation);
        app.note_areas.push((index, Rect::new(x, y, width, height)));
        y += height + 1;
    }

    let drop_target = match app.mode {
        Mode::Dragging { index, pointer_y } => {
            let anchor = drop_anchor(index, pointer_y, &app.note_rects());
            // No anchor means "drop at the tail": mark the last note.
            anchor.or_else(|| app.note_areas.last().map(|(i, _)| *i))
        }
        _ => None,
    };

    for (index, rect) in app.note_areas.clone() {
        let task = &app.board.tasks[index];
        let color = hex_color(&task.color);
        let dragging = matches!(app.mode, Mode::Dragging { index: d, .. } if d == index);

        let border_style = if Some(index) == drop_target {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if index == app.selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };

        let mut style = Style::default().bg(color).fg(Color::Black);
        if dragging {
            style = style.add_modifier(Modifier::DIM);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(style);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let mut title_style = Style::default().fg(Color::Black).add_modifier(Modifier::BOLD);
        if task.completed {
            title_style = title_style
                .add_modifier(Modifier::CROSSED_OUT)
                .add_modifier(Modifier::DIM);
        }

        let pad = (inner.width as usize)
            .saturating_sub(task.title.chars().count() + 3);
        let mut lines = vec![
            Line::from(vec![
                Span::styled(task.title.clone(), title_style),
                Span::raw(" ".repeat(pad)),
                Span::styled("[x]", Style::default().fg(Color::Red)),
            ]),
            Line::from(Span::styled(
                format!("{}  {}", task.date, task.time),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        lines.push(Line::raw(""));
        lines.push(Line::raw(task.content.clone()));

        let body = Paragraph::new(lines).wrap(Wrap { trim: false });
        f.render_widget(body, inner);

        // Resize handle in the bottom-right border corner.
        let corner = Rect::new(
            rect.right().saturating_sub(1),
            rect.bottom().saturating_sub(1),
            1,
            1,
        );
        f.render_widget(
            Paragraph::new("◢").style(Style::default().bg(color).fg(Color::Black)),
            corner,
        );
    }
}

fn adjust_scroll(app: &mut App, viewport: u16, heights: &[u16]) {
    if app.selected < app.scroll {
        app.scroll = app.selected;
        return;
    }
    // Scroll down until the selected note fits in the viewport.
    while app.scroll < app.selected {
        let used: u32 = heights[app.scroll..=app.selected]
            .iter()
            .map(|h| u32::from(h + 1))
            .sum();
        if used <= u32::from(viewport) {
            break;
        }
        app.scroll += 1;
    }
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        "difficulty: {} (Tab) • ^e content ^d date ^t time ^o done ^k delete • drag body: reorder, corner: resize, click title: done, [x]: delete • ^q quit",
        app.difficulty.label()
    );
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_edit_popup(f: &mut Frame, title: &str, field: &InputField) {
    let popup_area = centered_rect(60, 20, f.area());
    f.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(format!("{title} — Enter saves, Esc cancels"))
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);
    f.render_widget(input_line(field), inner);
}

fn tilt_indent(rotation: &str) -> u16 {
    let tilt: f32 = rotation
        .trim()
        .strip_suffix("deg")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0.0);
    if tilt < -1.0 {
        0
    } else if tilt < 1.0 {
        1
    } else {
        2
    }
}

fn hex_color(s: &str) -> Color {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() == 6 {
        let parsed = (
            u8::from_str_radix(&hex[0..2], 16),
            u8::from_str_radix(&hex[2..4], 16),
            u8::from_str_radix(&hex[4..6], 16),
        );
        if let (Ok(r), Ok(g), Ok(b)) = parsed {
            return Color::Rgb(r, g, b);
        }
    }
    Color::Yellow
}

// ---------------------------------------------------------------------------
// Game view

const DARK_TONE: Color = Color::Rgb(51, 51, 51);
const OBSTACLE_TONE: Color = Color::Rgb(255, 77, 77);

fn render_game(f: &mut Frame, app: &mut App) {
    let Some(game) = app.game.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(f.area());

    let header = Paragraph::new(format!(
        "score: {} • mode: {} • space/click: jump • b: board",
        game.score,
        game.mode.label()
    ))
    .block(Block::default().borders(Borders::ALL).title("Runner"));
    f.render_widget(header, chunks[0]);

    render_field(f, game, chunks[1]);

    if game.phase == GamePhase::Ended {
        let popup_area = centered_rect(40, 25, f.area());
        f.render_widget(Clear, popup_area);
        let block = Block::default()
            .title("Game over")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));
        let body = Paragraph::new(format!(
            "\nscore: {}\n\nr: play again\nb: back to the board",
            game.score
        ))
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(body, popup_area);
    }
}

/// Paint the abstract playfield onto the cell grid: background tone,
/// obstacles, actor. Each cell becomes a colored blank.
fn render_field(f: &mut Frame, game: &Game, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let background = if game.background_light {
        Color::White
    } else {
        DARK_TONE
    };
    let actor_tone = if game.actor_light {
        Color::White
    } else {
        DARK_TONE
    };

    let cols = area.width as usize;
    let rows = area.height as usize;
    let sx = cols as f32 / FIELD_W;
    let sy = rows as f32 / FIELD_H;

    let mut grid = vec![vec![background; cols]; rows];
    for o in &game.obstacles {
        paint(&mut grid, o.x, o.y, o.width, o.height, sx, sy, OBSTACLE_TONE);
    }
    let a = &game.actor;
    paint(&mut grid, a.x, a.y, a.width, a.height, sx, sy, actor_tone);

    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| {
            let mut spans: Vec<Span> = Vec::new();
            let mut run_color = row[0];
            let mut run_len = 0usize;
            for cell in row {
                if cell == run_color {
                    run_len += 1;
                } else {
                    spans.push(Span::styled(
                        " ".repeat(run_len),
                        Style::default().bg(run_color),
                    ));
                    run_color = cell;
                    run_len = 1;
                }
            }
            spans.push(Span::styled(
                " ".repeat(run_len),
                Style::default().bg(run_color),
            ));
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

#[allow(clippy::too_many_arguments)]
fn paint(
    grid: &mut [Vec<Color>],
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    sx: f32,
    sy: f32,
    color: Color,
) {
    let rows = grid.len() as i32;
    let cols = grid[0].len() as i32;
    let x0 = (x * sx).floor() as i32;
    let x1 = ((x + w) * sx).ceil() as i32;
    let y0 = (y * sy).floor() as i32;
    let y1 = ((y + h) * sy).ceil() as i32;
    for row in y0.max(0)..y1.min(rows) {
        for col in x0.max(0)..x1.min(cols) {
            grid[row as usize][col as usize] = color;
        }
    }
}

// Helper to center popups, shared by both views.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

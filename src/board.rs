use anyhow::Result;
use log::info;
use rand::Rng;

use crate::database::Database;
use crate::models::{px_string, TaskItem, MIN_NOTE_PX, PLACEHOLDER_CONTENT};

/// What an "add" submission turned into. An empty or whitespace-only title
/// is not rejected; it is the launch gesture for the mini-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    LaunchGame,
}

/// The ordered note list plus its backing store. Every mutation rewrites
/// the full snapshot before returning, so the store never lags the screen.
pub struct Board {
    db: Database,
    pub tasks: Vec<TaskItem>,
}

impl Board {
    pub fn load(db: Database) -> Result<Self> {
        let tasks = db.load_tasks()?;
        info!("loaded {} note(s)", tasks.len());
        Ok(Board { db, tasks })
    }

    fn persist(&self) -> Result<()> {
        self.db.save_tasks(&self.tasks)
    }

    pub fn add_task(&mut self, title: &str, rng: &mut impl Rng) -> Result<AddOutcome> {
        if title.trim().is_empty() {
            return Ok(AddOutcome::LaunchGame);
        }
        self.tasks.push(TaskItem::new(title.trim(), rng));
        self.persist()?;
        Ok(AddOutcome::Added)
    }

    pub fn toggle_complete(&mut self, index: usize) -> Result<()> {
        let Some(task) = self.tasks.get_mut(index) else {
            return Ok(());
        };
        task.completed = !task.completed;
        self.persist()
    }

    /// Commit an edited content string. A trimmed-empty edit is replaced by
    /// the placeholder rather than leaving a blank note.
    pub fn commit_content(&mut self, index: usize, text: &str) -> Result<()> {
        let Some(task) = self.tasks.get_mut(index) else {
            return Ok(());
        };
        task.content = if text.trim().is_empty() {
            PLACEHOLDER_CONTENT.to_string()
        } else {
            text.to_string()
        };
        self.persist()
    }

    pub fn set_date(&mut self, index: usize, date: &str) -> Result<()> {
        let Some(task) = self.tasks.get_mut(index) else {
            return Ok(());
        };
        task.date = date.to_string();
        self.persist()
    }

    pub fn set_time(&mut self, index: usize, time: &str) -> Result<()> {
        let Some(task) = self.tasks.get_mut(index) else {
            return Ok(());
        };
        task.time = time.to_string();
        self.persist()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.tasks.clear();
        self.persist()
    }

    pub fn delete_task(&mut self, index: usize) -> Result<()> {
        if index >= self.tasks.len() {
            return Ok(());
        }
        let removed = self.tasks.remove(index);
        info!("deleted note '{}'", removed.title);
        self.persist()
    }

    /// Live resize during a drag gesture: clamp to the minimum note size but
    /// do not persist yet. `finish_resize` writes the snapshot once the
    /// gesture ends.
    pub fn resize_live(&mut self, index: usize, width_px: i32, height_px: i32) {
        let Some(task) = self.tasks.get_mut(index) else {
            return;
        };
        let w = width_px.max(MIN_NOTE_PX as i32) as u16;
        let h = height_px.max(MIN_NOTE_PX as i32) as u16;
        task.width = px_string(w);
        task.min_height = px_string(h);
    }

    pub fn finish_resize(&mut self) -> Result<()> {
        self.persist()
    }

    /// Drop the dragged note immediately before `anchor` (an index into the
    /// pre-move order), or at the tail when there is no anchor.
    pub fn reorder(&mut self, from: usize, anchor: Option<usize>) -> Result<()> {
        if from >= self.tasks.len() {
            return Ok(());
        }
        let task = self.tasks.remove(from);
        match anchor {
            Some(anchor) if anchor <= from => self.tasks.insert(anchor, task),
            // Removal above shifted everything after `from` down by one.
            Some(anchor) if anchor <= self.tasks.len() => self.tasks.insert(anchor - 1, task),
            _ => self.tasks.push(task),
        }
        self.persist()
    }
}

/// On-screen geometry of one rendered note, fed back from the UI so the
/// drop-anchor scan can work in pointer coordinates.
#[derive(Debug, Clone, Copy)]
pub struct NoteRect {
    pub index: usize,
    pub top: u16,
    pub height: u16,
}

/// Find the note the dragged item should land in front of, given the
/// pointer's vertical position: among all notes (except the dragged one)
/// whose vertical midpoint lies below the pointer, take the closest one.
/// Pointer below every midpoint means drop at the tail (`None`). A strict
/// comparison keeps the first note in list order when two midpoints
/// coincide.
pub fn drop_anchor(dragged: usize, pointer_y: u16, rects: &[NoteRect]) -> Option<usize> {
    let y = pointer_y as f32;
    let mut closest: Option<(f32, usize)> = None;
    for rect in rects {
        if rect.index == dragged {
            continue;
        }
        let midpoint = rect.top as f32 + rect.height as f32 / 2.0;
        let offset = y - midpoint;
        if offset < 0.0 && closest.map_or(true, |(best, _)| offset > best) {
            closest = Some((offset, rect.index));
        }
    }
    closest.map(|(_, index)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;
    use tempfile::tempdir;

    fn board() -> (tempfile::TempDir, Board) {
        let dir = tempdir().expect("temp dir");
        let db = Database::open(&dir.path().join("board.db")).expect("open db");
        (dir, Board::load(db).expect("load board"))
    }

    fn titles(board: &Board) -> Vec<&str> {
        board.tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn empty_title_launches_game_without_mutating() {
        let (_dir, mut b) = board();
        let mut rng = thread_rng();
        assert_eq!(b.add_task("   ", &mut rng).unwrap(), AddOutcome::LaunchGame);
        assert_eq!(b.add_task("", &mut rng).unwrap(), AddOutcome::LaunchGame);
        assert!(b.tasks.is_empty());
    }

    #[test]
    fn add_persists_and_survives_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.db");
        {
            let mut b = Board::load(Database::open(&path).unwrap()).unwrap();
            let mut rng = thread_rng();
            assert_eq!(b.add_task("  milk  ", &mut rng).unwrap(), AddOutcome::Added);
            b.add_task("eggs", &mut rng).unwrap();
        }
        let b = Board::load(Database::open(&path).unwrap()).unwrap();
        assert_eq!(titles(&b), vec!["milk", "eggs"]);
    }

    #[test]
    fn empty_content_commit_becomes_placeholder() {
        let (_dir, mut b) = board();
        b.add_task("a", &mut thread_rng()).unwrap();
        b.commit_content(0, "  \t ").unwrap();
        assert_eq!(b.tasks[0].content, PLACEHOLDER_CONTENT);
        b.commit_content(0, "call mom").unwrap();
        assert_eq!(b.tasks[0].content, "call mom");
    }

    #[test]
    fn toggle_and_delete_guard_out_of_range() {
        let (_dir, mut b) = board();
        b.add_task("a", &mut thread_rng()).unwrap();
        b.toggle_complete(0).unwrap();
        assert!(b.tasks[0].completed);
        b.toggle_complete(7).unwrap();
        b.delete_task(7).unwrap();
        assert_eq!(b.tasks.len(), 1);
        b.delete_task(0).unwrap();
        assert!(b.tasks.is_empty());
    }

    #[test]
    fn resize_clamps_to_minimum_size() {
        let (_dir, mut b) = board();
        b.add_task("a", &mut thread_rng()).unwrap();
        b.resize_live(0, 90, 400);
        b.finish_resize().unwrap();
        assert_eq!(b.tasks[0].width_px(), MIN_NOTE_PX);
        assert_eq!(b.tasks[0].min_height_px(), 400);
    }

    fn stacked_rects(count: usize, height: u16) -> Vec<NoteRect> {
        (0..count)
            .map(|i| NoteRect {
                index: i,
                top: i as u16 * height,
                height,
            })
            .collect()
    }

    #[test]
    fn drop_anchor_picks_closest_midpoint_below_pointer() {
        // Four notes, 10 rows each: midpoints at y = 5, 15, 25, 35.
        let rects = stacked_rects(4, 10);
        assert_eq!(drop_anchor(3, 0, &rects), Some(0));
        assert_eq!(drop_anchor(3, 12, &rects), Some(1));
        assert_eq!(drop_anchor(0, 12, &rects), Some(1));
        // Pointer below every midpoint drops at the tail.
        assert_eq!(drop_anchor(0, 36, &rects), None);
        // The dragged note is never its own anchor.
        assert_eq!(drop_anchor(1, 12, &rects), Some(2));
    }

    #[test]
    fn drop_anchor_tie_keeps_list_order() {
        // Degenerate layout: two notes sharing a midpoint.
        let rects = vec![
            NoteRect { index: 0, top: 0, height: 10 },
            NoteRect { index: 1, top: 0, height: 10 },
        ];
        assert_eq!(drop_anchor(2, 2, &rects), Some(0));
    }

    #[test]
    fn reorder_splices_before_anchor_or_to_tail() {
        let (_dir, mut b) = board();
        let mut rng = thread_rng();
        for t in ["a", "b", "c", "d"] {
            b.add_task(t, &mut rng).unwrap();
        }

        // Drag "d" before "b".
        b.reorder(3, Some(1)).unwrap();
        assert_eq!(titles(&b), vec!["a", "d", "b", "c"]);

        // Drag "a" to the tail.
        b.reorder(0, None).unwrap();
        assert_eq!(titles(&b), vec!["d", "b", "c", "a"]);

        // Anchor after the dragged slot accounts for the removal shift.
        b.reorder(0, Some(2)).unwrap();
        assert_eq!(titles(&b), vec!["b", "d", "c", "a"]);

        // Out-of-range drag is a no-op.
        b.reorder(9, Some(0)).unwrap();
        assert_eq!(titles(&b), vec!["b", "d", "c", "a"]);
    }
}

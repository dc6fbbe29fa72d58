use chrono::Local;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The nine sticky-note background colors. New notes pick one at random;
/// the choice is persisted so reloads keep the same look.
pub const NOTE_COLORS: [&str; 9] = [
    "#fffacd", // pale yellow
    "#a0c4ff", // pale blue
    "#caffbf", // pale green
    "#ffadad", // pale pink
    "#bdb2ff", // pale purple
    "#ffd6a5", // pale orange
    "#e0e0e0", // pale gray
    "#ade8f4", // pale sky
    "#ffc8dd", // pale peach
];

pub const DEFAULT_NOTE_PX: u16 = 220;
pub const MIN_NOTE_PX: u16 = 150;
pub const PLACEHOLDER_CONTENT: &str = "Write something...";

/// One sticky note. Identity is positional: a note's place in the board's
/// vector is both its display order and its persistence order, so there is
/// no id field. The serialized layout (field names, "NNNpx" dimensions,
/// "N.Ndeg" rotation) is the snapshot wire format and must stay stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub title: String,
    #[serde(default = "default_content")]
    pub content: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default = "default_rotation")]
    pub rotation: String,
    #[serde(default = "default_dimension")]
    pub width: String,
    #[serde(rename = "minHeight", default = "default_dimension")]
    pub min_height: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

fn default_content() -> String {
    PLACEHOLDER_CONTENT.to_string()
}

fn default_rotation() -> String {
    "0deg".to_string()
}

fn default_dimension() -> String {
    px_string(DEFAULT_NOTE_PX)
}

fn default_color() -> String {
    NOTE_COLORS[0].to_string()
}

impl TaskItem {
    /// Fresh note: random tilt and color, default size, today's date,
    /// empty time, placeholder content.
    pub fn new(title: &str, rng: &mut impl Rng) -> Self {
        let tilt: f32 = rng.gen_range(-3.0..3.0);
        let color = NOTE_COLORS[rng.gen_range(0..NOTE_COLORS.len())];
        TaskItem {
            title: title.to_string(),
            content: PLACEHOLDER_CONTENT.to_string(),
            completed: false,
            rotation: format!("{tilt:.1}deg"),
            width: px_string(DEFAULT_NOTE_PX),
            min_height: px_string(DEFAULT_NOTE_PX),
            color: color.to_string(),
            date: Local::now().format("%Y-%m-%d").to_string(),
            time: String::new(),
        }
    }

    pub fn width_px(&self) -> u16 {
        px_value(&self.width)
    }

    pub fn min_height_px(&self) -> u16 {
        px_value(&self.min_height)
    }
}

/// Parse a `"220px"` style dimension; anything unreadable falls back to the
/// default size rather than erroring.
pub fn px_value(s: &str) -> u16 {
    s.trim()
        .strip_suffix("px")
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_NOTE_PX)
}

pub fn px_string(v: u16) -> String {
    format!("{v}px")
}

/// Game difficulty, picked on the board before launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Easy,
    Hard,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Easy => "easy",
            GameMode::Hard => "hard",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            GameMode::Easy => GameMode::Hard,
            GameMode::Hard => GameMode::Easy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    #[test]
    fn new_note_has_persisted_defaults() {
        let note = TaskItem::new("groceries", &mut thread_rng());
        assert_eq!(note.title, "groceries");
        assert_eq!(note.content, PLACEHOLDER_CONTENT);
        assert!(!note.completed);
        assert_eq!(note.width, "220px");
        assert_eq!(note.min_height, "220px");
        assert!(note.rotation.ends_with("deg"));
        assert!(NOTE_COLORS.contains(&note.color.as_str()));
        assert!(note.time.is_empty());
        // YYYY-MM-DD
        assert_eq!(note.date.len(), 10);
    }

    #[test]
    fn px_helpers_round_trip_and_recover() {
        assert_eq!(px_value("220px"), 220);
        assert_eq!(px_value(" 150px "), 150);
        assert_eq!(px_value("garbage"), DEFAULT_NOTE_PX);
        assert_eq!(px_string(150), "150px");
    }

    #[test]
    fn snapshot_field_names_match_wire_format() {
        let note = TaskItem::new("t", &mut thread_rng());
        let json = serde_json::to_value(&note).unwrap();
        assert!(json.get("minHeight").is_some());
        assert!(json.get("min_height").is_none());
    }
}

/// Style tag attached to a rendered text line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Normal,
    /// Echo of a command the user typed
    Command,
    Error,
}

/// One entry in the output log
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Line { text: String, style: LineStyle },
    Sprite { url: String },
}

impl Entry {
    /// The text of a line entry; sprites have none
    pub fn text(&self) -> Option<&str> {
        match self {
            Entry::Line { text, .. } => Some(text),
            Entry::Sprite { .. } => None,
        }
    }
}

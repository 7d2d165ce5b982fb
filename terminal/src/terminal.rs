use crate::line::{Entry, LineStyle};

/// Fixed line rendered when a sprite asset fails to load
pub const SPRITE_ERROR_LINE: &str = "Failed to load Pokemon sprite";

/// Append-only output log.
///
/// Entries are never removed or edited. A frontend follows the tail by
/// draining newly appended entries each render pass, which is the
/// scroll-to-bottom behavior of the log.
#[derive(Debug, Default)]
pub struct Terminal {
    entries: Vec<Entry>,
    drained: usize,
}

impl Terminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text to the log, one line per newline-separated segment
    pub fn print(&mut self, text: &str, style: LineStyle) {
        for segment in text.split('\n') {
            self.entries.push(Entry::Line {
                text: segment.to_string(),
                style,
            });
        }
    }

    /// Append a sprite entry
    pub fn push_sprite(&mut self, url: &str) {
        self.entries.push(Entry::Sprite {
            url: url.to_string(),
        });
    }

    /// Record that a sprite asset failed to load.
    ///
    /// The URL goes to the log output; the user sees a fixed error line
    /// instead of a silently missing image.
    pub fn sprite_failed(&mut self, url: &str) {
        tracing::error!(url = %url, "Failed to load sprite");
        self.print(SPRITE_ERROR_LINE, LineStyle::Error);
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries appended since the previous call.
    ///
    /// Each entry is yielded exactly once, in append order.
    pub fn drain_new(&mut self) -> &[Entry] {
        let start = self.drained;
        self.drained = self.entries.len();
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

use colored::Colorize;
use ldiff_core::{Comparison, EntryKind};

use crate::error::RenderResult;
use crate::{Renderer, NO_DIFFERENCES};

/// Renders comparisons as terminal lines prefixed with `+`, `-`, or spaces.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer {
    /// Color added lines green, removed lines red, and dim unchanged lines.
    pub color: bool,
}

impl TextRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, comparison: &Comparison) -> RenderResult<String> {
        if comparison.is_empty() {
            return Ok(format!("{NO_DIFFERENCES}\n"));
        }

        let mut out = String::new();
        for entry in &comparison.entries {
            let line = match entry.kind {
                EntryKind::Unchanged => format!("  {}", entry.content),
                EntryKind::Added => format!("+ {}", entry.content),
                EntryKind::Removed => format!("- {}", entry.content),
            };
            if self.color {
                let styled = match entry.kind {
                    EntryKind::Unchanged => line.dimmed(),
                    EntryKind::Added => line.green(),
                    EntryKind::Removed => line.red(),
                };
                out.push_str(&styled.to_string());
            } else {
                out.push_str(&line);
            }
            out.push('\n');
        }
        Ok(out)
    }
}

use ldiff_core::Comparison;

use crate::error::RenderResult;
use crate::Renderer;

/// Renders comparisons as a JSON object with `entries` and `stats`.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl JsonRenderer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, comparison: &Comparison) -> RenderResult<String> {
        let mut out = if self.pretty {
            serde_json::to_string_pretty(comparison)?
        } else {
            serde_json::to_string(comparison)?
        };
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ldiff_core::{compare, ComparisonOptions, EntryKind};
    use serde_json::Value;

    #[test]
    fn compact_report_shape() {
        let comparison = compare("a", "b", ComparisonOptions::default());
        let json = JsonRenderer::new(false).render(&comparison).unwrap();
        assert_eq!(
            json,
            "{\"entries\":[{\"kind\":\"removed\",\"content\":\"a\"},{\"kind\":\"added\",\"content\":\"b\"}],\
             \"stats\":{\"additions\":1,\"deletions\":1,\"unchanged\":0}}\n"
        );
    }

    #[test]
    fn pretty_report_parses_back() {
        let comparison = compare("x\n<y>", "x\n", ComparisonOptions::default());
        let json = JsonRenderer::new(true).render(&comparison).unwrap();

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["stats"]["deletions"], 1);
        assert_eq!(value["entries"][1]["content"], "<y>");

        let parsed: Comparison = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.entries[1].kind, EntryKind::Removed);
        assert_eq!(parsed, comparison);
    }
}

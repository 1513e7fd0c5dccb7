use serde::{Deserialize, Serialize};

/// Configuration for rendering a tree.
///
/// The default reproduces the classic output byte for byte: attributes are
/// written as `name = "value"`, and a tag without attributes keeps a space
/// before its `>` (`<div >`). [`Config::compact`] normalizes both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub(crate) spaced_assignment: bool,
    pub(crate) pad_bare_tags: bool,
    pub(crate) max_depth: Option<usize>,
}

impl Config {
    /// `name="value"` and `<div>`
    pub fn compact() -> Self {
        Config {
            spaced_assignment: false,
            pad_bare_tags: false,
            max_depth: None,
        }
    }

    /// Refuse to render trees deeper than `limit`. The root counts as depth 1.
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub(crate) fn assignment(&self) -> &'static str {
        if self.spaced_assignment {
            " = "
        } else {
            "="
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            spaced_assignment: true,
            pad_bare_tags: true,
            max_depth: None,
        }
    }
}

//! Trim modes and the string transformations they select.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::NodeError;

/// Characters stripped by `all`, `leading` and `trailing`.
pub const BLANKS: [char; 4] = [' ', '\t', '\n', '\r'];

/// Which characters to strip, and from where.
///
/// Graph data may carry a mode string this build does not know. It is kept as
/// [`TrimMode::Unrecognized`] so the node can still be adapted and built, and
/// fails only when invoked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrimMode {
    /// Unicode whitespace from both ends.
    #[default]
    LeadingTrailing,
    /// Every space, tab, newline and carriage return.
    All,
    /// [`BLANKS`] from the start.
    Leading,
    /// [`BLANKS`] from the end.
    Trailing,
    /// Any of the configured characters from both ends.
    Custom,
    Unrecognized(String),
}

impl TrimMode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::LeadingTrailing => "leadingTrailing",
            Self::All => "all",
            Self::Leading => "leading",
            Self::Trailing => "trailing",
            Self::Custom => "custom",
            Self::Unrecognized(s) => s,
        }
    }

    /// Apply this mode to `text`. `custom_chars` is only consulted by
    /// [`TrimMode::Custom`], where an empty set means whitespace trimming.
    ///
    /// # Errors
    /// [`NodeError::UnsupportedMode`] for [`TrimMode::Unrecognized`].
    pub fn apply(&self, text: &str, custom_chars: &str) -> Result<String, NodeError> {
        let trimmed = match self {
            Self::LeadingTrailing => text.trim().to_owned(),
            Self::All => text.chars().filter(|c| !BLANKS.contains(c)).collect(),
            Self::Leading => text.trim_start_matches(&BLANKS[..]).to_owned(),
            Self::Trailing => text.trim_end_matches(&BLANKS[..]).to_owned(),
            Self::Custom if custom_chars.is_empty() => text.trim().to_owned(),
            Self::Custom => text
                .trim_matches(|c: char| custom_chars.contains(c))
                .to_owned(),
            Self::Unrecognized(mode) => return Err(NodeError::UnsupportedMode(mode.clone())),
        };
        Ok(trimmed)
    }
}

impl From<String> for TrimMode {
    fn from(s: String) -> Self {
        match s.as_str() {
            "leadingTrailing" => Self::LeadingTrailing,
            "all" => Self::All,
            "leading" => Self::Leading,
            "trailing" => Self::Trailing,
            "custom" => Self::Custom,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<&str> for TrimMode {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

impl From<TrimMode> for String {
    fn from(mode: TrimMode) -> Self {
        match mode {
            TrimMode::Unrecognized(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for TrimMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

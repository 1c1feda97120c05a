// crates/engine/src/cap.rs
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Limit on the number of distinct lines read before stopping early.
///
/// Zero means no limit. Parsed from a decimal number with an optional
/// case-insensitive `K` (×1,000) or `M` (×1,000,000) suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct MaxLines(pub usize);

impl MaxLines {
    pub const fn unlimited() -> Self {
        Self(0)
    }

    pub const fn limit(self) -> Option<usize> {
        if self.0 == 0 { None } else { Some(self.0) }
    }
}

impl FromStr for MaxLines {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::unlimited());
        }

        let upper = trimmed.to_ascii_uppercase();
        let (digits, multiplier) = split_multiplier(&upper);
        let invalid = |reason: String| EngineError::InvalidCap {
            value: s.to_string(),
            reason,
        };

        let num: usize = digits
            .parse()
            .map_err(|err| invalid(format!("{err}")))?;
        num.checked_mul(multiplier)
            .map(Self)
            .ok_or_else(|| invalid("value is too large".to_string()))
    }
}

fn split_multiplier(s: &str) -> (&str, usize) {
    const SUFFIXES: &[(&str, usize)] = &[("K", 1_000), ("M", 1_000_000)];
    for (suffix, multiplier) in SUFFIXES {
        if let Some(stripped) = s.strip_suffix(suffix) {
            return (stripped, *multiplier);
        }
    }
    (s, 1)
}

impl fmt::Display for MaxLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for MaxLines {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

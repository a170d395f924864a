#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ModelError;

/// How a duration below zero is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NegativePolicy {
    /// Anything below zero renders as `00:00`.
    #[default]
    Clamp,
    /// The magnitude is rendered with a leading `-`.
    Signed,
}

impl NegativePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            NegativePolicy::Clamp => "clamp",
            NegativePolicy::Signed => "signed",
        }
    }
}

impl std::fmt::Display for NegativePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NegativePolicy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(NegativePolicy::Clamp),
            "signed" => Ok(NegativePolicy::Signed),
            other => Err(ModelError::InvalidPolicy(other.to_string())),
        }
    }
}

//! Campaign duration type

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// How long a campaign is meant to run.
///
/// Only `instant` has a meaning today; any other tag supplied by the caller is
/// stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DurationType {
    #[default]
    Instant,
    Custom(String),
}

impl DurationType {
    pub const INSTANT: &'static str = "instant";

    /// Build from an optional caller-supplied tag; absent or empty means `instant`
    pub fn from_optional(tag: Option<&str>) -> Self {
        match tag {
            None | Some("") => Self::Instant,
            Some(tag) => Self::from(tag),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Instant => Self::INSTANT,
            Self::Custom(tag) => tag,
        }
    }

    #[inline]
    pub fn is_instant(&self) -> bool {
        matches!(self, Self::Instant)
    }
}

impl From<&str> for DurationType {
    fn from(value: &str) -> Self {
        if value == Self::INSTANT {
            Self::Instant
        } else {
            Self::Custom(value.to_string())
        }
    }
}

impl From<String> for DurationType {
    fn from(value: String) -> Self {
        if value == Self::INSTANT {
            Self::Instant
        } else {
            Self::Custom(value)
        }
    }
}

impl fmt::Display for DurationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DurationType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DurationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_optional(Some(&tag)))
    }
}

//! Profile entity
//!
//! Profiles are read-only after construction. Identity is never derived
//! from the name (two profiles may share one); the [`VertexId`] handle
//! minted by the service is the only identity.
//!
//! [`VertexId`]: crate::graph::VertexId

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Visibility of a profile's personal details
///
/// Gates gender and biography at display time only; the core never
/// checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Privacy {
    Private,
    Public,
}

impl Privacy {
    pub fn is_private(self) -> bool {
        self == Privacy::Private
    }
}

impl fmt::Display for Privacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Privacy::Private => write!(f, "private"),
            Privacy::Public => write!(f, "public"),
        }
    }
}

/// Error returned when a privacy setting string is not recognized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized privacy setting: {0}")]
pub struct ParsePrivacyError(String);

impl FromStr for Privacy {
    type Err = ParsePrivacyError;

    /// Accepts the front end's one-letter codes (`P` / `U`) as well as
    /// the full words, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p" | "private" => Ok(Privacy::Private),
            "u" | "public" => Ok(Privacy::Public),
            other => Err(ParsePrivacyError(other.to_string())),
        }
    }
}

/// A person on the network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    name: String,
    gender: String,
    biography: String,
    privacy: Privacy,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        gender: impl Into<String>,
        biography: impl Into<String>,
        privacy: Privacy,
    ) -> Self {
        Profile {
            name: name.into(),
            gender: gender.into(),
            biography: biography.into(),
            privacy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn biography(&self) -> &str {
        &self.biography
    }

    pub fn privacy(&self) -> Privacy {
        self.privacy
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

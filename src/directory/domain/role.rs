//! Worker roles used for authorization and bulk task assignment.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed category of worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Reviews registrations and verification requests.
    Admin,
    /// Frontend developer.
    Frontend,
    /// Backend developer.
    Backend,
    /// Designer.
    Designer,
    /// QA tester.
    Testing,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Designer => "designer",
            Self::Testing => "testing",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "admin" => Ok(Self::Admin),
            "frontend" => Ok(Self::Frontend),
            "backend" => Ok(Self::Backend),
            "designer" => Ok(Self::Designer),
            "testing" => Ok(Self::Testing),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

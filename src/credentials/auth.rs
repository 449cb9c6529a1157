//! Authentication method selection and secret handling.

use std::fmt;
use std::str::FromStr;

/// Authentication mechanism requested by a profile.
///
/// Parsing is case-insensitive and never fails: names the adapter cannot
/// open connections with are kept as [`AuthType::Other`] so that `open` can
/// reject them with a proper error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthType {
    /// LDAP username/password authentication
    Ldap,
    /// Any other mechanism name, e.g. `kerberos`
    Other(String),
}

impl AuthType {
    /// Mechanism name as passed to the native driver.
    pub fn mechanism(&self) -> &str {
        match self {
            AuthType::Ldap => "LDAP",
            AuthType::Other(name) => name,
        }
    }

    /// Parse an optional profile value; blank means "no authentication".
    pub fn parse_optional(value: Option<&str>) -> Option<Self> {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(Self::from_name)
    }

    fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("ldap") {
            AuthType::Ldap
        } else {
            AuthType::Other(trimmed.to_string())
        }
    }
}

impl FromStr for AuthType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mechanism())
    }
}

/// Password that zeros its buffer on drop and never displays its contents.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// Get the password (for handing to the native driver only).
    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        let mut bytes = std::mem::take(&mut self.0).into_bytes();
        for byte in &mut bytes {
            *byte = 0;
        }
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<redacted>")
    }
}

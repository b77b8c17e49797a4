//! The [`Location`] value type and the spy sentinel.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of the sentinel catalog entry that triggers "everyone is spy" mode.
///
/// The sentinel also doubles as the location/role value carried by spy
/// players in every mode.
pub const SPY_NAME: &str = "spy";

/// Human-readable label shown wherever the sentinel's name would appear.
pub const EVERYONE_IS_SPY_LABEL: &str = "Everyone is spy!";

/// A named setting with an ordered list of role titles.
///
/// Locations are immutable value data: once defined (built-in or custom)
/// they are only ever moved between pool partitions, never edited. A
/// location usable in a normal game has a non-empty role list; the one
/// exception is the spy sentinel, whose degenerate role list is never
/// dealt from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Display name, unique within a session's pool.
    pub name: String,
    /// Role titles dealt to non-spy players at this location.
    pub roles: Vec<String>,
}

impl Location {
    /// Creates a location from a name and role titles.
    pub fn new<S, I, R>(name: S, roles: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            name: name.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// The sentinel entry for "everyone is spy" mode.
    pub fn spy_sentinel() -> Self {
        Self::new(SPY_NAME, [SPY_NAME])
    }

    /// Returns `true` if this is the spy sentinel.
    pub fn is_spy_sentinel(&self) -> bool {
        self.name == SPY_NAME
    }

    /// The name players should see: the sentinel is rewritten to
    /// [`EVERYONE_IS_SPY_LABEL`], every other location shows its own name.
    pub fn display_name(&self) -> &str {
        if self.is_spy_sentinel() {
            EVERYONE_IS_SPY_LABEL
        } else {
            &self.name
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

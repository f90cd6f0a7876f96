//! Branch (cawangan) selection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CardError;
use crate::text::capitalize_first;

/// Organizational branch a member belongs to.
///
/// Only these four values exist; anything else fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Branch {
    Putrajaya,
    Cyberjaya,
    Bangi,
    CountryHomes,
}

impl Branch {
    /// Stable key used by selects, config and the CLI
    pub fn key(&self) -> &'static str {
        match self {
            Branch::Putrajaya => "putrajaya",
            Branch::Cyberjaya => "cyberjaya",
            Branch::Bangi => "bangi",
            Branch::CountryHomes => "country-homes",
        }
    }

    /// Name shown in the select dropdown
    pub fn option_label(&self) -> &'static str {
        match self {
            Branch::Putrajaya => "Putrajaya",
            Branch::Cyberjaya => "Cyberjaya",
            Branch::Bangi => "Bangi",
            Branch::CountryHomes => "Country Homes",
        }
    }

    /// Label printed on the card: the key with its first letter capitalized.
    pub fn card_label(&self) -> String {
        capitalize_first(self.key())
    }

    pub fn all() -> &'static [Branch] {
        &[
            Branch::Putrajaya,
            Branch::Cyberjaya,
            Branch::Bangi,
            Branch::CountryHomes,
        ]
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Branch {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Branch::all()
            .iter()
            .copied()
            .find(|b| b.key() == s)
            .ok_or_else(|| CardError::InvalidBranch(s.to_string()))
    }
}

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A person's name split into given and family parts.
///
/// Records are compared through [`NameRecord::by_family_name`] rather than
/// `Ord`, since ordering ignores the given name while equality does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    given_name: String,
    family_name: String,
}

impl NameRecord {
    pub fn new(given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self {
            given_name: given_name.into(),
            family_name: family_name.into(),
        }
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Byte-wise comparison of family names. Uppercase sorts before lowercase.
    pub fn by_family_name(a: &NameRecord, b: &NameRecord) -> Ordering {
        a.family_name.cmp(&b.family_name)
    }
}

impl fmt::Display for NameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.given_name, self.family_name)
    }
}

/// The fixed five-record input, in its original order.
pub fn default_roster() -> Vec<NameRecord> {
    vec![
        NameRecord::new("Kirk", "Douglas"),
        NameRecord::new("Keil", "Bruks"),
        NameRecord::new("houuil", "Douglas"),
        NameRecord::new("Kutts", "itse"),
        NameRecord::new("hhuri", "Douglas"),
    ]
}

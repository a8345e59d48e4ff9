use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the ledger an entry counts against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A meal; adds to the net total.
    Consumed,
    /// A workout; subtracts from the net total.
    Burned,
}

impl EntryKind {
    /// Sign applied to an entry's calories when folding into the net total.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            EntryKind::Consumed => 1.0,
            EntryKind::Burned => -1.0,
        }
    }

    /// User-facing label ("meal" / "workout").
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Consumed => "meal",
            EntryKind::Burned => "workout",
        }
    }

    /// Parse a user-facing label. Accepts the kind names as well.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "meal" | "meals" | "consumed" => Some(EntryKind::Consumed),
            "workout" | "workouts" | "burned" => Some(EntryKind::Burned),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Opaque identifier of an entry, unique within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hands out entry ids: a random per-session salt followed by a counter.
///
/// The counter alone guarantees uniqueness within one generator; the salt
/// keeps ids from different sessions from lining up.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    salt: u32,
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::with_salt(rand::random())
    }

    /// Generator with a fixed salt, for reproducible ids.
    pub fn with_salt(salt: u32) -> Self {
        Self { salt, next: 1 }
    }

    pub fn next_id(&mut self) -> EntryId {
        let id = EntryId(format!("{:08x}{:06x}", self.salt, self.next));
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// One recorded calorie event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub calories: f64,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(id: EntryId, kind: EntryKind, name: impl Into<String>, calories: f64) -> Self {
        Self {
            id,
            name: name.into(),
            calories,
            kind,
        }
    }

    /// Contribution of this entry to the net total.
    #[inline]
    pub fn signed_calories(&self) -> f64 {
        self.kind.sign() * self.calories
    }

    /// Case-insensitive substring match on the name.
    pub fn matches(&self, text: &str) -> bool {
        self.name.to_lowercase().contains(&text.to_lowercase())
    }
}

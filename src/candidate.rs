//! Candidate records returned by the lookup service
//!
//! Only `name` and `id` are interpreted. Every other field is kept verbatim so
//! the host receives the record it was sent.

use std::fmt;

use serde_json::{Map, Value};

/// Stable identity of a candidate, as sent by the lookup service
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CandidateId {
    Number(i64),
    Text(String),
}

impl CandidateId {
    /// Read an identity from a JSON value
    ///
    /// Numbers that do not fit an i64 (floats, large u64) keep their textual
    /// form so two such ids still compare equal.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(CandidateId::Text(s.clone())),
            Value::Number(n) => Some(match n.as_i64() {
                Some(i) => CandidateId::Number(i),
                None => CandidateId::Text(n.to_string()),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateId::Number(n) => write!(f, "{}", n),
            CandidateId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for CandidateId {
    fn from(n: i64) -> Self {
        CandidateId::Number(n)
    }
}

impl From<&str> for CandidateId {
    fn from(s: &str) -> Self {
        CandidateId::Text(s.to_string())
    }
}

/// Key used to match a rendered row to its candidate
///
/// The identity key wins when present, so a highlight follows the record and
/// not the slot when a result set reorders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKey {
    Id(CandidateId),
    Position(usize),
}

/// A single suggestion
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: Option<CandidateId>,
    pub name: String,
    /// Fields the controller does not interpret
    pub extra: Map<String, Value>,
}

impl Candidate {
    pub fn new(id: Option<CandidateId>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Build a candidate from one entry of a lookup response
    ///
    /// Returns None unless the entry is an object with a string `name`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let name = object.get("name")?.as_str()?.to_string();
        let id = object.get("id").and_then(CandidateId::from_value);
        let extra = object
            .iter()
            .filter(|(key, _)| key.as_str() != "name" && key.as_str() != "id")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Some(Self { id, name, extra })
    }

    /// Row key for this candidate at `position` in its suggestion set
    pub fn key(&self, position: usize) -> ItemKey {
        match &self.id {
            Some(id) => ItemKey::Id(id.clone()),
            None => ItemKey::Position(position),
        }
    }
}

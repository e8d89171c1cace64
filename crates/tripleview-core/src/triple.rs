//! Triple (fact) types

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// A subject-predicate-object fact extracted from a publication
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Triple {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subject: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub predicate: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub object: String,

    /// Title of the source publication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Chunk of the publication the triple was extracted from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_id: Option<String>,

    /// Whether the extraction was confirmed by the vector index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faiss_verified: Option<bool>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Triple {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_chunk_id(mut self, chunk_id: impl Into<String>) -> Self {
        self.chunk_id = Some(chunk_id.into());
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.faiss_verified = Some(verified);
        self
    }

    /// Value of one of the three positional fields
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Subject => &self.subject,
            Field::Predicate => &self.predicate,
            Field::Object => &self.object,
        }
    }

    /// Subject, predicate and object are all non-empty.
    ///
    /// Malformed triples still count as query results but never
    /// contribute nodes or edges to a projection.
    pub fn is_well_formed(&self) -> bool {
        !self.subject.is_empty() && !self.predicate.is_empty() && !self.object.is_empty()
    }
}

/// Positional field of a triple addressable in a WHERE clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Subject,
    Predicate,
    Object,
}

impl Field {
    /// Resolve a WHERE clause token (`s`, `subject`, `p`, ...)
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "s" | "subject" => Some(Self::Subject),
            "p" | "predicate" => Some(Self::Predicate),
            "o" | "object" => Some(Self::Object),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Predicate => "predicate",
            Self::Object => "object",
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| s.to_string())
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

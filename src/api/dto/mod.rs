//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs accept both JSON and urlencoded form bodies through
//! [`crate::api::extract::Payload`], so loosely typed fields go through
//! [`FormValue`].

pub mod exercise;
pub mod file_metadata;
pub mod health;
pub mod shorturl;
pub mod timestamp;
pub mod whoami;

use serde::Deserialize;

/// A scalar body field that may arrive as a JSON number or as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FormValue {
    /// Returns the value as the text a form submission would carry.
    pub fn into_text(self) -> String {
        match self {
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(s) => s,
        }
    }
}

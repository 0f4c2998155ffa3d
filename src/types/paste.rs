use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A paste as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paste {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Browsable URL for the paste. The service never sends this field;
    /// it is filled in by [`crate::Client::create`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<PasteFile>>,

    /// Secret returned once at creation time for anonymous pastes, usable
    /// in place of an auth key to delete that specific paste.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_key: Option<String>,
}

/// File metadata within a paste. Contents are only listed when a paste is
/// fetched with `full = true`; this type carries the metadata the service
/// always includes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasteFile {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_language: Option<String>,
}

/// The account that owns a paste, when it was not created anonymously.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Unlisted,
    Private,
}

//! Request bodies for creating and updating pastes.
//!
//! These are deliberately separate from the read-side types in
//! [`super::paste`]: the service accepts file contents in a wrapped
//! `content` object on write, but reports files as bare metadata on read.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Visibility;

/// Body for [`crate::Client::create`]. At least one file is required.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePaste {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,

    pub files: Vec<FileInput>,
}

impl CreatePaste {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Sets an expiry timestamp, after which the service deletes the paste.
    pub fn with_expires(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    pub fn with_file(mut self, file: FileInput) -> Self {
        self.files.push(file);
        self
    }

    pub fn with_files(mut self, files: &[FileInput]) -> Self {
        self.files.extend_from_slice(files);
        self
    }
}

/// A file to upload as part of a new paste.
#[derive(Debug, Clone, Serialize)]
pub struct FileInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub content: FileContent,
}

impl FileInput {
    pub fn new(content: FileContent) -> Self {
        Self {
            name: None,
            content,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

/// File contents, with the encoding used for `value` on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct FileContent {
    pub format: ContentFormat,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_language: Option<String>,

    pub value: String,
}

impl FileContent {
    pub fn new(format: ContentFormat, value: &str) -> Self {
        Self {
            format,
            highlight_language: None,
            value: value.to_string(),
        }
    }

    /// Plain-text contents, the common case.
    pub fn text(value: &str) -> Self {
        Self::new(ContentFormat::Text, value)
    }

    pub fn with_highlight_language(mut self, language: &str) -> Self {
        self.highlight_language = Some(language.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    Text,
    Base64,
    Gzip,
    Xz,
}

/// Body for [`crate::Client::update`].
///
/// `name` is always serialized: the service reads `null` as "clear the
/// name", so leaving it `None` clears any name the paste had. Re-supply
/// the current name to keep it.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePaste {
    pub name: Option<String>,

    pub description: String,
}

impl UpdatePaste {
    pub fn new(description: &str) -> Self {
        Self {
            name: None,
            description: description.to_string(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ContentFormat, CreatePaste, FileContent, FileInput, UpdatePaste};
    use crate::types::Visibility;

    #[test]
    fn create_paste_skips_absent_fields() {
        let paste = CreatePaste::default().with_file(FileInput::new(FileContent::text("hello")));

        assert_eq!(
            serde_json::to_value(&paste).unwrap(),
            json!({
                "files": [{ "content": { "format": "text", "value": "hello" } }]
            })
        );
    }

    #[test]
    fn create_paste_full_body() {
        let paste = CreatePaste::default()
            .with_name("notes.txt")
            .with_description("scratch notes")
            .with_visibility(Visibility::Unlisted)
            .with_file(
                FileInput::new(FileContent::text("fn main() {}").with_highlight_language("rust"))
                    .with_name("main.rs"),
            );

        assert_eq!(
            serde_json::to_value(&paste).unwrap(),
            json!({
                "name": "notes.txt",
                "description": "scratch notes",
                "visibility": "unlisted",
                "files": [{
                    "name": "main.rs",
                    "content": {
                        "format": "text",
                        "highlight_language": "rust",
                        "value": "fn main() {}"
                    }
                }]
            })
        );
    }

    #[test]
    fn update_paste_serializes_omitted_name_as_null() {
        let patch = UpdatePaste::new("new description");

        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "name": null, "description": "new description" })
        );
    }

    #[test]
    fn update_paste_keeps_supplied_name() {
        let patch = UpdatePaste::new("d").with_name("kept");

        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "name": "kept", "description": "d" })
        );
    }

    #[test]
    fn content_format_wire_strings() {
        for (format, wire) in [
            (ContentFormat::Text, "text"),
            (ContentFormat::Base64, "base64"),
            (ContentFormat::Gzip, "gzip"),
            (ContentFormat::Xz, "xz"),
        ] {
            assert_eq!(serde_json::to_value(format).unwrap(), json!(wire));
        }
    }
}

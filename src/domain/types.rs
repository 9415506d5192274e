//! Shared domain enumerations aligned with persisted columns.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "post_status", rename_all = "snake_case")]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }

    /// Form values default to draft; anything other than `published` is draft.
    pub fn parse_form(value: &str) -> Self {
        if value == "published" {
            PostStatus::Published
        } else {
            PostStatus::Draft
        }
    }
}

/// Which renderer path a page takes. The set is open: unknown template names
/// fall through to the default path, only `blog` carries routing policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageTemplate {
    Default,
    Blog,
    Other(String),
}

impl PageTemplate {
    pub fn parse(value: &str) -> Self {
        match value {
            "" | "default" => PageTemplate::Default,
            "blog" => PageTemplate::Blog,
            other => PageTemplate::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PageTemplate::Default => "default",
            PageTemplate::Blog => "blog",
            PageTemplate::Other(name) => name,
        }
    }

    pub fn is_blog(&self) -> bool {
        matches!(self, PageTemplate::Blog)
    }
}

/// Vocabulary a category belongs to. Categories are referenced from sections
/// and posts by name/slug, never by foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "category_kind", rename_all = "snake_case")]
pub enum CategoryKind {
    Portfolio,
    Blog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_round_trips_known_names() {
        assert_eq!(PageTemplate::parse("blog"), PageTemplate::Blog);
        assert_eq!(PageTemplate::parse(""), PageTemplate::Default);
        assert_eq!(PageTemplate::parse("landing").as_str(), "landing");
        assert!(PageTemplate::parse("blog").is_blog());
        assert!(!PageTemplate::parse("landing").is_blog());
    }

    #[test]
    fn post_status_form_parsing_defaults_to_draft() {
        assert_eq!(PostStatus::parse_form("published"), PostStatus::Published);
        assert_eq!(PostStatus::parse_form("draft"), PostStatus::Draft);
        assert_eq!(PostStatus::parse_form("bogus"), PostStatus::Draft);
    }
}

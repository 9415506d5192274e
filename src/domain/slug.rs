//! Slug derivation for pages, posts and category vocabularies.
//!
//! Page and post slugs are sanitized to `[a-z0-9-]` with leading and trailing
//! hyphens trimmed; category slugs collapse every run of non-alphanumerics
//! into a single hyphen. Uniqueness is the caller's concern (checked against
//! the repository before insert).

use slug::slugify;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug source text is empty")]
    EmptyInput,
    #[error("failed to derive slug from `{input}`")]
    Unrepresentable { input: String },
}

/// Sanitize a user-supplied slug or title into a routable page slug.
///
/// Lowercases, maps every character outside `[a-z0-9-]` to `-`, then trims
/// hyphens from both ends. `"My New Page!!"` becomes `my-new-page`.
pub fn sanitize_slug(input: &str) -> Result<String, SlugError> {
    if input.trim().is_empty() {
        return Err(SlugError::EmptyInput);
    }

    let mapped: String = input
        .to_lowercase()
        .chars()
        .map(|ch| {
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
                ch
            } else {
                '-'
            }
        })
        .collect();
    let trimmed = trim_hyphens(&mapped);

    if trimmed.is_empty() {
        return Err(SlugError::Unrepresentable {
            input: input.to_string(),
        });
    }

    Ok(collapse_hyphens(trimmed))
}

/// Derive a category slug from its display name.
///
/// Runs of non-alphanumerics collapse into one hyphen, so `"AI  Insights"`
/// becomes `ai-insights`.
pub fn category_slug(name: &str) -> Result<String, SlugError> {
    if name.trim().is_empty() {
        return Err(SlugError::EmptyInput);
    }

    let candidate = slugify(name);
    if candidate.is_empty() {
        return Err(SlugError::Unrepresentable {
            input: name.to_string(),
        });
    }

    Ok(candidate)
}

fn trim_hyphens(value: &str) -> &str {
    value.trim_matches('-')
}

fn collapse_hyphens(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_hyphen = false;
    for ch in value.chars() {
        if ch == '-' {
            if !prev_hyphen {
                out.push(ch);
            }
            prev_hyphen = true;
        } else {
            out.push(ch);
            prev_hyphen = false;
        }
    }
    out
}

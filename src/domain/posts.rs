//! Blog-post derivations: reading time, publish-date stamping and the
//! related-posts selection policy.

use time::OffsetDateTime;

use crate::domain::entities::BlogPostRecord;
use crate::domain::types::PostStatus;

/// Words per minute assumed by the reading-time estimate.
const WORDS_PER_MINUTE: usize = 200;

/// How many related posts a detail page shows.
pub const RELATED_LIMIT: usize = 3;

/// Strip markup and count whitespace-delimited words.
pub fn word_count(html: &str) -> usize {
    let text = ammonia::Builder::empty().clean(html).to_string();
    text.split_whitespace().count()
}

/// Estimated reading time in minutes: `ceil(words / 200)`, never below 1.
pub fn reading_time(content_html: &str) -> i32 {
    let words = word_count(content_html);
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    minutes as i32
}

/// Resolve the publish date for a save.
///
/// An explicitly submitted date always wins; otherwise the existing stamp is
/// kept. The stamp is set to `now` exactly once: on a save where the post is
/// published and no date exists yet. Draft posts never receive a stamp.
pub fn derive_published_at(
    status: PostStatus,
    submitted: Option<OffsetDateTime>,
    existing: Option<OffsetDateTime>,
    now: OffsetDateTime,
) -> Option<OffsetDateTime> {
    let current = submitted.or(existing);
    match (status, current) {
        (PostStatus::Published, None) => Some(now),
        (_, current) => current,
    }
}

/// Combine same-category candidates with a newest-first backfill pool.
///
/// Category matches come first; backfill entries are appended until the
/// limit is reached, skipping the subject post and anything already chosen.
pub fn select_related(
    subject_slug: &str,
    same_category: Vec<BlogPostRecord>,
    backfill: Vec<BlogPostRecord>,
) -> Vec<BlogPostRecord> {
    let mut selected: Vec<BlogPostRecord> = same_category
        .into_iter()
        .filter(|post| post.slug != subject_slug)
        .take(RELATED_LIMIT)
        .collect();

    for post in backfill {
        if selected.len() >= RELATED_LIMIT {
            break;
        }
        if post.slug == subject_slug || selected.iter().any(|p| p.slug == post.slug) {
            continue;
        }
        selected.push(post);
    }

    selected
}

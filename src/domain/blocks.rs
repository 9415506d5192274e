//! Visual-builder block descriptors stored on a page as `page_blocks`.
//!
//! Blocks are heterogeneous: each carries a `type` tag and whatever fields
//! the builder wrote for that kind. The only tag the resolver interprets is
//! `blog-feed`, which pulls recent published posts into the rendering
//! context; everything else passes through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Block tag that requests recent published posts at render time.
pub const BLOG_FEED_BLOCK: &str = "blog-feed";

/// How many posts a blog-feed block receives.
pub const BLOG_FEED_LIMIT: u32 = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl PageBlock {
    pub fn is_blog_feed(&self) -> bool {
        self.kind == BLOG_FEED_BLOCK
    }
}

/// Parse a stored block list; malformed text degrades to no blocks.
pub fn parse_blocks(raw: &str) -> Vec<PageBlock> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    serde_json::from_str(raw).unwrap_or_default()
}

/// True when any block in the list wants the blog feed injected.
pub fn wants_blog_feed(blocks: &[PageBlock]) -> bool {
    blocks.iter().any(PageBlock::is_blog_feed)
}

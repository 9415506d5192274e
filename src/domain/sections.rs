//! Typed view over a section's free-form `extra_json` payload and the
//! cross-field merges applied when a section is saved from the editor.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::entities::SectionRecord;
use crate::domain::json::object_or_empty;

/// Section type tag that participates in home-page curation.
pub const PORTFOLIO_SECTION: &str = "portfolio";

/// Parsed form of `extra_json`. Known keys get typed fields; everything else
/// is preserved verbatim in `rest` so round-trips never drop editor data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionExtra {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured_home: Option<bool>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl SectionExtra {
    /// Parse stored text; malformed payloads degrade to the empty extra.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        serde_json::from_str(raw).unwrap_or_default()
    }

    pub fn featured_on_home(&self) -> bool {
        self.is_featured_home.unwrap_or(false)
    }
}

/// Merge a submitted `youtube_url` into an extra blob, preserving every
/// pre-existing key. A blob that fails to parse is replaced wholesale with
/// just the merged key.
pub fn merge_youtube_url(extra_json: &str, youtube_url: &str) -> String {
    let mut map = parse_for_merge(extra_json);
    map.insert(
        "youtube_url".to_string(),
        Value::String(youtube_url.to_string()),
    );
    serialize_map(map)
}

/// Merge the home-curation flag into an extra blob. Checkbox inputs submit
/// `"on"` when checked and nothing otherwise.
pub fn merge_featured_home(extra_json: &str, checkbox_value: Option<&str>) -> String {
    let featured = checkbox_value == Some("on");
    let mut map = parse_for_merge(extra_json);
    map.insert("is_featured_home".to_string(), Value::Bool(featured));
    serialize_map(map)
}

fn parse_for_merge(extra_json: &str) -> Map<String, Value> {
    if extra_json.trim().is_empty() {
        return Map::new();
    }
    object_or_empty(extra_json)
}

fn serialize_map(map: Map<String, Value>) -> String {
    serde_json::to_string(&Value::Object(map)).unwrap_or_else(|_| "{}".to_string())
}

/// Group sections by their type tag, preserving the order they arrive in.
///
/// Public rendering passes sections sorted by `sort_order` alone; the admin
/// editor passes them sorted by type then `sort_order`. Grouping itself is
/// stable either way.
pub fn group_by_type(sections: Vec<SectionRecord>) -> BTreeMap<String, Vec<SectionRecord>> {
    let mut grouped: BTreeMap<String, Vec<SectionRecord>> = BTreeMap::new();
    for section in sections {
        grouped.entry(section.kind.clone()).or_default().push(section);
    }
    grouped
}

//! The fixed registry of named home-page sections.
//!
//! Each key is a singleton row with an independent visibility flag, copy
//! fields and a free-form config blob. Config keys are interpreted by the
//! renderer for that section kind; unknown keys are inert and missing keys
//! fall back to template defaults, so no schema is enforced here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::domain::entities::HomeSectionRecord;
use crate::domain::json::object_or_empty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeSectionKey {
    Hero,
    Stats,
    Partners,
    Services,
    Deliverables,
    Process,
    Portfolio,
    Insights,
    Blog,
    Faq,
    Cta,
}

impl HomeSectionKey {
    pub const ALL: [HomeSectionKey; 11] = [
        HomeSectionKey::Hero,
        HomeSectionKey::Stats,
        HomeSectionKey::Partners,
        HomeSectionKey::Services,
        HomeSectionKey::Deliverables,
        HomeSectionKey::Process,
        HomeSectionKey::Portfolio,
        HomeSectionKey::Insights,
        HomeSectionKey::Blog,
        HomeSectionKey::Faq,
        HomeSectionKey::Cta,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HomeSectionKey::Hero => "hero",
            HomeSectionKey::Stats => "stats",
            HomeSectionKey::Partners => "partners",
            HomeSectionKey::Services => "services",
            HomeSectionKey::Deliverables => "deliverables",
            HomeSectionKey::Process => "process",
            HomeSectionKey::Portfolio => "portfolio",
            HomeSectionKey::Insights => "insights",
            HomeSectionKey::Blog => "blog",
            HomeSectionKey::Faq => "faq",
            HomeSectionKey::Cta => "cta",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == value)
    }
}

/// A home section with its config blob parsed under the lenient policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeSectionView {
    pub record: HomeSectionRecord,
    pub config: Map<String, Value>,
}

impl From<HomeSectionRecord> for HomeSectionView {
    fn from(record: HomeSectionRecord) -> Self {
        let config = object_or_empty(&record.config_json);
        Self { record, config }
    }
}

/// Fold `cfg_`-prefixed form fields into a config blob. The editor posts
/// either a raw `config_json` textarea or individual prefixed inputs; when
/// prefixed inputs are present they win over an empty textarea.
pub fn config_from_form(
    config_json: Option<&str>,
    form_fields: &[(String, String)],
) -> String {
    if let Some(raw) = config_json {
        let trimmed = raw.trim();
        if !trimmed.is_empty() && trimmed != "{}" {
            return raw.to_string();
        }
    }

    let mut config = Map::new();
    for (key, value) in form_fields {
        if let Some(stripped) = key.strip_prefix("cfg_") {
            config.insert(stripped.to_string(), Value::String(value.clone()));
        }
    }

    if config.is_empty() {
        "{}".to_string()
    } else {
        serde_json::to_string(&Value::Object(config)).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Assign authoritative sort orders from an explicit identifier list: each
/// id gets `index + 1`, replacing whatever order existed before.
pub fn reorder_assignments(order: &[Uuid]) -> Vec<(Uuid, i32)> {
    order
        .iter()
        .enumerate()
        .map(|(index, id)| (*id, index as i32 + 1))
        .collect()
}

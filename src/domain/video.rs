//! YouTube URL recognition and the Open Graph video block derived from it.

use serde::Serialize;

use crate::domain::entities::SectionRecord;
use crate::domain::sections::{SectionExtra, PORTFOLIO_SECTION};

/// Canonical URLs for a recognized YouTube video, used to emit
/// `og:video` and player markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgVideo {
    pub id: String,
    pub watch_url: String,
    pub embed_url: String,
    pub thumbnail_url: String,
}

impl OgVideo {
    fn from_id(id: &str) -> Self {
        Self {
            id: id.to_string(),
            watch_url: format!("https://www.youtube.com/watch?v={id}"),
            embed_url: format!("https://www.youtube.com/embed/{id}"),
            thumbnail_url: format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"),
        }
    }
}

/// Extract the 11-character video id from any of the YouTube URL shapes:
/// `watch?v=`, `/embed/`, `/shorts/` and the `youtu.be/` short link.
/// Trailing text past the id is ignored; anything shorter than a full id
/// yields `None`.
pub fn youtube_video_id(url: &str) -> Option<&str> {
    let candidate = ["watch?v=", "embed/", "shorts/", "youtu.be/"]
        .iter()
        .find_map(|marker| url.split_once(marker).map(|(_, rest)| rest))?;

    let id_len = candidate
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .count();
    if id_len < 11 {
        return None;
    }
    // The id chars are ascii, so the byte index is safe.
    Some(&candidate[..11])
}

/// Pick the Open Graph video for a page: the first portfolio section whose
/// extra payload carries a recognizable YouTube URL, in display order.
pub fn page_og_video(sections: &[SectionRecord]) -> Option<OgVideo> {
    sections
        .iter()
        .filter(|section| section.kind == PORTFOLIO_SECTION)
        .find_map(|section| {
            let extra = SectionExtra::parse(&section.extra_json);
            let url = extra.youtube_url?;
            youtube_video_id(&url).map(OgVideo::from_id)
        })
}

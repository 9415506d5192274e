//! YouTube oEmbed lookup used by the section editor to prefill video fields.

use std::time::Duration;

use serde::Deserialize;

use super::error::InfraError;

const OEMBED_ENDPOINT: &str = "https://www.youtube.com/oembed";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Deserialize)]
pub struct VideoInfo {
    pub title: String,
    pub author_name: String,
    pub thumbnail_url: String,
}

pub struct OembedClient {
    http: reqwest::Client,
}

impl OembedClient {
    pub fn new() -> Result<Self, InfraError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| InfraError::upstream("oembed", err.to_string()))?;
        Ok(Self { http })
    }

    pub async fn youtube_info(&self, video_url: &str) -> Result<VideoInfo, InfraError> {
        let response = self
            .http
            .get(OEMBED_ENDPOINT)
            .query(&[("url", video_url), ("format", "json")])
            .send()
            .await
            .map_err(|err| InfraError::upstream("oembed", err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InfraError::upstream(
                "oembed",
                format!("lookup for `{video_url}` returned {status}"),
            ));
        }

        response
            .json::<VideoInfo>()
            .await
            .map_err(|err| InfraError::upstream("oembed", format!("unexpected response: {err}")))
    }
}

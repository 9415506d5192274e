use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use super::{
    AdminState,
    shared::{json_error, json_success_with},
};

const SOURCE_BASE: &str = "infra::http::admin::ai";

/// Drafting helpers exposed to the admin editor. Each kind maps to a fixed
/// system prompt; kinds that promise JSON are validated before they are
/// returned so the editor never receives half-parsed markup.
#[derive(Debug, Deserialize)]
pub(super) struct GeneratePayload {
    kind: String,
    prompt: String,
    #[serde(default)]
    context: String,
}

struct KindSpec {
    system: &'static str,
    expects_json: bool,
}

fn kind_spec(kind: &str) -> Option<KindSpec> {
    let spec = match kind {
        "html" => KindSpec {
            system: "You write clean semantic HTML fragments for a marketing \
                     website section. Return only the HTML, no commentary.",
            expects_json: false,
        },
        "rewrite" => KindSpec {
            system: "You rewrite marketing copy to be clearer and more \
                     engaging while keeping the original meaning and length. \
                     Return only the rewritten text.",
            expects_json: false,
        },
        "seo" => KindSpec {
            system: "You write SEO metadata. Respond with a JSON object \
                     {\"title\": string, \"description\": string} and nothing \
                     else. The description stays under 160 characters.",
            expects_json: true,
        },
        "faqs" => KindSpec {
            system: "You write FAQ entries for a marketing website. Respond \
                     with a JSON array of {\"question\": string, \"answer\": \
                     string} objects and nothing else.",
            expects_json: true,
        },
        "post" => KindSpec {
            system: "You draft a blog post. Respond with a JSON object \
                     {\"title\": string, \"excerpt\": string, \"content\": \
                     string} where content is HTML, and nothing else.",
            expects_json: true,
        },
        _ => return None,
    };
    Some(spec)
}

pub(super) async fn admin_ai_generate(
    State(state): State<AdminState>,
    Json(payload): Json<GeneratePayload>,
) -> Response {
    const SOURCE: &str = "infra::http::admin::ai::generate";

    let Some(client) = state.ai.as_ref() else {
        return json_error(
            SOURCE,
            StatusCode::SERVICE_UNAVAILABLE,
            "AI generation is not configured",
        );
    };
    let Some(spec) = kind_spec(&payload.kind) else {
        return json_error(
            SOURCE,
            StatusCode::BAD_REQUEST,
            format!("unknown generation kind `{}`", payload.kind),
        );
    };
    if payload.prompt.trim().is_empty() {
        return json_error(SOURCE, StatusCode::BAD_REQUEST, "prompt must not be empty");
    }

    let user = if payload.context.trim().is_empty() {
        payload.prompt.clone()
    } else {
        format!("{}\n\nContext:\n{}", payload.prompt, payload.context)
    };

    let content = match client.complete(spec.system, &user).await {
        Ok(content) => content,
        Err(err) => {
            return json_error(SOURCE, StatusCode::BAD_GATEWAY, err.to_string());
        }
    };

    if spec.expects_json && serde_json::from_str::<serde_json::Value>(&content).is_err() {
        return json_error(
            SOURCE,
            StatusCode::BAD_GATEWAY,
            "generated output was not valid JSON",
        );
    }

    json_success_with(json!({ "content": content }))
}

#[derive(Debug, Deserialize)]
pub(super) struct VideoInfoPayload {
    url: String,
}

pub(super) async fn admin_video_info(
    State(state): State<AdminState>,
    Json(payload): Json<VideoInfoPayload>,
) -> Response {
    const SOURCE: &str = "infra::http::admin::ai::video_info";

    if payload.url.trim().is_empty() {
        return json_error(SOURCE, StatusCode::BAD_REQUEST, "url must not be empty");
    }
    match state.oembed.youtube_info(payload.url.trim()).await {
        Ok(info) => json_success_with(json!({
            "title": info.title,
            "author_name": info.author_name,
            "thumbnail_url": info.thumbnail_url,
        })),
        Err(err) => json_error(SOURCE, StatusCode::BAD_GATEWAY, err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_kinds_are_flagged() {
        assert!(kind_spec("seo").is_some_and(|spec| spec.expects_json));
        assert!(kind_spec("faqs").is_some_and(|spec| spec.expects_json));
        assert!(kind_spec("post").is_some_and(|spec| spec.expects_json));
        assert!(kind_spec("html").is_some_and(|spec| !spec.expects_json));
        assert!(kind_spec("rewrite").is_some_and(|spec| !spec.expects_json));
        assert!(kind_spec("slides").is_none());
    }
}

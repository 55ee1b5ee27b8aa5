pub mod data;
pub mod shell;
pub mod video;

use percent_encoding::percent_decode_str;
use worker::RouteContext;

use crate::utils::links::is_unsafe_segment;

/// Decodes a raw path segment, trimming surrounding whitespace.
fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw)
        .decode_utf8_lossy()
        .trim()
        .to_string()
}

/// Decodes a video id; dot segments come back empty so they are served as not found.
fn decode_video_id(raw: &str) -> String {
    let id = decode_segment(raw);
    if is_unsafe_segment(&id) {
        String::new()
    } else {
        id
    }
}

/// Extracts the decoded `videoId` route param; empty when missing or unusable.
pub fn route_video_id(ctx: &RouteContext<()>) -> String {
    ctx.param("videoId")
        .map(|raw| decode_video_id(raw))
        .unwrap_or_default()
}

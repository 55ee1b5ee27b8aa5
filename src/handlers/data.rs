use serde_json::{json, Value};
use worker::*;

use super::route_video_id;
use crate::catalog::fetch_video;
use crate::catalog::types::VideoRecord;
use crate::config::Settings;
use crate::view::VideoView;

const NOT_FOUND_MESSAGE: &str = "Video not found";
const FAILED_MESSAGE: &str = "Failed to load video";

/// Maps a lookup outcome to a status and JSON body: the view on success,
/// otherwise an `{"error": ..}` object.
pub fn response_for(
    lookup: Result<Option<VideoRecord>>,
    video_id: &str,
    settings: &Settings,
) -> (u16, Value) {
    match lookup {
        Ok(Some(record)) => {
            let view = VideoView::resolve(&record, video_id, settings);
            match serde_json::to_value(&view) {
                Ok(body) => (200, body),
                Err(_) => (500, json!({ "error": FAILED_MESSAGE })),
            }
        }
        Ok(None) => (404, json!({ "error": NOT_FOUND_MESSAGE })),
        Err(_) => (500, json!({ "error": FAILED_MESSAGE })),
    }
}

/// JSON view of a video for the client-rendered shell.
///
/// Route: `/v/:videoId/data`
pub async fn handle(_req: Request, ctx: RouteContext<()>) -> Result<Response> {
    let video_id = route_video_id(&ctx);
    if video_id.is_empty() {
        return Ok(Response::from_json(&json!({ "error": NOT_FOUND_MESSAGE }))?.with_status(404));
    }

    let settings = Settings::from_env(&ctx.env);

    let lookup = fetch_video(&video_id, &settings).await;
    match &lookup {
        Ok(Some(_)) => console_log!("[data] found video_id={}", video_id),
        Ok(None) => console_log!("[data] not found video_id={}", video_id),
        Err(e) => console_error!("[data] lookup error for {}: {:?}", video_id, e),
    }

    let (status, body) = response_for(lookup, &video_id, &settings);
    Ok(Response::from_json(&body)?.with_status(status))
}

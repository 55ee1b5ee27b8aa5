use worker::*;

use super::route_video_id;
use crate::catalog::fetch_video;
use crate::catalog::types::VideoRecord;
use crate::config::Settings;
use crate::templates::status_html::{render_error, render_not_found};
use crate::templates::video_html::render_video_page;
use crate::utils::user_agent::Platform;
use crate::view::{PageLinks, VideoView};

/// A rendered HTML document and the status to serve it with.
#[derive(Debug)]
pub struct Page {
    pub status: u16,
    pub html: String,
}

/// Message shown on the error page. Rust errors carry their own text.
fn error_message(err: &Error) -> String {
    match err {
        Error::RustError(msg) => msg.clone(),
        other => other.to_string(),
    }
}

/// Turns a lookup outcome into the page to serve: 200 with the landing page,
/// 404 with the not-found page, or 500 with the error page.
pub fn page_for(
    lookup: Result<Option<VideoRecord>>,
    video_id: &str,
    settings: &Settings,
    platform: Platform,
) -> Page {
    let record = match lookup {
        Ok(Some(record)) => record,
        Ok(None) => {
            return Page {
                status: 404,
                html: render_not_found(),
            }
        }
        Err(e) => {
            return Page {
                status: 500,
                html: render_error(&error_message(&e)),
            }
        }
    };

    match PageLinks::build(settings, video_id) {
        Ok(links) => {
            let view = VideoView::resolve(&record, video_id, settings);
            Page {
                status: 200,
                html: render_video_page(&view, &links, settings, platform),
            }
        }
        Err(e) => Page {
            status: 500,
            html: render_error(&error_message(&e)),
        },
    }
}

/// Route: `/v/:videoId`
pub async fn handle(req: Request, ctx: RouteContext<()>) -> Result<Response> {
    let video_id = route_video_id(&ctx);
    if video_id.is_empty() {
        return Ok(Response::from_html(render_not_found())?.with_status(404));
    }

    let settings = Settings::from_env(&ctx.env);
    let ua = req
        .headers()
        .get("User-Agent")
        .unwrap_or(None)
        .unwrap_or_default();
    let platform = Platform::detect(&ua);

    console_log!("[video] video_id={} platform={}", video_id, platform.as_str());

    let lookup = fetch_video(&video_id, &settings).await;
    match &lookup {
        Ok(Some(record)) => {
            console_log!("[video] found video_id={} seller={:?}", video_id, record.seller())
        }
        Ok(None) => console_log!("[video] not found video_id={}", video_id),
        Err(e) => console_error!("[video] lookup error for {}: {:?}", video_id, e),
    }

    let page = page_for(lookup, &video_id, &settings, platform);
    console_log!("[video] returning status={} len={}", page.status, page.html.len());
    Ok(Response::from_html(page.html)?.with_status(page.status))
}

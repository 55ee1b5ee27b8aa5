use worker::*;

use super::route_video_id;
use crate::config::Settings;
use crate::templates::shell_html::render_shell;
use crate::templates::status_html::{render_error, render_not_found};
use crate::view::PageLinks;

/// Client-rendered landing page; the browser loads the video itself.
///
/// Route: `/v/:videoId/shell`
pub fn handle(_req: Request, ctx: RouteContext<()>) -> Result<Response> {
    let video_id = route_video_id(&ctx);
    if video_id.is_empty() {
        return Ok(Response::from_html(render_not_found())?.with_status(404));
    }

    let settings = Settings::from_env(&ctx.env);

    match PageLinks::build(&settings, &video_id) {
        Ok(links) => Response::from_html(render_shell(&links, &settings)),
        Err(e) => {
            console_error!("[shell] link build error for {}: {:?}", video_id, e);
            Ok(Response::from_html(render_error("Failed to load video"))?.with_status(500))
        }
    }
}

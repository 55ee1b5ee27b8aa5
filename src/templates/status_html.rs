use crate::utils::escape::escape_html;

const STATUS_STYLE: &str = "<style>\nbody{background:#000;color:#fff;font-family:system-ui;display:flex;align-items:center;justify-content:center;min-height:100vh;text-align:center;padding:20px}\n</style>";

fn render_status(title: &str, heading: &str, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>{}</title>{}</head><body><div><h1>{}</h1><p>{}</p></div></body></html>",
        title,
        STATUS_STYLE,
        heading,
        escape_html(message),
    )
}

/// Page returned when the catalog has no such video.
pub fn render_not_found() -> String {
    render_status(
        "Video Not Found",
        "Video Not Found",
        "This video may have been removed or is no longer available.",
    )
}

/// Page returned when the lookup failed; `message` is escaped.
pub fn render_error(message: &str) -> String {
    render_status("Error", "Error Loading Video", message)
}

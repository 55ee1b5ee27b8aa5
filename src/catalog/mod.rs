pub mod types;

use url::Url;
use worker::*;

use self::types::VideoRecord;
use crate::config::Settings;
use crate::utils::links::append_segments;

const USER_AGENT: &str = "weibao-links/0.1 (+https://weibao.africa)";

/// How an upstream HTTP status is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Ok,
    NotFound,
    Failed,
}

/// Maps an upstream status to a lookup outcome.
///
/// Every non-2xx status is "not found" unless `server_errors_fail` is set, in
/// which case 5xx responses are reported as failures.
pub fn classify_status(status: u16, server_errors_fail: bool) -> StatusClass {
    match status {
        200..=299 => StatusClass::Ok,
        500..=599 if server_errors_fail => StatusClass::Failed,
        _ => StatusClass::NotFound,
    }
}

/// Builds the catalog URL for a video, appending the id as an encoded path segment.
pub fn video_url(base: &str, video_id: &str) -> Result<Url> {
    append_segments(base, &[video_id])
}

/// Fetches a single video from the catalog API.
///
/// One attempt, no retries: `Ok(Some)` on success, `Ok(None)` when the
/// catalog has no such video, `Err` on transport or decoding failures.
pub async fn fetch_video(video_id: &str, settings: &Settings) -> Result<Option<VideoRecord>> {
    let url = video_url(&settings.catalog_api_url, video_id)?;
    console_log!("[catalog] fetching {}", url);

    let headers = Headers::new();
    headers.set("Accept", "application/json")?;
    headers.set("User-Agent", USER_AGENT)?;

    let mut init = RequestInit::new();
    init.with_method(Method::Get).with_headers(headers);

    let request = Request::new_with_init(url.as_str(), &init)?;
    let mut resp = Fetch::Request(request).send().await?;

    let status = resp.status_code();
    match classify_status(status, settings.upstream_5xx_as_error) {
        StatusClass::Ok => {}
        StatusClass::NotFound => {
            console_log!("[catalog] status={} for {}, treating as not found", status, video_id);
            return Ok(None);
        }
        StatusClass::Failed => {
            return Err(Error::RustError(format!("catalog returned status {status}")));
        }
    }

    let text = resp.text().await?;
    console_log!("[catalog] status={} len={} for {}", status, text.len(), video_id);

    let record: VideoRecord = serde_json::from_str(&text)
        .map_err(|e| Error::RustError(format!("invalid catalog response: {e}")))?;
    Ok(Some(record))
}

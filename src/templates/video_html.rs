use super::PAGE_STYLE;
use crate::config::Settings;
use crate::deeplink::DeepLinkPlan;
use crate::utils::escape::escape_html;
use crate::utils::user_agent::Platform;
use crate::view::{PageLinks, VideoView};

/// Declared preview dimensions for the portrait product videos.
const MEDIA_WIDTH: &str = "720";
const MEDIA_HEIGHT: &str = "1280";
const VIDEO_MIME: &str = "video/mp4";

/// Appends a `<meta>` tag, escaping the content.
fn push_meta(buf: &mut String, attr: &str, name: &str, content: &str) {
    buf.push_str(&format!(
        "<meta {}=\"{}\" content=\"{}\">\n",
        attr,
        name,
        escape_html(content),
    ));
}

/// Renders the deep-link landing page for a video.
///
/// The head carries Open Graph and Twitter player card tags for link
/// previews; the body shows the product and runs the app launch script.
pub fn render_video_page(
    view: &VideoView,
    links: &PageLinks,
    settings: &Settings,
    platform: Platform,
) -> String {
    let headline = view.headline();
    let description = format!(
        "Buy this product from {} on {}",
        view.user_name, settings.brand_name
    );
    let summary = format!(
        "Buy {} for {} from {} on {}",
        view.caption, view.formatted_price, view.user_name, settings.brand_name
    );
    let has_thumbnail = !view.thumbnail_url.is_empty();
    let has_video = !view.video_url.is_empty();

    let mut html = String::with_capacity(8192);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{} | {}</title>\n",
        escape_html(&headline),
        escape_html(&settings.brand_name),
    ));
    push_meta(&mut html, "name", "description", &summary);

    // Open Graph
    push_meta(&mut html, "property", "og:type", "video.other");
    push_meta(&mut html, "property", "og:url", &links.canonical_url);
    push_meta(&mut html, "property", "og:title", &headline);
    push_meta(&mut html, "property", "og:description", &description);
    if has_thumbnail {
        push_meta(&mut html, "property", "og:image", &view.thumbnail_url);
        push_meta(&mut html, "property", "og:image:width", MEDIA_WIDTH);
        push_meta(&mut html, "property", "og:image:height", MEDIA_HEIGHT);
    }
    if has_video {
        push_meta(&mut html, "property", "og:video", &view.video_url);
        push_meta(&mut html, "property", "og:video:secure_url", &view.video_url);
        push_meta(&mut html, "property", "og:video:type", VIDEO_MIME);
        push_meta(&mut html, "property", "og:video:width", MEDIA_WIDTH);
        push_meta(&mut html, "property", "og:video:height", MEDIA_HEIGHT);
    }
    push_meta(&mut html, "property", "og:site_name", &settings.site_name);

    // Twitter Card
    let card = if has_video { "player" } else { "summary_large_image" };
    push_meta(&mut html, "name", "twitter:card", card);
    push_meta(&mut html, "name", "twitter:title", &headline);
    push_meta(&mut html, "name", "twitter:description", &description);
    if has_thumbnail {
        push_meta(&mut html, "name", "twitter:image", &view.thumbnail_url);
    }
    if has_video {
        push_meta(&mut html, "name", "twitter:player", &view.video_url);
        push_meta(&mut html, "name", "twitter:player:width", MEDIA_WIDTH);
        push_meta(&mut html, "name", "twitter:player:height", MEDIA_HEIGHT);
        push_meta(&mut html, "name", "twitter:player:stream", &view.video_url);
        push_meta(&mut html, "name", "twitter:player:stream:content_type", VIDEO_MIME);
    }

    // App banners
    if let Some(ref app_id) = settings.ios_app_id {
        push_meta(&mut html, "name", "apple-itunes-app", &format!("app-id={app_id}"));
    }
    if let Some(ref android_url) = links.android_app_url {
        html.push_str(&format!(
            "<link rel=\"alternate\" href=\"{}\">\n",
            escape_html(android_url),
        ));
    }
    html.push_str(&format!(
        "<link rel=\"canonical\" href=\"{}\">\n",
        escape_html(&links.canonical_url),
    ));

    html.push_str(PAGE_STYLE);
    html.push_str(&DeepLinkPlan::new(&links.app_url, settings).render_script(true));
    html.push_str("</head>\n<body>\n<div class=\"container\">\n");

    let caption = escape_html(&view.caption);
    if has_thumbnail {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" class=\"thumbnail\">\n",
            escape_html(&view.thumbnail_url),
            caption,
        ));
    }
    html.push_str(&format!("<h1>{}</h1>\n", caption));
    html.push_str(&format!(
        "<p class=\"price\">{}</p>\n",
        escape_html(&view.formatted_price)
    ));
    html.push_str(&format!(
        "<p class=\"seller\">Sold by {}</p>\n",
        escape_html(&view.user_name)
    ));

    html.push_str("<div>\n");
    html.push_str(&format!(
        "<p class=\"status\">Opening {} app...</p>\n",
        escape_html(&settings.brand_name)
    ));
    match settings.store_url_for(platform) {
        Some(store_url) => html.push_str(&format!(
            "<p class=\"hint\">Don't have the app? You'll be redirected to download it, or <a href=\"{}\">download it now</a>.</p>\n",
            escape_html(store_url),
        )),
        None => html.push_str(
            "<p class=\"hint\">Don't have the app? You'll be redirected to download it.</p>\n",
        ),
    }
    html.push_str("</div>\n<div>\n");

    html.push_str(&format!(
        "<a href=\"{}\" class=\"button\">Open in App</a>\n",
        escape_html(&links.app_url)
    ));
    if has_video {
        html.push_str(&format!(
            "<a href=\"{}\" class=\"button button-secondary\">View Video</a>\n",
            escape_html(&view.video_url)
        ));
    }

    html.push_str("</div>\n</div>\n</body>\n</html>");

    html
}

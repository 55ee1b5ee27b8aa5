use serde::Serialize;
use worker::Result;

use crate::catalog::types::VideoRecord;
use crate::config::Settings;
use crate::utils::links::{append_segments, relative_path};
use crate::utils::price::format_price;

const DEFAULT_SELLER: &str = "Seller";

/// Display-ready video, shared by the server-rendered page and the client shell.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoView {
    pub id: String,
    pub caption: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub price: u64,
    pub user_name: String,
    pub formatted_price: String,
}

impl VideoView {
    /// Applies display defaults to a catalog record.
    pub fn resolve(record: &VideoRecord, route_id: &str, settings: &Settings) -> Self {
        let price = record.price.unwrap_or(0);
        Self {
            id: record.id.clone().unwrap_or_else(|| route_id.to_string()),
            caption: record
                .caption()
                .map(String::from)
                .unwrap_or_else(|| format!("Product on {}", settings.brand_name)),
            thumbnail_url: record.thumbnail().unwrap_or_default().to_string(),
            video_url: record.video().unwrap_or_default().to_string(),
            price,
            user_name: record.seller().unwrap_or(DEFAULT_SELLER).to_string(),
            formatted_price: format_price(price, &settings.currency),
        }
    }

    /// `"<caption> - <price>"`, used for titles in link previews.
    pub fn headline(&self) -> String {
        format!("{} - {}", self.caption, self.formatted_price)
    }
}

/// URLs derived from the requested video id.
#[derive(Debug, Clone)]
pub struct PageLinks {
    pub canonical_url: String,
    /// `<scheme>://video/<id>` deep link into the native app.
    pub app_url: String,
    /// Path of the JSON view consumed by the client shell.
    pub data_path: String,
    /// `android-app://` alternate link, when an Android package is configured.
    pub android_app_url: Option<String>,
}

impl PageLinks {
    pub fn build(settings: &Settings, video_id: &str) -> Result<Self> {
        let canonical_url = append_segments(&settings.site_url, &["v", video_id])?.to_string();
        let app_url =
            append_segments(&format!("{}://video", settings.app_scheme), &[video_id])?.to_string();
        let data_path = relative_path(&["v", video_id, "data"])?;
        let android_app_url = match settings.android_package.as_deref() {
            Some(package) => Some(
                append_segments(
                    &format!("android-app://{package}"),
                    &[settings.app_scheme.as_str(), "video", video_id],
                )?
                .to_string(),
            ),
            None => None,
        };

        Ok(Self {
            canonical_url,
            app_url,
            data_path,
            android_app_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> VideoRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn resolves_full_record() {
        let settings = Settings::default();
        let view = VideoView::resolve(
            &record(
                r#"{"id":"v1","caption":"Sofa","thumbnailUrl":"https://t/1.jpg","videoUrl":"https://v/1.mp4","price":1500000,"userName":"Kamau"}"#,
            ),
            "v1",
            &settings,
        );
        assert_eq!(view.id, "v1");
        assert_eq!(view.caption, "Sofa");
        assert_eq!(view.user_name, "Kamau");
        assert_eq!(view.formatted_price, "KES 1.5M");
        assert_eq!(view.headline(), "Sofa - KES 1.5M");
    }

    #[test]
    fn applies_defaults_for_missing_fields() {
        let settings = Settings::default();
        let view = VideoView::resolve(&record("{}"), "route-id", &settings);
        assert_eq!(view.id, "route-id");
        assert_eq!(view.caption, "Product on WeiBao");
        assert_eq!(view.user_name, "Seller");
        assert_eq!(view.thumbnail_url, "");
        assert_eq!(view.video_url, "");
        assert_eq!(view.price, 0);
        assert_eq!(view.formatted_price, "KES 0");
    }

    #[test]
    fn serializes_camel_case() {
        let settings = Settings::default();
        let view = VideoView::resolve(&record(r#"{"price":500}"#), "abc", &settings);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["formattedPrice"], "KES 500");
        assert_eq!(json["userName"], "Seller");
        assert!(json.get("thumbnailUrl").is_some());
    }

    #[test]
    fn builds_links() {
        let settings = Settings::default();
        let links = PageLinks::build(&settings, "abc123").unwrap();
        assert_eq!(links.canonical_url, "https://weibao.africa/v/abc123");
        assert_eq!(links.app_url, "weibao://video/abc123");
        assert_eq!(links.data_path, "/v/abc123/data");
        assert!(links.android_app_url.is_none());
    }

    #[test]
    fn builds_android_app_link_when_configured() {
        let settings = Settings {
            android_package: Some("africa.weibao.app".to_string()),
            ..Settings::default()
        };
        let links = PageLinks::build(&settings, "abc123").unwrap();
        assert_eq!(
            links.android_app_url.as_deref(),
            Some("android-app://africa.weibao.app/weibao/video/abc123")
        );
    }

    #[test]
    fn encodes_id_in_links() {
        let settings = Settings::default();
        let links = PageLinks::build(&settings, "a/b").unwrap();
        assert_eq!(links.app_url, "weibao://video/a%2Fb");
        assert_eq!(links.canonical_url, "https://weibao.africa/v/a%2Fb");
    }
}

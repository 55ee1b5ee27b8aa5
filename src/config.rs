use worker::Env;

use crate::utils::user_agent::Platform;

/// Runtime settings, read from the worker's `[vars]` with WeiBao defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Catalog endpoint; the video id is appended as a path segment.
    pub catalog_api_url: String,
    /// Public origin of this site, used for canonical URLs.
    pub site_url: String,
    pub site_name: String,
    pub brand_name: String,
    /// Custom URL scheme registered by the native app.
    pub app_scheme: String,
    pub currency: String,
    pub android_store_url: String,
    pub ios_store_url: String,
    pub ios_app_id: Option<String>,
    pub android_package: Option<String>,
    /// When set, upstream 5xx responses render the error page instead of the not-found page.
    pub upstream_5xx_as_error: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_api_url: "https://api.weibao.africa/api/v1/videos".to_string(),
            site_url: "https://weibao.africa".to_string(),
            site_name: "WeiBao Marketplace".to_string(),
            brand_name: "WeiBao".to_string(),
            app_scheme: "weibao".to_string(),
            currency: "KES".to_string(),
            android_store_url: "https://app.weibao.africa/weibao.apk".to_string(),
            ios_store_url: "https://app.weibao.africa/weibao.apk".to_string(),
            ios_app_id: None,
            android_package: None,
            upstream_5xx_as_error: false,
        }
    }
}

/// Reads a non-empty string var.
fn read_var(env: &Env, key: &str) -> Option<String> {
    env.var(key)
        .map(|v| v.to_string())
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Settings {
    pub fn from_env(env: &Env) -> Self {
        let defaults = Self::default();
        Self {
            catalog_api_url: read_var(env, "CATALOG_API_URL").unwrap_or(defaults.catalog_api_url),
            site_url: read_var(env, "SITE_URL").unwrap_or(defaults.site_url),
            site_name: read_var(env, "SITE_NAME").unwrap_or(defaults.site_name),
            brand_name: read_var(env, "BRAND_NAME").unwrap_or(defaults.brand_name),
            app_scheme: read_var(env, "APP_SCHEME").unwrap_or(defaults.app_scheme),
            currency: read_var(env, "CURRENCY").unwrap_or(defaults.currency),
            android_store_url: read_var(env, "ANDROID_STORE_URL")
                .unwrap_or(defaults.android_store_url),
            ios_store_url: read_var(env, "IOS_STORE_URL").unwrap_or(defaults.ios_store_url),
            ios_app_id: read_var(env, "IOS_APP_ID"),
            android_package: read_var(env, "ANDROID_PACKAGE"),
            upstream_5xx_as_error: read_var(env, "UPSTREAM_5XX_AS_ERROR")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.upstream_5xx_as_error),
        }
    }

    /// Store or download URL for a platform; desktop visitors get none.
    pub fn store_url_for(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Android => Some(self.android_store_url.as_str()),
            Platform::Ios => Some(self.ios_store_url.as_str()),
            Platform::Other => None,
        }
    }
}

use crate::config::Settings;
use crate::utils::escape::escape_script_string;

pub const OPEN_DELAY_MS: u32 = 100;
pub const FALLBACK_DELAY_MS: u32 = 2000;

/// In-page app launch: open the app via its URL scheme, then fall back to a
/// store download if the visitor is still looking at the page.
///
/// Timers are owned by the page. Leaving the page (`pagehide`) or the page
/// going to the background (the app opened) cancels everything still pending,
/// so an abandoned page never navigates on its own.
#[derive(Debug, Clone)]
pub struct DeepLinkPlan {
    pub app_url: String,
    pub android_store_url: String,
    pub ios_store_url: String,
    pub open_delay_ms: u32,
    pub fallback_delay_ms: u32,
}

impl DeepLinkPlan {
    pub fn new(app_url: &str, settings: &Settings) -> Self {
        Self {
            app_url: app_url.to_string(),
            android_store_url: settings.android_store_url.clone(),
            ios_store_url: settings.ios_store_url.clone(),
            open_delay_ms: OPEN_DELAY_MS,
            fallback_delay_ms: FALLBACK_DELAY_MS,
        }
    }

    /// Renders a `<script>` block defining `launchApp()`.
    ///
    /// With `autostart` the launch begins as soon as the script runs;
    /// otherwise the caller invokes `launchApp()` itself.
    pub fn render_script(&self, autostart: bool) -> String {
        let mut js = String::with_capacity(1536);
        js.push_str("<script>\n(function() {\n");
        js.push_str(&format!(
            "  var appUrl = '{}';\n  var androidStoreUrl = '{}';\n  var iosStoreUrl = '{}';\n",
            escape_script_string(&self.app_url),
            escape_script_string(&self.android_store_url),
            escape_script_string(&self.ios_store_url),
        ));
        js.push_str(
            r#"  var timers = [];
  var cancelled = false;

  function schedule(fn, ms) {
    if (cancelled) return;
    timers.push(setTimeout(fn, ms));
  }

  function cancelAll() {
    cancelled = true;
    while (timers.length) clearTimeout(timers.pop());
  }

  window.addEventListener('pagehide', cancelAll);
  document.addEventListener('visibilitychange', function() {
    if (document.hidden) cancelAll();
  });

  function storeUrl() {
    var ua = navigator.userAgent;
    if (/Android/i.test(ua)) return androidStoreUrl;
    if (/iPhone|iPad|iPod/i.test(ua)) return iosStoreUrl;
    return null;
  }

"#,
        );
        js.push_str(&format!(
            "  window.launchApp = function() {{\n    schedule(function() {{\n      window.location.href = appUrl;\n      schedule(function() {{\n        if (document.hidden) return;\n        var target = storeUrl();\n        if (target) window.location.href = target;\n      }}, {});\n    }}, {});\n  }};\n",
            self.fallback_delay_ms, self.open_delay_ms,
        ));
        if autostart {
            js.push_str("\n  window.launchApp();\n");
        }
        js.push_str("})();\n</script>\n");
        js
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> DeepLinkPlan {
        DeepLinkPlan {
            app_url: "weibao://video/abc123".to_string(),
            android_store_url: "https://play.example/weibao".to_string(),
            ios_store_url: "https://apps.example/weibao".to_string(),
            open_delay_ms: OPEN_DELAY_MS,
            fallback_delay_ms: FALLBACK_DELAY_MS,
        }
    }

    #[test]
    fn script_embeds_urls_per_platform() {
        let js = plan().render_script(true);
        assert!(js.contains("var appUrl = 'weibao://video/abc123';"));
        assert!(js.contains("var androidStoreUrl = 'https://play.example/weibao';"));
        assert!(js.contains("var iosStoreUrl = 'https://apps.example/weibao';"));
        assert!(js.contains("/Android/i"));
        assert!(js.contains("/iPhone|iPad|iPod/i"));
    }

    #[test]
    fn script_schedules_with_configured_delays() {
        let js = plan().render_script(true);
        assert!(js.contains("}, 2000);"));
        assert!(js.contains("}, 100);"));
    }

    #[test]
    fn script_cancels_timers_when_page_goes_away() {
        let js = plan().render_script(true);
        assert!(js.contains("addEventListener('pagehide', cancelAll)"));
        assert!(js.contains("visibilitychange"));
        assert!(js.contains("clearTimeout"));
    }

    #[test]
    fn autostart_controls_launch_call() {
        assert!(plan().render_script(true).contains("\n  window.launchApp();\n"));
        assert!(!plan().render_script(false).contains("\n  window.launchApp();\n"));
    }

    #[test]
    fn hostile_app_url_cannot_break_out() {
        let mut plan = plan();
        plan.app_url = "weibao://video/x';alert(1);//</script>".to_string();
        let js = plan.render_script(true);
        assert!(!js.contains("x';alert"));
        assert_eq!(js.matches("</script>").count(), 1);
    }

    #[test]
    fn new_takes_store_urls_from_settings() {
        let settings = Settings::default();
        let plan = DeepLinkPlan::new("weibao://video/a", &settings);
        assert_eq!(plan.android_store_url, settings.android_store_url);
        assert_eq!(plan.ios_store_url, settings.ios_store_url);
        assert_eq!(plan.open_delay_ms, 100);
    }
}

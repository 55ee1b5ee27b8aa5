const ANDROID_SIGNATURES: [&str; 1] = ["android"];

const IOS_SIGNATURES: [&str; 3] = ["iphone", "ipad", "ipod"];

/// Mobile platform a visitor is browsing from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    Other,
}

impl Platform {
    /// Detects the platform from a user-agent string.
    ///
    /// Matches the same case-insensitive substrings the in-page fallback
    /// script uses, with Android taking precedence.
    pub fn detect(user_agent: &str) -> Self {
        let ua_lower = user_agent.to_ascii_lowercase();
        if ANDROID_SIGNATURES.iter().any(|sig| ua_lower.contains(sig)) {
            Platform::Android
        } else if IOS_SIGNATURES.iter().any(|sig| ua_lower.contains(sig)) {
            Platform::Ios
        } else {
            Platform::Other
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_android() {
        assert_eq!(
            Platform::detect("Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Chrome/120.0 Mobile Safari/537.36"),
            Platform::Android
        );
    }

    #[test]
    fn detects_ios_devices() {
        assert_eq!(
            Platform::detect("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Safari/604.1"),
            Platform::Ios
        );
        assert_eq!(
            Platform::detect("Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15"),
            Platform::Ios
        );
        assert_eq!(Platform::detect("iPod touch"), Platform::Ios);
    }

    #[test]
    fn detects_case_insensitive() {
        assert_eq!(Platform::detect("ANDROID"), Platform::Android);
        assert_eq!(Platform::detect("IPHONE"), Platform::Ios);
    }

    #[test]
    fn desktop_and_bots_are_other() {
        assert_eq!(
            Platform::detect("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0.0.0 Safari/537.36"),
            Platform::Other
        );
        assert_eq!(Platform::detect("WhatsApp/2.23"), Platform::Other);
        assert_eq!(Platform::detect(""), Platform::Other);
    }
}

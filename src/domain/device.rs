//! Device classification from the User-Agent header.

use regex::Regex;
use std::sync::LazyLock;

static IOS_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"iPad|iPhone|iPod").unwrap());
static ANDROID_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)android").unwrap());

/// Requesting device family, as declared by its User-Agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Ios,
    Android,
    Other,
}

impl Device {
    /// Lowercase name used in logs and templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Ios => "ios",
            Device::Android => "android",
            Device::Other => "other",
        }
    }
}

/// Classifies a User-Agent string into a device family.
///
/// Pure substring/regex matching so it can be unit-tested with literal
/// strings; iOS is checked first (iPad/iPhone/iPod User-Agents never carry
/// an Android token, but not the other way around for some webviews).
pub fn detect(user_agent: &str) -> Device {
    if IOS_PATTERN.is_match(user_agent) {
        Device::Ios
    } else if ANDROID_PATTERN.is_match(user_agent) {
        Device::Android
    } else {
        Device::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
        AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
    const IPAD_UA: &str = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15";
    const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 \
        (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36";
    const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
        (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

    #[test]
    fn test_detect_iphone() {
        assert_eq!(detect(IPHONE_UA), Device::Ios);
    }

    #[test]
    fn test_detect_ipad() {
        assert_eq!(detect(IPAD_UA), Device::Ios);
    }

    #[test]
    fn test_detect_ipod() {
        assert_eq!(detect("Mozilla/5.0 (iPod touch; CPU iPhone OS 15_0 like Mac OS X)"), Device::Ios);
    }

    #[test]
    fn test_detect_android() {
        assert_eq!(detect(ANDROID_UA), Device::Android);
    }

    #[test]
    fn test_detect_desktop_is_other() {
        assert_eq!(detect(DESKTOP_UA), Device::Other);
    }

    #[test]
    fn test_detect_empty_is_other() {
        assert_eq!(detect(""), Device::Other);
    }

    #[test]
    fn test_detect_android_case_insensitive() {
        assert_eq!(detect("something ANDROID something"), Device::Android);
    }
}

//! Deep-link synthesis: platform-native app URIs for iOS and Android.
//!
//! Each platform has a small builder returning a [`DeepLinks`] value. Android
//! links share the generic intent URI shape:
//!
//! ```text
//! intent://{host+path+query}#Intent;scheme=https;package={pkg};S.browser_fallback_url={enc};end
//! ```
//!
//! Synthesis is pure and performs no I/O.

use url::{Position, Url};

use crate::domain::classifier::{Classification, Platform, ResourceType};

const YOUTUBE_PACKAGE: &str = "com.google.android.youtube";
const INSTAGRAM_PACKAGE: &str = "com.instagram.android";
const TIKTOK_PACKAGE: &str = "com.zhiliaoapp.musically";
const TWITTER_PACKAGE: &str = "com.twitter.android";
const FACEBOOK_PACKAGE: &str = "com.facebook.katana";
const LINKEDIN_PACKAGE: &str = "com.linkedin.android";

/// Platform-native URIs for a classified link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinks {
    pub ios: String,
    pub android: String,
}

/// Builds the iOS and Android deep links for a classified URL.
///
/// Unrecognized (`web`) platforms get the original URL verbatim on both
/// sides, so the redirector never attempts a native-app handoff for them.
pub fn synthesize(classification: &Classification, original_url: &str) -> DeepLinks {
    match classification.platform {
        Platform::Youtube => youtube_links(classification, original_url),
        Platform::Instagram => DeepLinks {
            ios: format!("instagram://media?id={}", id_or_empty(classification)),
            android: android_intent(original_url, INSTAGRAM_PACKAGE, original_url),
        },
        Platform::Tiktok => DeepLinks {
            ios: format!("snssdk1233://aweme/detail/{}", id_or_empty(classification)),
            android: android_intent(original_url, TIKTOK_PACKAGE, original_url),
        },
        Platform::Twitter => path_scheme_links("twitter", TWITTER_PACKAGE, classification, original_url),
        Platform::Facebook => path_scheme_links("fb", FACEBOOK_PACKAGE, classification, original_url),
        Platform::Linkedin => {
            path_scheme_links("linkedin", LINKEDIN_PACKAGE, classification, original_url)
        }
        Platform::Web => DeepLinks {
            ios: original_url.to_string(),
            android: original_url.to_string(),
        },
    }
}

/// YouTube has distinct app routes for videos and shorts; everything else
/// falls back to handing the whole URL to the app.
fn youtube_links(classification: &Classification, original_url: &str) -> DeepLinks {
    match classification.resource {
        ResourceType::Video => {
            let id = id_or_empty(classification);
            DeepLinks {
                ios: format!("youtube://watch?v={id}"),
                android: android_intent(
                    &format!("https://www.youtube.com/watch?v={id}"),
                    YOUTUBE_PACKAGE,
                    original_url,
                ),
            }
        }
        ResourceType::Shorts => {
            let id = id_or_empty(classification);
            DeepLinks {
                ios: format!("youtube://shorts/{id}"),
                android: android_intent(
                    &format!("https://www.youtube.com/shorts/{id}"),
                    YOUTUBE_PACKAGE,
                    original_url,
                ),
            }
        }
        _ => DeepLinks {
            ios: format!("youtube://{original_url}"),
            android: android_intent(original_url, YOUTUBE_PACKAGE, original_url),
        },
    }
}

/// Platforms whose iOS scheme takes the web path verbatim (`twitter://`,
/// `fb://`, `linkedin://`).
fn path_scheme_links(
    scheme: &str,
    package: &str,
    classification: &Classification,
    original_url: &str,
) -> DeepLinks {
    DeepLinks {
        ios: format!("{}://{}", scheme, classification.path.trim_start_matches('/')),
        android: android_intent(original_url, package, original_url),
    }
}

fn id_or_empty(classification: &Classification) -> &str {
    classification.id.as_deref().unwrap_or_default()
}

/// Builds the generic Android intent URI for a target web URL.
///
/// The intent body is the target with its scheme stripped; the fallback URL
/// is percent-encoded so the browser can recover it when the app is absent.
fn android_intent(target: &str, package: &str, fallback: &str) -> String {
    format!(
        "intent://{}#Intent;scheme=https;package={};S.browser_fallback_url={};end",
        strip_scheme(target),
        package,
        urlencoding::encode(fallback)
    )
}

/// Strips the scheme from a URL, keeping host, path, and query.
///
/// Slices the parsed URL from the host position, so `http://` and `https://`
/// inputs behave identically and ports survive. Unparseable input falls back
/// to trimming known scheme prefixes.
fn strip_scheme(input: &str) -> String {
    match Url::parse(input) {
        Ok(url) if url.has_host() => url[Position::BeforeHost..].to_string(),
        _ => input
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classifier::classify;

    fn links_for(url: &str) -> DeepLinks {
        let classification = classify(url).unwrap();
        synthesize(&classification, url)
    }

    #[test]
    fn test_youtube_video_links() {
        let links = links_for("https://youtu.be/abc123");
        assert_eq!(links.ios, "youtube://watch?v=abc123");
        assert!(links.android.starts_with("intent://www.youtube.com/watch?v=abc123"));
        assert!(links.android.contains("package=com.google.android.youtube"));
        assert!(links.android.ends_with(";end"));
    }

    #[test]
    fn test_youtube_watch_links() {
        let links = links_for("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(links.ios, "youtube://watch?v=dQw4w9WgXcQ");
        assert!(links.android.contains("v=dQw4w9WgXcQ"));
    }

    #[test]
    fn test_youtube_shorts_links() {
        let links = links_for("https://www.youtube.com/shorts/xyz789");
        assert_eq!(links.ios, "youtube://shorts/xyz789");
        assert!(links.android.starts_with("intent://www.youtube.com/shorts/xyz789"));
    }

    #[test]
    fn test_youtube_general_links() {
        let original = "https://www.youtube.com/@somechannel";
        let links = links_for(original);
        assert_eq!(links.ios, format!("youtube://{original}"));
        assert!(links.android.starts_with("intent://www.youtube.com/@somechannel"));
        assert!(links.android.contains("package=com.google.android.youtube"));
    }

    #[test]
    fn test_instagram_post_links() {
        let links = links_for("https://www.instagram.com/p/XYZ/");
        assert_eq!(links.ios, "instagram://media?id=XYZ");
        assert!(links.android.contains("package=com.instagram.android"));
    }

    #[test]
    fn test_instagram_profile_links_have_empty_id() {
        let links = links_for("https://www.instagram.com/someuser/");
        assert_eq!(links.ios, "instagram://media?id=");
    }

    #[test]
    fn test_tiktok_video_links() {
        let links = links_for("https://www.tiktok.com/@user/video/7012345");
        assert_eq!(links.ios, "snssdk1233://aweme/detail/7012345");
        assert!(links.android.contains("package=com.zhiliaoapp.musically"));
    }

    #[test]
    fn test_twitter_links_strip_domain() {
        let links = links_for("https://twitter.com/user/status/123?s=20");
        assert_eq!(links.ios, "twitter://user/status/123?s=20");
        assert!(links.android.contains("package=com.twitter.android"));
    }

    #[test]
    fn test_facebook_links() {
        let links = links_for("https://www.facebook.com/somepage/posts/456");
        assert_eq!(links.ios, "fb://somepage/posts/456");
        assert!(links.android.contains("package=com.facebook.katana"));
    }

    #[test]
    fn test_linkedin_links() {
        let links = links_for("https://www.linkedin.com/in/someone/");
        assert_eq!(links.ios, "linkedin://in/someone/");
        assert!(links.android.contains("package=com.linkedin.android"));
    }

    #[test]
    fn test_web_links_are_the_original_url() {
        let original = "https://example.com/page";
        let links = links_for(original);
        assert_eq!(links.ios, original);
        assert_eq!(links.android, original);
    }

    #[test]
    fn test_fallback_url_is_percent_encoded() {
        let links = links_for("https://youtu.be/abc123");
        assert!(links.android.contains("S.browser_fallback_url=https%3A%2F%2Fyoutu.be%2Fabc123"));
    }

    #[test]
    fn test_intent_body_keeps_query() {
        let links = links_for("https://twitter.com/user/status/123?s=20");
        assert!(links.android.starts_with("intent://twitter.com/user/status/123?s=20#Intent"));
    }

    #[test]
    fn test_strip_scheme_handles_http() {
        assert_eq!(strip_scheme("http://example.com/page"), "example.com/page");
        assert_eq!(strip_scheme("https://example.com:8080/p?q=1"), "example.com:8080/p?q=1");
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let first = links_for("https://www.instagram.com/reel/Cxy123/");
        let second = links_for("https://www.instagram.com/reel/Cxy123/");
        assert_eq!(first, second);
    }
}

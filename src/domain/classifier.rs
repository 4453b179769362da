//! URL classification: which platform a link belongs to and what it points at.
//!
//! Classification is pure string/URL parsing. Hostnames are matched
//! case-insensitively against a fixed table in a fixed priority order, then a
//! per-platform path rule extracts the resource type and identifier.

use url::Url;

/// Errors that can occur while classifying an input URL.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("Invalid URL format: {0}")]
    MalformedUrl(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedScheme,
}

/// Social platform a URL belongs to.
///
/// Order matters: hosts are tested in declaration order, so a hostname that
/// could match several entries resolves to the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Youtube,
    Instagram,
    Tiktok,
    Twitter,
    Facebook,
    Linkedin,
    Web,
}

impl Platform {
    /// Lowercase platform name used in `url_type` and API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::Twitter => "twitter",
            Platform::Facebook => "facebook",
            Platform::Linkedin => "linkedin",
            Platform::Web => "web",
        }
    }

    /// Routing prefix used in public short URLs (`/{prefix}/{code}`).
    ///
    /// The prefix is informational only; resolution is keyed purely by code.
    pub fn prefix(&self) -> &'static str {
        match self {
            Platform::Youtube => "yt",
            Platform::Instagram => "ig",
            Platform::Tiktok => "tt",
            Platform::Twitter => "tw",
            Platform::Facebook => "fb",
            Platform::Linkedin => "li",
            Platform::Web => "web",
        }
    }
}

/// Kind of resource a classified URL references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Video,
    Shorts,
    Post,
    General,
}

impl ResourceType {
    /// Lowercase type name used in `url_type` and API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Video => "video",
            ResourceType::Shorts => "shorts",
            ResourceType::Post => "post",
            ResourceType::General => "general",
        }
    }
}

/// Result of classifying an input URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub platform: Platform,
    pub resource: ResourceType,
    /// Extracted resource identifier (video id, post shortcode, ...), when
    /// the platform path rule yields one.
    pub id: Option<String>,
    /// Path plus query for known platforms; path only for `web`.
    pub path: String,
}

impl Classification {
    /// Composed `{platform}_{type}` tag stored on the link record.
    pub fn url_type(&self) -> String {
        format!("{}_{}", self.platform.as_str(), self.resource.as_str())
    }
}

/// Classifies an input URL by platform and resource type.
///
/// # Platform rules
///
/// - YouTube: `youtu.be/{id}` and `/watch?v={id}` are videos, `/shorts/{id}`
///   is a short, anything else on a YouTube host is `general`.
/// - Instagram: `/p/{id}/` and `/reel/{id}/` are posts.
/// - TikTok: paths containing `/video/{id}` are videos.
/// - Twitter/X, Facebook, LinkedIn: always `general`, path preserved.
/// - Unmatched hosts: platform `web`, `general`, query dropped from the path.
///
/// # Errors
///
/// Returns [`ClassifyError::MalformedUrl`] if the input does not parse as an
/// absolute URL with a host, and [`ClassifyError::UnsupportedScheme`] for
/// non-HTTP(S) schemes.
pub fn classify(input: &str) -> Result<Classification, ClassifyError> {
    let url = Url::parse(input).map_err(|e| ClassifyError::MalformedUrl(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(ClassifyError::UnsupportedScheme),
    }

    let host = url
        .host_str()
        .ok_or_else(|| ClassifyError::MalformedUrl("URL has no host".to_string()))?
        .to_ascii_lowercase();

    if host.contains("youtube.com") || host.contains("youtu.be") {
        return Ok(classify_youtube(&url, &host));
    }

    if host.contains("instagram.com") {
        return Ok(classify_instagram(&url));
    }

    if host.contains("tiktok.com") {
        return Ok(classify_tiktok(&url));
    }

    if host.contains("twitter.com") || host == "x.com" || host.ends_with(".x.com") {
        return Ok(general(Platform::Twitter, &url));
    }

    if host.contains("facebook.com") {
        return Ok(general(Platform::Facebook, &url));
    }

    if host.contains("linkedin.com") {
        return Ok(general(Platform::Linkedin, &url));
    }

    Ok(Classification {
        platform: Platform::Web,
        resource: ResourceType::General,
        id: None,
        path: url.path().to_string(),
    })
}

/// YouTube path rules: short host, `/watch`, `/shorts/`, fallback `general`.
fn classify_youtube(url: &Url, host: &str) -> Classification {
    let path = url.path();

    let (resource, id) = if host.contains("youtu.be") {
        let id = path
            .trim_start_matches('/')
            .split('/')
            .next()
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        (ResourceType::Video, id)
    } else if path == "/watch" {
        let id = url.query_pairs().find_map(|(key, value)| {
            if key == "v" {
                Some(value.into_owned())
            } else {
                None
            }
        });
        (ResourceType::Video, id)
    } else if let Some(rest) = path.strip_prefix("/shorts/") {
        let id = Some(rest.to_string()).filter(|s| !s.is_empty());
        (ResourceType::Shorts, id)
    } else {
        (ResourceType::General, None)
    };

    Classification {
        platform: Platform::Youtube,
        resource,
        id,
        path: path_and_query(url),
    }
}

/// Instagram path rules: `/p/{id}` and `/reel/{id}` are posts.
fn classify_instagram(url: &Url) -> Classification {
    let path = url.path();

    let (resource, id) = if path.starts_with("/p/") || path.starts_with("/reel/") {
        // "/p/XYZ/" splits to ["", "p", "XYZ", ""]; the shortcode is at index 2.
        let id = path
            .split('/')
            .nth(2)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        (ResourceType::Post, id)
    } else {
        (ResourceType::General, None)
    };

    Classification {
        platform: Platform::Instagram,
        resource,
        id,
        path: path_and_query(url),
    }
}

/// TikTok path rule: anything containing `/video/` is a video.
fn classify_tiktok(url: &Url) -> Classification {
    let path = url.path();

    let (resource, id) = match path.find("/video/") {
        Some(pos) => {
            let id = Some(path[pos + "/video/".len()..].to_string()).filter(|s| !s.is_empty());
            (ResourceType::Video, id)
        }
        None => (ResourceType::General, None),
    };

    Classification {
        platform: Platform::Tiktok,
        resource,
        id,
        path: path_and_query(url),
    }
}

/// Platforms without per-path rules keep the full path and query.
fn general(platform: Platform, url: &Url) -> Classification {
    Classification {
        platform,
        resource: ResourceType::General,
        id: None,
        path: path_and_query(url),
    }
}

fn path_and_query(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

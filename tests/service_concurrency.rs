//! Concurrency properties of the registry: code uniqueness and click
//! monotonicity under parallel load.

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use applink::application::services::LinkService;
use applink::infrastructure::persistence::MemoryLinkRepository;
use tokio::task::JoinSet;

fn service() -> Arc<LinkService> {
    Arc::new(LinkService::new(Arc::new(MemoryLinkRepository::new())))
}

#[tokio::test]
async fn test_concurrent_registrations_get_distinct_codes() {
    let service = service();
    let mut tasks = JoinSet::new();

    for _ in 0..50 {
        let service = service.clone();
        tasks.spawn(async move {
            service
                .register("https://example.com/page")
                .await
                .unwrap()
                .link
                .short_code
        });
    }

    let mut codes = HashSet::new();
    while let Some(result) = tasks.join_next().await {
        codes.insert(result.unwrap());
    }

    assert_eq!(codes.len(), 50);
}

#[tokio::test]
async fn test_concurrent_clicks_sum_exactly() {
    let service = service();
    let code = service
        .register("https://youtu.be/abc123")
        .await
        .unwrap()
        .link
        .short_code;

    let mut tasks = JoinSet::new();
    for i in 0..50 {
        let service = service.clone();
        let code = code.clone();
        let user_agent = if i % 2 == 0 {
            common::IPHONE_UA
        } else {
            common::ANDROID_UA
        };
        tasks.spawn(async move { service.resolve(&code, user_agent).await.unwrap() });
    }

    while let Some(result) = tasks.join_next().await {
        result.unwrap();
    }

    let link = service.get_link(&code).await.unwrap();
    assert_eq!(link.click_count, 50);
}

#[tokio::test]
async fn test_registered_links_always_resolve() {
    let service = service();

    let urls = [
        "https://youtu.be/abc123",
        "https://www.instagram.com/p/XYZ/",
        "https://www.tiktok.com/@user/video/7012345",
        "https://twitter.com/user/status/123",
        "https://example.com/page",
    ];

    for url in urls {
        let code = service.register(url).await.unwrap().link.short_code;
        let directive = service.resolve(&code, common::DESKTOP_UA).await.unwrap();
        assert_eq!(directive.fallback_url, url);
    }
}

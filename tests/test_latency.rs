mod common;

use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn listing_waits_for_the_configured_delay() {
    let env = common::TestEnv::with_delay(Duration::from_secs(2));
    let server = env.server();

    let started = tokio::time::Instant::now();
    let page = env.list_posts(&server, &[("per_page", "6")]).await;

    assert!(started.elapsed() >= Duration::from_secs(2));
    assert_eq!(page["data"].as_array().unwrap().len(), 6);
}

#[tokio::test(start_paused = true)]
async fn post_lookup_is_not_delayed() {
    let env = common::TestEnv::with_delay(Duration::from_secs(2));
    let server = env.server();

    let started = tokio::time::Instant::now();
    server.get("/api/posts/digital-declutter").await.assert_status_ok();

    assert!(started.elapsed() < Duration::from_secs(2));
}

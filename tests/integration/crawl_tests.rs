//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use crate::{config_for, html_page};
use sitegraph::crawler::{crawl, Crawler};
use sitegraph::{CrawlPhase, PageType};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Number of requests the server received for `request_path`
async fn requests_for(server: &MockServer, request_path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path() == request_path)
        .count()
}

#[tokio::test]
async fn test_seed_entry_holds_only_in_scope_links() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r##"<a href="/a">A</a>
                <a href="https://other.org/x">Elsewhere</a>
                <a href="/a#frag">A again</a>"##,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(html_page("<p>Leaf page</p>"))
        .mount(&server)
        .await;

    let mut config = config_for(&base);
    config.crawler.depth = 1;
    config.scope.same_domain = true;

    let report = crawl(config).await.expect("crawl failed");

    let root_key = format!("{}/", base);
    let a_url = format!("{}/a", base);

    assert_eq!(report.root, base);
    assert_eq!(report.pages[&root_key], vec![a_url.clone()]);
    assert!(report.pages[&a_url].is_empty());
    assert_eq!(report.visited.len(), 2);
    assert!(report.errors.is_empty());
    assert_eq!(requests_for(&server, "/a").await, 1);
}

#[tokio::test]
async fn test_timeout_is_recorded_as_error() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(r#"<a href="/slow">Slow</a>"#))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html_page("<p>Too late</p>").set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let mut config = config_for(&base);
    config.crawler.timeout = 0.5;

    let report = crawl(config).await.expect("crawl failed");
    let slow_url = format!("{}/slow", base);

    assert!(report.visited.contains(&slow_url));
    assert!(report.errors.contains_key(&slow_url));
    assert!(report.errors[&slow_url].contains("timeout"));
    assert!(!report.pages.contains_key(&slow_url));
}

#[tokio::test]
async fn test_http_error_is_recorded() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(r#"<a href="/missing">Missing</a>"#))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let report = crawl(config_for(&base)).await.expect("crawl failed");
    let missing_url = format!("{}/missing", base);

    assert_eq!(report.errors[&missing_url], format!("HTTP 404 for {}", missing_url));
    assert!(report.visited.contains(&missing_url));
    assert_eq!(requests_for(&server, "/missing").await, 1);
}

#[tokio::test]
async fn test_page_budget_stops_after_one_fetch() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r#"<a href="/1">1</a><a href="/2">2</a><a href="/3">3</a>
               <a href="/4">4</a><a href="/5">5</a>"#,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(html_page("<p>Child</p>"))
        .mount(&server)
        .await;

    let mut config = config_for(&base);
    config.crawler.max_pages = Some(1);

    let report = crawl(config).await.expect("crawl failed");

    assert_eq!(report.fetches, 1);
    assert_eq!(report.visited.len(), 1);
    assert_eq!(server.received_requests().await.unwrap_or_default().len(), 1);
}

#[tokio::test]
async fn test_budget_bounds_visited_set() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r#"<a href="/1">1</a><a href="/2">2</a><a href="/3">3</a>
               <a href="/4">4</a><a href="/5">5</a>"#,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(html_page("<p>Child</p>"))
        .mount(&server)
        .await;

    let mut config = config_for(&base);
    config.crawler.max_pages = Some(3);

    let report = crawl(config).await.expect("crawl failed");

    assert_eq!(report.visited.len(), 3);
    assert_eq!(report.fetches, 3);
}

#[tokio::test]
async fn test_depth_limit_is_respected() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(r#"<a href="/a">A</a>"#))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(html_page(r#"<a href="/b">B</a>"#))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(html_page("<p>Too deep</p>"))
        .mount(&server)
        .await;

    let mut config = config_for(&base);
    config.crawler.depth = 1;

    let report = crawl(config).await.expect("crawl failed");

    assert_eq!(requests_for(&server, "/a").await, 1);
    assert_eq!(requests_for(&server, "/b").await, 0);
    assert_eq!(report.depth_counts.get(&0), Some(&1));
    assert_eq!(report.depth_counts.get(&1), Some(&1));

    // The link is still recorded on the page that holds it
    assert_eq!(report.pages[&format!("{}/a", base)], vec![format!("{}/b", base)]);
}

#[tokio::test]
async fn test_depth_zero_fetches_only_seed() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(r#"<a href="/a">A</a>"#))
        .mount(&server)
        .await;

    let mut config = config_for(&base);
    config.crawler.depth = 0;

    let report = crawl(config).await.expect("crawl failed");

    assert_eq!(report.fetches, 1);
    assert_eq!(requests_for(&server, "/a").await, 0);
}

#[tokio::test]
async fn test_non_html_page_gets_empty_entry() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(r#"<a href="/feed">Feed</a>"#))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(br#"{"items": ["<a href='/x'>x</a>"]}"#.to_vec(), "application/json"),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&base);
    config.extraction.enabled = true;

    let report = crawl(config).await.expect("crawl failed");
    let feed_url = format!("{}/feed", base);

    assert!(report.pages[&feed_url].is_empty());
    assert_eq!(report.non_html_pages, 1);
    assert!(!report.content.contains_key(&feed_url));
    assert_eq!(requests_for(&server, "/x").await, 0);
}

#[tokio::test]
async fn test_redirect_records_final_url() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(r#"<a href="/old">Old</a>"#))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/new"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(html_page(r#"<a href="/after">After</a>"#))
        .mount(&server)
        .await;

    let mut config = config_for(&base);
    config.crawler.depth = 1;

    let report = crawl(config).await.expect("crawl failed");
    let old_url = format!("{}/old", base);
    let new_url = format!("{}/new", base);

    assert!(report.pages.contains_key(&new_url));
    assert!(!report.pages.contains_key(&old_url));
    assert!(report.visited.contains(&new_url));
    assert!(!report.visited.contains(&old_url));
    assert_eq!(report.pages[&new_url], vec![format!("{}/after", base)]);
}

#[tokio::test]
async fn test_redirect_collision_keeps_first_entry() {
    let server = MockServer::start().await;
    let base = server.uri();

    // Links are followed in sorted order, so /new is fetched before /old
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(r#"<a href="/old">Old</a><a href="/new">New</a>"#))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/new"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(html_page("<p>Target</p>"))
        .mount(&server)
        .await;

    let mut config = config_for(&base);
    config.crawler.depth = 1;
    config.extraction.enabled = true;

    let report = crawl(config).await.expect("crawl failed");
    let new_url = format!("{}/new", base);

    assert_eq!(requests_for(&server, "/new").await, 2);
    assert_eq!(report.pages.keys().filter(|k| **k == new_url).count(), 1);
    assert_eq!(report.content.len(), 2);
    assert_eq!(report.depth_counts.get(&1), Some(&1));
}

#[tokio::test]
async fn test_confine_and_exclude_prefixes() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/docs"))
        .respond_with(html_page(
            r#"<a href="/docs/guide">Guide</a>
               <a href="/docs/private/keys">Private</a>
               <a href="/blog/post">Blog</a>"#,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(html_page("<p>Leaf</p>"))
        .mount(&server)
        .await;

    let mut config = config_for(&format!("{}/docs", base));
    config.crawler.depth = 1;
    config.scope.confine_prefix = Some(format!("{}/docs", base));
    config.scope.exclude = vec![format!("{}/docs/private", base)];

    let report = crawl(config).await.expect("crawl failed");

    assert_eq!(requests_for(&server, "/docs/guide").await, 1);
    assert_eq!(requests_for(&server, "/docs/private/keys").await, 0);
    assert_eq!(requests_for(&server, "/blog/post").await, 0);
    assert_eq!(
        report.pages[&format!("{}/docs", base)],
        vec![format!("{}/docs/guide", base)]
    );
}

#[tokio::test]
async fn test_links_are_normalized_and_deduplicated() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r#"<a href="/Guide/">Guide</a>
               <a href="/guide?lang=en">Guide EN</a>
               <a href="/news/">News</a>"#,
        ))
        .mount(&server)
        .await;

    let mut config = config_for(&base);
    config.crawler.depth = 0;

    let report = crawl(config).await.expect("crawl failed");

    assert_eq!(
        report.pages[&format!("{}/", base)],
        vec![format!("{}/guide", base), format!("{}/news", base)]
    );
    assert_eq!(report.unique_links, 2);
    assert_eq!(report.total_links, 3);
}

#[tokio::test]
async fn test_content_extraction() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                format!(
                    r#"<!DOCTYPE html>
<html lang="pt-PT">
<head><title>Início</title><meta name="description" content="Página inicial"></head>
<body>
  <nav><a href="{base}/curso/leic/plano-de-estudos">Plano</a></nav>
  <main><h1>Bem-vindo</h1><h2>Cursos</h2><p>Oferta formativa do instituto.</p></main>
</body>
</html>"#,
                    base = base
                )
                .into_bytes(),
                "text/html",
            ),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/curso/leic/plano-de-estudos"))
        .respond_with(html_page("<main><h1>Plano de estudos</h1></main>"))
        .mount(&server)
        .await;

    let mut config = config_for(&base);
    config.extraction.enabled = true;

    let report = crawl(config).await.expect("crawl failed");

    let home = report.content[&format!("{}/", base)]
        .content()
        .expect("home page extracted");
    assert_eq!(home.title, "Início");
    assert_eq!(home.meta_description, "Página inicial");
    assert_eq!(home.lang, "pt-pt");
    assert_eq!(home.h1, "Bem-vindo");
    assert_eq!(home.h2, vec!["Cursos"]);
    assert_eq!(home.text, "Bem-vindo\nCursos\nOferta formativa do instituto.");
    assert_eq!(home.page_type, PageType::Other);

    let plan = report.content[&format!("{}/curso/leic/plano-de-estudos", base)]
        .content()
        .expect("study plan extracted");
    assert_eq!(plan.page_type, PageType::StudyPlan);
    assert_eq!(plan.course_code, "CURSO");
}

#[tokio::test]
async fn test_content_disabled_by_default() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page("<main><p>Home page</p></main>"))
        .mount(&server)
        .await;

    let report = crawl(config_for(&base)).await.expect("crawl failed");
    assert!(report.content.is_empty());
}

#[tokio::test]
async fn test_crawler_runs_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html_page("<p>Only page</p>"))
        .mount(&server)
        .await;

    let mut crawler = Crawler::new(config_for(&server.uri())).expect("valid config");
    assert_eq!(crawler.phase(), CrawlPhase::Idle);

    crawler.run().await.expect("crawl failed");
    assert_eq!(crawler.phase(), CrawlPhase::Done);

    assert!(crawler.run().await.is_err());
}

#[tokio::test]
async fn test_independent_crawls_run_concurrently() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(r#"<a href="/one">One</a>"#))
        .mount(&first)
        .await;
    Mock::given(method("GET"))
        .and(path("/one"))
        .respond_with(html_page("<p>First site</p>"))
        .mount(&first)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(r#"<a href="/two">Two</a><a href="/three">Three</a>"#))
        .mount(&second)
        .await;
    Mock::given(method("GET"))
        .respond_with(html_page("<p>Second site</p>"))
        .mount(&second)
        .await;

    let (a, b) = tokio::join!(
        crawl(config_for(&first.uri())),
        crawl(config_for(&second.uri()))
    );
    let a = a.expect("first crawl failed");
    let b = b.expect("second crawl failed");

    assert_eq!(a.visited.len(), 2);
    assert_eq!(b.visited.len(), 3);
    assert!(a.visited.iter().all(|url| url.starts_with(&first.uri())));
    assert!(b.visited.iter().all(|url| url.starts_with(&second.uri())));
}

//! End-to-end export tests: crawl a mock site, then write every format

use crate::{config_for, html_page};
use sitegraph::crawler::{crawl, CrawlReport};
use sitegraph::output::{generate_markdown_summary, write_content, write_graph, OutputFormat};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer};

async fn crawl_small_site(server: &MockServer) -> CrawlReport {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r#"<main><h1>Home</h1><a href="/noticias/abertura">News</a><a href="/contactos">Contact</a></main>"#,
        ))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/noticias/abertura"))
        .respond_with(html_page("<main><h1>Abertura do ano letivo</h1></main>"))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/contactos"))
        .respond_with(html_page("<main><h1>Contactos</h1></main>"))
        .mount(server)
        .await;

    let mut config = config_for(&server.uri());
    config.crawler.depth = 1;
    config.extraction.enabled = true;

    crawl(config).await.expect("crawl failed")
}

#[tokio::test]
async fn test_json_export() {
    let server = MockServer::start().await;
    let report = crawl_small_site(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("links.json");

    assert_eq!(write_graph(&report, &out).unwrap(), OutputFormat::Json);

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let base = server.uri();

    assert_eq!(value["root"], base.as_str());
    assert_eq!(value["config"]["crawler"]["depth"], 1);
    assert_eq!(value["pages"].as_object().unwrap().len(), 3);
    assert_eq!(
        value["pages"][format!("{}/", base)],
        serde_json::json!([format!("{}/contactos", base), format!("{}/noticias/abertura", base)])
    );
    assert!(value["errors"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn test_csv_export() {
    let server = MockServer::start().await;
    let report = crawl_small_site(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("links.csv");

    write_graph(&report, &out).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    let base = server.uri();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "page,link");
    assert_eq!(lines[1], format!("{0}/,{0}/contactos", base));
    assert_eq!(lines[2], format!("{0}/,{0}/noticias/abertura", base));
    assert!(lines.contains(&format!("{}/contactos,", base).as_str()));
    assert_eq!(lines.len(), 5);
}

#[tokio::test]
async fn test_dot_export() {
    let server = MockServer::start().await;
    let report = crawl_small_site(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("graph.dot");

    assert_eq!(write_graph(&report, &out).unwrap(), OutputFormat::Dot);

    let text = std::fs::read_to_string(&out).unwrap();
    let base = server.uri();

    assert!(text.starts_with("digraph G {"));
    assert!(text.contains(&format!("\"{0}/\" -> \"{0}/contactos\";", base)));
    assert_eq!(text.matches(" -> ").count(), 2);
}

#[tokio::test]
async fn test_ndjson_content_export() {
    let server = MockServer::start().await;
    let report = crawl_small_site(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("content.jsonl");

    assert_eq!(write_content(&report, &out).unwrap(), 3);

    let text = std::fs::read_to_string(&out).unwrap();
    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r["status"] == "ok"));

    let news = records
        .iter()
        .find(|r| r["url"].as_str().unwrap_or_default().ends_with("/noticias/abertura"))
        .expect("news record present");
    assert_eq!(news["type"], "news");
    assert_eq!(news["h1"], "Abertura do ano letivo");
}

#[tokio::test]
async fn test_markdown_summary_export() {
    let server = MockServer::start().await;
    let report = crawl_small_site(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("summary.md");

    generate_markdown_summary(&report, &out).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains(&format!("- **Root**: {}", server.uri())));
    assert!(text.contains("- **Pages Visited**: 3"));
    assert!(text.contains("| news | 1 |"));
}

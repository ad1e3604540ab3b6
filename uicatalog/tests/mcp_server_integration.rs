//! End-to-end tests of the MCP server against an in-memory registry

use rmcp::model::{CallToolResult, RawContent};
use serde_json::Value;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use uicatalog::registry::ExampleSummary;
use uicatalog::{
    Category, ComponentSummary, Config, McpServer, MockRegistryClient, OutputSchema,
    RegistryClient,
};

fn text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text_content) => &text_content.text,
        _ => panic!("Expected text content"),
    }
}

fn ratings_registry() -> MockRegistryClient {
    MockRegistryClient::new()
        .with_component(
            ComponentSummary::new("star-rating-basic", "component", "d"),
            Some("export function StarRatingBasic() {}"),
        )
        .with_component(
            ComponentSummary::new("face-rating-basic", "registry:ui", "Faces"),
            None,
        )
        .with_example(
            ExampleSummary::new("ex1", vec!["https://ui.stackzero.co/r/star-rating-basic"]),
            "Star rating demo",
            Some("<StarRatingBasic />"),
        )
        .with_example(
            ExampleSummary::new("unrelated", vec!["https://elsewhere.dev/r/star-rating-basic"]),
            "Foreign demo",
            None,
        )
}

fn config_with(categories: Vec<Category>) -> Arc<Config> {
    Arc::new(Config {
        categories,
        ..Config::default()
    })
}

async fn server(registry: MockRegistryClient, categories: Vec<Category>) -> McpServer {
    McpServer::initialize(config_with(categories), Arc::new(registry))
        .await
        .unwrap()
}

async fn call(server: &McpServer, tool: &str) -> CallToolResult {
    server
        .call_tool_by_name(tool, serde_json::Map::new())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_tools_are_listed_in_registration_order() {
    let server = server(
        ratings_registry(),
        vec![
            Category::new("Ratings", vec!["star-rating-basic"]),
            Category::new("Buttons", vec!["button-basic"]),
        ],
    )
    .await;

    let tools = server.tools();
    let names: Vec<_> = tools.iter().map(|t| t.name.to_string()).collect();
    assert_eq!(names, ["getUIComponents", "getRatings", "getButtons"]);
    assert_eq!(
        tools[1].description.as_deref(),
        Some("Provides implementation details for star-rating-basic components.")
    );
    assert_eq!(tools[2].input_schema.get("type"), Some(&Value::from("object")));
}

#[tokio::test]
async fn test_ratings_tool_links_examples() {
    let server = server(
        ratings_registry(),
        vec![Category::new("Ratings", vec!["star-rating-basic"])],
    )
    .await;

    let result = call(&server, "getRatings").await;
    assert_eq!(result.is_error, Some(false));

    let records: Vec<Value> = serde_json::from_str(text(&result)).unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record["name"], "star-rating-basic");
    assert_eq!(record["type"], "component");
    assert_eq!(record["description"], "d");
    assert!(record["install"]
        .as_str()
        .unwrap()
        .contains("\"https://ui.stackzero.co/r/star-rating-basic.json\""));
    assert!(record["content"]
        .as_str()
        .unwrap()
        .ends_with("export function StarRatingBasic() {}"));

    let examples = record["examples"].as_array().unwrap();
    assert_eq!(examples.len(), 1);
    assert_eq!(examples[0]["name"], "ex1");
    assert_eq!(examples[0]["content"], "<StarRatingBasic />");
}

#[tokio::test]
async fn test_category_records_conform_to_schema() {
    let server = server(
        ratings_registry(),
        vec![Category::new(
            "Ratings",
            vec!["face-rating-basic", "star-rating-basic", "upvote-rating-basic"],
        )],
    )
    .await;

    let result = call(&server, "getRatings").await;
    let records: Vec<Value> = serde_json::from_str(text(&result)).unwrap();
    let names: Vec<_> = records.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["face-rating-basic", "star-rating-basic"]);

    let schema = OutputSchema::new().unwrap();
    for record in &records {
        assert!(schema.check(record).is_ok(), "{record}");
    }
    assert!(records[0].get("content").is_none());
}

#[tokio::test]
async fn test_failing_component_does_not_fail_the_category() {
    let registry = ratings_registry().failing_component("star-rating-basic");
    let server = server(
        registry,
        vec![Category::new("Ratings", vec!["star-rating-basic", "face-rating-basic"])],
    )
    .await;

    let result = call(&server, "getRatings").await;
    assert_eq!(result.is_error, Some(false));
    let records: Vec<Value> = serde_json::from_str(text(&result)).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "face-rating-basic");
}

#[tokio::test]
async fn test_catalog_tool_returns_registry_list() {
    let registry = ratings_registry();
    let expected = Value::Array(registry.list_catalog().await.unwrap());
    let server = server(registry, Vec::new()).await;

    let result = call(&server, "getUIComponents").await;
    assert_eq!(result.is_error, Some(false));
    let listed: Value = serde_json::from_str(text(&result)).unwrap();
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn test_malformed_list_entries_are_skipped_not_fatal() {
    let registry = ratings_registry()
        .with_catalog_entry(serde_json::json!({"type": "registry:ui", "description": null}))
        .with_catalog_entry(serde_json::json!({
            "name": "upvote-rating-basic",
            "type": null,
            "description": null
        }))
        .with_example_entry(serde_json::json!({
            "registryDependencies": ["https://ui.stackzero.co/r/star-rating-basic"]
        }));
    let server = server(
        registry,
        vec![Category::new("Ratings", vec!["star-rating-basic", "upvote-rating-basic"])],
    )
    .await;

    let catalog = call(&server, "getUIComponents").await;
    assert_eq!(catalog.is_error, Some(false));
    let listed: Vec<Value> = serde_json::from_str(text(&catalog)).unwrap();
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[2], serde_json::json!({"type": "registry:ui", "description": null}));

    let result = call(&server, "getRatings").await;
    let records: Vec<Value> = serde_json::from_str(text(&result)).unwrap();
    let names: Vec<_> = records.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["star-rating-basic"]);
    assert_eq!(records[0]["examples"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_tools_refetch_the_registry_on_every_call() {
    let registry = ratings_registry();
    let calls = registry.calls();
    let server = server(
        registry,
        vec![Category::new("Ratings", vec!["star-rating-basic"])],
    )
    .await;
    assert_eq!(calls.list_components.load(Ordering::SeqCst), 1);

    call(&server, "getRatings").await;
    call(&server, "getRatings").await;
    assert_eq!(calls.list_components.load(Ordering::SeqCst), 3);
    assert_eq!(calls.list_examples.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_startup_failure_then_limited_mode() {
    let registry = ratings_registry().failing_component_list();
    let config = config_with(vec![Category::new("Ratings", vec!["star-rating-basic"])]);

    let full = McpServer::initialize(Arc::clone(&config), Arc::new(registry.clone())).await;
    assert!(full.is_err());

    let limited = McpServer::limited(config, Arc::new(registry)).unwrap();
    assert_eq!(limited.tool_names(), ["getUIComponents"]);

    let result = call(&limited, "getUIComponents").await;
    assert_eq!(result.is_error, Some(true));
    assert_eq!(text(&result), "Failed to fetch components");

    let err = limited
        .call_tool_by_name("getRatings", serde_json::Map::new())
        .await
        .unwrap_err();
    assert!(err.message.contains("getRatings"));
}

#[tokio::test]
async fn test_missing_component_over_empty_catalog_returns_empty_array() {
    let registry = MockRegistryClient::new();
    let server = server(
        registry,
        vec![Category::new("Ratings", vec!["missing-component"])],
    )
    .await;

    let result = call(&server, "getRatings").await;
    assert_eq!(result.is_error, Some(false));
    assert_eq!(text(&result), "[]");
}

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hikari::catalog::Catalog;
use hikari::llm::GeminiClient;
use hikari::reading::{ReadingService, fallback_reading};
use hikari::selection::SelectionState;

const ENDPOINT: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn complete_selection(catalog: &Catalog) -> SelectionState<'_> {
    let mut selection = SelectionState::new();
    for number in [5, 12, 7, 30] {
        selection.pick(catalog.by_number(number).unwrap());
    }
    selection
}

async fn reading_for(response: ResponseTemplate) -> hikari::reading::ReadingResult {
    let catalog = Catalog::bundled().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;

    let client =
        GeminiClient::new(Some("test-key"), "gemini-2.5-flash").with_base_url(&server.uri());
    let service = ReadingService::new(client);
    let reading = service.request_reading(&complete_selection(&catalog)).await;
    server.verify().await;
    reading
}

#[tokio::test]
async fn server_error_yields_fallback_verbatim() {
    let reading = reading_for(ResponseTemplate::new(500).set_body_string("internal error")).await;

    let fallback = fallback_reading();
    assert_eq!(reading, fallback);
    assert_eq!(reading.summary, "相信您的直覺，色彩是靈魂的語言。");
}

#[tokio::test]
async fn non_json_candidate_text_yields_fallback() {
    let reading = reading_for(ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{"content": {"parts": [{"text": "這不是 JSON"}]}}]
    })))
    .await;
    assert_eq!(reading, fallback_reading());
}

#[tokio::test]
async fn missing_position_yields_fallback() {
    let partial = json!({
        "introduction": "引言",
        "positions": {"1": "一", "2": "二", "3": "三"},
        "summary": "祝福"
    });
    let reading = reading_for(ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{"content": {"parts": [{"text": partial.to_string()}]}}]
    })))
    .await;
    assert_eq!(reading, fallback_reading());
}

#[tokio::test]
async fn empty_candidates_yield_fallback() {
    let reading =
        reading_for(ResponseTemplate::new(200).set_body_json(json!({"candidates": []}))).await;
    assert_eq!(reading, fallback_reading());
}

#[tokio::test]
async fn missing_api_key_yields_fallback_without_request() {
    let catalog = Catalog::bundled().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = GeminiClient::new(None, "gemini-2.5-flash").with_base_url(&server.uri());
    assert!(!client.has_api_key());
    let service = ReadingService::new(client);
    let reading = service.request_reading(&complete_selection(&catalog)).await;

    assert_eq!(reading, fallback_reading());
    server.verify().await;
}

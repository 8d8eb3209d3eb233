use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hikari::catalog::Catalog;
use hikari::llm::GeminiClient;
use hikari::reading::{ReadingFlow, ReadingService, fallback_reading};
use hikari::selection::Slot;

const ENDPOINT: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn reading_payload() -> serde_json::Value {
    json!({
        "introduction": "四個瓶子一起訴說著轉化的故事。",
        "positions": {
            "1": "靈魂瓶帶來黎明的光。",
            "2": "挑戰與禮物在於信任。",
            "3": "當下需要溫柔地傾聽。",
            "4": "未來朝向和平展開。"
        },
        "summary": "願光與妳同在。"
    })
}

#[tokio::test]
async fn four_picks_then_reading_from_gemini() {
    let catalog = Catalog::bundled().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": reading_payload().to_string()}]
                },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut flow = ReadingFlow::new();
    let expected_active = [
        Slot::ChallengeGift,
        Slot::Present,
        Slot::Future,
        Slot::Future,
    ];
    for (number, active) in [5, 12, 7, 30].into_iter().zip(expected_active) {
        flow.pick(catalog.by_number(number).unwrap());
        assert_eq!(flow.selection().active(), active);
    }

    assert!(flow.selection().is_complete());
    assert_eq!(
        flow.selection().get(Slot::Future).map(|b| b.number),
        Some(30)
    );

    let client =
        GeminiClient::new(Some("test-key"), "gemini-2.5-flash").with_base_url(&server.uri());
    let service = ReadingService::new(client);
    let reading = flow.request(&service).await.cloned().unwrap();

    assert_eq!(reading.introduction, "四個瓶子一起訴說著轉化的故事。");
    assert_eq!(reading.positions.iter().count(), 4);
    assert_eq!(reading.position(Slot::Soul), "靈魂瓶帶來黎明的光。");
    assert_eq!(reading.position(Slot::Future), "未來朝向和平展開。");
    assert_ne!(reading, fallback_reading());

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Position 1: Bottle #5"));
    assert!(prompt.contains("Position 4: Bottle #30"));
    assert_eq!(
        body["generationConfig"]["responseMimeType"],
        "application/json"
    );
    server.verify().await;
}

#[tokio::test]
async fn incomplete_selection_never_reaches_the_network() {
    let catalog = Catalog::bundled().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut flow = ReadingFlow::new();
    for number in [5, 12, 7] {
        flow.pick(catalog.by_number(number).unwrap());
    }

    let client =
        GeminiClient::new(Some("test-key"), "gemini-2.5-flash").with_base_url(&server.uri());
    let service = ReadingService::new(client);
    assert!(flow.request(&service).await.is_none());
    server.verify().await;
}

//! End-to-end cycle tests driving [`CampaignRunner`] over a mock driver.

mod test_utils;

use fanfare_campaign::{
    CampaignEvent, CampaignRunner, CampaignState, ContentClient, CyclePhase, Platform,
};
use fanfare_error::GeminiErrorKind;
use serde_json::{json, Value};
use test_utils::{MockDriver, MockImage, MockJson};
use tokio::sync::mpsc;
use tokio::time::{timeout, Duration};

fn two_item_payload() -> Value {
    json!([
        {
            "platform": "YouTube",
            "title": "We Built a Sauna in a Van",
            "description": "Full build, budget breakdown, and the first steam test.",
            "hashtags": ["#vanlife", "#sauna"],
            "imagePrompt": "A cedar-lined van interior glowing warm at dusk"
        },
        {
            "platform": "Instagram",
            "title": "Van sauna reveal",
            "description": "Sweat anywhere.",
            "hashtags": ["#vanbuild"],
            "imagePrompt": "Steam rolling out of a van door in a snowy forest"
        }
    ])
}

async fn drive_to_settled(
    state: &mut CampaignState,
    events: &mut mpsc::Receiver<CampaignEvent>,
) {
    while !state.is_settled() {
        let event = timeout(Duration::from_secs(2), events.recv())
            .await
            .expect("timed out waiting for campaign event")
            .expect("event channel closed");
        state.apply_event(event);
    }
}

#[tokio::test]
async fn full_cycle_produces_copy_and_thumbnails() {
    let mock = MockDriver::new(MockJson::Success(two_item_payload()), MockImage::Success);
    let (runner, mut events) = CampaignRunner::new(ContentClient::new(mock.clone()));

    let mut state = CampaignState::default();
    let platforms = vec![Platform::YouTube, Platform::Instagram];
    state
        .ensure_can_start("van sauna build", &platforms, true)
        .unwrap();
    state.begin_cycle();
    runner.spawn_cycle("van sauna build".to_string(), platforms);

    // Text always lands before any image completion.
    let first = timeout(Duration::from_secs(2), events.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(first, CampaignEvent::TextReady(_)));
    state.apply_event(first);
    assert_eq!(*state.phase(), CyclePhase::TextReady);

    drive_to_settled(&mut state, &mut events).await;

    assert_eq!(state.results().len(), 2);
    for entry in state.results().values() {
        assert!(!entry.image_loading());
        assert!(entry.image_error().is_none());
        let image = entry.image().as_deref().unwrap();
        assert!(image.starts_with("data:image/png;base64,"));
    }
    assert_eq!(mock.json_calls(), 1);
    assert_eq!(mock.image_calls(), 2);
}

#[tokio::test]
async fn text_failure_fails_the_cycle_without_image_calls() {
    let mock = MockDriver::new(
        MockJson::Error(GeminiErrorKind::HttpStatus {
            status_code: 500,
            message: "Internal error".to_string(),
        }),
        MockImage::Success,
    );
    let (runner, mut events) = CampaignRunner::new(ContentClient::new(mock.clone()));

    let mut state = CampaignState::default();
    state.begin_cycle();
    runner.spawn_cycle("van sauna build".to_string(), vec![Platform::YouTube]);

    drive_to_settled(&mut state, &mut events).await;

    match state.phase() {
        CyclePhase::Failed(message) => assert!(message.contains("500")),
        other => panic!("expected failed phase, got {other:?}"),
    }
    assert!(state.results().is_empty());
    assert_eq!(mock.image_calls(), 0);
}

#[tokio::test]
async fn one_failed_thumbnail_leaves_the_others_intact() {
    let mock = MockDriver::new(
        MockJson::Success(two_item_payload()),
        MockImage::FailWhenPromptContains("snowy forest".to_string()),
    );
    let (runner, mut events) = CampaignRunner::new(ContentClient::new(mock.clone()));

    let mut state = CampaignState::default();
    state.begin_cycle();
    runner.spawn_cycle(
        "van sauna build".to_string(),
        vec![Platform::YouTube, Platform::Instagram],
    );

    drive_to_settled(&mut state, &mut events).await;

    let youtube = state.get(Platform::YouTube).unwrap();
    assert!(youtube.image().is_some());
    assert!(youtube.image_error().is_none());

    let instagram = state.get(Platform::Instagram).unwrap();
    assert!(instagram.image().is_none());
    assert!(instagram
        .image_error()
        .as_deref()
        .unwrap()
        .contains("No image generated"));
}

#[tokio::test]
async fn regenerate_replaces_one_thumbnail() {
    let mock = MockDriver::new(MockJson::Success(two_item_payload()), MockImage::Success);
    let (runner, mut events) = CampaignRunner::new(ContentClient::new(mock.clone()));

    let mut state = CampaignState::default();
    state.begin_cycle();
    runner.spawn_cycle(
        "van sauna build".to_string(),
        vec![Platform::YouTube, Platform::Instagram],
    );
    drive_to_settled(&mut state, &mut events).await;
    assert_eq!(mock.image_calls(), 2);

    let prompt = state
        .get(Platform::YouTube)
        .unwrap()
        .content()
        .image_prompt_or_title()
        .to_string();
    let generation = state.begin_regenerate(Platform::YouTube).unwrap();
    assert!(state.get(Platform::YouTube).unwrap().image_loading());
    runner.spawn_regenerate(Platform::YouTube, prompt, generation);

    drive_to_settled(&mut state, &mut events).await;

    let entry = state.get(Platform::YouTube).unwrap();
    assert!(!entry.image_loading());
    assert!(entry.image().is_some());
    assert_eq!(*entry.generation(), 1);
    assert_eq!(mock.image_calls(), 3);

    // The other platform never re-ran.
    assert_eq!(*state.get(Platform::Instagram).unwrap().generation(), 0);
}

#[tokio::test]
async fn empty_payload_settles_without_image_work() {
    let mock = MockDriver::new(MockJson::Success(json!([])), MockImage::Success);
    let (runner, mut events) = CampaignRunner::new(ContentClient::new(mock.clone()));

    let mut state = CampaignState::default();
    state.begin_cycle();
    runner.spawn_cycle("van sauna build".to_string(), vec![Platform::YouTube]);

    drive_to_settled(&mut state, &mut events).await;

    assert_eq!(*state.phase(), CyclePhase::TextReady);
    assert!(state.results().is_empty());
    assert_eq!(mock.image_calls(), 0);
}

#[tokio::test]
async fn missing_image_prompt_falls_back_to_title() {
    let payload = json!([
        {
            "platform": "TikTok",
            "title": "Van sauna speedrun",
            "description": "60 seconds of cedar.",
            "hashtags": ["#sauna"]
        }
    ]);
    let mock = MockDriver::new(MockJson::Success(payload), MockImage::Success);
    let (runner, mut events) = CampaignRunner::new(ContentClient::new(mock.clone()));

    let mut state = CampaignState::default();
    state.begin_cycle();
    runner.spawn_cycle("van sauna build".to_string(), vec![Platform::TikTok]);

    drive_to_settled(&mut state, &mut events).await;

    let prompts = mock.image_prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].starts_with("Van sauna speedrun"));
    assert!(prompts[0].contains("4K resolution"));
}

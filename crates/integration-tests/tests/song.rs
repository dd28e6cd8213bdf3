mod harness;

use std::sync::Arc;

use bliss_actions::SongActionResult;
use bliss_audio::{DataUri, parse_header};
use bliss_card::{CardState, InMemoryResourceStore, ObjectUrl};
use harness::config::ConfigBuilder;
use harness::mock_gemini::MockGemini;
use harness::server::TestServer;
use serde_json::json;

#[tokio::test]
async fn song_is_returned_as_wav_data_uri() {
    let mock = MockGemini::start().await.unwrap();
    let server = TestServer::start(ConfigBuilder::new(&mock.base_url()).build()).await.unwrap();

    let result = server.request_song("Sam").await;

    let song_url = result["songUrl"].as_str().unwrap();
    let uri = DataUri::parse(song_url).unwrap();
    assert_eq!(uri.mime_type, "audio/wav");

    let header = parse_header(&uri.data).unwrap();
    assert_eq!(header.channels, 1);
    assert_eq!(header.sample_rate, 24_000);
    assert_eq!(header.bits_per_sample, 16);
    assert_eq!(header.data_len, 8);
    assert_eq!(&uri.data[44..], &[0, 0, 1, 0, 2, 0, 3, 0]);
    assert_eq!(mock.speech_count(), 1);
}

#[tokio::test]
async fn lyric_and_voice_reach_the_model() {
    let mock = MockGemini::start().await.unwrap();
    let config = ConfigBuilder::new(&mock.base_url()).with_voice("Puck").build();
    let server = TestServer::start(config).await.unwrap();

    server.request_song("Sam").await;

    let (action, body) = mock.last_request().unwrap();
    assert_eq!(action, "gemini-2.5-flash-preview-tts:generateContent");
    assert_eq!(body.pointer("/generationConfig/responseModalities/0").unwrap(), "AUDIO");
    assert_eq!(
        body.pointer("/generationConfig/speechConfig/voiceConfig/prebuiltVoiceConfig/voiceName")
            .unwrap(),
        "Puck"
    );

    let lyric = body.pointer("/contents/0/parts/0/text").unwrap().as_str().unwrap();
    assert!(lyric.contains("Happy birthday dear Sam."));
}

#[tokio::test]
async fn empty_name_makes_no_model_call() {
    let mock = MockGemini::start().await.unwrap();
    let server = TestServer::start(ConfigBuilder::new(&mock.base_url()).build()).await.unwrap();

    let result = server.request_song("").await;

    assert_eq!(result, json!({ "error": "Name is required to generate a song." }));
    assert_eq!(mock.speech_count(), 0);
}

#[tokio::test]
async fn missing_media_is_reported() {
    let mock = MockGemini::start_without_media().await.unwrap();
    let server = TestServer::start(ConfigBuilder::new(&mock.base_url()).build()).await.unwrap();

    let result = server.request_song("Sam").await;

    let error = result["error"].as_str().unwrap();
    assert!(error.starts_with("Failed to generate the birthday song"));
    assert!(error.contains("TTS media generation failed."));
    assert!(result.get("songUrl").is_none());
}

#[tokio::test]
async fn card_plays_song_from_server() {
    let mock = MockGemini::start().await.unwrap();
    let server = TestServer::start(ConfigBuilder::new(&mock.base_url()).build()).await.unwrap();
    let store = Arc::new(InMemoryResourceStore::new());
    let mut card = CardState::new(store.clone());

    for _ in 0..2 {
        let name = card.begin_song().unwrap();
        let result: SongActionResult = serde_json::from_value(server.request_song(&name).await).unwrap();
        assert!(card.finish_song(&result).is_none());
    }

    let url = ObjectUrl::new(card.song_url().unwrap());
    assert_eq!(store.live_count(), 1);
    assert_eq!(store.get(&url).unwrap().mime_type, "audio/wav");
    assert_eq!(mock.speech_count(), 2);

    card.teardown();
    assert_eq!(store.live_count(), 0);
}

#[tokio::test]
async fn malformed_song_body_is_answered_with_error_data() {
    let mock = MockGemini::start().await.unwrap();
    let server = TestServer::start(ConfigBuilder::new(&mock.base_url()).build()).await.unwrap();

    let resp = server
        .client()
        .post(server.url("/api/song"))
        .header("Content-Type", "application/json")
        .body(r#"{"name": 5}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let result: serde_json::Value = resp.json().await.unwrap();
    assert!(result["error"].as_str().unwrap().starts_with("Could not read the song request"));
    assert_eq!(mock.speech_count(), 0);
}

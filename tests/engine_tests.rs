// Integration tests for the recognition engine implementations
//
// These tests verify capability detection, the scripted replay engine's
// lifecycle, and the result batch windowing rules.

use std::time::Duration;
use voice_session::{
    recognition, EngineConfig, EngineKind, RecognitionEngine, RecognitionEvent, ResultBatch,
    ResultEntry, ScriptStep, ScriptedEngine,
};

#[test]
fn test_detect_none_kind_yields_no_engine() {
    let detected = recognition::detect(EngineKind::None, EngineConfig::default());
    assert!(detected.is_none());
}

#[test]
fn test_detect_bridge_kind_yields_host_handle() {
    let detected =
        recognition::detect(EngineKind::Bridge, EngineConfig::default()).expect("engine");
    assert_eq!(detected.engine.name(), "bridge");
    assert!(detected.bridge.is_some(), "Bridge detection must hand out the host side");
}

#[test]
fn test_engine_config_defaults() {
    let config = EngineConfig::default();
    assert_eq!(config.locale, "en-US");
    assert!(config.continuous);
    assert!(config.interim_results);
}

#[test]
fn test_result_batch_windowing() {
    let batch = ResultBatch::new(
        1,
        vec![
            ResultEntry::finalized("already seen"),
            ResultEntry::interim("new text"),
        ],
    );

    let new_entries = batch.new_entries();
    assert_eq!(new_entries.len(), 1);
    assert_eq!(new_entries[0].top_transcript(), Some("new text"));

    // The engine owns the resume index; out of range means nothing new
    let stale = ResultBatch::new(9, vec![ResultEntry::finalized("x")]);
    assert!(stale.new_entries().is_empty());
}

#[test]
fn test_result_entry_top_transcript() {
    let entry = ResultEntry {
        is_final: true,
        alternatives: vec![
            voice_session::recognition::Alternative::new("best guess"),
            voice_session::recognition::Alternative::new("worse guess"),
        ],
    };
    assert_eq!(entry.top_transcript(), Some("best guess"));

    let empty = ResultEntry {
        is_final: false,
        alternatives: vec![],
    };
    assert_eq!(empty.top_transcript(), None);
}

#[tokio::test]
async fn test_scripted_engine_plays_script_and_ends() {
    let script = vec![
        ScriptStep::new(
            Duration::from_millis(10),
            RecognitionEvent::Result(ResultBatch::new(0, vec![ResultEntry::interim("hel")])),
        ),
        ScriptStep::new(
            Duration::from_millis(10),
            RecognitionEvent::Result(ResultBatch::new(0, vec![ResultEntry::finalized("hello")])),
        ),
    ];

    let mut engine = ScriptedEngine::new(EngineConfig::default(), script);
    let mut events = engine.take_events().expect("first take yields the stream");
    assert!(engine.take_events().is_none(), "Stream is claimed exactly once");

    engine.start().await.unwrap();

    assert!(matches!(events.recv().await, Some(RecognitionEvent::Started)));

    let mut interim_seen = false;
    let mut final_seen = false;
    loop {
        match events.recv().await {
            Some(RecognitionEvent::Result(batch)) => {
                for entry in batch.new_entries() {
                    if entry.is_final {
                        final_seen = true;
                    } else {
                        interim_seen = true;
                    }
                }
            }
            Some(RecognitionEvent::Ended) => break,
            other => panic!("Unexpected event: {:?}", other),
        }
    }

    assert!(interim_seen);
    assert!(final_seen);
}

#[tokio::test]
async fn test_scripted_engine_stop_interrupts_script() {
    let script = vec![ScriptStep::new(
        Duration::from_secs(30),
        RecognitionEvent::Result(ResultBatch::new(0, vec![ResultEntry::interim("never")])),
    )];

    let mut engine = ScriptedEngine::new(EngineConfig::default(), script);
    let mut events = engine.take_events().unwrap();

    engine.start().await.unwrap();
    assert!(matches!(events.recv().await, Some(RecognitionEvent::Started)));

    engine.stop().await.unwrap();

    // The long step is skipped once stopped; Ended still arrives promptly
    let ended = tokio::time::timeout(Duration::from_secs(1), events.recv()).await;
    assert!(matches!(ended, Ok(Some(RecognitionEvent::Ended))));
}

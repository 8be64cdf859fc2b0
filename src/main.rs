use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use voice_session::{
    recognition, CannedReplies, Config, ConversationStore, EngineConfig, EngineKind, KeyValueStorage,
    MessageRole, ResponseSimulator, ThemeStore, VoiceSessionController,
};

#[derive(Debug, Parser)]
#[command(name = "voice-session", about = "Voice conversation demo")]
struct Args {
    /// Path to the configuration file (without extension)
    #[arg(long, default_value = "config/voice-session")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("Voice Session v0.1.0");
    info!("Engine: {:?} ({})", cfg.engine.kind, cfg.engine.locale);

    let storage = Arc::new(KeyValueStorage::new(&cfg.storage.path));
    let theme = ThemeStore::new(Arc::clone(&storage));
    info!(
        "Theme preference: {}",
        if theme.is_dark() { "dark" } else { "light" }
    );

    let store = Arc::new(ConversationStore::new());
    let simulator = ResponseSimulator::new(
        Arc::clone(&store),
        Arc::new(CannedReplies::new()),
        Duration::from_millis(cfg.responder.delay_ms),
    );

    let engine_config = EngineConfig {
        locale: cfg.engine.locale.clone(),
        continuous: cfg.engine.continuous,
        interim_results: cfg.engine.interim_results,
    };

    if cfg.engine.kind == EngineKind::Bridge {
        warn!("Bridge engine configured but no host runtime is attached to this demo");
        return Ok(());
    }

    let engine = recognition::detect(cfg.engine.kind, engine_config).map(|d| d.engine);
    let controller = VoiceSessionController::new(engine, Arc::clone(&store), simulator);

    if !controller.is_supported() {
        info!("Speech recognition unavailable; nothing to demo");
        return Ok(());
    }

    controller.start_listening().await;

    // Let the scripted conversation play out, then give the last simulated
    // reply time to land.
    tokio::time::sleep(Duration::from_secs(2)).await;
    controller.stop_listening().await;
    tokio::time::sleep(Duration::from_millis(cfg.responder.delay_ms + 200)).await;

    for message in store.messages() {
        let label = match message.role {
            MessageRole::User => "you",
            MessageRole::Ai => "ai",
        };
        info!("[{}] {}", label, message.content);
    }

    controller.shutdown().await;

    Ok(())
}

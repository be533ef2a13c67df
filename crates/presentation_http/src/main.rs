//! LinguaLog HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use ai_core::OpenAiClient;
use ai_speech::ElevenLabsProvider;
use application::{AnalysisService, PracticeService, ScenarioService};
use application::ports::{AudioStore, GenerationPort, NotebookStore, SpeechPort};
use infrastructure::{
    AppConfig, FsAudioStore, GenerationAdapter, JsonNotebookStore, SpeechAdapter,
};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {e}");
        let mut config = AppConfig::default();
        config.overlay_secrets(|name| std::env::var(name).ok());
        config
    });

    init_tracing(&config);

    info!("LinguaLog v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = config.validate() {
        warn!("Invalid configuration ({e})");
    }
    if config.generation.api_key.as_deref().is_none_or(str::is_empty) {
        warn!("OPENAI_API_KEY is not set; analysis requests will fail until it is provided");
    }
    if config.speech.api_key.as_deref().is_none_or(str::is_empty) {
        warn!("ELEVENLABS_API_KEY is not set; speech requests will fail until it is provided");
    }

    // Generation side: OpenAI chat completions behind the generation port
    let generation: Arc<dyn GenerationPort> = Arc::new(GenerationAdapter::new(Arc::new(
        OpenAiClient::new(config.generation.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize generation client: {e}"))?,
    )));

    // Speech side: ElevenLabs STT/TTS behind the speech port
    let speech: Arc<dyn SpeechPort> = Arc::new(SpeechAdapter::new(Arc::new(
        ElevenLabsProvider::new(config.speech.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize speech provider: {e}"))?,
    )));

    let store: Arc<dyn NotebookStore> =
        Arc::new(JsonNotebookStore::new(config.storage.notes_file.clone()));
    let audio_store: Arc<dyn AudioStore> = Arc::new(FsAudioStore::new(
        config.storage.audio_dir.clone(),
        config.storage.audio_public_prefix.clone(),
    ));

    let practice = PracticeService::new(
        AnalysisService::new(Arc::clone(&generation)),
        Arc::clone(&speech),
        Arc::clone(&store),
        audio_store,
    );
    let scenario = ScenarioService::new(Arc::clone(&generation));

    let state = AppState {
        practice: Arc::new(practice),
        scenario: Arc::new(scenario),
        store,
        config: Arc::new(config.clone()),
    };

    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lingualog_server=debug,presentation_http=debug,tower_http=info".into());

    let registry = tracing_subscriber::registry().with(filter);

    if config.server.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if !config.server.cors_enabled {
        return CorsLayer::new();
    }

    if config.server.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    }
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}

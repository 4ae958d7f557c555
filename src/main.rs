use guess_core::RoundConfig;
use tracing_subscriber::EnvFilter;

mod console;
mod input;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(std::env::args().nth(1));
    tracing::debug!(?config, "Round configuration");

    if let Err(e) = console::play(config).await {
        tracing::error!(error = %e, "Console round aborted");
    }
}

fn load_config(path: Option<String>) -> RoundConfig {
    let Some(path) = path else {
        return RoundConfig::default();
    };

    match RoundConfig::load_from_file(&path) {
        Ok(config) => {
            tracing::info!(path = %path, "Loaded round config");
            config
        }
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "Falling back to default round config");
            RoundConfig::default()
        }
    }
}

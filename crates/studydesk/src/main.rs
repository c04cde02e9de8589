//! StudyDesk server binary.
//!
//! Start the server with:
//! ```bash
//! GOOGLE_API_KEY=xxx cargo run -p studydesk
//! ```

mod cli;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use studydesk_api::{serve, ApiConfig, AppState};
use studydesk_suggest::{GeminiClient, SuggestConfig, SuggestionGateway, GOOGLE_API_KEY_ENV};

use cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env.local first, then .env; already-set variables win
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    fmt().with_env_filter(filter).with_target(false).init();

    let suggest = SuggestConfig::from_env();
    if !suggest.has_api_key() {
        tracing::warn!(
            "{} is not set; AI endpoints will report provider errors",
            GOOGLE_API_KEY_ENV
        );
    }
    let gateway = SuggestionGateway::new(Arc::new(GeminiClient::new(&suggest)), suggest.model.clone());

    let config = ApiConfig::new(cli.host, cli.port).with_cors_origins(cli.cors_origins);
    tracing::info!(model = %gateway.model(), "starting StudyDesk");

    serve(config.clone(), AppState::new(config, gateway)).await?;
    Ok(())
}

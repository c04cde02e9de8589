//! Command-line interface definition using clap.

use clap::Parser;

use studydesk_api::config::DEFAULT_PORT;

/// StudyDesk - tasks, courses, and feedback with AI suggestions
#[derive(Parser, Debug)]
#[command(name = "studydesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Host to bind to
    #[arg(long, env = "STUDYDESK_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "STUDYDESK_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Allowed CORS origin (repeatable, "*" for any)
    #[arg(long = "cors-origin", default_value = "*")]
    pub cors_origins: Vec<String>,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter derived from verbosity, used when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "studydesk=info,studydesk_api=info,studydesk_store=info,studydesk_suggest=info,tower_http=info",
            1 => "studydesk=debug,studydesk_api=debug,studydesk_store=debug,studydesk_suggest=debug,tower_http=debug",
            _ => "trace",
        }
    }
}

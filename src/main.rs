//! resilient-fetch
//!
//! Fetches a URL over HTTP, retrying failed requests with a fixed delay.
//!
//! ```text
//! resilient-fetch https://example.com/users/1 --max-attempts 3 --delay-ms 1500
//! resilient-fetch https://example.com/users/1 --config fetch.toml --strict
//! ```
//!
//! Transport errors and non-2xx responses count as failed attempts. The body
//! of a successful response goes to stdout; logs go to stderr.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use url::Url;

use resilient_task::config::loader::{load_task_file, resolve_task_file, TaskFile};
use resilient_task::observability::logging::init_logging;
use resilient_task::{ResilientTask, TaskConfig, TaskOptions};

#[derive(Parser)]
#[command(name = "resilient-fetch")]
#[command(about = "Fetch a URL with bounded fixed-delay retries", long_about = None)]
struct Cli {
    /// URL to fetch.
    url: Url,

    /// Task name used in log messages.
    #[arg(short, long)]
    name: Option<String>,

    /// Maximum number of attempts.
    #[arg(short = 'a', long)]
    max_attempts: Option<u32>,

    /// Delay between attempts in milliseconds.
    #[arg(short, long)]
    delay_ms: Option<u64>,

    /// Suppress per-attempt warnings.
    #[arg(short, long, overrides_with = "no_silent")]
    silent: bool,

    /// Log per-attempt warnings even if the task file sets `silent`.
    #[arg(long, overrides_with = "silent")]
    no_silent: bool,

    /// TOML task file; command-line flags take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reject zero attempts and blank names instead of defaulting.
    #[arg(long)]
    strict: bool,

    /// Print a JSON summary instead of the response body.
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "resilient_task=info,resilient_fetch=info")]
    log_level: String,
}

#[derive(Serialize)]
struct FetchSummary<'a> {
    task: &'a str,
    url: &'a str,
    attempts: u32,
    bytes: usize,
}

impl Cli {
    /// Values given on the command line, as an overlay for the task file.
    fn overrides(&self) -> TaskFile {
        let silent = match (self.silent, self.no_silent) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        TaskFile {
            name: self.name.clone(),
            options: TaskOptions {
                max_attempts: self.max_attempts,
                delay_ms: self.delay_ms,
                silent,
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let file = match &cli.config {
        Some(path) => load_task_file(path, false)?,
        None => TaskFile::default(),
    };

    let resolved = resolve_task_file(file, cli.overrides(), cli.strict)?;
    let name = resolved.name.unwrap_or_default();
    let config = TaskConfig::from_options(resolved.options);

    tracing::info!(
        url = %cli.url,
        max_attempts = config.max_attempts(),
        delay_ms = config.delay_ms(),
        silent = config.silent(),
        "Configuration loaded"
    );

    let client = reqwest::Client::new();
    let url = cli.url.clone();
    let print_body = !cli.json;

    let task = ResilientTask::new(name, config, move || {
        let client = client.clone();
        let url = url.clone();
        async move {
            client
                .get(url)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await
        }
    })
    .on_success(move |body: &String| {
        if print_body {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(body.as_bytes())?;
            stdout.flush()?;
        }
        Ok(())
    });

    let body = task.start().await?;

    if cli.json {
        let summary = FetchSummary {
            task: task.name(),
            url: cli.url.as_str(),
            attempts: task.failed_attempts() + 1,
            bytes: body.len(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

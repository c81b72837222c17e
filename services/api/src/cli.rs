use crate::adapter::{parse_instant, read_payload, score_json, AdapterOutput};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use blood_priority::config::{AppConfig, TelemetryConfig};
use blood_priority::error::AppError;
use blood_priority::priority::PriorityEngine;
use blood_priority::telemetry;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "blood-priority",
    about = "Score blood-unit requests for urgency and escalation",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single JSON request and print the result as JSON
    Score(ScoreArgs),
    /// Run the reference scenarios and print their classification traces
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Request JSON object, or `-` to read it from stdin
    pub(crate) input: Option<String>,
    /// Evaluation instant (RFC 3339). Defaults to now.
    #[arg(long)]
    pub(crate) at: Option<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => {
            init_cli_telemetry();
            println!("{}", run_score(args).to_json());
            Ok(())
        }
        Command::Demo(args) => {
            init_cli_telemetry();
            run_demo(args);
            Ok(())
        }
    }
}

/// Never fails: boundary problems become `{"error": ...}` output.
pub(crate) fn run_score(args: ScoreArgs) -> AdapterOutput {
    let ScoreArgs { input, at } = args;

    let evaluated_at = match at.as_deref().map(parse_instant).transpose() {
        Ok(instant) => instant,
        Err(error) => return AdapterOutput::Failed { error },
    };

    let payload = match read_payload(input, std::io::stdin()) {
        Ok(payload) => payload,
        Err(error) => return AdapterOutput::Failed { error },
    };

    score_json(&PriorityEngine::default(), payload.as_deref(), evaluated_at)
}

fn init_cli_telemetry() {
    let config = AppConfig::load()
        .map(|config| config.telemetry)
        .unwrap_or_else(|_| TelemetryConfig::default());
    if let Err(err) = telemetry::init(&config) {
        eprintln!("telemetry disabled: {err}");
    }
}

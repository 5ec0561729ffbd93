use crate::demo::{run_demo, DemoArgs};
use crate::report::{run_analyze, run_batch, run_rules, AnalyzeArgs, BatchArgs, RulesArgs};
use crate::server;
use case_intel::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Case Intel",
    about = "Analyze incident reports and serve the case analysis engine over HTTP",
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
    /// Analyze a single incident report from an argument, a file, or stdin
    Analyze(AnalyzeArgs),
    /// Analyze every report in an intake CSV export
    Batch(BatchArgs),
    /// Show the active rule set or export it as JSON
    Rules(RulesArgs),
    /// Run sample incident reports through the engine
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

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analyze(args),
        Command::Batch(args) => run_batch(args),
        Command::Rules(args) => run_rules(args),
        Command::Demo(args) => run_demo(args),
    }
}

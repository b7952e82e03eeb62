use crate::report::{run_alerts_report, AlertsReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use gescop::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "GESCOP",
    about = "Track fleet, staff, and provider document expirations",
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
    /// Evaluate document expirations from backend CSV exports
    Alerts {
        #[command(subcommand)]
        command: AlertsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum AlertsCommand {
    /// Print current alerts and a status summary per document category
    Report(AlertsReportArgs),
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
        Command::Alerts {
            command: AlertsCommand::Report(args),
        } => run_alerts_report(args),
    }
}

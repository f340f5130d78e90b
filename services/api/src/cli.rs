use crate::assess::{run_assess, run_tools, AssessArgs, ToolsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use credit_risk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Credit Risk Underwriting Service",
    about = "Run the credit risk underwriting service and its assessment tools from the command line",
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
    /// Assess an applicant profile and print the underwriting report
    Assess(AssessArgs),
    /// List the registered underwriting tools and their parameters
    Tools(ToolsArgs),
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
        Command::Assess(args) => run_assess(args),
        Command::Tools(args) => run_tools(args),
    }
}

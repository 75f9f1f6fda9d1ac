use crate::demo::{
    run_demo, run_ecri_evaluate, run_street_rate_recommend, DemoArgs, EcriEvaluateArgs,
    StreetRateRecommendArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use storeops_pricing::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "StoreOps Pricing",
    about = "Run self-storage rate increase and street-rate reviews from the command line",
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
    /// Existing customer rate increase reviews
    Ecri {
        #[command(subcommand)]
        command: EcriCommand,
    },
    /// Vacant unit street-rate reviews
    StreetRate {
        #[command(subcommand)]
        command: StreetRateCommand,
    },
    /// Walk through both engines using generated facility data
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum EcriCommand {
    /// Tier a tenant roster CSV and print recommended rents
    Evaluate(EcriEvaluateArgs),
}

#[derive(Subcommand, Debug)]
enum StreetRateCommand {
    /// Price unit groups from a JSON file and report hierarchy violations
    Recommend(StreetRateRecommendArgs),
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
        Command::Ecri {
            command: EcriCommand::Evaluate(args),
        } => run_ecri_evaluate(args),
        Command::StreetRate {
            command: StreetRateCommand::Recommend(args),
        } => run_street_rate_recommend(args),
        Command::Demo(args) => run_demo(args),
    }
}

use crate::demo::{
    run_batch, run_demo, run_ensemble, run_single, BatchArgs, DemoArgs, EnsembleArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use health_risk::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Health Risk Service",
    about = "Score diabetes, heart-disease and mental-health risk from the command line or over HTTP",
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
    /// Diabetes risk from pregnancies, glucose, bloodPressure, skinThickness,
    /// insulin, bmi, diabetesPedigreeFunction, age
    Diabetes(PositionalArgs),
    /// Heart-disease risk from age, sex, chestPainType, restingBP, cholesterol,
    /// fastingBS, restingECG, maxHR, exerciseAngina, oldpeak, stSlope
    Heart(PositionalArgs),
    /// Mental-health screening from 9 PHQ-9, 7 GAD-7, 10 PSS-10 and 5 WHO-5 answers
    Mental(PositionalArgs),
    /// Ensemble diabetes verdict from the eight dataset features
    Ensemble(EnsembleArgs),
    /// Score every row of a CSV file
    Batch(BatchArgs),
    /// Run the published scenarios end to end
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
    /// JSON model registry for the ensemble (defaults to the built-in models)
    #[arg(long)]
    pub(crate) registry: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct PositionalArgs {
    /// Input values in the documented order
    #[arg(allow_hyphen_values = true)]
    pub(crate) values: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Domain {
    Diabetes,
    Heart,
    Mental,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Diabetes(args) => run_single(Domain::Diabetes, &args.values),
        Command::Heart(args) => run_single(Domain::Heart, &args.values),
        Command::Mental(args) => run_single(Domain::Mental, &args.values),
        Command::Ensemble(args) => run_ensemble(args),
        Command::Batch(args) => run_batch(args),
        Command::Demo(args) => run_demo(args),
    }
}

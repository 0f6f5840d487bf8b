use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(
    name = "mongo-init",
    about = "Create the application user and collection on a fresh MongoDB server",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<commands::Commands>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        // No subcommand: behave like the init hook and bootstrap from env.
        None => commands::run::execute(commands::run::RunArgs::default()).await,
        Some(commands::Commands::Run(args)) => commands::run::execute(args).await,
        Some(commands::Commands::Verify(args)) => commands::verify::execute(args).await,
        Some(commands::Commands::ShowConfig(args)) => commands::show_config::execute(args).await,
    }
}

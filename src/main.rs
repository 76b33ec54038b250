use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use hr_window::OutputFormat;
use hr_window::commands;
use hr_window::commands::fetch::FetchOptions;
use hr_window::config;
use hr_window::utils::logger;

#[derive(Parser)]
#[command(name = "hrw")]
#[command(about = "Pick a time window and fetch heart-rate data for it")]
#[command(version)]
struct Cli {
    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch heart-rate data for a time window
    Fetch {
        #[arg(long, help = "Start time (H[:M[:S]], overflow cascades)")]
        start: String,
        #[arg(long, help = "End time (H[:M[:S]])")]
        end: Option<String>,
        #[arg(long, help = "Set end to start plus this many minutes")]
        duration: Option<u32>,
        #[arg(long, help = "Date (YYYY-MM-DD), defaults to today")]
        date: Option<String>,
        #[arg(long, help = "Print the request without sending it")]
        dry_run: bool,
        #[arg(long, help = "Include the sample dataset in text output")]
        dataset: bool,
    },
    /// Edit a time window interactively, one command per line
    Session,
    /// Get the authorization URL for the heart-rate service
    Auth,
    /// Show configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let config = config::load()?;

    match cli.command {
        Commands::Fetch {
            start,
            end,
            duration,
            date,
            dry_run,
            dataset,
        } => {
            let options = FetchOptions {
                start,
                end,
                duration,
                date,
                dry_run,
                show_dataset: dataset,
            };
            commands::fetch::fetch(&config, options, cli.format)?;
        }
        Commands::Session => {
            commands::session::session(&config, cli.format)?;
        }
        Commands::Auth => {
            commands::auth::auth(&config, cli.format)?;
        }
        Commands::Config(args) => match &args.action {
            ConfigAction::List => commands::config::list(&config, cli.format)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
    }

    Ok(())
}

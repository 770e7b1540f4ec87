//! hellbot CLI binary.

use clap::Parser;
use hellbot::{BotCommand, Hellbot, HellbotConfig, init_logging};

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    let config = match &cli.config {
        Some(path) => HellbotConfig::from_file(path)?,
        None => HellbotConfig::load()?,
    };
    init_logging(config.logging(), cli.verbose)?;

    let bot = Hellbot::from_config(config)?;

    match cli.command {
        Commands::Orders { user } => run_command(&bot, &user, BotCommand::Orders).await?,
        Commands::Inspire { user } => run_command(&bot, &user, BotCommand::Inspire).await?,
        Commands::CheckApi => {
            let status = bot.client().health_check().await?;
            println!("{} answered {}", bot.config().api().endpoint(), status);
            if status != 200 {
                return Err(format!("API health check failed with status {}", status).into());
            }
        }
        Commands::Sweep => {
            let swept = bot.coordinator().sweep().await?;
            println!("Deactivated {} expired orders", swept);
        }
    }

    Ok(())
}

async fn run_command(
    bot: &Hellbot,
    user: &str,
    command: BotCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let handler = bot.command_handler()?;
    match handler.handle(user, command).await {
        Ok(replies) => {
            for reply in replies {
                println!("{}", reply);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", handler.reply_for_error(&err));
            Err(err.into())
        }
    }
}

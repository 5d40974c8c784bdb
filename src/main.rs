use std::time::Duration;

use clap::Parser;

use sequoia_grade::cli::{AiCommands, Cli, Commands};
use sequoia_grade::config::AiConfig;
use sequoia_grade::review::ReviewOptions;
use sequoia_grade::{ai, grade, logging, review, session, stats};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = logging::init_tracing(cli.verbose, cli.log_json) {
        eprintln!("warning: logging disabled: {err}");
    }

    let result = match cli.command {
        Commands::Grade { session, json } => grade::run(&session, json),
        Commands::Review {
            session,
            student,
            ai,
            seed,
            timeout,
            model,
            json,
        } => {
            let options = ReviewOptions {
                student,
                ai,
                seed,
                timeout: timeout.map(Duration::from_secs),
                model,
                json,
            };
            review::run(&session, options, AiConfig::from_env()).await
        }
        Commands::Stats { session, json } => stats::run(&session, json),
        Commands::Presets { scale, json } => {
            if json {
                session::print_presets_json(scale)
            } else {
                session::print_presets(scale);
                Ok(())
            }
        }
        Commands::Ai { command } => match command {
            AiCommands::Status => ai::run_status(&AiConfig::from_env()),
            AiCommands::Polish { text } => ai::run_polish(text),
        },
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use train_roster::prompt::Prompter;
use train_roster::{TrainRecord, commands, config};

/// Manage the train roster, asking for anything left off the command line.
#[derive(Parser)]
#[command(name = "trains-prompt", version)]
struct Cli {
    /// TOML file with table and storage settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add information about a new train
    Add {
        filename: PathBuf,
        #[arg(short = 'd', long = "destination")]
        destination: Option<String>,
        #[arg(short = 'n', long = "train_number")]
        train_number: Option<String>,
        #[arg(short = 't', long = "departure_time")]
        departure_time: Option<String>,
    },
    /// Display all trains
    Display { filename: PathBuf },
    /// Display trains departing at or after a time
    Select {
        filename: PathBuf,
        #[arg(short = 't', long = "departure_time")]
        departure_time: Option<String>,
    },
}

fn print_or_not_found(rendered: Option<String>) {
    match rendered {
        Some(text) => print!("{text}"),
        None => println!("File not found."),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());

    match cli.command {
        Command::Add {
            filename,
            destination,
            train_number,
            departure_time,
        } => {
            let record = TrainRecord::new(
                prompter.value_or_ask(destination, "Destination")?,
                prompter.value_or_ask(train_number, "Train number")?,
                prompter.value_or_ask(departure_time, "Departure time")?,
            );
            commands::add(&filename, record, &config)?;
        }
        Command::Display { filename } => {
            print_or_not_found(commands::display_existing(&filename, &config)?);
        }
        Command::Select {
            filename,
            departure_time,
        } => {
            let departure_time = prompter.value_or_ask(departure_time, "Departure time")?;
            print_or_not_found(commands::select_existing(
                &filename,
                &departure_time,
                &config,
            )?);
        }
    }

    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use train_roster::{TrainRecord, commands, config};

#[derive(Parser)]
#[command(name = "trains", version, about = "Keep a roster of train departures in a JSON file")]
struct Args {
    /// TOML file with table and storage settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a new train
    Add {
        /// The destination's name
        #[arg(short = 'd', long = "destination")]
        destination: String,
        /// The train's number
        #[arg(short = 'n', long = "train_number")]
        train_number: String,
        /// The departure time, HH:MM
        #[arg(short = 't', long = "departure_time")]
        departure_time: String,
        /// The data file name
        filename: PathBuf,
    },
    /// Display all trains
    Display {
        /// The data file name
        filename: PathBuf,
    },
    /// Select trains departing at or after a time
    Select {
        /// The required departure time, HH:MM
        #[arg(short = 't', long = "departure_time")]
        departure_time: String,
        /// The data file name
        filename: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let config = config::load(args.config.as_deref())?;

    match args.command {
        Command::Add {
            destination,
            train_number,
            departure_time,
            filename,
        } => {
            let record = TrainRecord::new(destination, train_number, departure_time);
            commands::add(&filename, record, &config)?;
        }
        Command::Display { filename } => print!("{}", commands::display(&filename, &config)?),
        Command::Select {
            departure_time,
            filename,
        } => print!("{}", commands::select(&filename, &departure_time, &config)?),
    }

    Ok(())
}

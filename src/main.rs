use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use unit_converter_lib::api::commands::{
    convert_query_command, convert_units_command, get_history_command, list_categories_command,
    list_units_command, reset_command,
};
use unit_converter_lib::shared::types::{ConvertUnitsRequest, ConvertUnitsResponse};
use unit_converter_lib::{infer_category, ConverterSession, ConverterSettings};

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert length, weight, temperature and time units", long_about = None)]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH", env = "UNIT_CONVERTER_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List categories and their units
    Categories,
    /// List the units of one category
    Units { category: String },
    /// Convert a single value
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
        /// Inferred from the units when omitted
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Interactive session with conversion history
    Session,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> Result<ConverterSettings> {
    let settings = match path {
        Some(path) => ConverterSettings::load_from(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => ConverterSettings::load().context("Failed to load settings")?,
    };
    Ok(settings)
}

fn print_conversion(response: &ConvertUnitsResponse, precision: usize) {
    println!("Converted Value: {:.*} {}", precision, response.result, response.to_unit);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = load_settings(cli.config.as_ref())?;
    let precision = settings.display.precision;
    let mut session = ConverterSession::with_settings(&settings).context("Invalid default selection in settings")?;

    match cli.command {
        Command::Categories => {
            for category in list_categories_command() {
                println!("{}: {}", category.label, category.units.join(", "));
            }
        }
        Command::Units { category } => {
            let response = list_units_command(&category)?;
            for unit in response.units {
                println!("{}", unit);
            }
        }
        Command::Convert { value, from, to, category } => {
            let category = match category {
                Some(category) => category,
                None => infer_category(&from, &to)?.to_string(),
            };
            let response = convert_units_command(
                &mut session,
                ConvertUnitsRequest {
                    value: Some(value),
                    category: Some(category),
                    from_unit: Some(from),
                    to_unit: Some(to),
                },
            )?;
            print_conversion(&response, precision);
        }
        Command::Session => run_session(&mut session, precision)?,
    }

    Ok(())
}

const SESSION_HELP: &str = "\
Enter a conversion like '5 km to mi' or '100 celsius in fahrenheit'.
Commands: history, reset, categories, units <category>, help, quit";

fn run_session(session: &mut ConverterSession, precision: usize) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{}", SESSION_HELP);

    loop {
        print!("> ");
        stdout.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("Failed to read input")? == 0 {
            break;
        }
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match word.to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" => break,
            "help" => println!("{}", SESSION_HELP),
            "history" => {
                let history = get_history_command(session);
                if history.entries.is_empty() {
                    println!("No conversions yet");
                }
                for entry in history.entries {
                    println!("{}", entry);
                }
            }
            "reset" => {
                reset_command(session);
                println!("History cleared");
            }
            "categories" => {
                for category in list_categories_command() {
                    println!("{}: {}", category.label, category.units.join(", "));
                }
            }
            "units" => match list_units_command(rest.trim()) {
                Ok(response) => println!("{}", response.units.join(", ")),
                Err(e) => eprintln!("{}", e),
            },
            _ => match convert_query_command(session, line) {
                Ok(response) => print_conversion(&response, precision),
                Err(e) => eprintln!("{}", e),
            },
        }
    }

    Ok(())
}

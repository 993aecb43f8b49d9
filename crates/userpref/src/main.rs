use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use userpref_config::{get_config_path, get_log_dir, Config};
use userpref_form::{submit, FormInput, SubmitError};
use userpref_output::*;
use userpref_store::{LmdbPreferences, PreferenceStore};

const MAIN_HELP: &str = r#"Userpref keeps a single user profile (name, email, age, phone number and
whether the user likes the subject) in a local key-value store.

`userpref show` prints the saved profile. `userpref form` prints the form
as it would be pre-filled for the next edit, and `userpref save` validates
and stores a new profile. Fields are checked in order (name, email, age,
phone) and the first invalid one is reported; nothing is written unless
every field is valid."#;

#[derive(Parser)]
#[command(name = "userpref")]
#[command(about = MAIN_HELP)]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Output as JSON")]
    json: bool,

    #[arg(long, global = true, help = "Store directory (overrides config)")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Show the saved profile.")]
    Show,

    #[command(about = "Show the form pre-filled with the saved profile.")]
    Form,

    #[command(about = "Validate and save a profile.")]
    Save {
        #[arg(long, default_value = "", help = "Full name")]
        name: String,
        #[arg(long, default_value = "", help = "Email address")]
        email: String,
        #[arg(long, default_value = "", help = "Age in years (digits only)")]
        age: String,
        #[arg(long, default_value = "", help = "Phone number (digits only)")]
        phone: String,
        #[arg(long, help = "The user likes the subject")]
        likes_subject: bool,
    },

    #[command(about = "Print config file location and contents.")]
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Config = cli.command {
        return handle_config();
    }

    let config = Config::load()?;
    init_logging(&config)?;

    let store_dir = cli.store.clone().unwrap_or_else(|| config.store_dir());
    let store = LmdbPreferences::open(&store_dir, config.store.map_size)?;
    debug!("Using store at {}", store_dir.display());

    match cli.command {
        Commands::Show => handle_show(&store, cli.json),
        Commands::Form => handle_form(&store, cli.json),
        Commands::Save {
            name,
            email,
            age,
            phone,
            likes_subject,
        } => {
            let input = FormInput {
                name,
                email,
                age,
                phone,
                likes_subject,
            };
            handle_save(&store, cli.json, &input)
        }
        Commands::Config => unreachable!(),
    }
}

fn init_logging(config: &Config) -> Result<()> {
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("userpref.log"))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    Ok(())
}

fn handle_show(store: &impl PreferenceStore, json_output: bool) -> Result<()> {
    let record = store.read();
    if json_output {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", format_summary(&record));
    }
    Ok(())
}

fn handle_form(store: &impl PreferenceStore, json_output: bool) -> Result<()> {
    let record = store.read();
    let mode = record.form_mode();
    // A new profile starts from an empty form rather than "0" for age.
    let input = match mode {
        userpref_types::FormMode::Add => FormInput::default(),
        userpref_types::FormMode::Edit => FormInput::from_record(&record),
    };

    if json_output {
        let value = json!({
            "mode": mode,
            "title": mode.title(),
            "submit": mode.submit_label(),
            "record": record,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", format_form(mode, &input));
    }
    Ok(())
}

fn handle_save(store: &impl PreferenceStore, json_output: bool, input: &FormInput) -> Result<()> {
    match submit(store, input) {
        Ok(record) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", format_saved(&record));
            }
            Ok(())
        }
        Err(SubmitError::Invalid(error)) => {
            if json_output {
                let value = json!({
                    "error": {
                        "field": error.field,
                        "kind": error.kind,
                        "message": error.message(),
                    }
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            Err(anyhow!(format_validation_error(&error)))
        }
        Err(e) => Err(e.into()),
    }
}

fn handle_config() -> Result<()> {
    let config_path = get_config_path();
    println!("Config file: {}", config_path.display());
    println!();

    if config_path.exists() {
        println!("{}", std::fs::read_to_string(&config_path)?);
    } else {
        println!("(file does not exist, using defaults)");
    }
    Ok(())
}

//! CLI for the repository location picker.
//!
//! Decodes, encodes, renders and validates repository location values the
//! same way the picker field does.

use clap::{Parser, Subcommand};
use repo_url_picker::{
    decode, encode, load_settings, validate, ConfigError, FieldErrors, FieldSet,
    IntegrationsError, RepoUrlPicker, Settings,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Repository URL Picker - Inspect repository location values.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the settings file describing integrations and field options.
    #[arg(long, global = true, env = "REPO_URL_PICKER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a value into its fields.
    Decode {
        /// Serialized location (e.g. "github.com?owner=acme&repo=widgets").
        value: Option<String>,
    },

    /// Encode fields into a value.
    Encode {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        owner: Option<String>,
        #[arg(long)]
        repo: Option<String>,
        #[arg(long)]
        organization: Option<String>,
        #[arg(long)]
        workspace: Option<String>,
        #[arg(long)]
        project: Option<String>,
    },

    /// Render the picker for a value, after applying the default host.
    View {
        /// Serialized location; omit to start from an empty field.
        value: Option<String>,
    },

    /// Check a value for missing fields.
    Validate {
        /// Serialized location.
        value: Option<String>,
    },
}

/// Errors that end the CLI run.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// Settings could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Integrations could not be loaded.
    #[error(transparent)]
    Integrations(#[from] IntegrationsError),

    /// Output could not be serialized.
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(true) => ExitCode::from(0),
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so stdout carries only the JSON output. The level is
/// taken from `RUST_LOG` and falls back to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Runs a command; returns false when the result should fail the process.
async fn run(args: Args) -> Result<bool, CliError> {
    let settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };

    match args.command {
        Command::Decode { value } => {
            let fields = decode(
                value.as_deref(),
                settings.picker.allowed_owners.as_deref(),
            );
            print_json(&fields)?;
            Ok(true)
        }
        Command::Encode {
            host,
            owner,
            repo,
            organization,
            workspace,
            project,
        } => {
            let fields = FieldSet {
                host,
                owner,
                repo,
                organization,
                workspace,
                project,
            };
            let value = encode(&fields);
            print_json(&value)?;
            Ok(value.is_some())
        }
        Command::View { value } => {
            let registry = settings.registry();
            let mut picker = RepoUrlPicker::new(settings.picker.clone(), registry.clone(), value);
            picker.load_integrations(&registry).await?;

            let issues = validate(picker.value(), &registry);
            print_json(&picker.view(FieldErrors::from_issues(&issues)))?;
            Ok(true)
        }
        Command::Validate { value } => {
            let issues = validate(value.as_deref(), &settings.registry());
            print_json(&issues)?;
            Ok(issues.is_empty())
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

use clap::{Parser, Subcommand};

use uniemoji_cli::commands::{config_ops, lookup_ops, simulate_ops};
use uniemoji_engine::log_filter;

#[derive(Parser)]
#[command(name = "unitool", about = "Name-to-character input method diagnostics")]
struct Cli {
    /// Log engine decisions to stderr (also enabled by `debug = true` in --settings)
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Show the number of entries in a name table
    Info {
        /// Name table (chars<TAB>name per line)
        table_file: String,
    },
    /// Look up a name in a table
    Lookup {
        /// Name table (chars<TAB>name per line)
        table_file: String,
        /// Query text, without the trigger prefix
        query: String,
        /// Active trigger prefix passed to the lookup (repeatable)
        #[arg(long = "prefix")]
        prefixes: Vec<String>,
        /// Maximum number of candidates
        #[arg(short, long, default_value = "20")]
        n: usize,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Type a key sequence into a fresh engine and show every step
    Simulate {
        /// Name table (chars<TAB>name per line)
        table_file: String,
        /// Keys, e.g. ":smile", "heart{DOWN}{ENTER}" or "{C-c}"
        keys: String,
        /// Settings TOML file (optional)
        #[arg(long)]
        settings: Option<String>,
        /// Override the configured trigger prefixes (repeatable)
        #[arg(long = "prefix")]
        prefixes: Option<Vec<String>>,
        /// Run the lookup only at {IDLE} and at the end, not after every key
        #[arg(long)]
        burst: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // `debug = true` in a --settings file has the same effect as --debug
    let settings_debug = match &cli.command {
        Command::Simulate {
            settings: Some(path),
            ..
        } => config_ops::debug_enabled(path),
        _ => false,
    };
    if cli.debug || settings_debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter(true))),
            )
            .init();
    }

    match cli.command {
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::Info { table_file } => lookup_ops::info(&table_file),
        Command::Lookup {
            table_file,
            query,
            prefixes,
            n,
            json,
        } => lookup_ops::lookup(&table_file, &query, &prefixes, n, json),
        Command::Simulate {
            table_file,
            keys,
            settings,
            prefixes,
            burst,
            json,
        } => simulate_ops::simulate(
            &table_file,
            settings.as_deref(),
            prefixes,
            &keys,
            burst,
            json,
        ),
    }
}

use clap::{Parser, Subcommand};

use pinyin_cli::commands::analyze_ops::{self, AnalyzeOptions};
use pinyin_cli::commands::config_ops;

#[derive(Parser)]
#[command(name = "pytool", about = "Pinyin analysis diagnostics")]
struct Cli {
    /// Write a JSON trace to this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Tokenize text and print every emitted token
    Analyze {
        /// Input text
        text: String,
        /// Settings TOML (defaults to the embedded settings)
        #[arg(long)]
        settings: Option<String>,
        /// Output mode: full, short or both
        #[arg(long)]
        mode: Option<String>,
        /// Minimum number of Chinese characters for a token to get readings
        #[arg(long)]
        min_length: Option<usize>,
        /// Do not emit the source tokens
        #[arg(long)]
        no_original: bool,
        /// Split tokens into n-grams of MIN..=MAX characters
        #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
        ngram: Option<Vec<usize>>,
        /// Output as JSON lines instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the readings of one word
    Readings {
        /// Word to look up
        text: String,
        /// Output mode: full, short or both
        #[arg(long)]
        mode: Option<String>,
        /// Settings TOML (defaults to the embedded settings)
        #[arg(long)]
        settings: Option<String>,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        pinyin_engine::trace_init::init_tracing(std::path::Path::new(dir));
    }

    match cli.command {
        Command::Analyze {
            text,
            settings,
            mode,
            min_length,
            no_original,
            ngram,
            json,
        } => {
            let opts = AnalyzeOptions {
                settings,
                mode,
                min_length,
                no_original,
                ngram: ngram.map(|v| (v[0], v[1])),
                json,
            };
            analyze_ops::analyze(&text, &opts);
        }
        Command::Readings {
            text,
            mode,
            settings,
        } => analyze_ops::readings(&text, mode.as_deref(), settings.as_deref()),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}

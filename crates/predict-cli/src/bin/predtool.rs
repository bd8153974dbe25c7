use clap::{Parser, Subcommand};

use predict_cli::commands::{config_ops, learn_ops, query_ops};

#[derive(Parser)]
#[command(name = "predtool", about = "Word prediction dictionary tool")]
struct Cli {
    /// Custom settings TOML, loaded before anything else
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Complete a word prefix
    Complete {
        /// Dictionary file
        dict_file: String,
        /// Word prefix
        prefix: String,
    },
    /// Suggest corrections for a misspelled word
    Correct {
        /// Dictionary file
        dict_file: String,
        /// Word to correct
        word: String,
    },
    /// Show words seen after a word
    Next {
        /// Dictionary file
        dict_file: String,
        /// Preceding word
        word: String,
    },
    /// Complete a prefix among words seen after any word
    Suggest {
        /// Dictionary file
        dict_file: String,
        /// Word prefix
        prefix: String,
    },
    /// Predict from typed text (a trailing space asks for the next word)
    Predict {
        /// Dictionary file
        dict_file: String,
        /// Text typed so far
        text: String,
        /// Number of predictions (default: predictions.default_limit)
        #[arg(short, long)]
        n: Option<usize>,
    },
    /// Learn from text and write the updated dictionary
    Learn {
        /// Dictionary file
        dict_file: String,
        /// Text to learn, or `-` to read lines from stdin
        text: String,
        /// Add unknown words to the dictionary
        #[arg(long)]
        new_words: bool,
        /// Output file (default: overwrite the dictionary)
        #[arg(long)]
        output: Option<String>,
    },
    /// Show dictionary statistics
    Info {
        /// Dictionary file
        dict_file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(file) = &cli.settings {
        config_ops::settings_load(file);
    }

    match cli.command {
        Command::Complete { dict_file, prefix } => query_ops::complete(&dict_file, &prefix),
        Command::Correct { dict_file, word } => query_ops::correct(&dict_file, &word),
        Command::Next { dict_file, word } => query_ops::next(&dict_file, &word),
        Command::Suggest { dict_file, prefix } => query_ops::suggest(&dict_file, &prefix),
        Command::Predict { dict_file, text, n } => query_ops::predict(&dict_file, &text, n),
        Command::Learn {
            dict_file,
            text,
            new_words,
            output,
        } => learn_ops::learn(&dict_file, &text, new_words, output.as_deref()),
        Command::Info { dict_file } => query_ops::info(&dict_file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}

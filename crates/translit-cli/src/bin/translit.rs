use clap::{Parser, Subcommand};

use translit_cli::commands::convert_ops::{self, ConvertOptions};
use translit_cli::commands::{info_ops, table_ops};
use translit_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "translit", about = "Table-driven transliteration")]
struct Cli {
    /// Debug logging on stderr (needs --features trace; RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert strings or files, one line at a time
    Convert {
        /// Language name or alias (see `translit list`)
        language: String,
        /// Files to read, or literal strings; stdin if none are given
        inputs: Vec<String>,
        /// Convert from the target script back to the source script
        #[arg(short, long)]
        reverse: bool,
        /// Skip the reverse test
        #[arg(long)]
        no_verify: bool,
        /// Print source, input and output separated by tabs
        #[arg(short, long)]
        echo: bool,
        /// Exit on the first line that fails to convert
        #[arg(short, long)]
        fail_on_error: bool,
        /// One JSON result per line
        #[arg(long)]
        json: bool,
        /// Custom TOML table, run with the language's normalization hooks
        #[arg(long)]
        table: Option<String>,
    },
    /// List built-in languages
    List,
    /// Built-in and custom table files
    Table {
        #[command(subcommand)]
        action: TableAction,
    },
    /// Describe every code point of a string
    Info {
        /// Text to describe
        text: String,
    },
}

#[derive(Subcommand)]
enum TableAction {
    /// Print the embedded table for a language
    Export {
        /// Language name or alias
        language: String,
    },
    /// Check a table file
    Validate {
        /// TOML table file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Convert {
            language,
            inputs,
            reverse,
            no_verify,
            echo,
            fail_on_error,
            json,
            table,
        } => {
            let opts = ConvertOptions {
                reverse,
                no_verify,
                echo,
                fail_on_error,
                json,
            };
            convert_ops::convert_cmd(&language, &inputs, table.as_deref(), &opts)
        }
        Command::List => table_ops::list(),
        Command::Table { action } => match action {
            TableAction::Export { language } => table_ops::export(&language),
            TableAction::Validate { file } => table_ops::validate(&file),
        },
        Command::Info { text } => info_ops::info(&text),
    }
}

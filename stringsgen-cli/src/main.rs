use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use stringsgen_cli::{
    Config, Overrides, Settings,
    generate::run_generate_command,
    inspect::run_inspect_command,
    validation::{validate_format, validate_indentation},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print debug logs to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a stringsgen.toml configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the Swift accessor enum for one or more resource files.
    Generate {
        #[command(flatten)]
        input: InputArgs,

        /// The Swift file to write (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Name of the generated enum
        #[arg(short, long)]
        enum_name: Option<String>,

        /// Indentation: `tabs`, `spaces`, `spaces:N` or `N`
        #[arg(long, value_parser = indentation_arg)]
        indent: Option<String>,

        /// Fail when two keys map to the same case name
        #[arg(long)]
        strict: bool,
    },

    /// Show the keys, case names and placeholder types that would be generated.
    Inspect {
        #[command(flatten)]
        input: InputArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Resource files to read (.strings, .csv, .json); glob patterns are expanded
    ///
    /// All inputs go into one enum, so pass the tables of a single language
    /// (`en.lproj/*.strings`, not `*.lproj/Localizable.strings`). A key read
    /// twice becomes two identical cases; use --strict to reject that.
    #[arg(short, long = "input", num_args = 1..)]
    inputs: Vec<String>,

    /// Read every input as this format instead of guessing from the extension
    #[arg(short, long, value_parser = format_arg)]
    format: Option<String>,

    /// Sort the keys of each file instead of keeping file order
    #[arg(long)]
    sort: bool,
}

fn format_arg(s: &str) -> Result<String, String> {
    validate_format(s).map(|_| s.to_string())
}

fn indentation_arg(s: &str) -> Result<String, String> {
    validate_indentation(s).map(|_| s.to_string())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.commands {
        Commands::Generate {
            input,
            output,
            enum_name,
            indent,
            strict,
        } => {
            let overrides = Overrides {
                inputs: input.inputs,
                output,
                format: input.format,
                enum_name,
                indentation: indent,
                sort: input.sort,
                strict,
            };
            run_generate_command(Settings::resolve(config, overrides)?)
        }
        Commands::Inspect { input, json } => {
            let overrides = Overrides {
                inputs: input.inputs,
                format: input.format,
                sort: input.sort,
                ..Overrides::default()
            };
            let mut settings = Settings::resolve(config, overrides)?;
            // Inspect never writes, so a configured output is irrelevant.
            settings.output = None;
            run_inspect_command(settings, json)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use crate::app_config::{Config, LogLevel};
use crate::document_builder::DocumentBuilder;

mod app_config;
mod document_builder;
mod errors;
mod file_utils;
mod script_discovery;
mod script_metadata;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

fn level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the aggregated script listing document (default command)
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Generate shell completions for scriptdoc
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Directory containing the scripts to document
    #[arg(short = 'd', long)]
    scripts_dir: Option<PathBuf>,

    /// Path to the project ignore file
    #[arg(short, long)]
    ignore_file: Option<PathBuf>,

    /// Path of the generated document
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Base URL prepended to script names in links
    #[arg(short, long)]
    base_url: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// scriptdoc - Script collection documentation generator
///
/// Scans a directory of scripts, extracts the author, creation date and
/// description each script declares in its leading statements, and writes
/// one aggregated markdown listing document.
#[derive(Parser, Debug)]
#[command(name = "scriptdoc")]
#[command(version = "1.0.0")]
#[command(about = "Script collection documentation generator")]
#[command(long_about = "scriptdoc scans a directory of scripts, extracts the metadata each script
declares in its leading literal statements, and writes an aggregated
markdown listing document.

EXAMPLES:
    scriptdoc                                  # Generate using conf.json or defaults
    scriptdoc -d scripts -o README.md          # Document ./scripts into ./README.md
    scriptdoc -b https://example.com/src/      # Override the link base URL
    scriptdoc --log-level debug                # Show per-file progress
    scriptdoc completions bash > scriptdoc.bash  # Generate bash completions

CONFIGURATION:
    Configuration is read from conf.json by default. You can specify a
    different config file with --config-path. If the config file does not
    exist, built-in defaults are used. Command line flags override values
    from the config file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory containing the scripts to document
    #[arg(short = 'd', long)]
    scripts_dir: Option<PathBuf>,

    /// Path to the project ignore file
    #[arg(short, long)]
    ignore_file: Option<PathBuf>,

    /// Path of the generated document
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Base URL prepended to script names in links
    #[arg(short, long)]
    base_url: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info).context("Failed to initialize logger")?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "scriptdoc", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Generate(args)) => run_generate(args),
        None => {
            // Default behavior - use top-level args
            let args = GenerateArgs {
                scripts_dir: cli.scripts_dir,
                ignore_file: cli.ignore_file,
                output: cli.output,
                base_url: cli.base_url,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_generate(args)
        }
    }
}

fn run_generate(options: GenerateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load configuration if present, fall back to built-in defaults
    let config_path = &options.config_path;
    let mut config = if std::path::Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        info!("Config file not found at '{}', using built-in defaults", config_path);
        Config::default()
    };

    // Override config with CLI options if provided
    if let Some(scripts_dir) = options.scripts_dir {
        config.scripts_dir = scripts_dir;
    }

    if let Some(ignore_file) = options.ignore_file {
        config.ignore_file = ignore_file;
    }

    if let Some(output) = options.output {
        config.output_path = output;
    }

    if let Some(base_url) = options.base_url {
        config.base_url = base_url;
    }

    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }

    // Apply the effective log level from the configuration
    log::set_max_level(level_filter(&config.log_level));

    config.validate()?;

    let start_time = std::time::Instant::now();
    let builder = DocumentBuilder::with_config(config);
    builder.generate()?;
    info!("Generation finished in {:.2?}", start_time.elapsed());

    Ok(())
}

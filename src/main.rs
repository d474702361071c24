// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use order_translator::app_config::{self, Config, TranslationProvider};
use order_translator::Controller;

/// CLI Wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    Google,
    Mock,
}

impl From<CliTranslationProvider> for TranslationProvider {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::Google => TranslationProvider::Google,
            CliTranslationProvider::Mock => TranslationProvider::Mock,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate the order workbook (default command)
    Translate(TranslateArgs),

    /// Generate shell completions for order-translator
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
struct TranslateArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Input workbook (overrides paths.input)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output workbook (overrides paths.output)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Source language code (e.g. 'zh-CN')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g. 'en')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Keep the intermediate delimited files
    #[arg(short, long)]
    keep_intermediate: bool,

    /// Send each distinct value to the provider only once
    #[arg(long)]
    cache: bool,
}

/// Translate a Chinese order export workbook into English.
#[derive(Parser, Debug)]
#[command(name = "order-translator")]
#[command(version)]
#[command(about = "Translate Chinese order spreadsheets to English")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "Reads the first sheet of an order workbook, translates every Chinese header and cell to English and writes an .xlsx with auto-sized columns.

EXAMPLES:
    order-translator                                  # Order_Export.xls -> English_Order_Export.xlsx
    order-translator -i export.xls -o english.xlsx    # Explicit input and output
    order-translator --cache -l debug                 # Translate repeated values once, verbose
    order-translator -p mock -k                       # Offline dry run, keep intermediate files
    order-translator completions bash > ot.bash       # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    args: TranslateArgs,
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

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
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

#[tokio::main]
async fn main() -> Result<()> {
    // Everything is admitted here; log::set_max_level does the filtering
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "order-translator", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => run_translate(cli.args).await,
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    if let Some(level) = &options.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(LevelFilter::from(&level));
    }

    let config = load_config(&options)?;

    if options.log_level.is_none() {
        log::set_max_level(LevelFilter::from(&config.log_level));
    }

    let controller = Controller::with_config(config)?.with_progress(true);
    controller.run().await?;

    Ok(())
}

/// Load the configuration file (creating a default one when absent) and apply CLI overrides
fn load_config(options: &TranslateArgs) -> Result<Config> {
    let config_path = &options.config_path;

    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    apply_overrides(&mut config, options);

    Ok(config)
}

fn apply_overrides(config: &mut Config, options: &TranslateArgs) {
    if let Some(input) = &options.input {
        config.paths.input = input.clone();
    }
    if let Some(output) = &options.output {
        config.paths.output = output.clone();
    }
    if let Some(provider) = &options.provider {
        config.translation.provider = provider.clone().into();
    }
    if let Some(source_lang) = &options.source_language {
        config.source_language = source_lang.clone();
    }
    if let Some(target_lang) = &options.target_language {
        config.target_language = target_lang.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
    if options.keep_intermediate {
        config.paths.keep_intermediate = true;
    }
    if options.cache {
        config.translation.cache_enabled = true;
    }
}

use std::io::{self, BufRead};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use infix_calc::{Calculator, DEFAULT_OPERATORS};
use log::{debug, info};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Infix Calc - Evaluate flat calculator expressions
#[derive(Parser, Debug)]
#[command(name = "infix-calc")]
#[command(about = "Evaluate calculator expressions such as 2+3×4; reads stdin when none is given")]
#[command(version)]
pub struct CliArgs {
    /// Expression to evaluate
    pub expression: Option<String>,

    /// Operator alphabet, one character per operator
    #[arg(short, long, default_value = DEFAULT_OPERATORS)]
    pub operators: String,

    /// Print the postfix form before the result
    #[arg(short, long)]
    pub postfix: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub expression: Option<String>,
    pub operators: String,
    pub show_postfix: bool,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            expression: args.expression,
            operators: args.operators,
            show_postfix: args.postfix,
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    if args.operators.is_empty() {
        bail!("Operator alphabet cannot be empty");
    }

    Ok(args.into())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn print_result(calculator: &Calculator, expression: &str, show_postfix: bool) -> Result<()> {
    if show_postfix {
        println!("{}", calculator.postfix_strings(expression).join(" "));
    }
    let result = calculator
        .calculate(expression)
        .with_context(|| format!("Failed to evaluate '{}'", expression))?;
    println!("{}", result);
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let calculator = Calculator::new(&config.operators);
    info!("Using operator alphabet '{}'", calculator.operators());

    if let Some(expression) = &config.expression {
        return print_result(&calculator, expression, config.show_postfix);
    }

    debug!("No expression given, reading from stdin");
    let mut failures = 0;
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if let Err(err) = print_result(&calculator, line.trim(), config.show_postfix) {
            eprintln!("Error: {:#}", err);
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{} expression(s) failed to evaluate", failures);
    }
    Ok(())
}

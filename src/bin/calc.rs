//! calc - command-line front end
//!
//! Argument parsing and output only; evaluation lives in the library.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use infix_calc::{
    api,
    core::config::{layered, ConfigError, FileConfig, Overrides},
    core::logger::init_with_file,
    init_config,
    platform::{print_error_with_source, repl, Mode, ReplOptions},
    CalcError, Config, EvalConfig, LogFormat,
};

#[derive(Parser)]
#[command(
    name = "calc",
    about = "Integer expression calculator",
    version = "0.1.0"
)]
struct Cli {
    /// Expression to evaluate (starts the REPL when omitted)
    expr: Option<String>,

    /// Read postfix notation (`1 2 +`) instead of infix
    #[arg(long)]
    postfix: bool,

    /// Fail when more than one operand is left at the end
    #[arg(long)]
    strict: bool,

    /// Clamp out-of-range literals instead of rejecting them
    #[arg(long)]
    saturate: bool,

    /// Print the token, resolved and postfix sequences
    #[arg(long)]
    show_steps: bool,

    /// Print results and errors as JSON
    #[arg(long)]
    json: bool,

    /// JSON config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (-v=info, -vv=debug, -vvv=trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Scanner log level
    #[arg(long, value_enum)]
    log_scanner: Option<LogLevelArg>,

    /// Minus resolver log level
    #[arg(long, value_enum)]
    log_resolver: Option<LogLevelArg>,

    /// Shunting-yard log level
    #[arg(long, value_enum)]
    log_parser: Option<LogLevelArg>,

    /// Evaluator log level
    #[arg(long, value_enum)]
    log_eval: Option<LogLevelArg>,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty")]
    format: LogFormatArg,

    /// Also append logs to a file
    #[arg(long, value_name = "FILE")]
    log_file: Option<String>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    let eval = config.eval;
    init_config(config);

    let format = match cli.format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    init_with_file(format, cli.log_file.as_deref());

    match &cli.expr {
        Some(expr) => handle_eval(&cli, expr, &eval),
        None => handle_repl(&cli, eval),
    }
}

fn handle_eval(cli: &Cli, source: &str, eval: &EvalConfig) {
    tracing::debug!(target: "calc::cli", source, postfix = cli.postfix, "One-shot evaluation");

    let result = if cli.postfix {
        api::evaluate_postfix(source, eval).map(|value| (value, None))
    } else if cli.show_steps || cli.json {
        api::trace(source, eval).map(|t| (t.value, Some(t)))
    } else {
        api::evaluate_with(source, eval).map(|value| (value, None))
    };

    match result {
        Ok((value, steps)) => {
            if cli.json {
                let output = match &steps {
                    Some(t) => serde_json::to_string(&t.to_summary()),
                    None => serde_json::to_string(&serde_json::json!({ "value": value })),
                };
                match output {
                    Ok(line) => println!("{line}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        process::exit(1);
                    }
                }
                return;
            }

            if cli.show_steps {
                if let Some(t) = &steps {
                    if let Err(e) = repl::write_steps(&mut io::stdout().lock(), t) {
                        eprintln!("Error: {e}");
                        process::exit(1);
                    }
                }
            }
            println!("{value}");
        }
        Err(e) => {
            report_error(cli, &e, source);
            process::exit(1);
        }
    }
}

fn handle_repl(cli: &Cli, eval: EvalConfig) {
    let options = ReplOptions {
        mode: if cli.postfix { Mode::Postfix } else { Mode::Infix },
        show_steps: cli.show_steps,
        eval,
    };
    tracing::info!(target: "calc::cli", mode = ?options.mode, "Starting REPL");

    let stdin = io::stdin();
    if let Err(e) = repl::run(stdin.lock(), &mut io::stdout().lock(), &options) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn report_error(cli: &Cli, e: &CalcError, source: &str) {
    if cli.json {
        match serde_json::to_string(&e.to_report()) {
            Ok(line) => println!("{line}"),
            Err(_) => eprintln!("Error: {e}"),
        }
    } else {
        print_error_with_source(e, source);
    }
}

/// Defaults, then the config file, then the command-line flags
fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let file = cli.config.as_deref().map(FileConfig::load).transpose()?;
    layered(file.as_ref(), &overrides(cli))
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        verbosity: cli.verbose,
        scanner: cli.log_scanner.map(to_level_filter),
        resolver: cli.log_resolver.map(to_level_filter),
        parser: cli.log_parser.map(to_level_filter),
        eval: cli.log_eval.map(to_level_filter),
        strict: cli.strict,
        saturate: cli.saturate,
    }
}

fn to_level_filter(level: LogLevelArg) -> LevelFilter {
    match level {
        LogLevelArg::Off => LevelFilter::OFF,
        LogLevelArg::Error => LevelFilter::ERROR,
        LogLevelArg::Warn => LevelFilter::WARN,
        LogLevelArg::Info => LevelFilter::INFO,
        LogLevelArg::Debug => LevelFilter::DEBUG,
        LogLevelArg::Trace => LevelFilter::TRACE,
    }
}

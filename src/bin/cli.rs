use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use bucketwatch::config::Config;
use bucketwatch::output::OutputFormat;
use bucketwatch::rules::{RuleEngine, Severity};
use bucketwatch::ScanOptions;

#[derive(Parser)]
#[command(
    name = "bucketwatch",
    about = "Rule-based security auditor for cloud storage configurations",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan resource descriptions for security issues
    Scan {
        /// Path to the JSON resource snapshot (mock data)
        #[arg(long, short = 'd')]
        data: Option<PathBuf>,

        /// Scan the live AWS environment instead of mock data
        #[arg(long)]
        live: bool,

        /// Config file path
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output format (console, json, html)
        #[arg(long, short = 'f', default_value = "console")]
        format: String,

        /// Minimum severity to fail (low, medium, high, critical)
        #[arg(long)]
        fail_on: Option<String>,

        /// Write output to file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short = 'v')]
        verbose: bool,
    },

    /// List all available checks
    ListChecks {
        /// Output format (table, json)
        #[arg(long, short = 'f', default_value = "table")]
        format: String,
    },

    /// Generate a starter .bucketwatch.toml config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan {
            data,
            live,
            config,
            format,
            fail_on,
            output,
            verbose,
        } => cmd_scan(data, live, config, format, fail_on, output, verbose),
        Commands::ListChecks { format } => cmd_list_checks(format),
        Commands::Init { force } => cmd_init(force),
    };

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn cmd_scan(
    data: Option<PathBuf>,
    live: bool,
    config: Option<PathBuf>,
    format_str: String,
    fail_on_str: Option<String>,
    output_path: Option<PathBuf>,
    verbose: bool,
) -> Result<i32, bucketwatch::error::AuditError> {
    init_tracing(verbose);

    let format = OutputFormat::from_str_lenient(&format_str).unwrap_or_else(|| {
        eprintln!("Warning: unknown format '{}', using console", format_str);
        OutputFormat::Console
    });

    let fail_on = fail_on_str.and_then(|s| {
        let sev = Severity::from_str_lenient(&s);
        if sev.is_none() {
            eprintln!("Warning: unknown severity '{}', using config default", s);
        }
        sev
    });

    let options = ScanOptions {
        config_path: config,
        data_path: data,
        live,
        format,
        fail_on_override: fail_on,
    };

    let report = bucketwatch::scan(&options)?;
    let rendered = bucketwatch::render_report(&report, format)?;

    match output_path {
        Some(out) => {
            std::fs::write(&out, &rendered)?;
            eprintln!("Report saved to: {}", out.display());
        }
        None => print!("{}", rendered),
    }

    // Exit code: 0 = pass, 1 = findings above threshold
    Ok(if report.verdict.pass { 0 } else { 1 })
}

fn cmd_list_checks(format_str: String) -> Result<i32, bucketwatch::error::AuditError> {
    let engine = RuleEngine::new();
    let checks = engine.list_checks();

    match format_str.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&checks)?;
            println!("{}", json);
        }
        _ => {
            println!("{:<10} {:<22} {:<10} DESCRIPTION", "ID", "NAME", "SEVERITY");
            println!("{}", "-".repeat(80));
            for check in &checks {
                println!(
                    "{:<10} {:<22} {:<10} {}",
                    check.id, check.name, check.default_severity, check.description,
                );
            }
        }
    }

    Ok(0)
}

fn cmd_init(force: bool) -> Result<i32, bucketwatch::error::AuditError> {
    let path = PathBuf::from(".bucketwatch.toml");

    if path.exists() && !force {
        eprintln!(".bucketwatch.toml already exists. Use --force to overwrite.");
        return Ok(1);
    }

    std::fs::write(&path, Config::starter_toml())?;
    println!("Created .bucketwatch.toml");

    Ok(0)
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

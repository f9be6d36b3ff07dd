// cli.rs
// Command-line surface: flag overrides over the loaded config, `init` and `log`

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::{load_config, LoggerConfig};
use crate::log_event::{LineFormat, LogEvent};
use crate::logger::SeverityLogger;
use crate::taxonomy::{ProcessKind, Severity};

/// Top-level CLI interface for sevlog
#[derive(Parser, Debug)]
#[command(
    name = "sevlog",
    version,
    about = "Append severity-routed CSV lines to date-partitioned log files"
)]
pub struct Cli {
    /// TOML configuration file (defaults to ./sevlog.toml when present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Directory holding the log files
    #[arg(long, global = true)]
    pub dir: Option<String>,

    /// Base name of the standard log file
    #[arg(long, global = true)]
    pub log_name: Option<String>,

    /// Base name of the error log file (empty shares the standard file)
    #[arg(long, global = true)]
    pub error_name: Option<String>,

    /// Quote message and process id fields that contain delimiters
    #[arg(long, global = true)]
    pub quoted: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the log directory and today's files, then print their paths
    Init,

    /// Append one event
    Log {
        #[arg(short, long)]
        severity: Severity,
        /// os, task or request
        #[arg(short, long, default_value = "os")]
        kind: ProcessKind,
        /// Process identifier; defaults to this process's pid
        #[arg(short, long)]
        pid: Option<String>,
        message: String,
    },
}

impl Cli {
    /// Layer command-line flags over the loaded configuration.
    pub fn resolve_config(&self) -> anyhow::Result<LoggerConfig> {
        let mut config =
            load_config(self.config.as_deref()).context("Failed to load configuration")?;

        if let Some(dir) = &self.dir {
            config.directory = dir.clone();
        }
        if let Some(name) = &self.log_name {
            config.log_name = name.clone();
        }
        if let Some(name) = &self.error_name {
            config.error_name = name.clone();
        }
        if self.quoted {
            config.line_format = LineFormat::Quoted;
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    let logger = SeverityLogger::new().with_line_format(config.line_format);
    // No sink, no way to report anything further: exits the process on failure.
    let paths = logger.initialize_or_exit(&config.directory, &config.log_name, &config.error_name);

    match cli.command {
        Commands::Init => {
            println!("standard: {}", paths.standard.display());
            println!("error:    {}", paths.error.display());
        }
        Commands::Log {
            severity,
            kind,
            pid,
            message,
        } => {
            let pid = pid.unwrap_or_else(|| std::process::id().to_string());
            logger
                .log(severity, &LogEvent::new(kind, pid, message))
                .context("Failed to append log line")?;
        }
    }

    let report = logger.shutdown();
    if !report.is_clean() {
        eprintln!("Warning: {}", report.failures.join("; "));
    }
    Ok(())
}

// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod commands;
mod context;
mod error;
mod helpers;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;

use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Generator, Shell};
use freedom_atlas_core::{
    resolve_data_path, resolve_geo_source, resolve_session_dir, resolve_session_id, ExitCode,
    GeoSource, MachineError,
};
use freedom_atlas_ingest::DuplicateRowPolicy;
use freedom_atlas_model::{Metric, Year, DEFAULT_YEAR};
use serde_json::json;

pub use context::{AtlasConfig, AtlasContext};

use error::{emit_error, CliError};
use helpers::{emit_ok, OutputMode};
use logging::{init_logging, LogFlags};

pub const CRATE_NAME: &str = "freedom-atlas-cli";

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
Usage: {usage}

Options:
{options}

Commands:
{subcommands}
{after-help}";

#[derive(Parser)]
#[command(name = "freedom-atlas", version)]
#[command(about = "Query the human freedom index and manage the shared country selection")]
#[command(help_template = HELP_TEMPLATE)]
#[command(after_help = "Environment:
  FREEDOM_ATLAS_DATA         Input table (default: human-freedom-index.csv)
  FREEDOM_ATLAS_GEO          Map geography, file path or http(s) URL
  FREEDOM_ATLAS_SESSION      Session id (default: default)
  FREEDOM_ATLAS_SESSION_DIR  Directory holding session files
  FREEDOM_ATLAS_LOG_LEVEL    Log filter override
  FREEDOM_ATLAS_LOG_JSON     Set to 1 for JSON logs on stderr")]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[arg(long, global = true, default_value_t = false)]
    quiet: bool,
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    /// Input table; falls back to FREEDOM_ATLAS_DATA.
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    /// Session id; falls back to FREEDOM_ATLAS_SESSION.
    #[arg(long, global = true)]
    session: Option<String>,
    #[arg(long, global = true, value_enum, default_value_t = DuplicatesCli::KeepAll)]
    duplicates: DuplicatesCli,
    #[arg(long = "print-config-paths", default_value_t = false)]
    print_config_paths: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DuplicatesCli {
    KeepAll,
    KeepFirst,
}

impl From<DuplicatesCli> for DuplicateRowPolicy {
    fn from(value: DuplicatesCli) -> Self {
        match value {
            DuplicatesCli::KeepAll => Self::KeepAll,
            DuplicatesCli::KeepFirst => Self::KeepFirst,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MetricCli {
    Hf,
    Pf,
    Ef,
}

impl From<MetricCli> for Metric {
    fn from(value: MetricCli) -> Self {
        match value {
            MetricCli::Hf => Self::HfScore,
            MetricCli::Pf => Self::PfScore,
            MetricCli::Ef => Self::EfScore,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Years present in the table, in file order.
    Years,
    /// Distinct regions of one year.
    Regions {
        #[arg(long, default_value_t = DEFAULT_YEAR)]
        year: Year,
    },
    /// Records of one year, optionally narrowed by region and country.
    Records {
        #[arg(long, default_value_t = DEFAULT_YEAR)]
        year: Year,
        #[arg(long = "region")]
        regions: Vec<String>,
        #[arg(long = "country")]
        countries: Vec<String>,
    },
    /// Per-year history of countries (defaults to the selection).
    Series {
        #[arg(long = "country")]
        countries: Vec<String>,
    },
    Select {
        #[command(subcommand)]
        command: SelectCommand,
    },
    View {
        #[command(subcommand)]
        command: ViewCommand,
    },
    /// What the last load observed: duplicates, skipped rows, NaN fields.
    IngestReport {
        /// Also load this geography document (or FREEDOM_ATLAS_GEO) and report its events.
        #[arg(long)]
        geo: Option<String>,
    },
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum SelectCommand {
    Show,
    /// Add a country, or remove it if already selected.
    Toggle { iso: String },
    Clear,
    /// Drop the stored selection for this session.
    Forget,
}

#[derive(Subcommand)]
enum ViewCommand {
    Bar {
        #[arg(long, default_value_t = DEFAULT_YEAR)]
        year: Year,
        /// Region shown while nothing is selected.
        #[arg(long)]
        region: Option<String>,
    },
    Line {
        #[arg(long, value_enum, default_value_t = MetricCli::Hf)]
        metric: MetricCli,
    },
    Scatter {
        #[arg(long, default_value_t = DEFAULT_YEAR)]
        year: Year,
        #[arg(long, value_enum, default_value_t = MetricCli::Hf)]
        x: MetricCli,
        #[arg(long, value_enum, default_value_t = MetricCli::Pf)]
        y: MetricCli,
    },
    Map {
        #[arg(long, default_value_t = DEFAULT_YEAR)]
        year: Year,
        #[arg(long, value_enum, default_value_t = MetricCli::Hf)]
        metric: MetricCli,
        /// Geography document; falls back to FREEDOM_ATLAS_GEO.
        #[arg(long)]
        geo: Option<String>,
    },
}

pub fn main_entry() -> ProcessExitCode {
    let wants_json = std::env::args().any(|arg| arg == "--json");
    match run() {
        Ok(()) => ProcessExitCode::from(ExitCode::Success as u8),
        Err(err) => {
            emit_error(&err, wants_json);
            ProcessExitCode::from(err.exit_code as u8)
        }
    }
}

fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{err}");
                return Ok(());
            }
            _ => {
                return Err(CliError {
                    exit_code: ExitCode::Usage,
                    machine: MachineError::new("usage_error", "invalid command line arguments")
                        .with_detail("error", &err.to_string()),
                });
            }
        },
    };
    init_logging(LogFlags {
        quiet: cli.quiet,
        verbose: cli.verbose,
    });
    let output_mode = OutputMode { json: cli.json };

    let geo_flag = match &cli.command {
        Some(Commands::View {
            command: ViewCommand::Map { geo, .. },
        })
        | Some(Commands::IngestReport { geo }) => geo.clone(),
        _ => None,
    };
    let config = AtlasConfig {
        data: resolve_data_path(cli.data),
        duplicate_policy: cli.duplicates.into(),
        session_dir: resolve_session_dir(),
        session_id: resolve_session_id(cli.session.as_deref()),
        geography: resolve_geo_source(geo_flag.as_deref()),
    };

    if cli.print_config_paths {
        return emit_ok(output_mode, config_paths_payload(&config));
    }

    let command = cli
        .command
        .ok_or_else(|| CliError::usage("missing command; see --help"))?;
    let open = |with_geography| context::open_context(&config, with_geography);

    let payload = match command {
        Commands::Completion { shell } => {
            print_completion(shell);
            return Ok(());
        }
        Commands::Years => commands::years_payload(&open(false)?),
        Commands::Regions { year } => commands::regions_payload(&open(false)?, year),
        Commands::Records {
            year,
            regions,
            countries,
        } => commands::records_payload(&open(false)?, year, &regions, &countries)?,
        Commands::Series { countries } => commands::series_payload(&open(false)?, &countries)?,
        Commands::Select { command } => {
            let mut ctx = open(false)?;
            match command {
                SelectCommand::Show => commands::select_show(&ctx),
                SelectCommand::Toggle { iso } => commands::select_toggle(&mut ctx, &iso)?,
                SelectCommand::Clear => commands::select_clear(&mut ctx)?,
                SelectCommand::Forget => commands::select_forget(&mut ctx)?,
            }
        }
        Commands::View { command } => match command {
            ViewCommand::Bar { year, region } => {
                commands::view_bar(&open(false)?, year, region.as_deref())?
            }
            ViewCommand::Line { metric } => commands::view_line(&open(false)?, metric.into())?,
            ViewCommand::Scatter { year, x, y } => {
                commands::view_scatter(&open(false)?, year, x.into(), y.into())?
            }
            ViewCommand::Map { year, metric, .. } => {
                commands::view_map(&open(true)?, year, metric.into())?
            }
        },
        Commands::IngestReport { .. } => commands::ingest_report(&open(true)?)?,
    };
    emit_ok(output_mode, payload)
}

fn config_paths_payload(config: &AtlasConfig) -> serde_json::Value {
    let geography = match &config.geography {
        Some(GeoSource::Path(path)) => json!(path),
        Some(GeoSource::Url(url)) => json!(url),
        None => serde_json::Value::Null,
    };
    json!({
        "data": config.data,
        "session_dir": config.session_dir,
        "session_id": config.session_id,
        "session_file": config.session_dir.join(format!("{}.json", config.session_id)),
        "geography": geography,
    })
}

fn print_completion<G: Generator>(generator: G) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(generator, &mut command, name, &mut std::io::stdout());
}

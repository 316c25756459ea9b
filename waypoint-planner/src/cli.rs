//! Command-line interface for the waypoint-planner binary.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::input::{InputError, WaypointReader};
use crate::planner::{ConfigError, CourseConfig, PruneMode, try_solve_with};
use crate::report::{self, CaseReport, CheckError};

/// Errors that end a run with a non-zero exit status.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Check(#[from] CheckError),

    /// Writing results failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Serializing JSON results failed
    #[error("failed to write JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// The reference output could not be read
    #[error("failed to read expected output {path}: {source}")]
    Expected {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Parser)]
#[command(
    name = "waypoint-planner",
    about = "Minimum-time routes through optional waypoints",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub solve: SolveArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve every case and print one result per line (default)
    Solve(SolveArgs),
    /// Solve a sample file and compare it with reference output
    Check(CheckArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One cost per line, three decimal places
    #[default]
    Text,
    /// A JSON array with per-case statistics
    Json,
}

/// Course parameters, layered over the defaults or a config file.
#[derive(Debug, Clone, Default, Args)]
pub struct CourseArgs {
    /// JSON file with course parameters
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Side length of the square region
    #[arg(long)]
    pub edge: Option<u16>,

    /// Travel speed
    #[arg(long)]
    pub speed: Option<f64>,

    /// Dwell time per departure
    #[arg(long)]
    pub delay: Option<f64>,

    /// Guaranteed minimum distance between stops (0 is always safe)
    #[arg(long)]
    pub min_separation: Option<f64>,
}

impl CourseArgs {
    /// Resolve the effective configuration.
    pub fn load(&self) -> Result<CourseConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => CourseConfig::from_json_file(path)?,
            None => CourseConfig::default(),
        };

        if let Some(edge) = self.edge {
            config.edge = edge;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        if let Some(delay) = self.delay {
            config.delay = delay;
        }
        if let Some(min_separation) = self.min_separation {
            config.min_separation = min_separation;
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct SolveArgs {
    #[command(flatten)]
    pub course: CourseArgs,

    /// Read cases from this file instead of stdin
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Keep every candidate (quadratic reference mode)
    #[arg(long)]
    pub no_prune: bool,
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub course: CourseArgs,

    /// Sample input file
    #[arg(long, short)]
    pub input: PathBuf,

    /// Reference output file
    #[arg(long, short)]
    pub expected: PathBuf,

    /// Keep every candidate (quadratic reference mode)
    #[arg(long)]
    pub no_prune: bool,
}

fn prune_mode(no_prune: bool) -> PruneMode {
    if no_prune {
        PruneMode::Disabled
    } else {
        PruneMode::Dominance
    }
}

/// Run the parsed command against the process's stdin and stdout.
pub fn run(cli: Cli) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());

    match cli.command {
        Some(Command::Check(args)) => run_check(&args, &mut out)?,
        Some(Command::Solve(args)) => run_solve_from(&args, &mut out)?,
        None => run_solve_from(&cli.solve, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

fn run_solve_from<W: Write>(args: &SolveArgs, out: &mut W) -> Result<(), CliError> {
    let config = args.course.load()?;
    match &args.input {
        Some(path) => {
            let reader = WaypointReader::open(path, config.edge)?;
            run_solve(args, &config, reader, out)
        }
        None => {
            let stdin = std::io::stdin();
            let reader = WaypointReader::new(stdin.lock(), config.edge);
            run_solve(args, &config, reader, out)
        }
    }
}

/// Solve every case from `reader`, writing results to `out`.
///
/// Text results are written as each case completes; JSON is written once
/// all cases are solved.
pub fn run_solve<R: BufRead, W: Write>(
    args: &SolveArgs,
    config: &CourseConfig,
    mut reader: WaypointReader<R>,
    out: &mut W,
) -> Result<(), CliError> {
    let mode = prune_mode(args.no_prune);

    match args.format {
        OutputFormat::Text => {
            solve_cases(&mut reader, config, mode, |report| {
                report::write_result(&mut *out, &report).map_err(CliError::from)
            })?;
        }
        OutputFormat::Json => {
            let mut reports = Vec::new();
            solve_cases(&mut reader, config, mode, |report| {
                reports.push(report);
                Ok(())
            })?;
            report::write_json(out, &reports)?;
        }
    }

    Ok(())
}

/// Solve a sample file and compare it line by line with reference output.
pub fn run_check<W: Write>(args: &CheckArgs, out: &mut W) -> Result<(), CliError> {
    let config = args.course.load()?;
    let mut reader = WaypointReader::open(&args.input, config.edge)?;

    let mut actual = String::new();
    solve_cases(&mut reader, &config, prune_mode(args.no_prune), |report| {
        actual.push_str(&report.formatted_cost());
        actual.push('\n');
        Ok(())
    })?;

    let expected =
        std::fs::read_to_string(&args.expected).map_err(|source| CliError::Expected {
            path: args.expected.display().to_string(),
            source,
        })?;

    let matched = report::compare_outputs(&expected, &actual)?;
    info!(cases = matched, input = %args.input.display(), "Check passed");
    writeln!(out, "{matched} cases match {}", args.expected.display())?;
    Ok(())
}

/// Feed every case through a fresh frontier, handing each result to
/// `on_case` in input order. Returns the number of cases solved.
pub fn solve_cases<R: BufRead>(
    reader: &mut WaypointReader<R>,
    config: &CourseConfig,
    mode: PruneMode,
    mut on_case: impl FnMut(CaseReport) -> Result<(), CliError>,
) -> Result<usize, CliError> {
    let mut solved = 0;

    while let Some(case) = reader.next_case()? {
        let solution = try_solve_with(config, case, mode)?;
        solved += 1;
        on_case(CaseReport::new(solved, solution))?;
    }

    info!(cases = solved, "Finished input");
    Ok(solved)
}

//! CLI command implementations
//!
//! Every command runs the same way:
//! 1. Resolve configuration (file, then command-line overrides)
//! 2. Load both input files and build the dataset
//! 3. Dispatch to `inspect`, `query` or `interactive`
//!
//! Results go to stdout. Diagnostics and log lines go to stderr.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::catalog::Dataset;
use crate::executor;
use crate::extract::{load_approaches, load_neos};
use crate::filter::create_filters;
use crate::model::AstroObject;
use crate::observability::{
    log_event, log_event_with_fields, set_min_severity, Event, ObservationScope, Severity,
};
use crate::write::write_results;

use super::args::{Cli, Command, InspectArgs, QueryArgs, ShellCommand, ShellLine};
use super::errors::{CliError, CliResult};
use super::io::{read_lines, split_line, SourceStamp};

/// Printed to stderr when `inspect` finds nothing
pub const NO_MATCH: &str = "No matching NEOs exist in the database.";

const PROMPT: &str = "(neo) ";
const BANNER: &str =
    "Explore close approaches of near-Earth objects. Type `help` to list commands and `exit` to exit.";

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// CSV file of near-Earth objects (default "data/neos.csv")
    #[serde(default = "default_neofile")]
    pub neofile: PathBuf,

    /// JSON file of close approaches (default "data/cad.json")
    #[serde(default = "default_cadfile")]
    pub cadfile: PathBuf,

    /// Results printed by `query` when no limit is given (default 10)
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Minimum log severity (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_neofile() -> PathBuf {
    PathBuf::from("data/neos.csv")
}
fn default_cadfile() -> PathBuf {
    PathBuf::from("data/cad.json")
}
fn default_limit() -> usize {
    10
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            neofile: default_neofile(),
            cadfile: default_cadfile(),
            default_limit: default_limit(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.default_limit == 0 {
            return Err(CliError::config_error("default_limit must be > 0"));
        }

        self.log_severity()?;

        Ok(())
    }

    /// Parsed `log_level`
    pub fn log_severity(&self) -> CliResult<Severity> {
        Severity::from_str(&self.log_level).map_err(CliError::config_error)
    }
}

/// Resolves configuration: optional file first, then command-line overrides
pub fn resolve_config(cli: &Cli) -> CliResult<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(neofile) = &cli.neofile {
        config.neofile = neofile.clone();
    }
    if let Some(cadfile) = &cli.cadfile {
        config.cadfile = cadfile.clone();
    }

    Ok(config)
}

/// Loads both input files and links them into a dataset
pub fn load_dataset(config: &Config) -> CliResult<Dataset> {
    let scope = ObservationScope::new("DATASET_LOAD");

    let loaded = load_neos(&config.neofile).and_then(|neos| {
        load_approaches(&config.cadfile).map(|approaches| (neos, approaches))
    });
    let (neos, approaches) = match loaded {
        Ok(files) => files,
        Err(e) => {
            let err = CliError::from(e);
            scope.fail(err.message());
            return Err(err);
        }
    };

    match Dataset::build(neos, approaches) {
        Ok(dataset) => {
            scope.complete();
            Ok(dataset)
        }
        Err(e) => {
            let err = CliError::from(e);
            scope.fail(err.message());
            Err(err)
        }
    }
}

/// Parse arguments and run
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_cli(cli)
}

/// Run a parsed command line
pub fn run_cli(cli: Cli) -> CliResult<()> {
    let config = resolve_config(&cli)?;
    set_min_severity(config.log_severity()?);

    let neofile = config.neofile.display().to_string();
    let cadfile = config.cadfile.display().to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("neofile", neofile.as_str()), ("cadfile", cadfile.as_str())],
    );

    let dataset = load_dataset(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(cli.command, &dataset, &config, &mut out)
}

/// Run the appropriate command against a loaded dataset
pub fn run_command<W: Write>(
    cmd: Command,
    dataset: &Dataset,
    config: &Config,
    out: &mut W,
) -> CliResult<()> {
    match cmd {
        Command::Inspect(args) => inspect(dataset, &args, out).map(|_| ()),
        Command::Query(args) => query(dataset, &args, config, out).map(|_| ()),
        Command::Interactive { aggressive } => {
            let stdin = io::stdin();
            interactive(dataset, config, aggressive, stdin.lock(), out)
        }
    }
}

/// Print one NEO and, with `--verbose`, each of its approaches.
///
/// A miss is not an error: the miss message goes to stderr and `None`
/// is returned.
pub fn inspect<'a, W: Write>(
    dataset: &'a Dataset,
    args: &InspectArgs,
    out: &mut W,
) -> CliResult<Option<&'a AstroObject>> {
    let found = match (&args.pdes, &args.name) {
        (Some(pdes), _) => dataset.find_by_designation(pdes),
        (None, Some(name)) => dataset.find_by_name(name),
        (None, None) => return Err(CliError::usage_error("inspect needs --pdes or --name")),
    };

    let neo = match found {
        Some(neo) => neo,
        None => {
            eprintln!("{}", NO_MATCH);
            return Ok(None);
        }
    };

    writeln!(out, "{}", neo)?;
    if args.verbose {
        for approach in dataset.approaches_of(neo) {
            writeln!(out, "- {}", approach)?;
        }
    }

    Ok(Some(neo))
}

/// Run a filtered query, returning the number of results emitted.
///
/// Printed results default to `config.default_limit`; results written to
/// an outfile default to no limit. `--limit 0` always means no limit.
pub fn query<W: Write>(
    dataset: &Dataset,
    args: &QueryArgs,
    config: &Config,
    out: &mut W,
) -> CliResult<usize> {
    let filters = create_filters(&args.criteria())?;
    let results = executor::query(dataset, &filters);

    match &args.outfile {
        Some(path) => Ok(write_results(executor::limit(results, args.limit), path)?),
        None => {
            let n = args.limit.unwrap_or(config.default_limit);
            let mut rows = 0;
            for approach in executor::limit(results, Some(n)) {
                writeln!(out, "{}", approach)?;
                rows += 1;
            }
            Ok(rows)
        }
    }
}

/// Outcome of one interactive line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFlow {
    Continue,
    Exit,
}

/// Read commands from `input` until `exit`, `quit` or end of input.
///
/// The dataset is loaded once for the whole session. A failing line is
/// reported on stderr and the session continues. If an input file changes
/// on disk a warning is printed; with `aggressive` the session ends.
pub fn interactive<R: BufRead, W: Write>(
    dataset: &Dataset,
    config: &Config,
    aggressive: bool,
    input: R,
    out: &mut W,
) -> CliResult<()> {
    let stamp = SourceStamp::take(&[config.neofile.as_path(), config.cadfile.as_path()]);
    log_event(Event::ShellStart);
    writeln!(out, "{}", BANNER)?;

    let mut lines = read_lines(input);
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                writeln!(out)?;
                break;
            }
        };

        let changed = stamp.changed();
        if !changed.is_empty() {
            let names: Vec<String> = changed.iter().map(|p| p.display().to_string()).collect();
            eprintln!(
                "The following file(s) have been modified since this interactive session began: {}",
                names.join(", ")
            );
            if aggressive {
                eprintln!("Preemptively terminating the session aggressively.");
                break;
            }
            eprintln!("To include these changes, please exit and restart this interactive session.");
        }

        match run_line(dataset, config, &line, out) {
            Ok(ShellFlow::Continue) => {}
            Ok(ShellFlow::Exit) => break,
            Err(e) => {
                log_event_with_fields(Event::ShellCommandFailed, &[("code", e.code_str())]);
                eprintln!("{}", e);
            }
        }
    }

    log_event(Event::ShellExit);
    Ok(())
}

/// Parse and run one interactive line
pub fn run_line<W: Write>(
    dataset: &Dataset,
    config: &Config,
    line: &str,
    out: &mut W,
) -> CliResult<ShellFlow> {
    let words = split_line(line)?;
    if words.is_empty() {
        return Ok(ShellFlow::Continue);
    }

    let parsed = match ShellLine::try_parse_from(words) {
        Ok(parsed) => parsed,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp
            | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                write!(out, "{}", e)?;
                return Ok(ShellFlow::Continue);
            }
            _ => return Err(CliError::usage_error(e.to_string().trim_end())),
        },
    };

    match parsed.command {
        ShellCommand::Inspect(args) => {
            inspect(dataset, &args, out)?;
        }
        ShellCommand::Query(args) => {
            query(dataset, &args, config, out)?;
        }
        ShellCommand::Exit => return Ok(ShellFlow::Exit),
    }

    Ok(ShellFlow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ApproachEvent, AstroObject};
    use chrono::NaiveDateTime;
    use std::io::Cursor;

    fn dataset() -> Dataset {
        let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
        Dataset::build(
            vec![
                AstroObject::new("433", Some("Eros".into()), Some(16.84), false),
                AstroObject::new("1862", Some("Apollo".into()), Some(1.5), true),
            ],
            (0..15)
                .map(|i| {
                    let des = if i % 3 == 0 { "1862" } else { "433" };
                    let time = at(&format!("2020-01-{:02} 12:00", i + 1));
                    ApproachEvent::new(des, time, 0.01 * (i + 1) as f64, 10.0)
                })
                .collect(),
        )
        .unwrap()
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.neofile, PathBuf::from("data/neos.csv"));
        assert_eq!(config.cadfile, PathBuf::from("data/cad.json"));
        assert_eq!(config.default_limit, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let config = Config {
            default_limit: 0,
            ..Config::default()
        };
        assert_eq!(config.validate().unwrap_err().code_str(), "NEODB_CLI_CONFIG_ERROR");

        let config = Config {
            log_level: "loud".into(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("neodb.json");
        fs::write(&path, r#"{"neofile": "a.csv", "default_limit": 3}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.neofile, PathBuf::from("a.csv"));
        assert_eq!(config.cadfile, PathBuf::from("data/cad.json"));
        assert_eq!(config.default_limit, 3);
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::try_parse_from(["neodb", "--neofile", "x.csv", "query"]).unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.neofile, PathBuf::from("x.csv"));
        assert_eq!(config.cadfile, PathBuf::from("data/cad.json"));
    }

    #[test]
    fn test_load_dataset_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            neofile: dir.path().join("neos.csv"),
            cadfile: dir.path().join("cad.json"),
            ..Config::default()
        };
        fs::write(&config.neofile, "pdes,name,diameter,pha\n433,Eros,16.84,N\n").unwrap();
        fs::write(
            &config.cadfile,
            r#"{"fields": ["des", "cd", "dist", "v_rel"], "data": [["433", "2020-Jan-01 00:00", "0.1", "5.0"]]}"#,
        )
        .unwrap();

        let dataset = load_dataset(&config).unwrap();
        assert_eq!(dataset.object_count(), 1);
        assert_eq!(dataset.approach_count(), 1);
    }

    #[test]
    fn test_load_dataset_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            neofile: dir.path().join("missing.csv"),
            cadfile: dir.path().join("missing.json"),
            ..Config::default()
        };
        let err = load_dataset(&config).unwrap_err();
        assert_eq!(err.code_str(), "NEODB_CLI_LOAD_FAILED");
        assert!(err.message().contains("missing.csv"));
    }

    #[test]
    fn test_load_dataset_unlinked_approach_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            neofile: dir.path().join("neos.csv"),
            cadfile: dir.path().join("cad.json"),
            ..Config::default()
        };
        fs::write(&config.neofile, "pdes,name,diameter,pha\n433,Eros,16.84,N\n").unwrap();
        fs::write(
            &config.cadfile,
            r#"{"fields": ["des", "cd", "dist", "v_rel"], "data": [["99942", "2020-Jan-01 00:00", "0.1", "5.0"]]}"#,
        )
        .unwrap();

        let err = load_dataset(&config).unwrap_err();
        assert_eq!(err.code_str(), "NEODB_CLI_LOAD_FAILED");
        assert!(err.message().contains("NEODB_DATA_INTEGRITY"));
    }

    #[test]
    fn test_inspect_by_name_verbose() {
        let dataset = dataset();
        let args = InspectArgs {
            pdes: None,
            name: Some("Apollo".into()),
            verbose: true,
        };
        let mut buf = Vec::new();
        let neo = inspect(&dataset, &args, &mut buf).unwrap().unwrap();
        assert_eq!(neo.designation(), "1862");

        let text = output(buf);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("NEO 1862 (Apollo)"));
        assert_eq!(lines.len(), 1 + 5);
        assert!(lines[1].starts_with("- On 2020-01-01 12:00"));
    }

    #[test]
    fn test_inspect_miss_prints_nothing_to_stdout() {
        let dataset = dataset();
        let args = InspectArgs {
            pdes: Some("99942".into()),
            name: None,
            verbose: false,
        };
        let mut buf = Vec::new();
        assert!(inspect(&dataset, &args, &mut buf).unwrap().is_none());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_query_default_limit_when_printing() {
        let dataset = dataset();
        let mut buf = Vec::new();
        let rows = query(&dataset, &QueryArgs::default(), &Config::default(), &mut buf).unwrap();
        assert_eq!(rows, 10);
        assert_eq!(output(buf).lines().count(), 10);
    }

    #[test]
    fn test_query_limit_zero_is_unbounded() {
        let dataset = dataset();
        let args = QueryArgs {
            limit: Some(0),
            ..QueryArgs::default()
        };
        let mut buf = Vec::new();
        assert_eq!(query(&dataset, &args, &Config::default(), &mut buf).unwrap(), 15);
    }

    #[test]
    fn test_query_outfile_unbounded_by_default() {
        let dataset = dataset();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let args = QueryArgs {
            outfile: Some(path.clone()),
            ..QueryArgs::default()
        };

        let mut buf = Vec::new();
        assert_eq!(query(&dataset, &args, &Config::default(), &mut buf).unwrap(), 15);
        assert!(buf.is_empty());

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 15);
    }

    #[test]
    fn test_query_bad_outfile_extension() {
        let dataset = dataset();
        let dir = tempfile::tempdir().unwrap();
        let args = QueryArgs {
            outfile: Some(dir.path().join("out.txt")),
            ..QueryArgs::default()
        };
        let err = query(&dataset, &args, &Config::default(), &mut Vec::new()).unwrap_err();
        assert_eq!(err.code_str(), "NEODB_CLI_WRITE_FAILED");
        assert!(!dir.path().join("out.txt").exists());
    }

    #[test]
    fn test_run_line_dispatch() {
        let dataset = dataset();
        let config = Config::default();
        let mut buf = Vec::new();

        assert_eq!(
            run_line(&dataset, &config, "q --hazardous --limit 2", &mut buf).unwrap(),
            ShellFlow::Continue
        );
        assert_eq!(output(buf).lines().count(), 2);

        let mut buf = Vec::new();
        assert_eq!(run_line(&dataset, &config, "exit", &mut buf).unwrap(), ShellFlow::Exit);
        assert_eq!(run_line(&dataset, &config, "quit", &mut buf).unwrap(), ShellFlow::Exit);
    }

    #[test]
    fn test_run_line_usage_error() {
        let dataset = dataset();
        let err = run_line(&dataset, &Config::default(), "query --bogus", &mut Vec::new()).unwrap_err();
        assert_eq!(err.code_str(), "NEODB_CLI_USAGE_ERROR");
    }

    #[test]
    fn test_run_line_help() {
        let dataset = dataset();
        let mut buf = Vec::new();
        let flow = run_line(&dataset, &Config::default(), "help", &mut buf).unwrap();
        assert_eq!(flow, ShellFlow::Continue);
        assert!(output(buf).contains("inspect"));
    }

    #[test]
    fn test_interactive_session_survives_errors() {
        let dataset = dataset();
        let input = Cursor::new("query --bogus\ninspect --pdes 433\nexit\ninspect --pdes 1862\n");
        let mut buf = Vec::new();

        interactive(&dataset, &Config::default(), false, input, &mut buf).unwrap();

        let text = output(buf);
        assert!(text.contains("NEO 433 (Eros)"));
        assert!(!text.contains("NEO 1862"));
    }

    #[test]
    fn test_interactive_ends_at_eof() {
        let dataset = dataset();
        let mut buf = Vec::new();
        interactive(&dataset, &Config::default(), false, Cursor::new(""), &mut buf).unwrap();
        assert!(output(buf).contains(PROMPT));
    }
}

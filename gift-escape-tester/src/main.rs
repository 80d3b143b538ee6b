mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use common::scenario::{ScenarioCtx, get_scenario, list_scenarios};
use common::{parse_params, split_csv};
use logic::{ScenarioResult, ScenarioRunner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored summary for a terminal
    Console,
    /// Machine-readable results with a timestamp
    Json,
    /// Markdown suitable for CI summaries
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "gift-escape-tester", version)]
#[command(about = "Headless playthrough scenarios for the Gift Escape puzzle card")]
struct Args {
    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated)
    #[arg(long = "seed", default_value = "1337")]
    seeds: String,

    /// Number of iterations per seed
    #[arg(long, default_value_t = 1)]
    iterations: usize,

    /// Personalization override, repeatable (e.g. --param name=Sam)
    #[arg(long = "param", value_name = "KEY=VALUE")]
    params: Vec<String>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Print per-step traces
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let results = run_scenarios(&args)?;
    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:20} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🎁 Gift Escape Playthrough Tester".bright_cyan().bold());
    println!("{}", "=================================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for (key, _) in list_scenarios() {
            if !scenarios.iter().any(|s| s == key) {
                scenarios.push(key.to_string());
            }
        }
    }
    scenarios
}

fn parse_seeds(raw: &str) -> Result<Vec<u64>> {
    split_csv(raw)
        .iter()
        .map(|token| {
            token
                .parse::<u64>()
                .with_context(|| format!("invalid seed {token:?}"))
        })
        .collect()
}

fn run_scenarios(args: &Args) -> Result<Vec<ScenarioResult>> {
    let overrides = parse_params(&args.params)?;
    let seeds = parse_seeds(&args.seeds)?;
    let runner = ScenarioRunner::new(
        ScenarioCtx {
            seed: 0,
            overrides,
            verbose: args.verbose,
        },
        args.iterations,
    );

    let mut results = Vec::new();
    for name in expand_scenarios(&args.scenarios) {
        let Some(scenario) = get_scenario(&name) else {
            eprintln!("{} unknown scenario {name:?}, skipping", "⚠️".yellow());
            continue;
        };
        log::info!("running {} over {} seed(s)", scenario.name(), seeds.len());
        results.extend(runner.run_scenario(scenario.as_ref(), &seeds));
    }
    Ok(results)
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => logic::reports::generate_json_report(&mut output_target, results)?,
        ReportFormat::Markdown => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Gift Escape Playthrough Results\n\n_No scenarios executed._"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        ReportFormat::Console => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target)?;
            writeln!(
                &mut output_target,
                "🏁 Total time: {:?}",
                start_time.elapsed()
            )?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            scenarios: "smoke".to_string(),
            list_scenarios: false,
            seeds: "1337".to_string(),
            iterations: 1,
            params: Vec::new(),
            report: ReportFormat::Json,
            verbose: false,
            output: None,
        }
    }

    fn temp_file(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "gift-escape-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    #[test]
    fn args_parse_repeated_params_and_report() {
        let args = Args::try_parse_from([
            "gift-escape-tester",
            "--param",
            "name=Sam",
            "--param",
            "date=1 Jan",
            "--report",
            "markdown",
            "--seed",
            "1,2",
        ])
        .expect("valid args");
        assert_eq!(args.params, vec!["name=Sam", "date=1 Jan"]);
        assert_eq!(args.report, ReportFormat::Markdown);
        assert_eq!(parse_seeds(&args.seeds).expect("seeds"), vec![1, 2]);
    }

    #[test]
    fn unknown_report_format_is_rejected() {
        assert!(Args::try_parse_from(["gift-escape-tester", "--report", "csv"]).is_err());
    }

    #[test]
    fn expand_all_adds_every_scenario_once() {
        let expanded = expand_scenarios("smoke,all");
        assert_eq!(expanded.len(), list_scenarios().len());
        assert_eq!(expanded[0], "smoke");
    }

    #[test]
    fn parse_seeds_reports_bad_tokens() {
        let err = parse_seeds("1,two").expect_err("bad seed");
        assert!(format!("{err:#}").contains("two"));
    }

    #[test]
    fn run_scenarios_skips_unknown_names_and_applies_params() {
        let args = Args {
            scenarios: "personalization,nope".to_string(),
            seeds: "1,2".to_string(),
            params: vec!["name=Sam".to_string()],
            ..base_args()
        };
        let results = run_scenarios(&args).expect("run");
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed));
    }

    #[test]
    fn run_scenarios_rejects_unknown_param_keys() {
        let args = Args {
            params: vec!["colour=red".to_string()],
            ..base_args()
        };
        assert!(run_scenarios(&args).is_err());
    }

    #[test]
    fn maybe_list_scenarios_writes_output() {
        let temp = temp_file("scenarios.txt");
        let args = Args {
            list_scenarios: true,
            output: Some(temp.clone()),
            ..base_args()
        };
        assert!(maybe_list_scenarios(&args).expect("list"));
        let content = std::fs::read_to_string(temp).expect("read");
        assert!(content.contains("Available scenarios"));
        assert!(content.contains("lights-out-solver"));
    }

    #[test]
    fn maybe_list_scenarios_returns_false_when_disabled() {
        assert!(!maybe_list_scenarios(&base_args()).expect("list"));
    }

    #[test]
    fn write_reports_markdown_empty_results() {
        let temp = temp_file("report.md");
        let args = Args {
            report: ReportFormat::Markdown,
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[], Instant::now()).expect("write");
        let content = std::fs::read_to_string(temp).expect("read");
        assert!(content.contains("No scenarios executed"));
    }

    #[test]
    fn write_reports_emits_json_for_results() {
        let temp = temp_file("report.json");
        let args = Args {
            output: Some(temp.clone()),
            ..base_args()
        };
        let results = run_scenarios(&args).expect("run");
        write_reports(&args, &results, Instant::now()).expect("write");
        let content = std::fs::read_to_string(temp).expect("read");
        let value: serde_json::Value = serde_json::from_str(&content).expect("json");
        assert_eq!(value["results"][0]["scenario_name"], "Full Playthrough");
        assert_eq!(value["failed"], 0);
    }

    #[test]
    fn output_target_stdout_writes() {
        let mut target = OutputTarget::new(None).expect("stdout");
        target.write_all(b"ok").expect("write");
        target.flush().expect("flush");
    }
}

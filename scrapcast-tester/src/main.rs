mod common;
mod logic;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use scrapcast_core::{JsonRegistry, Simulator};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::Instant;

use common::{parse_seeds, split_csv};
use logic::{
    LogicTester, ScenarioResult, SweepRecord, all_scenario_keys, get_scenario, list_scenarios,
    run_sweep,
};

#[derive(Debug, Parser)]
#[command(name = "scrapcast-tester", version = "0.1.0")]
#[command(about = "Automated logic checks and sensitivity sweeps for the Scrapcast simulator")]
struct Args {
    /// Scenarios to run (comma-separated, `all` for the whole catalog)
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Registry JSON to test instead of the built-in tables
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console", "csv"])]
    report: String,

    /// Points per feature in the sensitivity sweep
    #[arg(long, default_value_t = 11)]
    sweep_steps: usize,

    /// Verbose output
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
    let simulator = load_simulator(args.registry.as_deref())?;
    let scenarios = expand_scenarios(&args.scenarios);
    let seeds = parse_seeds(&args.seeds)?;

    let results = run_logic_scenarios(&args, &scenarios, &seeds, &simulator);
    let sweep = gather_sweep(&args, &simulator);

    write_reports(&args, &results, &sweep, start_time)?;

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
        writeln!(output_target.writer(), "  {key:25} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🏭 Scrapcast Automated Tester".bright_cyan().bold());
    println!("{}", "=============================".cyan());
}

fn load_simulator(path: Option<&Path>) -> Result<Simulator> {
    let Some(path) = path else {
        return Ok(Simulator::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read registry {}", path.display()))?;
    let simulator = Simulator::from_source(&JsonRegistry::new(json))
        .with_context(|| format!("registry {} is invalid", path.display()))?;
    log::info!("loaded registry from {}", path.display());
    Ok(simulator)
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for key in all_scenario_keys() {
            if !scenarios.contains(&key) {
                scenarios.push(key);
            }
        }
    }
    scenarios
}

fn run_logic_scenarios(
    args: &Args,
    scenarios: &[String],
    seeds: &[u64],
    simulator: &Simulator,
) -> Vec<ScenarioResult> {
    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let tester = LogicTester::new(simulator.clone(), args.verbose);
    let mut results = Vec::new();
    for scenario_name in scenarios {
        if let Some(scenario) = get_scenario(scenario_name) {
            results.extend(tester.run_scenario(&scenario, seeds, args.iterations));
        } else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
        }
    }
    results
}

fn gather_sweep(args: &Args, simulator: &Simulator) -> Vec<SweepRecord> {
    if matches!(args.report.as_str(), "console" | "csv") {
        run_sweep(simulator.registry(), args.sweep_steps)
    } else {
        Vec::new()
    }
}

fn write_reports(
    args: &Args,
    results: &[ScenarioResult],
    sweep: &[SweepRecord],
    start_time: Instant,
) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => {
            if results.is_empty() {
                writeln!(&mut output_target, "[]")?;
            } else {
                logic::reports::generate_json_report(&mut output_target, results)?;
            }
        }
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Scrapcast Logic Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        "csv" => logic::reports::generate_csv_report(&mut output_target, sweep)?,
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No logic scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    sweep,
                    start_time.elapsed(),
                )?;
            }
        }
    }

    if !matches!(args.report.as_str(), "json" | "csv") {
        let duration = start_time.elapsed();
        writeln!(&mut output_target)?;
        writeln!(&mut output_target, "🏁 Total time: {duration:?}")?;
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
    use std::time::Duration;

    fn base_args() -> Args {
        Args {
            scenarios: "baseline".to_string(),
            list_scenarios: false,
            seeds: "1337".to_string(),
            iterations: 1,
            registry: None,
            report: "json".to_string(),
            sweep_steps: 3,
            verbose: false,
            output: None,
        }
    }

    fn temp(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("scrapcast-main-{label}-{}", std::process::id()))
    }

    fn sample_result(passed: bool) -> ScenarioResult {
        ScenarioResult {
            scenario_name: "Baseline At Means".to_string(),
            seed: 1,
            passed,
            iterations_run: 1,
            successful_iterations: usize::from(passed),
            failures: Vec::new(),
            average_duration: Duration::from_micros(5),
        }
    }

    #[test]
    fn expands_all_keyword_without_duplicates() {
        let expanded = expand_scenarios("clamp,all");
        assert_eq!(expanded[0], "clamp");
        assert_eq!(expanded.len(), 8);
        assert_eq!(expanded.iter().filter(|s| *s == "clamp").count(), 1);
    }

    #[test]
    fn expand_scenarios_without_all_preserves_order() {
        let expanded = expand_scenarios("reset, baseline");
        assert_eq!(expanded, vec!["reset".to_string(), "baseline".to_string()]);
    }

    #[test]
    fn unknown_scenarios_are_skipped() {
        let sim = Simulator::default();
        let results = run_logic_scenarios(&base_args(), &["nope".to_string()], &[1], &sim);
        assert!(results.is_empty());
    }

    #[test]
    fn sweep_only_for_console_and_csv() {
        let sim = Simulator::default();
        assert!(gather_sweep(&base_args(), &sim).is_empty());
        let args = Args {
            report: "csv".to_string(),
            ..base_args()
        };
        assert!(!gather_sweep(&args, &sim).is_empty());
    }

    #[test]
    fn loads_registry_file() {
        let path = temp("registry.json");
        let json = scrapcast_core::ModelRegistry::builtin().to_json().unwrap();
        std::fs::write(&path, json).unwrap();
        let sim = load_simulator(Some(&path)).unwrap();
        assert_eq!(sim.registry(), &scrapcast_core::ModelRegistry::builtin());
    }

    #[test]
    fn rejects_missing_and_invalid_registry_files() {
        let missing = temp("missing.json");
        let err = load_simulator(Some(&missing)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read registry"));

        let broken = temp("broken.json");
        std::fs::write(&broken, r#"{"stages": []}"#).unwrap();
        let err = load_simulator(Some(&broken)).unwrap_err();
        assert!(format!("{err:#}").contains("no stages"), "{err:#}");
    }

    #[test]
    fn maybe_list_scenarios_writes_output() {
        let path = temp("list.txt");
        let args = Args {
            list_scenarios: true,
            output: Some(path.clone()),
            ..base_args()
        };
        assert!(maybe_list_scenarios(&args).unwrap());
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("Available scenarios"));
        assert!(content.contains("banbury-current"));
    }

    #[test]
    fn maybe_list_scenarios_returns_false_when_disabled() {
        assert!(!maybe_list_scenarios(&base_args()).unwrap());
    }

    #[test]
    fn write_reports_json_empty() {
        let path = temp("empty.json");
        let args = Args {
            output: Some(path.clone()),
            ..base_args()
        };
        write_reports(&args, &[], &[], Instant::now()).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap().trim(), "[]");
    }

    #[test]
    fn write_reports_markdown_empty_results() {
        let path = temp("empty.md");
        let args = Args {
            report: "markdown".to_string(),
            output: Some(path.clone()),
            ..base_args()
        };
        write_reports(&args, &[], &[], Instant::now()).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("No scenarios executed"));
    }

    #[test]
    fn write_reports_console_with_results() {
        let path = temp("console.txt");
        let args = Args {
            report: "console".to_string(),
            output: Some(path.clone()),
            ..base_args()
        };
        write_reports(&args, &[sample_result(true)], &[], Instant::now()).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("Logic Test Results Summary"));
        assert!(content.contains("Total time"));
    }
}

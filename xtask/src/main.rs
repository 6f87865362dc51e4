use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Arbor workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the recognition benchmarks serially and with `parallel`, then compare
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH: &str = "recognition_benchmark";

/// (baseline name, cargo features)
const CONFIGS: &[(&str, Option<&str>)] = &[("serial", None), ("parallel", Some("parallel"))];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running recognition benchmarks...");

    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--bench", BENCH, "--release", "--all-features"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    for &(baseline, features) in CONFIGS {
        println!("\n>>> Benchmarking baseline: {baseline}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.arg("bench").arg("--bench").arg(BENCH);
        if let Some(features) = features {
            cmd.arg("--features").arg(features);
        }

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        cmd.arg("--save-baseline").arg(baseline);

        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench for {baseline}"))?;

        if status.success() {
            println!("Finished {baseline} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: Benchmark failed for {baseline}");
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Recognition Benchmark Report")?;
    writeln!(file)?;

    write!(file, "| Workload |")?;
    for &(baseline, _) in CONFIGS {
        write!(file, " {baseline} (elem/s) | vs serial |")?;
    }
    writeln!(file)?;

    write!(file, "|---|")?;
    for _ in CONFIGS {
        write!(file, "---|---|")?;
    }
    writeln!(file)?;

    for (workload, by_baseline) in &results {
        write!(file, "| {workload} |")?;
        let serial = by_baseline.get("serial").copied().unwrap_or(0.0);

        for &(baseline, _) in CONFIGS {
            match by_baseline.get(baseline) {
                Some(&ops) => {
                    let rel = if serial > 0.0 { ops / serial } else { 0.0 };
                    write!(file, " {} | **{rel:.2}x** |", format_rate(ops))?;
                }
                None => write!(file, " N/A | - |")?,
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_rate(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks `dir` for `<workload...>/<baseline>/estimates.json`.
fn collect_results(
    root: &Path,
    dir: &Path,
    results: &mut BTreeMap<String, BTreeMap<String, f64>>,
) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Ok(()),
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(root, &path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(baseline_dir) = path.parent() else {
            continue;
        };
        let Some(workload_dir) = baseline_dir.parent() else {
            continue;
        };
        let baseline = baseline_dir
            .file_name()
            .and_then(|s| s.to_str())
            .context("non-utf8 baseline directory")?
            .to_string();
        if !CONFIGS.iter().any(|&(name, _)| name == baseline) {
            continue;
        }
        let workload = workload_dir
            .strip_prefix(root)
            .unwrap_or(workload_dir)
            .display()
            .to_string();

        let mut elements = 1.0;
        let mut is_throughput = false;
        if let Ok(content) = fs::read_to_string(baseline_dir.join("benchmark.json")) {
            let json: serde_json::Value = serde_json::from_str(&content)
                .with_context(|| format!("parsing benchmark.json for {workload}"))?;
            if let Some(t) = json.get("throughput").and_then(|t| t.get("Elements")) {
                elements = t.as_f64().unwrap_or(1.0);
                is_throughput = true;
            }
        }

        let content = fs::read_to_string(&path)?;
        let json: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("parsing estimates for {workload}"))?;
        let time_ns = json
            .get("mean")
            .and_then(|m| m.get("point_estimate"))
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(0.0);

        if time_ns > 0.0 {
            let metric = if is_throughput {
                (elements * 1e9) / time_ns
            } else {
                1e9 / time_ns
            };
            results.entry(workload).or_default().insert(baseline, metric);
        }
    }

    Ok(())
}

//! Run the device-transpile workout against the configured service.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use quench_gym::{BenchmarkRecord, CASES, DeviceTranspileWorkout};
use quench_service::{BASE_URL, ServiceClient, ServiceOptions};

use super::common::{default_state_dir, load_config};

pub async fn execute(
    config_path: Option<&Path>,
    case: Option<&str>,
    iterations: Option<u32>,
    export: Option<&Path>,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(iterations) = iterations {
        config.suite.iterations = iterations;
    }

    let target = config.target.build()?;
    let options = ServiceOptions {
        base_url: config
            .service
            .url
            .clone()
            .unwrap_or_else(|| BASE_URL.to_string()),
        token: config.service.token.clone(),
        ai: config.service.ai,
        optimization_level: config.service.optimization_level,
        ..ServiceOptions::default()
    };
    let client = ServiceClient::new(&target, options)?;
    let workout = DeviceTranspileWorkout::new(&client, &config, &target);

    let cases: Vec<&str> = match case {
        Some(name) => vec![name],
        None => CASES.to_vec(),
    };

    println!(
        "{} device-transpile workout: {} case(s) against {} ({} qubits, 2q gate {})",
        style("Running").green().bold(),
        cases.len(),
        style(target.name()).cyan(),
        target.num_qubits(),
        style(target.two_qubit_gate()).yellow(),
    );

    let progress = ProgressBar::new(cases.len() as u64).with_style(
        ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut records = Vec::with_capacity(cases.len());
    for case in &cases {
        progress.set_message(case.to_string());
        let record = workout.run(case).await?;
        progress.inc(1);
        records.push(record);
    }
    progress.finish_and_clear();

    report(&records)?;
    persist(&records, export)?;

    Ok(())
}

/// Print a one-line summary per record.
fn report(records: &[BenchmarkRecord]) -> Result<()> {
    for record in records {
        let gate_count = record.extra["gate_count_2q"].as_u64().unwrap_or(0);
        let depth = record.extra["depth_2q"].as_u64().unwrap_or(0);
        let flagged = record.extra.contains_key("unexpected_2q_gates");

        println!(
            "  {} {:<40} {:>9.3?}  gate_count_2q={:<6} depth_2q={:<6}{}",
            style("✓").green().bold(),
            record.name,
            record.timing.mean,
            gate_count,
            depth,
            if flagged {
                style("  [2q gate-name mismatch]").red().to_string()
            } else {
                String::new()
            }
        );
    }
    Ok(())
}

/// Write records as JSON: to the export path when given, always to the
/// state directory for run history.
fn persist(records: &[BenchmarkRecord], export: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;

    if let Some(path) = export {
        std::fs::write(path, &json)
            .with_context(|| format!("Failed to export records to {}", path.display()))?;
        println!("Exported records to {}", style(path.display()).cyan());
    } else {
        println!("{json}");
    }

    let runs_dir = default_state_dir()?.join("runs");
    std::fs::create_dir_all(&runs_dir)?;
    let run_id = uuid::Uuid::new_v4();
    let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
    let history = runs_dir.join(format!("run-{stamp}-{run_id}.json"));
    std::fs::write(&history, &json)
        .with_context(|| format!("Failed to record run history at {}", history.display()))?;
    info!("Run history saved to {}", history.display());

    Ok(())
}

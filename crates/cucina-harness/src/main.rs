use std::path::PathBuf;
use std::process;

mod report;
mod runner;
mod scenes;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut baseline_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut frame_count = 600u64;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--baseline" => {
                i += 1;
                baseline_path = Some(PathBuf::from(&args[i]));
            }
            "--output" => {
                i += 1;
                output_path = Some(PathBuf::from(&args[i]));
            }
            "--frames" => {
                i += 1;
                frame_count = args[i].parse().expect("invalid --frames value");
            }
            "--help" | "-h" => {
                eprintln!("Usage: scenario-runner [OPTIONS]");
                eprintln!("  --baseline <path>   Load baseline JSON and flag behavior changes");
                eprintln!("  --output <path>     Save current results as JSON baseline");
                eprintln!("  --frames <n>        Frames per scenario (default: 600)");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let scenario_configs = scenes::standard_scenarios();
    let mut results = Vec::new();

    for config in &scenario_configs {
        match runner::run_scenario(config, frame_count) {
            Ok(stats) => results.push(stats),
            Err(e) => {
                eprintln!("ERROR: scenario '{}' failed: {}", config.name, e);
                process::exit(1);
            }
        }
    }

    println!("\n## Scenario Results\n");
    println!("{}", report::format_markdown(&results));

    if let Some(ref path) = output_path {
        let baseline = report::Baseline {
            label: format!("run-{}", std::process::id()),
            results: results.clone(),
        };
        report::save_baseline(path, &baseline).expect("failed to save baseline");
        log::info!("Saved baseline to {}", path.display());
    }

    if let Some(ref path) = baseline_path {
        if let Some(baseline) = report::load_baseline(path) {
            let diffs = report::compare(&results, &baseline);
            println!("{}", report::format_comparison(&diffs));
            if !diffs.is_empty() {
                eprintln!(
                    "ERROR: {} behavior changes detected, exiting with code 1",
                    diffs.len()
                );
                process::exit(1);
            }
        } else {
            log::warn!("Baseline file not found: {}", path.display());
        }
    }

    log::info!("All scenarios complete.");
}

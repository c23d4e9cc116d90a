use std::path::Path;

use crate::runner::RunStats;

/// A saved run of the full scenario suite.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Baseline {
    pub label: String,
    pub results: Vec<RunStats>,
}

/// Load a baseline from a JSON file. Returns None if the file doesn't exist
/// or fails to parse.
pub fn load_baseline(path: &Path) -> Option<Baseline> {
    let contents = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Save a baseline to a JSON file.
pub fn save_baseline(path: &Path, baseline: &Baseline) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(baseline).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Compare current results against a baseline. The simulation is
/// deterministic, so any outcome difference at the same frame count means
/// behavior changed. Returns (scenario, field, baseline, current) rows.
pub fn compare(current: &[RunStats], baseline: &Baseline) -> Vec<(String, &'static str, String, String)> {
    let mut diffs = Vec::new();

    for result in current {
        let Some(base) = baseline
            .results
            .iter()
            .find(|b| b.scenario == result.scenario && b.frames == result.frames)
        else {
            continue;
        };
        let fields: [(&'static str, String, String); 5] = [
            ("score", base.score.to_string(), result.score.to_string()),
            ("lives", base.lives.to_string(), result.lives.to_string()),
            (
                "hostiles_alive",
                base.hostiles_alive.to_string(),
                result.hostiles_alive.to_string(),
            ),
            (
                "chunks_loaded",
                base.chunks_loaded.to_string(),
                result.chunks_loaded.to_string(),
            ),
            (
                "items_held",
                base.items_held.to_string(),
                result.items_held.to_string(),
            ),
        ];
        for (field, expected, actual) in fields {
            if expected != actual {
                diffs.push((result.scenario.clone(), field, expected, actual));
            }
        }
    }

    diffs
}

/// Format results as a markdown summary table.
pub fn format_markdown(results: &[RunStats]) -> String {
    let mut out = String::new();
    out.push_str(
        "| Scenario | Frames | Score | Lives | Hostiles | Chunks | Held | Over | Sim (ms) |\n",
    );
    out.push_str(
        "|----------|--------|-------|-------|----------|--------|------|------|----------|\n",
    );

    for r in results {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} | {:.1} |\n",
            r.scenario,
            r.frames,
            r.score,
            r.lives,
            r.hostiles_alive,
            r.chunks_loaded,
            r.items_held,
            r.game_over,
            r.elapsed_ms,
        ));
    }

    out
}

/// Format behavior differences against the baseline.
pub fn format_comparison(diffs: &[(String, &'static str, String, String)]) -> String {
    if diffs.is_empty() {
        return "All scenarios match the baseline.\n".to_string();
    }

    let mut out = String::new();
    out.push_str("BEHAVIOR CHANGED vs baseline:\n");
    for (scenario, field, expected, actual) in diffs {
        out.push_str(&format!(
            "  - {scenario}.{field}: baseline {expected}, now {actual}\n"
        ));
    }
    out
}

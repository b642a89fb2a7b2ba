use serde::Serialize;

/// Everything measured for one maze on one backend.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub maze: &'static str,
    pub backend: &'static str,
    pub rooms: usize,
    pub corridors: usize,
    pub memory_bytes: usize,
    pub build_ms: f64,
    pub bfs_visited: usize,
    pub bfs_ms: f64,
    pub dfs_visited: usize,
    pub dfs_ms: f64,
    pub connected: bool,
    pub target: u32,
    /// `None` when the far room is unreachable.
    pub path_hops: Option<usize>,
    pub path_weight: Option<f64>,
    pub path_ms: f64,
    pub first_step: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub seed: u64,
    pub rooms: u32,
    pub runs: Vec<RunReport>,
}

/// Print `data` as JSON (if `json`) or call `display_fn` for human-readable output.
pub fn print_output<T: Serialize>(
    data: &T,
    json: bool,
    display_fn: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if json {
        let json = serde_json::to_string_pretty(data)?;
        println!("{json}");
    } else {
        display_fn(data);
    }
    Ok(())
}

pub fn print_tables(report: &BenchReport) {
    println!("maze-graph-bench");
    println!("================");
    println!("rooms: {}  seed: {}", report.rooms, report.seed);

    let mut current = "";
    for run in &report.runs {
        if run.maze != current {
            current = run.maze;
            println!();
            println!("--- {} ---", run.maze);
            println!(
                "{:<9} {:>9} {:>9} {:>9} {:>9} {:>9} {:>6} {:>9} {:>6}",
                "backend", "corridors", "~MB", "build", "bfs", "dfs", "conn", "path", "hops"
            );
            println!(
                "{:-<9} {:->9} {:->9} {:->9} {:->9} {:->9} {:->6} {:->9} {:->6}",
                "", "", "", "", "", "", "", "", ""
            );
        }
        println!(
            "{:<9} {:>9} {:>9.1} {:>7.1}ms {:>7.1}ms {:>7.1}ms {:>6} {:>7.1}ms {:>6}",
            run.backend,
            run.corridors,
            run.memory_bytes as f64 / 1_048_576.0,
            run.build_ms,
            run.bfs_ms,
            run.dfs_ms,
            if run.connected { "yes" } else { "no" },
            run.path_ms,
            run.path_hops
                .map_or_else(|| "-".to_string(), |h| h.to_string()),
        );
        if let Some(weight) = run.path_weight {
            println!(
                "{:<9} 0 -> {}: weight {:.0}, first step {}",
                "",
                run.target,
                weight,
                run.first_step
                    .map_or_else(|| "-".to_string(), |s| s.to_string())
            );
        }
    }
    println!();
}

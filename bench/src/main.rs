mod app;
mod generators;
mod output;

use std::time::Instant;

use clap::Parser;
use maze_graph_core::{AdjacencyList, BoolMatrix, EdgeStorage, Graph, WeightMatrix};

use crate::app::{Cli, Maze, Storage};
use crate::output::{BenchReport, RunReport};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Engine warnings on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.json {
        let level = if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        };
        env_logger::Builder::new()
            .filter_module("maze_graph_core", level)
            .filter_module("maze_graph_bench", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    let mut runs = Vec::new();
    for maze in cli.mode.expand() {
        for storage in cli.backend.expand() {
            log::debug!("generating {} maze on {} storage", maze.label(), storage.label());
            let run = match storage {
                Storage::List => run_benchmark::<AdjacencyList>(maze, storage, cli.rooms, cli.seed),
                Storage::Matrix => run_benchmark::<BoolMatrix>(maze, storage, cli.rooms, cli.seed),
                Storage::Weighted => {
                    run_benchmark::<WeightMatrix>(maze, storage, cli.rooms, cli.seed)
                }
            };
            runs.push(run);
        }
    }

    let report = BenchReport {
        seed: cli.seed,
        rooms: cli.rooms,
        runs,
    };
    output::print_output(&report, cli.json, output::print_tables)
}

fn millis(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}

fn run_benchmark<S: EdgeStorage>(
    maze: Maze,
    storage: Storage,
    rooms: u32,
    seed: u64,
) -> RunReport {
    let t = Instant::now();
    let graph: Graph<u32, S> = generators::generate(maze, rooms, seed);
    let build_ms = millis(t);

    let t = Instant::now();
    let bfs_visited = graph.bfs(&0).count();
    let bfs_ms = millis(t);

    let t = Instant::now();
    let dfs_visited = graph.dfs(&0).count();
    let dfs_ms = millis(t);

    let connected = graph.is_connected();

    // Entrance is room 0, exit the last room.
    let target = rooms - 1;
    let t = Instant::now();
    let path: Vec<u32> = graph.shortest_path(&0, &target).collect();
    let path_ms = millis(t);

    let (path_hops, path_weight) = if path.is_empty() {
        log::warn!("{} maze: room {} unreachable from 0", maze.label(), target);
        (None, None)
    } else {
        (Some(path.len() - 1), graph.path_weight(&path))
    };

    RunReport {
        maze: maze.label(),
        backend: storage.label(),
        rooms: graph.len(),
        corridors: graph.edge_count(),
        memory_bytes: graph.memory_usage(),
        build_ms,
        bfs_visited,
        bfs_ms,
        dfs_visited,
        dfs_ms,
        connected,
        target,
        path_hops,
        path_weight,
        path_ms,
        first_step: path.get(1).copied(),
    }
}

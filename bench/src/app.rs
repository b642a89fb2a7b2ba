use clap::{Parser, ValueEnum};

/// maze-graph-bench - deterministic maze generators timed against every edge storage
#[derive(Debug, Parser)]
#[command(name = "maze-graph-bench", version, about, long_about = None)]
pub struct Cli {
    /// Maze shape to generate.
    #[arg(value_enum, default_value_t = Mode::All)]
    pub mode: Mode,

    /// Number of rooms (vertices) per maze. Matrix storage is quadratic in this.
    #[arg(
        short,
        long,
        env = "MAZE_BENCH_ROOMS",
        default_value_t = 2_500,
        value_parser = clap::value_parser!(u32).range(2..=8_000)
    )]
    pub rooms: u32,

    /// Edge storage to benchmark.
    #[arg(short, long, value_enum, env = "MAZE_BENCH_BACKEND", default_value_t = Backend::All)]
    pub backend: Backend,

    /// Seed for the maze generators.
    #[arg(short, long, env = "MAZE_BENCH_SEED", default_value_t = 42)]
    pub seed: u64,

    /// Emit the report as JSON instead of tables.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Every generator below.
    All,
    /// Perfect grid maze carved by randomized DFS (exactly one route between rooms).
    Grid,
    /// Grid maze with extra passages knocked through (loops, many routes).
    Braid,
    /// Random rooms joined by corridors of varying length.
    Rooms,
    /// One long corridor (worst-case path length).
    Chain,
}

impl Mode {
    /// The concrete generators this selection expands to.
    pub fn expand(self) -> Vec<Maze> {
        match self {
            Mode::All => vec![Maze::Grid, Maze::Braid, Maze::Rooms, Maze::Chain],
            Mode::Grid => vec![Maze::Grid],
            Mode::Braid => vec![Maze::Braid],
            Mode::Rooms => vec![Maze::Rooms],
            Mode::Chain => vec![Maze::Chain],
        }
    }
}

/// One maze generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maze {
    Grid,
    Braid,
    Rooms,
    Chain,
}

impl Maze {
    pub fn label(self) -> &'static str {
        match self {
            Maze::Grid => "grid",
            Maze::Braid => "braid",
            Maze::Rooms => "rooms",
            Maze::Chain => "chain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    All,
    /// Adjacency lists, hop-count shortest paths.
    List,
    /// Boolean matrix, hop-count shortest paths.
    Matrix,
    /// Weight matrix, Dijkstra shortest paths.
    Weighted,
}

impl Backend {
    pub fn expand(self) -> Vec<Storage> {
        match self {
            Backend::All => vec![Storage::List, Storage::Matrix, Storage::Weighted],
            Backend::List => vec![Storage::List],
            Backend::Matrix => vec![Storage::Matrix],
            Backend::Weighted => vec![Storage::Weighted],
        }
    }
}

/// One edge storage of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    List,
    Matrix,
    Weighted,
}

impl Storage {
    pub fn label(self) -> &'static str {
        match self {
            Storage::List => "list",
            Storage::Matrix => "matrix",
            Storage::Weighted => "weighted",
        }
    }
}

// Generators: deterministic for a given seed, rooms numbered 0..n, every
// corridor weighted 1..=9 so the weighted backend has something to minimise.

use maze_graph_core::{EdgeStorage, Graph};

use crate::app::Maze;

/// Simple LCG for deterministic, fast pseudo-random numbers.
pub struct FastRng(u64);

impl FastRng {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }

    pub fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    fn weight(&mut self) -> f64 {
        (self.next(9) + 1) as f64
    }
}

/// Build `maze` with `rooms` rooms.
pub fn generate<S: EdgeStorage>(maze: Maze, rooms: u32, seed: u64) -> Graph<u32, S> {
    let mut rng = FastRng::new(seed);
    match maze {
        Maze::Grid => gen_grid(rooms, &mut rng),
        Maze::Braid => gen_braid(rooms, &mut rng),
        Maze::Rooms => gen_rooms(rooms, &mut rng),
        Maze::Chain => gen_chain(rooms, &mut rng),
    }
}

fn empty_maze<S: EdgeStorage>(rooms: u32) -> Graph<u32, S> {
    let mut graph = Graph::with_capacity(rooms as usize);
    for room in 0..rooms {
        graph.add_vertex(room);
    }
    graph
}

/// Width of the square-ish grid holding `rooms` cells; the last row may be short.
fn grid_width(rooms: u32) -> u32 {
    ((rooms as f64).sqrt().ceil() as u32).max(1)
}

fn grid_neighbors(cell: u32, width: u32, rooms: u32) -> Vec<u32> {
    let (x, y) = (cell % width, cell / width);
    let mut out = Vec::with_capacity(4);
    if x > 0 {
        out.push(cell - 1);
    }
    if x + 1 < width && cell + 1 < rooms {
        out.push(cell + 1);
    }
    if y > 0 {
        out.push(cell - width);
    }
    if cell + width < rooms {
        out.push(cell + width);
    }
    out
}

/// Perfect maze: randomized DFS carving over a grid, so the corridors form a
/// spanning tree and every pair of rooms has exactly one route.
fn gen_grid<S: EdgeStorage>(rooms: u32, rng: &mut FastRng) -> Graph<u32, S> {
    let mut graph = empty_maze(rooms);
    let width = grid_width(rooms);
    let mut carved = vec![false; rooms as usize];
    let mut stack = vec![0u32];
    carved[0] = true;

    while let Some(&cell) = stack.last() {
        let open: Vec<u32> = grid_neighbors(cell, width, rooms)
            .into_iter()
            .filter(|&n| !carved[n as usize])
            .collect();
        if open.is_empty() {
            stack.pop();
            continue;
        }
        let next = open[rng.next(open.len() as u64) as usize];
        carved[next as usize] = true;
        let weight = rng.weight();
        graph.add_edge(&cell, &next, weight);
        stack.push(next);
    }

    graph
}

/// Braid maze: a perfect maze with roughly one wall in ten knocked through.
fn gen_braid<S: EdgeStorage>(rooms: u32, rng: &mut FastRng) -> Graph<u32, S> {
    let mut graph = gen_grid(rooms, rng);
    let width = grid_width(rooms);

    for cell in 0..rooms {
        if rng.next_f64() >= 0.1 {
            continue;
        }
        let walls: Vec<u32> = grid_neighbors(cell, width, rooms)
            .into_iter()
            .filter(|n| !graph.has_edge(&cell, n))
            .collect();
        if let Some(&other) = walls.get(rng.next(walls.len().max(1) as u64) as usize) {
            let weight = rng.weight();
            graph.add_edge(&cell, &other, weight);
        }
    }

    graph
}

/// Random rooms: each new room opens onto one earlier room (so the maze stays
/// connected), with occasional extra corridors back to any earlier room.
fn gen_rooms<S: EdgeStorage>(rooms: u32, rng: &mut FastRng) -> Graph<u32, S> {
    let mut graph = empty_maze(rooms);

    for room in 1..rooms {
        let parent = rng.next(room as u64) as u32;
        let weight = rng.weight();
        graph.add_edge(&room, &parent, weight);

        if rng.next_f64() < 0.3 {
            let other = rng.next(room as u64) as u32;
            if other != parent {
                let weight = rng.weight();
                graph.add_edge(&room, &other, weight);
            }
        }
    }

    graph
}

/// A single corridor 0 - 1 - ... - n-1.
fn gen_chain<S: EdgeStorage>(rooms: u32, rng: &mut FastRng) -> Graph<u32, S> {
    let mut graph = empty_maze(rooms);
    for room in 1..rooms {
        let weight = rng.weight();
        graph.add_edge(&(room - 1), &room, weight);
    }
    graph
}

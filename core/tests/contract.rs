//! The same behavioural contract checked against every edge storage.

use std::collections::VecDeque;

use maze_graph_core::{EdgeStorage, Error, Graph, WalkKind};

/// Deterministic LCG so generated graphs are reproducible.
struct FastRng(u64);

impl FastRng {
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

/// Random graph on `n` vertices with integer weights in 1..=9.
fn random_graph<S: EdgeStorage>(seed: u64, n: u32, edges: u32) -> Graph<u32, S> {
    let mut rng = FastRng(seed);
    let mut g = Graph::new();
    for v in 0..n {
        g.add_vertex(v);
    }
    for _ in 0..edges {
        let a = rng.next(n as u64) as u32;
        let b = rng.next(n as u64) as u32;
        let w = (rng.next(9) + 1) as f64;
        if a != b && !g.has_edge(&a, &b) {
            g.add_edge(&a, &b, w);
        }
    }
    g
}

/// Hop distances from `start` by an independent BFS over `neighbors`.
fn hop_distances<S: EdgeStorage>(g: &Graph<u32, S>, start: u32) -> Vec<Option<usize>> {
    let mut dist = vec![None; g.len()];
    let mut queue = VecDeque::new();
    dist[start as usize] = Some(0);
    queue.push_back(start);
    while let Some(v) = queue.pop_front() {
        let d = dist[v as usize].unwrap();
        for n in g.neighbors(&v) {
            if dist[n as usize].is_none() {
                dist[n as usize] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

/// All-pairs least weights by Floyd-Warshall, as a reference.
fn weight_table<S: EdgeStorage>(g: &Graph<u32, S>) -> Vec<Vec<f64>> {
    let n = g.len();
    let mut d = vec![vec![f64::INFINITY; n]; n];
    for i in 0..n {
        d[i][i] = 0.0;
        for j in 0..n {
            if let Some(w) = g.edge_weight(&(i as u32), &(j as u32)) {
                d[i][j] = d[i][j].min(w);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if d[i][k] + d[k][j] < d[i][j] {
                    d[i][j] = d[i][k] + d[k][j];
                }
            }
        }
    }
    d
}

macro_rules! backend_contract {
    ($name:ident, $storage:ty) => {
        mod $name {
            use super::*;

            type G = Graph<u32, $storage>;

            #[test]
            fn bfs_visits_each_reachable_vertex_once() {
                for seed in 1..20 {
                    let g: G = random_graph(seed, 30, 35);
                    let order: Vec<u32> = g.bfs(&0).collect();
                    let mut sorted = order.clone();
                    sorted.sort();
                    sorted.dedup();
                    assert_eq!(sorted.len(), order.len());

                    let reachable = hop_distances(&g, 0).iter().filter(|d| d.is_some()).count();
                    assert_eq!(order.len(), reachable);
                    assert_eq!(g.is_connected(), reachable == g.len());
                }
            }

            #[test]
            fn bfs_order_is_non_decreasing_in_distance() {
                let g: G = random_graph(7, 25, 40);
                let dist = hop_distances(&g, 0);
                let order: Vec<usize> = g
                    .bfs(&0)
                    .map(|v| dist[v as usize].unwrap())
                    .collect();
                assert!(order.windows(2).all(|w| w[0] <= w[1]));
            }

            #[test]
            fn dfs_visits_each_reachable_vertex_once() {
                for seed in 1..20 {
                    let g: G = random_graph(seed, 30, 35);
                    let mut order: Vec<u32> = g.dfs(&0).collect();
                    let len = order.len();
                    order.sort();
                    order.dedup();
                    assert_eq!(order.len(), len);
                    let reachable = hop_distances(&g, 0).iter().filter(|d| d.is_some()).count();
                    assert_eq!(len, reachable);
                }
            }

            #[test]
            fn dfs_order_is_a_discovery_order() {
                // Every vertex after the first is adjacent to some earlier one
                // that was still on the backtrack stack; at minimum it must be
                // adjacent to an earlier vertex.
                let g: G = random_graph(11, 20, 30);
                let order: Vec<u32> = g.dfs(&0).collect();
                for (i, v) in order.iter().enumerate().skip(1) {
                    assert!(order[..i].iter().any(|u| g.has_edge(u, v)));
                }
            }

            #[test]
            fn shortest_paths_are_valid_and_minimal() {
                for seed in 1..10 {
                    let g: G = random_graph(seed, 18, 30);
                    let table = weight_table(&g);
                    let hops = hop_distances(&g, 0);
                    for t in 0..g.len() as u32 {
                        let path: Vec<u32> = g.shortest_path(&0, &t).collect();
                        match hops[t as usize] {
                            None => assert!(path.is_empty()),
                            Some(h) => {
                                assert_eq!(path.first(), Some(&0));
                                assert_eq!(path.last(), Some(&t));
                                let weight = g.path_weight(&path).unwrap();
                                if <$storage as EdgeStorage>::WEIGHTED {
                                    assert_eq!(weight, table[0][t as usize]);
                                } else {
                                    assert_eq!(path.len() - 1, h);
                                }
                            }
                        }
                    }
                }
            }

            #[test]
            fn removing_vertex_shrinks_and_hides_it() {
                let mut g: G = random_graph(3, 15, 30);
                let before = g.len();
                assert_eq!(g.remove_vertex(&7), Some(7));
                assert_eq!(g.len(), before - 1);
                for v in g.vertices().copied().collect::<Vec<_>>() {
                    assert!(g.bfs(&v).all(|x| x != 7));
                    assert!(!g.neighbors(&v).contains(&7));
                }
                assert_eq!(g.remove_vertex(&7), None);
                assert_eq!(g.len(), before - 1);
            }

            #[test]
            fn add_then_remove_edge_restores_adjacency() {
                let mut g: G = random_graph(5, 10, 8);
                let (a, b) = (0..10u32)
                    .flat_map(|a| (0..10u32).map(move |b| (a, b)))
                    .find(|&(a, b)| a != b && !g.has_edge(&a, &b))
                    .unwrap();
                let before_a = g.neighbors(&a);
                let before_b = g.neighbors(&b);
                g.add_edge(&a, &b, 2.0);
                assert!(g.has_edge(&b, &a));
                g.remove_edge(&a, &b);
                assert_eq!(g.neighbors(&a), before_a);
                assert_eq!(g.neighbors(&b), before_b);
            }

            #[test]
            fn misses_are_not_errors() {
                let mut g: G = random_graph(9, 5, 5);
                let gen = g.generation();
                assert!(!g.add_edge(&0, &99, 1.0));
                assert!(!g.remove_edge(&99, &0));
                assert_eq!(g.remove_vertex(&99), None);
                assert_eq!(g.generation(), gen);

                let walk = g.shortest_path(&99, &0);
                assert_eq!(walk.kind(), WalkKind::ShortestPath);
                assert_eq!(walk.len(), 0);
                assert_eq!(g.dfs(&99).len(), 0);
            }

            #[test]
            fn cursor_fails_fast_after_mutation() {
                let mut g: G = Graph::new();
                for v in 0..3 {
                    g.add_vertex(v);
                }
                g.add_edge(&0, &1, 1.0);
                g.add_edge(&0, &2, 1.0);
                let mut cursor = g.neighbor_cursor(&0).unwrap();
                assert!(cursor.advance(&g).unwrap().is_some());
                g.add_vertex(3);
                assert!(matches!(
                    cursor.advance(&g),
                    Err(Error::IteratorInvalidated { .. })
                ));
            }

            #[test]
            fn empty_graph() {
                let g: G = Graph::new();
                assert!(g.is_empty());
                assert_eq!(g.len(), 0);
                assert!(g.is_connected());
                assert_eq!(g.bfs(&0).len(), 0);
            }
        }
    };
}

backend_contract!(adjacency_list, maze_graph_core::AdjacencyList);
backend_contract!(bool_matrix, maze_graph_core::BoolMatrix);
backend_contract!(weight_matrix, maze_graph_core::WeightMatrix);

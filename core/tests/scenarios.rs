use maze_graph_core::{AdjListGraph, Graph, MatrixGraph, WeightedGraph};

fn four_cycle<S: maze_graph_core::EdgeStorage>() -> Graph<char, S> {
    let mut g = Graph::new();
    for v in ['A', 'B', 'C', 'D'] {
        g.add_vertex(v);
    }
    g.add_edge(&'A', &'B', 1.0);
    g.add_edge(&'B', &'C', 1.0);
    g.add_edge(&'C', &'D', 1.0);
    g.add_edge(&'A', &'D', 1.0);
    g
}

#[test]
fn four_cycle_bfs_order_list() {
    let g: AdjListGraph<char> = four_cycle();
    assert_eq!(g.bfs(&'A').collect::<Vec<_>>(), vec!['A', 'B', 'D', 'C']);
}

#[test]
fn four_cycle_bfs_order_matrix() {
    let g: MatrixGraph<char> = four_cycle();
    assert_eq!(g.bfs(&'A').collect::<Vec<_>>(), vec!['A', 'B', 'D', 'C']);
}

#[test]
fn four_cycle_shortest_path_is_either_two_edge_route() {
    let list: AdjListGraph<char> = four_cycle();
    let matrix: MatrixGraph<char> = four_cycle();
    let weighted: WeightedGraph<char> = four_cycle();

    for path in [
        list.shortest_path(&'A', &'C').collect::<Vec<_>>(),
        matrix.shortest_path(&'A', &'C').collect::<Vec<_>>(),
        weighted.shortest_path(&'A', &'C').collect::<Vec<_>>(),
    ] {
        assert!(
            path == vec!['A', 'B', 'C'] || path == vec!['A', 'D', 'C'],
            "unexpected path {:?}",
            path
        );
    }
}

#[test]
fn weighted_path_avoids_heavy_edge() {
    let mut g: WeightedGraph<char> = Graph::new();
    for v in ['A', 'B', 'C', 'D'] {
        g.add_vertex(v);
    }
    g.add_edge(&'A', &'B', 1.0);
    g.add_edge(&'B', &'C', 1.0);
    g.add_edge(&'A', &'D', 1.0);
    g.add_edge(&'D', &'C', 5.0);

    let path: Vec<char> = g.shortest_path(&'A', &'C').collect();
    assert_eq!(path, vec!['A', 'B', 'C']);
    assert_eq!(g.path_weight(&path), Some(2.0));
    assert_eq!(g.path_weight(&['A', 'D', 'C']), Some(6.0));
}

#[test]
fn path_to_self_is_single_vertex() {
    let list: AdjListGraph<char> = four_cycle();
    let matrix: MatrixGraph<char> = four_cycle();
    let weighted: WeightedGraph<char> = four_cycle();
    assert_eq!(list.shortest_path(&'A', &'A').collect::<Vec<_>>(), vec!['A']);
    assert_eq!(matrix.shortest_path(&'A', &'A').collect::<Vec<_>>(), vec!['A']);
    assert_eq!(weighted.shortest_path(&'A', &'A').collect::<Vec<_>>(), vec!['A']);
}

#[test]
fn absent_vertex_queries_are_empty() {
    let g: AdjListGraph<char> = four_cycle();
    assert_eq!(g.bfs(&'Z').count(), 0);
    assert_eq!(g.dfs(&'Z').count(), 0);
    assert_eq!(g.shortest_path(&'Z', &'A').count(), 0);
    assert_eq!(g.shortest_path(&'A', &'Z').count(), 0);

    let w: WeightedGraph<char> = four_cycle();
    assert_eq!(w.shortest_path(&'A', &'Z').count(), 0);
    assert_eq!(w.bfs(&'Z').count(), 0);
}

//! Unit tests for sir-graph.

#[cfg(test)]
mod nodes {
    use crate::Graph;

    #[test]
    fn add_node_is_not_an_overwrite() {
        let mut g: Graph<u32, &str> = Graph::new();
        assert!(g.add_node(1, "first"));
        assert!(!g.add_node(1, "second"));
        assert_eq!(g.node(1), Some(&"first"));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut g: Graph<u32> = Graph::new();
        g.add_nodes_from([(5, ()), (1, ()), (3, ())]);
        let order: Vec<u32> = g.iter().collect();
        assert_eq!(order, [5, 1, 3]);
        let via_ref: Vec<u32> = (&g).into_iter().collect();
        assert_eq!(via_ref, order);
    }

    #[test]
    fn membership_and_len_ignore_edges() {
        let mut g: Graph<u32> = Graph::new();
        g.add_node(1, ());
        g.add_node(2, ());
        g.add_edge(1, 2, ()).unwrap();
        assert_eq!(g.len(), 2);
        assert!(g.contains(1));
        assert!(!g.contains(3));
        assert!(!g.is_empty());
    }

    #[test]
    fn remove_node_cascades_to_incident_edges() {
        let mut g: Graph<u32> = Graph::new();
        g.add_nodes_from((0..4).map(|i| (i, ())));
        g.add_edge(0, 1, ()).unwrap();
        g.add_edge(2, 0, ()).unwrap();
        g.add_edge(2, 3, ()).unwrap();

        assert_eq!(g.remove_node(0), Some(()));
        assert!(!g.has_node(0));
        assert!(!g.has_edge(0, 1));
        assert!(!g.has_edge(0, 2));
        assert!(g.has_edge(2, 3));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.iter().collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn remove_absent_node_is_noop() {
        let mut g: Graph<u32> = Graph::new();
        g.add_node(1, ());
        assert_eq!(g.remove_node(9), None);
        g.remove_nodes_from([1, 2]);
        assert!(g.is_empty());
    }

    #[test]
    fn node_mut_writes_through() {
        let mut g: Graph<u32, i32> = Graph::new();
        g.add_node(1, 10);
        *g.node_mut(1).unwrap() += 5;
        assert_eq!(g.node(1), Some(&15));
    }
}

#[cfg(test)]
mod edges {
    use crate::{Graph, GraphError};

    fn triangle() -> Graph<u32, (), &'static str> {
        let mut g = Graph::new();
        g.add_nodes_from((0..3).map(|i| (i, ())));
        g.add_edge(0, 1, "a").unwrap();
        g.add_edge(1, 2, "b").unwrap();
        g.add_edge(2, 0, "c").unwrap();
        g
    }

    #[test]
    fn reversed_pair_is_same_edge() {
        let mut g = triangle();
        assert!(g.has_edge(1, 0));
        assert_eq!(g.add_edge(1, 0, "dup"), Ok(false));
        assert_eq!(g.edge(0, 1), Some(&"a"));
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn remove_edge_matches_either_orientation() {
        let mut g = triangle();
        assert_eq!(g.remove_edge(0, 2), Some("c"));
        assert!(!g.has_edge(2, 0));
        assert_eq!(g.remove_edge(0, 2), None);
        g.remove_edges_from([(1, 0)]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn dangling_edge_rejected() {
        let mut g: Graph<u32> = Graph::new();
        g.add_node(1, ());
        let err = g.add_edge(1, 7, ()).unwrap_err();
        assert_eq!(err, GraphError::MissingEndpoint { node: "7".to_string() });
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn self_loop_allowed() {
        let mut g: Graph<u32> = Graph::new();
        g.add_node(4, ());
        assert_eq!(g.add_edge(4, 4, ()), Ok(true));
        assert!(g.has_edge(4, 4));
        assert!(g.neighbors(4).contains(&4));
        assert_eq!(g.degree(4), 1);
    }

    #[test]
    fn neighbors_by_scan() {
        let mut g = triangle();
        g.add_node(3, ());
        let n = g.neighbors(0);
        assert_eq!(n.len(), 2);
        assert!(n.contains(&1) && n.contains(&2));
        assert!(g.neighbors(3).is_empty());
    }

    #[test]
    fn edges_keep_insertion_order_and_orientation() {
        let g = triangle();
        let listed: Vec<_> = g.edges().map(|(u, v, a)| (u, v, *a)).collect();
        assert_eq!(listed, [(0, 1, "a"), (1, 2, "b"), (2, 0, "c")]);
        let pairs: Vec<_> = g.edge_pairs().collect();
        assert_eq!(pairs, [(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn add_edges_from_counts_new_edges() {
        let mut g: Graph<u32> = Graph::new();
        g.add_nodes_from((0..3).map(|i| (i, ())));
        let added = g.add_edges_from([(0, 1, ()), (1, 0, ()), (1, 2, ())]).unwrap();
        assert_eq!(added, 2);
        assert!(g.add_edges_from([(0, 9, ())]).is_err());
    }

    #[test]
    fn edge_mut_writes_through() {
        let mut g = triangle();
        *g.edge_mut(2, 1).unwrap() = "B";
        assert_eq!(g.edge(1, 2), Some(&"B"));
        for (_, _, attrs) in g.edges_mut() {
            *attrs = "x";
        }
        assert!(g.edges().all(|(_, _, a)| *a == "x"));
    }

    #[test]
    fn clear_variants() {
        let mut g = triangle();
        g.clear_edges();
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.len(), 3);
        g.clear();
        assert!(g.is_empty());
    }
}

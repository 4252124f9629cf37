/// Shared operation contract every representation must satisfy
macro_rules! test_graph_ops {
    ($env:ident, $graph:ty) => {
        #[cfg(test)]
        mod $env {
            use crate::prelude::*;
            use fxhash::FxHashMap;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            #[test]
            fn graph_new() {
                let graph = <$graph>::new();
                assert!(graph.is_empty());
                assert_eq!(graph.number_of_nodes(), 0);
                assert_eq!(graph.number_of_edges(), 0);

                for n in 1..30 {
                    let graph = <$graph>::with_vertices(n);

                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.number_of_edges(), 0);
                    assert!(graph.is_singleton());
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                }
            }

            #[test]
            fn set_and_query_edges() {
                let mut graph = <$graph>::with_vertices(4);

                assert_eq!(graph.set_edge(0, 1, 5), Ok(None));
                assert_eq!(graph.set_edge(1, 2, 7), Ok(None));
                assert_eq!(graph.number_of_edges(), 2);

                assert!(graph.has_edge(0, 1) && graph.has_edge(1, 0));
                assert_eq!(graph.weight_of(0, 1), Ok(5));
                assert_eq!(graph.weight_of(1, 0), Ok(5));

                // upsert through the mirrored endpoint order
                assert_eq!(graph.set_edge(1, 0, 9), Ok(Some(5)));
                assert_eq!(graph.number_of_edges(), 2);
                assert_eq!(graph.weight_of(0, 1), Ok(9));

                assert!(!graph.has_edge(0, 2));
                assert_eq!(graph.weight_of(0, 2), Err(GraphError::EdgeNotFound(0, 2)));
            }

            #[test]
            fn invalid_indices_leave_graph_unchanged() {
                let mut graph = <$graph>::with_vertices(3);
                graph.set_edge(0, 1, 1).unwrap();

                let err = GraphError::InvalidIndex { index: 3, len: 3 };
                assert_eq!(graph.set_edge(0, 3, 1), Err(err));
                assert_eq!(graph.set_edge(3, 0, 1), Err(err));
                assert_eq!(graph.try_remove_edge(1, 3), Err(err));
                assert_eq!(graph.weight_of(3, 0), Err(err));
                assert_eq!(graph.check_vertex(2), Ok(()));

                assert_eq!(graph.number_of_edges(), 1);
                assert_eq!(graph.weight_of(0, 1), Ok(1));
            }

            #[test]
            fn remove_edges() {
                let mut graph = <$graph>::with_vertices(3);
                graph.set_edge(0, 1, 4).unwrap();

                assert_eq!(graph.remove_edge(1, 2), Err(GraphError::EdgeNotFound(1, 2)));
                assert_eq!(graph.try_remove_edge(1, 2), Ok(None));
                assert_eq!(graph.number_of_edges(), 1);

                assert_eq!(graph.remove_edge(1, 0), Ok(4));
                assert_eq!(graph.number_of_edges(), 0);
                assert!(!graph.has_edge(0, 1));
                assert_eq!(graph.remove_edge(0, 1), Err(GraphError::EdgeNotFound(0, 1)));
            }

            #[test]
            fn vertex_editing() {
                let mut graph = <$graph>::from_payloads([10, 20, 30]);
                graph
                    .set_edges([(0, 1, 1), (1, 2, 2), (0, 2, 3)])
                    .unwrap();

                assert_eq!(graph.add_vertex(40), 3);
                graph.set_edge(3, 0, 9).unwrap();
                assert_eq!(graph.number_of_nodes(), 4);
                assert_eq!(graph.number_of_edges(), 4);

                // removing 1 shifts 2 -> 1 and 3 -> 2
                assert_eq!(graph.remove_vertex(1), Ok(20));
                assert_eq!(graph.number_of_nodes(), 3);
                assert_eq!(graph.number_of_edges(), 2);
                assert_eq!(*graph.payload_of(1), 30);
                assert_eq!(*graph.payload_of(2), 40);
                assert_eq!(
                    graph.ordered_edges(),
                    vec![WeightedEdge(0, 1, 3), WeightedEdge(0, 2, 9)]
                );

                assert_eq!(
                    graph.remove_vertex(3),
                    Err(GraphError::InvalidIndex { index: 3, len: 3 })
                );
            }

            #[test]
            fn random_ops_match_model() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [5 as NumNodes, 10, 25] {
                    for _ in 0..10 {
                        let mut graph = <$graph>::with_vertices(n);
                        let mut model: FxHashMap<Edge, Weight> = FxHashMap::default();

                        for _ in 0..(n * n) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);
                            let w = rng.random_range(-20..20 as Weight);

                            if rng.random_bool(0.7) {
                                let prev = model.insert(Edge(u, v).normalized(), w);
                                assert_eq!(graph.set_edge(u, v, w), Ok(prev));
                            } else {
                                let prev = model.remove(&Edge(u, v).normalized());
                                assert_eq!(graph.try_remove_edge(u, v), Ok(prev));
                            }

                            assert_eq!(graph.number_of_edges() as usize, model.len());
                        }

                        for (&Edge(u, v), &w) in &model {
                            assert_eq!(graph.weight_of(u, v), Ok(w));
                            assert_eq!(graph.weight_of(v, u), Ok(w));
                        }

                        let edges = graph.ordered_edges();
                        assert_eq!(edges.len(), model.len());
                        assert!(edges.iter().all(|e| model[&e.endpoints()] == e.weight()));

                        // self-loops contribute one to their endpoint's degree
                        let loops = graph.vertices().filter(|&u| graph.has_self_loop(u)).count();
                        assert_eq!(
                            graph.degrees().map(|d| d as usize).sum::<usize>(),
                            2 * model.len() - loops
                        );
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

//! Maximal clique enumeration.
//!
//! Cliques come from petgraph's Bron–Kerbosch search. Its output order depends
//! on hashing, so every clique is sorted and the list is sorted before it is
//! returned.

use petgraph::algo;
use petgraph::graphmap::UnGraphMap;

///
/// Find every maximal clique of `graph` with at least `min_size` members.
///
/// Each clique is returned with its ids ascending, and the cliques are sorted
/// lexicographically.
///
/// # Arguments
/// - graph: the undirected graph to search, usually one connected component
/// - min_size: cliques smaller than this are discarded
///
pub fn maximal_cliques(graph: &UnGraphMap<usize, ()>, min_size: usize) -> Vec<Vec<usize>> {
    let mut cliques: Vec<Vec<usize>> = algo::maximal_cliques(graph)
        .into_iter()
        .filter(|c| c.len() >= min_size)
        .map(|c| {
            let mut c: Vec<usize> = c.into_iter().collect();
            c.sort_unstable();
            c
        })
        .collect();
    cliques.sort();
    cliques
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn graph(edges: &[(usize, usize)]) -> UnGraphMap<usize, ()> {
        UnGraphMap::from_edges(edges)
    }

    fn is_clique(g: &UnGraphMap<usize, ()>, c: &[usize]) -> bool {
        c.iter()
            .enumerate()
            .all(|(i, &u)| c[i + 1..].iter().all(|&v| g.contains_edge(u, v)))
    }

    #[rstest]
    fn test_single_triangle() {
        let g = graph(&[(0, 1), (1, 2), (0, 2)]);
        assert_eq!(maximal_cliques(&g, 3), vec![vec![0, 1, 2]]);
    }

    #[rstest]
    fn test_triangle_with_tail() {
        // 4-3 and 3-2 hang off the 0-1-2 triangle
        let g = graph(&[(0, 1), (1, 2), (0, 2), (2, 3), (3, 4)]);
        assert_eq!(maximal_cliques(&g, 3), vec![vec![0, 1, 2]]);
        assert_eq!(
            maximal_cliques(&g, 2),
            vec![vec![0, 1, 2], vec![2, 3], vec![3, 4]]
        );
    }

    #[rstest]
    fn test_triangles_sharing_an_edge() {
        let g = graph(&[(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)]);
        assert_eq!(maximal_cliques(&g, 3), vec![vec![0, 1, 2], vec![1, 2, 3]]);
    }

    #[rstest]
    fn test_no_cliques_in_a_path() {
        let g = graph(&[(0, 1), (1, 2), (2, 3)]);
        assert!(maximal_cliques(&g, 3).is_empty());
    }

    #[rstest]
    fn test_k4_is_one_clique() {
        let g = graph(&[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert_eq!(maximal_cliques(&g, 3), vec![vec![0, 1, 2, 3]]);
    }

    #[rstest]
    fn test_cliques_are_maximal() {
        // two K4s glued on a triangle plus some chords
        let edges = [
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 2),
            (1, 3),
            (2, 3),
            (1, 4),
            (2, 4),
            (3, 4),
            (4, 5),
            (5, 6),
            (4, 6),
            (6, 7),
            (0, 7),
        ];
        let g = graph(&edges);
        let cliques = maximal_cliques(&g, 3);

        assert_eq!(
            cliques,
            vec![vec![0, 1, 2, 3], vec![1, 2, 3, 4], vec![4, 5, 6]]
        );
        for c in &cliques {
            assert!(c.len() >= 3);
            assert!(is_clique(&g, c));
            for n in g.nodes().filter(|n| !c.contains(n)) {
                let mut grown = c.clone();
                grown.push(n);
                assert!(!is_clique(&g, &grown), "{:?} extends with {}", c, n);
            }
        }
    }

    #[rstest]
    fn test_empty_graph() {
        let g = UnGraphMap::<usize, ()>::new();
        assert!(maximal_cliques(&g, 3).is_empty());
    }

    #[rstest]
    fn test_isolated_nodes_and_stable_order() {
        let mut g = graph(&[(5, 6), (6, 7), (5, 7), (7, 8), (8, 9), (7, 9)]);
        g.add_node(42);

        let first = maximal_cliques(&g, 2);
        assert_eq!(first, vec![vec![5, 6, 7], vec![7, 8, 9]]);
        for _ in 0..5 {
            assert_eq!(maximal_cliques(&g, 2), first);
        }
    }
}

//! PageRank centrality over a directed overlap graph.

use fxhash::FxHashMap as HashMap;
use log::warn;
use petgraph::Direction::Outgoing;
use petgraph::graphmap::DiGraphMap;

use crate::config::{DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

/// A family id with its centrality score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rank {
    pub id: usize,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankOptions {
    pub damping: f64,
    /// Iteration stops once the L2 norm of the change in scores drops below this.
    pub tolerance: f64,
    pub max_iterations: usize,
    /// Share a node's score among its out-links in proportion to their
    /// weights instead of evenly.
    pub weighted: bool,
}

impl Default for PageRankOptions {
    fn default() -> Self {
        PageRankOptions {
            damping: DEFAULT_DAMPING,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            weighted: false,
        }
    }
}

///
/// Rank the nodes of `graph` by PageRank.
///
/// The walk starts from the uniform distribution. A node without out-links
/// spreads its score over every node. The result is sorted by descending
/// score, with ties broken by ascending id, so the first entry is the most
/// central node.
///
/// # Arguments
/// - graph: directed graph over family ids, edge weights are overlap ratios
/// - opts: damping, convergence and weighting parameters
///
pub fn page_rank(graph: &DiGraphMap<usize, f64>, opts: &PageRankOptions) -> Vec<Rank> {
    let mut ids: Vec<usize> = graph.nodes().collect();
    ids.sort_unstable();
    let n = ids.len();
    if n == 0 {
        return Vec::new();
    }

    let index: HashMap<usize, usize> = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
    let links: Vec<Vec<(usize, f64)>> = ids
        .iter()
        .map(|&id| out_links(graph, id, &index, opts.weighted))
        .collect();

    let nf = n as f64;
    let d = opts.damping;
    let mut scores = vec![1.0 / nf; n];
    let mut converged = false;

    for _ in 0..opts.max_iterations {
        let dangling: f64 = links
            .iter()
            .zip(&scores)
            .filter(|(out, _)| out.is_empty())
            .map(|(_, s)| s)
            .sum();

        let mut next = vec![(1.0 - d) / nf + d * dangling / nf; n];
        for (i, out) in links.iter().enumerate() {
            for &(j, share) in out {
                next[j] += d * scores[i] * share;
            }
        }

        let diff = next
            .iter()
            .zip(&scores)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt();
        scores = next;

        if diff < opts.tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(
            "PageRank did not converge within {} iterations over {} nodes",
            opts.max_iterations, n
        );
    }

    let mut ranks: Vec<Rank> = ids
        .into_iter()
        .zip(scores)
        .map(|(id, score)| Rank { id, score })
        .collect();
    sort_ranks(&mut ranks);
    ranks
}

/// Sort by descending score, then ascending id.
pub fn sort_ranks(ranks: &mut [Rank]) {
    ranks.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id)));
}

/// Out-links of `id` as `(target index, share of score)`.
fn out_links(
    graph: &DiGraphMap<usize, f64>,
    id: usize,
    index: &HashMap<usize, usize>,
    weighted: bool,
) -> Vec<(usize, f64)> {
    let edges: Vec<(usize, f64)> = graph
        .edges_directed(id, Outgoing)
        .map(|(_, to, w)| (index[&to], *w))
        .collect();

    let total: f64 = edges.iter().map(|(_, w)| w).sum();
    match weighted && total > 0.0 {
        true => edges.into_iter().map(|(j, w)| (j, w / total)).collect(),
        false => {
            let share = 1.0 / edges.len() as f64;
            edges.into_iter().map(|(j, _)| (j, share)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn graph(edges: &[(usize, usize, f64)]) -> DiGraphMap<usize, f64> {
        DiGraphMap::from_edges(edges)
    }

    fn ids(ranks: &[Rank]) -> Vec<usize> {
        ranks.iter().map(|r| r.id).collect()
    }

    #[rstest]
    fn test_scores_sum_to_one() {
        let g = graph(&[(0, 1, 0.5), (1, 2, 0.5), (2, 0, 0.5), (3, 0, 0.9)]);
        let ranks = page_rank(&g, &PageRankOptions::default());

        let total: f64 = ranks.iter().map(|r| r.score).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[rstest]
    fn test_star_centre_ranks_first() {
        let g = graph(&[(1, 0, 1.0), (2, 0, 1.0), (3, 0, 1.0), (4, 0, 1.0)]);
        let ranks = page_rank(&g, &PageRankOptions::default());

        assert_eq!(ranks[0].id, 0);
        // the leaves are interchangeable, so they come out in id order
        assert_eq!(ids(&ranks), vec![0, 1, 2, 3, 4]);
    }

    #[rstest]
    fn test_two_node_cycle_ties_break_by_id() {
        let g = graph(&[(5, 2, 1.0), (2, 5, 1.0)]);
        let ranks = page_rank(&g, &PageRankOptions::default());

        assert_eq!(ranks[0].score, ranks[1].score);
        assert_eq!(ids(&ranks), vec![2, 5]);
    }

    #[rstest]
    fn test_chain_sink_ranks_first() {
        let g = graph(&[(0, 1, 1.0), (1, 2, 1.0)]);
        let ranks = page_rank(&g, &PageRankOptions::default());
        assert_eq!(ids(&ranks), vec![2, 1, 0]);
    }

    #[rstest]
    fn test_weighted_walk_follows_heavier_edge() {
        let g = graph(&[(0, 1, 0.9), (0, 2, 0.1), (1, 0, 1.0), (2, 0, 1.0)]);

        let even = page_rank(&g, &PageRankOptions::default());
        let score = |ranks: &[Rank], id: usize| ranks.iter().find(|r| r.id == id).unwrap().score;
        assert_eq!(score(&even, 1), score(&even, 2));

        let weighted = page_rank(
            &g,
            &PageRankOptions {
                weighted: true,
                ..PageRankOptions::default()
            },
        );
        assert!(score(&weighted, 1) > score(&weighted, 2));
    }

    #[rstest]
    fn test_isolated_nodes() {
        let mut g = DiGraphMap::<usize, f64>::new();
        g.add_node(9);
        g.add_node(4);

        let ranks = page_rank(&g, &PageRankOptions::default());
        assert_eq!(ids(&ranks), vec![4, 9]);
        assert!((ranks[0].score - 0.5).abs() < 1e-12);
    }

    #[rstest]
    fn test_empty_graph() {
        let g = DiGraphMap::<usize, f64>::new();
        assert!(page_rank(&g, &PageRankOptions::default()).is_empty());
    }

    #[rstest]
    fn test_sort_ranks() {
        let mut ranks = vec![
            Rank { id: 3, score: 0.2 },
            Rank { id: 1, score: 0.4 },
            Rank { id: 0, score: 0.2 },
            Rank { id: 2, score: 0.2 },
        ];
        sort_ranks(&mut ranks);
        assert_eq!(ids(&ranks), vec![1, 0, 2, 3]);
    }
}

//! Graphs over family ids built from scored edges.
//!
//! Clustering only cares whether two families are linked, so it works on an
//! [`UnGraphMap`]. Ranking needs direction and weight, so it works on a
//! [`DiGraphMap`]. Both keep nodes and edges in insertion order, which keeps
//! every traversal over them deterministic.

use fxhash::FxHashSet as HashSet;
use petgraph::graphmap::{DiGraphMap, UnGraphMap};

use crate::scoring::Edge;

///
/// Build the undirected linkage graph.
///
/// Every id in `nodes` becomes a node, linked or not. Edges add their
/// endpoints if needed; a pair linked in both directions yields one edge.
///
pub fn undirected_graph<N>(nodes: N, edges: &[Edge]) -> UnGraphMap<usize, ()>
where
    N: IntoIterator<Item = usize>,
{
    let mut graph = UnGraphMap::new();
    for n in nodes {
        graph.add_node(n);
    }
    for e in edges {
        graph.add_edge(e.from, e.to, ());
    }
    graph
}

///
/// Build the directed weighted graph holding every edge.
///
pub fn directed_graph(edges: &[Edge]) -> DiGraphMap<usize, f64> {
    let mut graph = DiGraphMap::new();
    for e in edges {
        graph.add_edge(e.from, e.to, e.weight);
    }
    graph
}

///
/// Restrict the undirected graph to `members`.
///
/// Nodes are added in the order of `members`.
///
pub fn induced_undirected(graph: &UnGraphMap<usize, ()>, members: &[usize]) -> UnGraphMap<usize, ()> {
    let keep: HashSet<usize> = members.iter().copied().collect();

    let mut sub = UnGraphMap::with_capacity(members.len(), 0);
    for &n in members {
        sub.add_node(n);
    }
    for &u in members {
        for v in graph.neighbors(u) {
            if u < v && keep.contains(&v) {
                sub.add_edge(u, v, ());
            }
        }
    }
    sub
}

///
/// Count the undirected edges with both ends in `members`.
///
/// A pair linked in both directions counts once.
///
pub fn distinct_edge_count(graph: &UnGraphMap<usize, ()>, members: &[usize]) -> usize {
    let keep: HashSet<usize> = members.iter().copied().collect();
    members
        .iter()
        .map(|&u| {
            graph
                .neighbors(u)
                .filter(|&v| u < v && keep.contains(&v))
                .count()
        })
        .sum()
}

///
/// Build the directed weighted graph over `members` from the edges joining them.
///
/// Nodes are added in the order of `members`, so members without edges are
/// still present.
///
pub fn induced_directed(members: &[usize], edges: &[Edge]) -> DiGraphMap<usize, f64> {
    let keep: HashSet<usize> = members.iter().copied().collect();

    let mut sub = DiGraphMap::with_capacity(members.len(), edges.len());
    for &n in members {
        sub.add_node(n);
    }
    for e in edges {
        if keep.contains(&e.from) && keep.contains(&e.to) {
            sub.add_edge(e.from, e.to, e.weight);
        }
    }
    sub
}

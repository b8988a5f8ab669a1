//! Partitioning families into connected groups.

use fxhash::FxHashMap as HashMap;
use fxhash::FxHashSet as HashSet;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;
use rayon::prelude::*;

use repfam_core::models::Family;

use crate::centrality::{Rank, page_rank};
use crate::cliques::maximal_cliques;
use crate::config::GroupingConfig;
use crate::graph::{distinct_edge_count, induced_directed, induced_undirected, undirected_graph};
use crate::scoring::Edge;

/// One connected component of the linkage graph.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    /// Family ids, ascending.
    pub members: Vec<usize>,
    /// Every member is linked to every other member.
    pub is_clique: bool,
    /// Maximal sub-cliques, only searched for when the group is not a clique.
    pub cliques: Vec<Vec<usize>>,
    /// Members by descending centrality. Empty for singletons.
    pub ranks: Vec<Rank>,
}

impl Group {
    /// The most central member, `None` for singletons.
    pub fn representative(&self) -> Option<usize> {
        self.ranks.first().map(|r| r.id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The ids of `clique` reordered by this group's centrality, most central first.
    pub fn rank_order(&self, clique: &[usize]) -> Vec<usize> {
        self.ranks
            .iter()
            .map(|r| r.id)
            .filter(|id| clique.contains(id))
            .collect()
    }
}

///
/// Find the connected components of `graph`.
///
/// Each component lists its ids ascending; components are ordered by their
/// smallest id.
///
pub fn connected_components(graph: &UnGraphMap<usize, ()>) -> Vec<Vec<usize>> {
    let mut nodes: Vec<usize> = graph.nodes().collect();
    nodes.sort_unstable();

    let mut seen: HashSet<usize> = HashSet::default();
    let mut components = Vec::new();
    for start in nodes {
        if seen.contains(&start) {
            continue;
        }
        let mut component = Vec::new();
        let mut bfs = Bfs::new(graph, start);
        while let Some(n) = bfs.next(graph) {
            seen.insert(n);
            component.push(n);
        }
        component.sort_unstable();
        components.push(component);
    }
    components
}

///
/// Group families by overlap and classify each group.
///
/// Every family lands in exactly one group; families without edges form
/// singleton groups that are not analysed further. Groups of two members, or
/// whose members are all pairwise linked, are cliques. Other groups are
/// searched for maximal sub-cliques of at least `config.min_clique_size`
/// members. Every group with more than one member is ranked by PageRank over
/// its directed edges.
///
pub fn groups(families: &[Family], edges: &[Edge], config: &GroupingConfig) -> Vec<Group> {
    let graph = undirected_graph(families.iter().map(|f| f.id), edges);
    let components = connected_components(&graph);

    // bucket edges by component so each group only sees its own
    let owner: HashMap<usize, usize> = components
        .iter()
        .enumerate()
        .flat_map(|(c, members)| members.iter().map(move |&m| (m, c)))
        .collect();
    let mut owned: Vec<Vec<Edge>> = vec![Vec::new(); components.len()];
    for e in edges {
        owned[owner[&e.from]].push(*e);
    }

    components
        .into_par_iter()
        .zip(owned)
        .map(|(members, edges)| classify(&graph, members, &edges, config))
        .collect()
}

fn classify(
    graph: &UnGraphMap<usize, ()>,
    members: Vec<usize>,
    edges: &[Edge],
    config: &GroupingConfig,
) -> Group {
    let n = members.len();
    if n < 2 {
        return Group {
            members,
            ..Group::default()
        };
    }

    let is_clique = n == 2 || distinct_edge_count(graph, &members) * 2 == n * (n - 1);
    let cliques = match is_clique {
        true => Vec::new(),
        false => maximal_cliques(&induced_undirected(graph, &members), config.min_clique_size),
    };
    let ranks = page_rank(&induced_directed(&members, edges), &config.page_rank());

    Group {
        members,
        is_clique,
        cliques,
        ranks,
    }
}

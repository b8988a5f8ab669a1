//! Grouping genomic repeat families by overlap.
//!
//! Families that are really fragments of one repeat element tend to cover the
//! same bases. This crate scores every pair of families by how much of each
//! the other covers, links pairs whose overlap clears a threshold, and
//! summarises the resulting graph:
//!
//! 1. [`scoring`] computes the overlap ratios of every family pair and emits
//!    directed edges, from the smaller family to the larger one and back when
//!    the coverage is close to mutual.
//! 2. [`clusters`] splits the families into connected groups and marks the
//!    groups whose members are all pairwise linked.
//! 3. [`cliques`] finds the maximal sub-cliques of the other groups.
//! 4. [`centrality`] ranks the members of each group by PageRank; the top
//!    member represents the group.
//! 5. [`identity`] turns all of the above into per-family labels.
//!
//! ## Quick Start
//!
//! ```rust
//! use repfam_core::models::{Family, FamilySet, Feature, Strand};
//! use repfam_graph::{GroupingConfig, analyze};
//!
//! let fam = |id, start, end| {
//!     Family::new(id, vec![Feature { chr: "chr1".to_string(), start, end, strand: Strand::Forward }])
//! };
//! let families = FamilySet::from(vec![fam(0, 0, 100), fam(1, 10, 100), fam(2, 5000, 5100)]);
//!
//! let grouping = analyze(&families, &GroupingConfig::default()).unwrap();
//! // 0 and 1 cover each other, so they rank evenly and the lower id wins
//! assert_eq!(grouping.identities.cluster(0), Some(0));
//! assert_eq!(grouping.identities.cluster(1), Some(0));
//! assert_eq!(grouping.identities.cluster(2), None);
//! ```

pub mod centrality;
pub mod cliques;
pub mod clusters;
pub mod config;
pub mod errors;
pub mod graph;
pub mod identity;
pub mod scoring;

use indicatif::ProgressBar;
use log::{debug, info};
use petgraph::graphmap::DiGraphMap;

use repfam_core::models::FamilySet;

// re-exports
pub use self::centrality::{PageRankOptions, Rank};
pub use self::clusters::Group;
pub use self::config::GroupingConfig;
pub use self::errors::{GroupingError, Result};
pub use self::identity::{FamilyLabel, Identities};
pub use self::scoring::{Edge, Overlap};

/// Everything one grouping run produces.
#[derive(Debug, Clone)]
pub struct Grouping {
    /// Scored edges, in pair order.
    pub edges: Vec<Edge>,
    /// Every family's group, singletons included.
    pub groups: Vec<Group>,
    pub identities: Identities,
}

impl Grouping {
    /// All scored edges as one directed weighted graph.
    pub fn directed_graph(&self) -> DiGraphMap<usize, f64> {
        graph::directed_graph(&self.edges)
    }
}

///
/// Group the families of `families`.
///
/// Families are compared in the order they are stored in, so callers should
/// sort them with [`FamilySet::sort_by_members`] first.
///
/// # Arguments
/// - families: the families to group
/// - config: threshold, clique and ranking parameters
///
pub fn analyze(families: &FamilySet, config: &GroupingConfig) -> Result<Grouping> {
    analyze_with_progress(families, config, &ProgressBar::hidden())
}

///
/// Group the families of `families`, reporting pair scoring progress on `pb`.
///
pub fn analyze_with_progress(
    families: &FamilySet,
    config: &GroupingConfig,
    pb: &ProgressBar,
) -> Result<Grouping> {
    config.validate()?;

    let edges = scoring::score_pairs(&families.families, config.threshold, pb)?;
    pb.finish_and_clear();

    let groups = clusters::groups(&families.families, &edges, config);
    for g in groups.iter().filter(|g| g.len() > 1) {
        log_group(g, config.min_clique_size);
    }

    let identities = Identities::assign(&groups);

    info!(
        "{} families, {} edges, {} groups with more than one member, {} families clustered",
        families.len(),
        edges.len(),
        groups.iter().filter(|g| g.len() > 1).count(),
        identities.clustered(),
    );

    Ok(Grouping {
        edges,
        groups,
        identities,
    })
}

fn log_group(g: &Group, min_clique_size: usize) {
    let members = g
        .members
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let cliques = match g.cliques.is_empty() {
        true => String::new(),
        false => format!(" ({}+)-cliquesIn={:?}", min_clique_size, g.cliques),
    };
    let ranks = g
        .ranks
        .iter()
        .map(|r| format!("{}:{:.6}", r.id, r.score))
        .collect::<Vec<_>>()
        .join(" ");
    debug!(
        "clique={} {}{} PageRank=[{}]",
        g.is_clique, members, cliques, ranks
    );
}

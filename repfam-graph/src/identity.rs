//! Cluster and clique labels for families.
//!
//! Every family in a multi-member group is labelled with the group's most
//! central member. Clique labels are more involved, because a family can sit
//! in several sub-cliques of the same group:
//!
//! - a family in exactly one clique whose most central member is also in
//!   exactly one clique is labelled with that member alone;
//! - a family in exactly one clique whose most central member is shared with
//!   other cliques is labelled with the whole clique, most central first;
//! - a family shared by several cliques is labelled with its own id and
//!   marked as ambiguous.

use fxhash::FxHashMap as HashMap;

use crate::clusters::Group;

/// Marker appended to the clique label of a family shared by several cliques.
pub const AMBIGUOUS_MARKER: char = '*';

/// The labels of one family, as written to the annotated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyLabel {
    pub family: usize,
    /// Representative of the family's group, if it has more than one member.
    pub cluster: Option<usize>,
    /// Rendered clique label.
    pub clique: Option<String>,
}

/// Per-run cluster and clique identities, keyed by family id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identities {
    cluster: HashMap<usize, usize>,
    clique: HashMap<usize, Vec<usize>>,
    memberships: HashMap<usize, usize>,
}

impl Identities {
    ///
    /// Derive identities from classified groups.
    ///
    /// Singleton groups are skipped. Groups are independent of each other, so
    /// clique membership counts never cross group boundaries.
    ///
    pub fn assign(groups: &[Group]) -> Self {
        let mut ids = Identities::default();

        for g in groups.iter().filter(|g| g.len() > 1) {
            let Some(rep) = g.representative() else {
                continue;
            };

            for &m in &g.members {
                ids.cluster.insert(m, rep);
                if g.is_clique {
                    *ids.memberships.entry(m).or_default() += 1;
                    ids.clique.insert(m, vec![rep]);
                }
            }

            for clique in &g.cliques {
                for &m in clique {
                    *ids.memberships.entry(m).or_default() += 1;
                }
            }

            for clique in &g.cliques {
                let ordered = g.rank_order(clique);
                let Some(&top) = ordered.first() else {
                    continue;
                };
                let top_unique = ids.memberships(top) == 1;

                for &m in &ordered {
                    let label = match (ids.memberships(m) == 1, top_unique) {
                        (true, true) => vec![top],
                        (true, false) => ordered.clone(),
                        (false, _) => vec![m],
                    };
                    ids.clique.insert(m, label);
                }
            }
        }

        ids
    }

    /// Representative of the family's group.
    pub fn cluster(&self, id: usize) -> Option<usize> {
        self.cluster.get(&id).copied()
    }

    /// Raw clique identity of the family.
    pub fn clique(&self, id: usize) -> Option<&[usize]> {
        self.clique.get(&id).map(Vec::as_slice)
    }

    /// Number of cliques the family belongs to.
    pub fn memberships(&self, id: usize) -> usize {
        self.memberships.get(&id).copied().unwrap_or(0)
    }

    ///
    /// Render the clique label of a family.
    ///
    /// `None` when the family has no clique identity, the dot-joined ids when
    /// it belongs to exactly one clique, and the first id followed by
    /// [`AMBIGUOUS_MARKER`] otherwise.
    ///
    pub fn clique_tag(&self, id: usize) -> Option<String> {
        let ids = self.clique(id)?;
        match self.memberships(id) {
            1 => Some(
                ids.iter()
                    .map(|i| i.to_string())
                    .collect::<Vec<_>>()
                    .join("."),
            ),
            _ => ids.first().map(|first| format!("{}{}", first, AMBIGUOUS_MARKER)),
        }
    }

    pub fn label(&self, id: usize) -> FamilyLabel {
        let cluster = self.cluster(id);
        FamilyLabel {
            family: id,
            cluster,
            clique: cluster.and_then(|_| self.clique_tag(id)),
        }
    }

    /// Number of families with a cluster identity.
    pub fn clustered(&self) -> usize {
        self.cluster.len()
    }
}

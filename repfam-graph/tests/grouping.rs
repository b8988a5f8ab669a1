use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rstest::*;

use repfam_core::models::FamilySet;
use repfam_graph::scoring::overlap;
use repfam_graph::{Grouping, GroupingConfig, analyze};

#[fixture]
fn path_to_data() -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("../tests/data/families")
}

fn load(dir: &PathBuf, name: &str) -> FamilySet {
    let mut families = FamilySet::try_from(dir.join(name)).unwrap();
    families.sort_by_members();
    families
}

fn group_of(grouping: &Grouping, id: usize) -> &repfam_graph::Group {
    grouping
        .groups
        .iter()
        .find(|g| g.members.contains(&id))
        .unwrap()
}

#[rstest]
fn test_full_triangle(path_to_data: PathBuf) {
    let families = load(&path_to_data, "triangle.json");
    let grouping = analyze(&families, &GroupingConfig::default()).unwrap();

    // every pair covers each other completely
    assert_eq!(grouping.edges.len(), 6);
    assert_eq!(grouping.groups.len(), 1);

    let group = &grouping.groups[0];
    assert!(group.is_clique);
    assert!(group.cliques.is_empty());

    // all three rank evenly, so the lowest id represents them
    let rep = group.representative().unwrap();
    assert_eq!(rep, 0);
    for id in 0..3 {
        let label = grouping.identities.label(id);
        assert_eq!(label.cluster, Some(rep));
        assert_eq!(label.clique, Some(rep.to_string()));
    }
}

#[rstest]
fn test_subclique_in_larger_group(path_to_data: PathBuf) {
    let families = load(&path_to_data, "subclique.json");
    let ids: Vec<usize> = families.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![2, 3, 0, 1, 4, 5]);

    let grouping = analyze(&families, &GroupingConfig::default()).unwrap();

    let group = group_of(&grouping, 0);
    assert_eq!(group.members, vec![0, 1, 2, 3, 4]);
    assert!(!group.is_clique);
    assert_eq!(group.cliques, vec![vec![0, 1, 2]]);

    // 2 links the triangle to the tail, so it is the most central
    let rep = group.representative().unwrap();
    assert_eq!(rep, 2);

    let identities = &grouping.identities;
    for id in [0, 1, 2] {
        assert_eq!(identities.memberships(id), 1);
        assert_eq!(identities.cluster(id), Some(2));
        assert_eq!(identities.clique_tag(id), Some("2".to_string()));
    }
    for id in [3, 4] {
        assert_eq!(identities.cluster(id), Some(2));
        assert_eq!(identities.clique_tag(id), None);
    }

    // 5 overlaps nothing
    assert_eq!(group_of(&grouping, 5).members, vec![5]);
    let label = identities.label(5);
    assert_eq!(label.cluster, None);
    assert_eq!(label.clique, None);
}

#[rstest]
fn test_shared_clique_members_are_ambiguous(path_to_data: PathBuf) {
    let families = load(&path_to_data, "shared.json");
    let grouping = analyze(&families, &GroupingConfig::default()).unwrap();

    assert_eq!(grouping.groups.len(), 1);
    let group = &grouping.groups[0];
    assert!(!group.is_clique);
    assert_eq!(group.cliques, vec![vec![0, 1, 2], vec![1, 2, 3]]);

    let top: Vec<usize> = group.ranks.iter().take(2).map(|r| r.id).collect();
    let mut shared = top.clone();
    shared.sort_unstable();
    assert_eq!(shared, vec![1, 2]);

    let identities = &grouping.identities;
    assert_eq!(identities.clique_tag(1), Some("1*".to_string()));
    assert_eq!(identities.clique_tag(2), Some("2*".to_string()));
    assert_eq!(
        identities.clique_tag(0),
        Some(format!("{}.{}.0", top[0], top[1]))
    );
    assert_eq!(
        identities.clique_tag(3),
        Some(format!("{}.{}.3", top[0], top[1]))
    );
    for id in 0..4 {
        assert_eq!(identities.cluster(id), Some(top[0]));
    }
}

#[rstest]
fn test_threshold_above_all_overlaps(path_to_data: PathBuf) {
    let families = load(&path_to_data, "subclique.json");
    let config = GroupingConfig {
        threshold: 1.0,
        ..GroupingConfig::default()
    };
    let grouping = analyze(&families, &config).unwrap();

    // only the fully contained pairs survive: 0,1 in 2; 0 with 1; 4 in 3
    let mut pairs: Vec<(usize, usize)> = grouping.edges.iter().map(|e| (e.from, e.to)).collect();
    pairs.sort_unstable();
    assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 0), (1, 2), (4, 3)]);

    let group = group_of(&grouping, 0);
    assert_eq!(group.members, vec![0, 1, 2]);
    assert!(group.is_clique);
}

#[rstest]
fn test_pairwise_coverage_is_consistent(path_to_data: PathBuf) {
    for name in ["triangle.json", "subclique.json", "shared.json"] {
        let families = load(&path_to_data, name);
        for (i, a) in families.iter().enumerate() {
            for b in families.families[i + 1..].iter() {
                let o = overlap(a, b).unwrap();
                assert!(o.upper >= o.lower);
                assert!((0.0..=1.0).contains(&o.upper));
                assert_eq!(o, overlap(b, a).unwrap());
            }
        }
    }
}

#[rstest]
fn test_groups_partition_families(path_to_data: PathBuf) {
    let families = load(&path_to_data, "subclique.json");
    let grouping = analyze(&families, &GroupingConfig::default()).unwrap();

    let mut all: Vec<usize> = grouping
        .groups
        .iter()
        .flat_map(|g| g.members.iter().copied())
        .collect();
    all.sort_unstable();
    assert_eq!(all, vec![0, 1, 2, 3, 4, 5]);
}

#[rstest]
fn test_runs_are_deterministic(path_to_data: PathBuf) {
    let families = load(&path_to_data, "shared.json");
    let first = analyze(&families, &GroupingConfig::default()).unwrap();
    let second = analyze(&families, &GroupingConfig::default()).unwrap();

    assert_eq!(first.edges, second.edges);
    assert_eq!(first.groups, second.groups);
    assert_eq!(first.identities, second.identities);
}

#[rstest]
fn test_empty_input() {
    let families = FamilySet::from(vec![]);
    let grouping = analyze(&families, &GroupingConfig::default()).unwrap();

    assert!(grouping.edges.is_empty());
    assert!(grouping.groups.is_empty());
}

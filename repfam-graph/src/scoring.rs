//! Pairwise overlap scoring between families.
//!
//! Every pair of families is compared through [`pair_coverage`]. A pair is
//! linked when the smaller family is at least `threshold` covered by the
//! larger one, and linked in both directions when the larger family is also at
//! least `threshold` covered by the smaller one.

use indicatif::ProgressBar;
use log::debug;
use rayon::prelude::*;

use repfam_core::models::Family;
use repfam_coverage::pair_coverage;

use crate::config::check_threshold;
use crate::errors::{GroupingError, Result};

/// A directed, weighted link between two families.
///
/// `from` is explained by `to` to the extent given by `weight`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// The two directional overlap ratios of a family pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    /// Intersection over the smaller family's length.
    pub upper: f64,
    /// Intersection over the larger family's length.
    pub lower: f64,
}

///
/// Compute the overlap ratios of two families.
///
/// Both ratios are symmetric in `a` and `b`, and `upper >= lower`. A pair in
/// which either family covers no bases has both ratios at zero.
///
/// Fails with [`GroupingError::Consistency`] when the pairwise coverage does
/// not reproduce the families' own lengths.
///
pub fn overlap(a: &Family, b: &Family) -> Result<Overlap> {
    // TODO: orientation agreement between members is not considered yet.
    let cov = pair_coverage(&a.members, &b.members);
    if cov.a_len != a.length || cov.b_len != b.length {
        return Err(GroupingError::Consistency {
            a: a.id,
            b: b.id,
            a_len: cov.a_len,
            b_len: cov.b_len,
            expected_a: a.length,
            expected_b: b.length,
        });
    }

    let min = a.length.min(b.length);
    let max = a.length.max(b.length);
    if min == 0 {
        return Ok(Overlap {
            upper: 0.0,
            lower: 0.0,
        });
    }

    Ok(Overlap {
        upper: cov.intersect as f64 / min as f64,
        lower: cov.intersect as f64 / max as f64,
    })
}

///
/// Score one pair of families, returning zero, one or two edges.
///
/// The edge from the smaller to the larger family comes first. On equal
/// lengths `a` is treated as the smaller family.
///
pub fn score_pair(a: &Family, b: &Family, threshold: f64) -> Result<Vec<Edge>> {
    let Overlap { upper, lower } = overlap(a, b)?;
    if upper < threshold {
        return Ok(Vec::new());
    }

    let (small, large) = match a.length > b.length {
        true => (b.id, a.id),
        false => (a.id, b.id),
    };

    let mut edges = vec![Edge {
        from: small,
        to: large,
        weight: upper,
    }];
    if lower >= threshold {
        edges.push(Edge {
            from: large,
            to: small,
            weight: lower,
        });
    }

    Ok(edges)
}

///
/// Score every pair of families in parallel.
///
/// Pairs are visited as `(i, j)` with `i < j` in the order of `families`, and
/// the returned edges keep that order whatever the number of threads.
///
/// # Arguments
/// - families: the families to compare, usually sorted by member count
/// - threshold: minimum overlap ratio, inclusive
/// - pb: ticks once per family compared against the rest
///
pub fn score_pairs(families: &[Family], threshold: f64, pb: &ProgressBar) -> Result<Vec<Edge>> {
    check_threshold(threshold)?;
    if families.len() < 2 {
        return Ok(Vec::new());
    }

    pb.set_length((families.len() - 1) as u64);

    let rows = (0..families.len() - 1)
        .into_par_iter()
        .map(|i| -> Result<Vec<Edge>> {
            let a = &families[i];
            let mut row = Vec::new();
            for b in &families[i + 1..] {
                row.extend(score_pair(a, b, threshold)?);
            }
            pb.inc(1);
            Ok(row)
        })
        .collect::<Result<Vec<_>>>()?;

    let edges: Vec<Edge> = rows.into_iter().flatten().collect();
    for e in &edges {
        debug!("{} {} {}", e.from, e.to, e.weight);
    }

    Ok(edges)
}

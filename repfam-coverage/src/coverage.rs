use fxhash::FxHashMap as HashMap;

use crate::{Span, StepVector};

/// Which of two families covers a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PairFlags {
    pub a: bool,
    pub b: bool,
}

impl PairFlags {
    fn mark(self, side: Side) -> Self {
        match side {
            Side::A => PairFlags { a: true, ..self },
            Side::B => PairFlags { b: true, ..self },
        }
    }

    pub fn both(self) -> bool {
        self.a && self.b
    }
}

#[derive(Debug, Clone, Copy)]
enum Side {
    A,
    B,
}

/// Bases covered by two families, separately and jointly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairCoverage {
    /// Bases covered by the first family.
    pub a_len: u64,
    /// Bases covered by the second family.
    pub b_len: u64,
    /// Bases covered by both families.
    pub intersect: u64,
}

///
/// Compute the number of bases covered by the union of `spans`.
///
/// Spans are grouped per chromosome; overlapping spans on the same chromosome
/// are counted once. Empty spans contribute nothing.
///
/// # Arguments
/// - spans: the intervals of one family
///
pub fn family_length<'a, S, I>(spans: I) -> u64
where
    S: Span + 'a,
    I: IntoIterator<Item = &'a S>,
{
    let mut vecs: HashMap<&str, StepVector<bool>> = HashMap::default();
    for span in spans {
        vecs.entry(span.chrom())
            .or_default()
            .set_range(span.start(), span.end(), true);
    }

    vecs.values().map(|vec| vec.covered(|covered| covered)).sum()
}

///
/// Compute the coverage of two families over each other.
///
/// Each family ORs its own flag into every run its spans touch, so the
/// returned `a_len` and `b_len` always equal [`family_length`] of the
/// respective family. Strand is not considered.
///
/// # Arguments
/// - a: the intervals of the first family
/// - b: the intervals of the second family
///
pub fn pair_coverage<'a, S, A, B>(a: A, b: B) -> PairCoverage
where
    S: Span + 'a,
    A: IntoIterator<Item = &'a S>,
    B: IntoIterator<Item = &'a S>,
{
    let mut vecs: HashMap<&str, StepVector<PairFlags>> = HashMap::default();

    let tagged = a
        .into_iter()
        .map(|s| (Side::A, s))
        .chain(b.into_iter().map(|s| (Side::B, s)));
    for (side, span) in tagged {
        vecs.entry(span.chrom())
            .or_default()
            .apply_range(span.start(), span.end(), |flags| flags.mark(side));
    }

    let mut cov = PairCoverage::default();
    for vec in vecs.values() {
        for (start, end, flags) in vec.runs() {
            let width = (end - start) as u64;
            if flags.a {
                cov.a_len += width;
            }
            if flags.b {
                cov.b_len += width;
            }
            if flags.both() {
                cov.intersect += width;
            }
        }
    }

    cov
}

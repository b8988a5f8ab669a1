use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Included, Unbounded};

use crate::StepState;

/// A step function over `u32` coordinates.
///
/// Each boundary in the vector starts a run that holds one state up to the next
/// boundary. Coordinates before the first boundary and from the last boundary
/// onwards hold the default state, so the vector grows on demand as ranges are
/// applied outside of what it has seen so far.
///
/// Adjacent runs holding the same state are always merged. Applying `k` ranges
/// costs `O(k log k)`, and walking the result with [`StepVector::runs`] costs
/// `O(r)` for `r` distinct runs, independent of the coordinate magnitudes.
///
/// # Examples
///
/// ```
/// use repfam_coverage::StepVector;
///
/// let mut covered = StepVector::<bool>::new();
/// covered.set_range(0, 10, true);
/// covered.set_range(5, 15, true);
/// covered.set_range(20, 25, true);
///
/// assert_eq!(covered.covered(|c| c), 20);
/// assert_eq!(covered.len_runs(), 3); // [0,15) [15,20) [20,25)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepVector<S: StepState> {
    steps: BTreeMap<u32, S>,
}

impl<S: StepState> StepVector<S> {
    pub fn new() -> Self {
        StepVector {
            steps: BTreeMap::new(),
        }
    }

    /// The state holding at `pos`.
    pub fn at(&self, pos: u32) -> S {
        self.steps
            .range(..=pos)
            .next_back()
            .map(|(_, s)| *s)
            .unwrap_or_default()
    }

    /// Overwrite `[start, end)` with `state`.
    pub fn set_range(&mut self, start: u32, end: u32, state: S) {
        self.apply_range(start, end, |_| state);
    }

    /// Replace the state of every run inside `[start, end)` with `f(state)`.
    ///
    /// Empty ranges (`start >= end`) leave the vector untouched.
    pub fn apply_range<F>(&mut self, start: u32, end: u32, f: F)
    where
        F: Fn(S) -> S,
    {
        if start >= end {
            return;
        }

        // split the runs at both ends so the range is covered by whole runs
        let at_end = self.at(end);
        let at_start = self.at(start);
        self.steps.insert(end, at_end);
        self.steps.insert(start, at_start);

        for (_, state) in self.steps.range_mut(start..end) {
            *state = f(*state);
        }

        self.coalesce(start, end);
    }

    /// Drop boundaries in `[start, end]` that do not change the state.
    fn coalesce(&mut self, start: u32, end: u32) {
        let mut prev = self
            .steps
            .range((Unbounded, Excluded(start)))
            .next_back()
            .map(|(_, s)| *s)
            .unwrap_or_default();

        let mut redundant = Vec::new();
        for (pos, state) in self.steps.range((Included(start), Included(end))) {
            if *state == prev {
                redundant.push(*pos);
            } else {
                prev = *state;
            }
        }
        for pos in redundant {
            self.steps.remove(&pos);
        }
    }

    /// Iterate over the runs between the first and last boundary as
    /// `(start, end, state)`, in coordinate order.
    pub fn runs(&self) -> impl Iterator<Item = (u32, u32, S)> + '_ {
        self.steps
            .iter()
            .zip(self.steps.keys().skip(1))
            .map(|((start, state), end)| (*start, *end, *state))
    }

    /// Total length of the runs whose state satisfies `pred`.
    pub fn covered<P>(&self, pred: P) -> u64
    where
        P: Fn(S) -> bool,
    {
        self.runs()
            .filter(|(_, _, state)| pred(*state))
            .map(|(start, end, _)| (end - start) as u64)
            .sum()
    }

    /// Number of distinct runs.
    pub fn len_runs(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

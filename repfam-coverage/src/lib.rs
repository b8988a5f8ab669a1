//! Coverage accounting for genomic interval families.
//!
//! This crate answers two questions about sets of half-open genomic intervals:
//!
//! - how many bases does a set of intervals cover, counting overlapping
//!   intervals only once ([`family_length`])?
//! - for two sets of intervals, how many bases does each cover and how many do
//!   they cover together ([`pair_coverage`])?
//!
//! Both are answered with a [`StepVector`], a per-chromosome step function
//! whose runs are coalesced so that its size tracks the number of distinct
//! runs rather than the span of the coordinates.
//!
//! ## Quick Start
//!
//! ```rust
//! use repfam_coverage::{family_length, pair_coverage};
//!
//! let a = vec![("chr1".to_string(), 0u32, 10u32), ("chr1".to_string(), 5, 15)];
//! let b = vec![("chr1".to_string(), 10u32, 30u32)];
//!
//! assert_eq!(family_length(&a), 15);
//!
//! let cov = pair_coverage(&a, &b);
//! assert_eq!(cov.a_len, 15);
//! assert_eq!(cov.b_len, 20);
//! assert_eq!(cov.intersect, 5);
//! ```

/// Per-chromosome coverage over families of intervals.
///
/// See [`family_length`] and [`pair_coverage`].
pub mod coverage;

/// Coalescing step functions over integer coordinates.
///
/// See [`StepVector`] for details.
pub mod step;

/// Core traits for coverage operations.
pub mod traits;

// re-exports
pub use self::coverage::{PairCoverage, PairFlags, family_length, pair_coverage};
pub use self::step::StepVector;
pub use self::traits::{Span, StepState};

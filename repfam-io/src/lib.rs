//! # Output writers for grouped repeat families.
//!
//! Grouped families are written as GFF annotation lines, one per member
//! feature, tagged with the family's cluster and clique identities. The scored
//! overlap graph can additionally be dumped as a DOT digraph for inspection.
//!
pub mod dot;
pub mod error;
pub mod gff;

// re-expose core functions
pub use dot::*;
pub use error::*;
pub use gff::*;

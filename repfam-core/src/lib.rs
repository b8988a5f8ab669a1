//! Core models for repfam.
//!
//! A [`Family`](models::Family) is a list of genomic [`Feature`](models::Feature)s believed
//! to derive from one repeat element. A [`FamilySet`](models::FamilySet) is everything read
//! from one input file, one family per line of JSON.
pub mod errors;
pub mod models;
pub mod utils;

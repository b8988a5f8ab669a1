pub mod family;
pub mod family_set;
pub mod feature;

// re-export for cleaner imports
pub use self::family::Family;
pub use self::family_set::FamilySet;
pub use self::feature::{Feature, Strand};

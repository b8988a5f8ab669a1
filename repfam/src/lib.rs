#[cfg(feature = "core")]
#[doc(inline)]
pub use repfam_core as core;

#[cfg(feature = "coverage")]
#[doc(inline)]
pub use repfam_coverage as coverage;

#[cfg(feature = "graph")]
#[doc(inline)]
pub use repfam_graph as graph;

#[cfg(feature = "io")]
#[doc(inline)]
pub use repfam_io as io;

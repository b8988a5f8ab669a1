/// A half-open genomic interval `[start, end)` on a named chromosome.
pub trait Span {
    fn chrom(&self) -> &str;
    fn start(&self) -> u32;
    fn end(&self) -> u32;
}

impl Span for (String, u32, u32) {
    fn chrom(&self) -> &str {
        &self.0
    }

    fn start(&self) -> u32 {
        self.1
    }

    fn end(&self) -> u32 {
        self.2
    }
}

impl Span for (&str, u32, u32) {
    fn chrom(&self) -> &str {
        self.0
    }

    fn start(&self) -> u32 {
        self.1
    }

    fn end(&self) -> u32 {
        self.2
    }
}

/// State carried by each run of a [`StepVector`](crate::StepVector).
///
/// `Default` is the state of every coordinate that has never been touched.
pub trait StepState: Copy + Eq + Default + Send + Sync {}

impl<S> StepState for S where S: Copy + Eq + Default + Send + Sync {}

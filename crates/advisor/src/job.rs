use crate::result::{AdvisorError, Insight};

/// A unit of advisory work over a caller-provided snapshot.
///
/// This crate stays storage-agnostic: inputs are provided by callers.
pub trait AdvisorJob {
    type Input;

    /// The snapshot the job will run on.
    fn input(&self) -> &Self::Input;

    /// Produce an insight. Must not mutate the input.
    fn run(&self) -> Result<Insight, AdvisorError>;
}

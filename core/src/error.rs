use thiserror::Error;

/// Every fallible controller operation funnels into this type.
///
/// Errors are returned synchronously from the call that introduces them and
/// never mutate prior state; the caller decides whether to abort or skip the
/// tick.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A caller-supplied value violated the call contract: a time-of-day
    /// outside the `[0, 24)` clock, or a period table that leaves an hour
    /// uncovered or doubly covered.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration rejected at construction: negative or non-finite
    /// deadband, empty period table, or a period bound off the clock.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

use contracts::shared::validation::ValidationError;
use thiserror::Error;

/// Failure of a write made through one of the reactive contexts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The owning provider has been unmounted, so nothing was written
    #[error("{0} is no longer available")]
    Disposed(&'static str),
}

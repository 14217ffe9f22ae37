use thiserror::Error;

/// Errors raised while fitting the rating regressor
///
/// None of these leave the recommender in a partially trained state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainingError {
    #[error("insufficient training data: need at least {required} samples, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("training sample references unknown material {0}")]
    UnknownMaterial(u32),

    #[error("invalid rating {0}: expected a finite value within 0-10")]
    InvalidRating(f64),

    #[error("{rows} feature rows but {targets} targets")]
    ShapeMismatch { rows: usize, targets: usize },

    #[error("invalid training config: {0}")]
    InvalidConfig(String),
}

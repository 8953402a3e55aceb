use thiserror::Error;

#[derive(Error, Debug)]
pub enum SilhouetteError {
    #[error("Failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Grid buffer holds {found} cells, expected {expected}")]
    BufferSize { expected: usize, found: usize },

    #[error("Region extraction exceeded its stack budget of {budget} frames")]
    StackBudgetExceeded { budget: usize },

    #[error("Worker pool error: {0}")]
    WorkerPool(String),
}

pub type Result<T> = std::result::Result<T, SilhouetteError>;

use thiserror::Error;

use crate::model::{PoolError, QuestionError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Pool(#[from] PoolError),
}

use crate::error::StagiaireError;

pub type StagiaireResult<T> = Result<T, StagiaireError>;

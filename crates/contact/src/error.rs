#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("all fields are required: {0}")]
    MissingFields(#[from] validator::ValidationErrors),

    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error("Invalid mock node URL: {0}")]
    InvalidNodeUrl(String),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Could not get connection from pool: {0}")]
    Pool(String),
    #[error("Profile query failed: {0}")]
    Query(#[from] diesel::result::Error),
}

use crate::errors::DirectoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("User not found")]
    UserNotFound,
    #[error("No emergency contacts found")]
    NoContacts,
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

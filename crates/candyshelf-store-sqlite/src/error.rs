//! Error type for `candyshelf-store-sqlite`.

use thiserror::Error;

/// A backend failure. The name-conflict case is not here — it is typed as
/// [`candyshelf_core::store::CreateError::NameTaken`] at the trait boundary.
#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

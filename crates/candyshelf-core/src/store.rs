//! The `CandyStore` trait and the create-failure taxonomy.
//!
//! The trait is implemented by storage backends (e.g.
//! `candyshelf-store-sqlite`). The web layer depends on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use thiserror::Error;

use crate::candy::{Candy, CandyAttrs};

/// Why a [`CandyStore::create`] call failed.
///
/// Name uniqueness is part of the store contract, so the conflict case is
/// typed here rather than buried in each backend's error. Two concurrent
/// creates with the same name race at the backend's uniqueness constraint;
/// the loser gets `NameTaken`, never a crash.
#[derive(Debug, Error)]
pub enum CreateError<E> {
  /// The unique constraint on the candy name rejected the insert.
  #[error("candy name already taken: {0:?}")]
  NameTaken(String),

  /// The backend itself failed.
  #[error(transparent)]
  Store(E),
}

/// Abstraction over a candy store backend.
///
/// Records are only ever created; there is no update or delete. All methods
/// return `Send` futures so the trait can be used in multi-threaded async
/// runtimes (e.g. tokio with `axum`).
pub trait CandyStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// List every record, in storage (insertion) order. A fresh read on each
  /// call; nothing is cached.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Candy>, Self::Error>> + Send + '_;

  /// Persist `attrs` and return the record with its assigned id.
  fn create(
    &self,
    attrs: CandyAttrs,
  ) -> impl Future<Output = Result<Candy, CreateError<Self::Error>>> + Send + '_;
}

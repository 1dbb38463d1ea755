//! [`SqliteStore`] — the SQLite implementation of [`CandyStore`].

use std::path::Path;

use candyshelf_core::{
  candy::{Candy, CandyAttrs},
  store::{CandyStore, CreateError},
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A candy store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── Row mapping ─────────────────────────────────────────────────────────────

const COLUMNS: &str = "id, name, chocolate, fruity, caramel, peanutyalmondy, \
                       nougat, crispedricewafer, hard, bar, pluribus, \
                       sugarpercent, pricepercent, winpercent";

/// Explicit column-by-column mapping from a `candies` row to [`Candy`].
fn candy_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Candy> {
  Ok(Candy {
    id:    row.get(0)?,
    attrs: CandyAttrs {
      name:             row.get(1)?,
      chocolate:        row.get(2)?,
      fruity:           row.get(3)?,
      caramel:          row.get(4)?,
      peanutyalmondy:   row.get(5)?,
      nougat:           row.get(6)?,
      crispedricewafer: row.get(7)?,
      hard:             row.get(8)?,
      bar:              row.get(9)?,
      pluribus:         row.get(10)?,
      sugarpercent:     row.get(11)?,
      pricepercent:     row.get(12)?,
      winpercent:       row.get(13)?,
    },
  })
}

/// Translate a UNIQUE-constraint failure on the candy insert into
/// [`CreateError::NameTaken`]; anything else stays a backend error.
fn map_insert_error(
  e: tokio_rusqlite::Error,
  name: &str,
) -> CreateError<Error> {
  match &e {
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(f, _))
      if f.code == rusqlite::ErrorCode::ConstraintViolation =>
    {
      CreateError::NameTaken(name.to_owned())
    }
    _ => CreateError::Store(Error::Database(e)),
  }
}

// ─── CandyStore impl ─────────────────────────────────────────────────────────

impl CandyStore for SqliteStore {
  type Error = Error;

  async fn list_all(&self) -> Result<Vec<Candy>> {
    let candies = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare(&format!("SELECT {COLUMNS} FROM candies ORDER BY id"))?;
        let rows = stmt
          .query_map([], candy_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(candies)
  }

  async fn create(
    &self,
    attrs: CandyAttrs,
  ) -> Result<Candy, CreateError<Error>> {
    let row = attrs.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO candies (
             name, chocolate, fruity, caramel, peanutyalmondy, nougat,
             crispedricewafer, hard, bar, pluribus,
             sugarpercent, pricepercent, winpercent
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
          rusqlite::params![
            row.name,
            row.chocolate,
            row.fruity,
            row.caramel,
            row.peanutyalmondy,
            row.nougat,
            row.crispedricewafer,
            row.hard,
            row.bar,
            row.pluribus,
            row.sugarpercent,
            row.pricepercent,
            row.winpercent,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(|e| map_insert_error(e, &attrs.name))?;

    Ok(Candy { id, attrs })
  }
}

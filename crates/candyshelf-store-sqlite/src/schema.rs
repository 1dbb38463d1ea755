//! SQL schema for the candyshelf SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// AUTOINCREMENT keeps ids monotonic and never reused, even across
/// out-of-band administrative deletes.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS candies (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    name             TEXT NOT NULL UNIQUE,
    chocolate        INTEGER NOT NULL,
    fruity           INTEGER NOT NULL,
    caramel          INTEGER NOT NULL,
    peanutyalmondy   INTEGER NOT NULL,
    nougat           INTEGER NOT NULL,
    crispedricewafer INTEGER NOT NULL,
    hard             INTEGER NOT NULL,
    bar              INTEGER NOT NULL,
    pluribus         INTEGER NOT NULL,
    sugarpercent     REAL NOT NULL,
    pricepercent     REAL NOT NULL,
    winpercent       REAL NOT NULL
);

PRAGMA user_version = 1;
";

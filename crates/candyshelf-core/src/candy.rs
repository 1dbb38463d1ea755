//! Candy — one row per competitor candy.
//!
//! A candy record is flat: a unique name, nine 0/1 ingredient and form-factor
//! flags, and three measured fractions. The id is assigned by the store.

use serde::Serialize;

/// The attribute set for a candy, minus its storage-assigned id.
///
/// Flags are integers constrained to 0/1 by the form validator; percentages
/// are fractions in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CandyAttrs {
  pub name:             String,
  pub chocolate:        i64,
  pub fruity:           i64,
  pub caramel:          i64,
  pub peanutyalmondy:   i64,
  pub nougat:           i64,
  pub crispedricewafer: i64,
  pub hard:             i64,
  pub bar:              i64,
  pub pluribus:         i64,
  pub sugarpercent:     f64,
  pub pricepercent:     f64,
  pub winpercent:       f64,
}

/// A persisted candy record.
///
/// Ids are monotonic and never reused; records are only ever created through
/// the create flow, never updated or deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Candy {
  pub id:    i64,
  pub attrs: CandyAttrs,
}

/// The lightweight `{name, winpercent}` projection of a record, embedded as
/// JSON in the list page for client-side charting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
  pub name:       String,
  pub winpercent: f64,
}

/// Derive the standings projection: exactly one entry per record, in list
/// order.
pub fn standings(candies: &[Candy]) -> Vec<Standing> {
  candies
    .iter()
    .map(|c| Standing {
      name:       c.attrs.name.clone(),
      winpercent: c.attrs.winpercent,
    })
    .collect()
}

//! Form validation for candy submissions.
//!
//! Converts the raw field-name-to-string mapping of a form-encoded POST into
//! a typed [`CandyAttrs`], or a complete set of per-field errors. Validation
//! never stops at the first problem; every offending field is reported.

use std::{collections::HashMap, fmt};

use thiserror::Error;

use crate::candy::CandyAttrs;

/// Form field carrying the candy name.
pub const NAME_FIELD: &str = "competitorname";

/// Flag fields, in display order. Each must parse as an integer 0 or 1.
pub const FLAG_FIELDS: [&str; 9] = [
  "chocolate",
  "fruity",
  "caramel",
  "peanutyalmondy",
  "nougat",
  "crispedricewafer",
  "hard",
  "bar",
  "pluribus",
];

/// Percentage fields. Each must parse as a fraction in `[0, 1]`.
pub const PERCENT_FIELDS: [&str; 3] =
  ["sugarpercent", "pricepercent", "winpercent"];

// ─── Errors ──────────────────────────────────────────────────────────────────

/// A validation failure on a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct FieldError {
  pub field:  String,
  pub reason: String,
}

/// The accumulated validation failures of one submission.
///
/// Field order follows the form layout, so re-rendered error annotations
/// line up with their inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
  errors: Vec<FieldError>,
}

impl FormErrors {
  pub fn push(&mut self, field: &str, reason: &str) {
    self.errors.push(FieldError {
      field:  field.to_owned(),
      reason: reason.to_owned(),
    });
  }

  pub fn is_empty(&self) -> bool {
    self.errors.is_empty()
  }

  pub fn len(&self) -> usize {
    self.errors.len()
  }

  /// The reason recorded for `field`, if any. Used when re-rendering the
  /// form to annotate the offending input.
  pub fn reason_for(&self, field: &str) -> Option<&str> {
    self
      .errors
      .iter()
      .find(|e| e.field == field)
      .map(|e| e.reason.as_str())
  }

  pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
    self.errors.iter()
  }
}

impl fmt::Display for FormErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "validation failed on {} field(s)", self.errors.len())
  }
}

impl std::error::Error for FormErrors {}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Validate a raw form submission into a [`CandyAttrs`] draft.
///
/// All fields are required. Flags must be 0 or 1; percentages must be
/// fractions in `[0, 1]`. Errors are collected across the whole submission.
pub fn parse_form(
  form: &HashMap<String, String>,
) -> Result<CandyAttrs, FormErrors> {
  let mut errors = FormErrors::default();

  let name = match form.get(NAME_FIELD).map(|s| s.trim()) {
    Some(s) if !s.is_empty() => s.to_owned(),
    _ => {
      errors.push(NAME_FIELD, "required");
      String::new()
    }
  };

  let mut flags = [0i64; 9];
  for (slot, field) in flags.iter_mut().zip(FLAG_FIELDS) {
    *slot = parse_flag(form, field, &mut errors);
  }

  let mut percents = [0f64; 3];
  for (slot, field) in percents.iter_mut().zip(PERCENT_FIELDS) {
    *slot = parse_percent(form, field, &mut errors);
  }

  if !errors.is_empty() {
    return Err(errors);
  }

  Ok(CandyAttrs {
    name,
    chocolate: flags[0],
    fruity: flags[1],
    caramel: flags[2],
    peanutyalmondy: flags[3],
    nougat: flags[4],
    crispedricewafer: flags[5],
    hard: flags[6],
    bar: flags[7],
    pluribus: flags[8],
    sugarpercent: percents[0],
    pricepercent: percents[1],
    winpercent: percents[2],
  })
}

fn parse_flag(
  form: &HashMap<String, String>,
  field: &str,
  errors: &mut FormErrors,
) -> i64 {
  let Some(raw) = form.get(field).map(|s| s.trim()) else {
    errors.push(field, "required");
    return 0;
  };
  if raw.is_empty() {
    errors.push(field, "required");
    return 0;
  }
  match raw.parse::<i64>() {
    Ok(v @ (0 | 1)) => v,
    Ok(_) => {
      errors.push(field, "must be 0 or 1");
      0
    }
    Err(_) => {
      errors.push(field, "must be an integer");
      0
    }
  }
}

fn parse_percent(
  form: &HashMap<String, String>,
  field: &str,
  errors: &mut FormErrors,
) -> f64 {
  let Some(raw) = form.get(field).map(|s| s.trim()) else {
    errors.push(field, "required");
    return 0.0;
  };
  if raw.is_empty() {
    errors.push(field, "required");
    return 0.0;
  }
  match raw.parse::<f64>() {
    Ok(v) if (0.0..=1.0).contains(&v) => v,
    Ok(_) => {
      errors.push(field, "must be between 0 and 1");
      0.0
    }
    Err(_) => {
      errors.push(field, "must be a number");
      0.0
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn valid_form() -> HashMap<String, String> {
    let mut m = HashMap::new();
    m.insert(NAME_FIELD.to_owned(), "Nerds".to_owned());
    for field in FLAG_FIELDS {
      m.insert(field.to_owned(), "0".to_owned());
    }
    m.insert("fruity".to_owned(), "1".to_owned());
    m.insert("hard".to_owned(), "1".to_owned());
    m.insert("pluribus".to_owned(), "1".to_owned());
    m.insert("sugarpercent".to_owned(), "0.3".to_owned());
    m.insert("pricepercent".to_owned(), "0.2".to_owned());
    m.insert("winpercent".to_owned(), "0.55".to_owned());
    m
  }

  #[test]
  fn valid_submission_parses() {
    let attrs = parse_form(&valid_form()).unwrap();
    assert_eq!(attrs.name, "Nerds");
    assert_eq!(attrs.chocolate, 0);
    assert_eq!(attrs.fruity, 1);
    assert_eq!(attrs.hard, 1);
    assert_eq!(attrs.pluribus, 1);
    assert_eq!(attrs.sugarpercent, 0.3);
    assert_eq!(attrs.pricepercent, 0.2);
    assert_eq!(attrs.winpercent, 0.55);
  }

  #[test]
  fn name_is_trimmed() {
    let mut form = valid_form();
    form.insert(NAME_FIELD.to_owned(), "  Nerds ".to_owned());
    let attrs = parse_form(&form).unwrap();
    assert_eq!(attrs.name, "Nerds");
  }

  #[test]
  fn missing_name_is_an_error_on_that_field() {
    let mut form = valid_form();
    form.remove(NAME_FIELD);

    let errors = parse_form(&form).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.reason_for(NAME_FIELD), Some("required"));
  }

  #[test]
  fn blank_name_is_an_error() {
    let mut form = valid_form();
    form.insert(NAME_FIELD.to_owned(), "   ".to_owned());

    let errors = parse_form(&form).unwrap_err();
    assert_eq!(errors.reason_for(NAME_FIELD), Some("required"));
  }

  #[test]
  fn non_numeric_percent_fails_that_field_only() {
    let mut form = valid_form();
    form.insert("sugarpercent".to_owned(), "sweet".to_owned());

    let errors = parse_form(&form).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.reason_for("sugarpercent"), Some("must be a number"));
    assert_eq!(errors.reason_for("pricepercent"), None);
    assert_eq!(errors.reason_for("winpercent"), None);
  }

  #[test]
  fn flag_outside_zero_one_is_rejected() {
    let mut form = valid_form();
    form.insert("chocolate".to_owned(), "2".to_owned());

    let errors = parse_form(&form).unwrap_err();
    assert_eq!(errors.reason_for("chocolate"), Some("must be 0 or 1"));
  }

  #[test]
  fn non_integer_flag_is_rejected() {
    let mut form = valid_form();
    form.insert("bar".to_owned(), "yes".to_owned());

    let errors = parse_form(&form).unwrap_err();
    assert_eq!(errors.reason_for("bar"), Some("must be an integer"));
  }

  #[test]
  fn percent_outside_unit_interval_is_rejected() {
    let mut form = valid_form();
    form.insert("winpercent".to_owned(), "1.5".to_owned());

    let errors = parse_form(&form).unwrap_err();
    assert_eq!(
      errors.reason_for("winpercent"),
      Some("must be between 0 and 1")
    );
  }

  #[test]
  fn errors_are_collected_across_all_fields() {
    let mut form = valid_form();
    form.remove(NAME_FIELD);
    form.insert("fruity".to_owned(), "maybe".to_owned());
    form.insert("sugarpercent".to_owned(), "lots".to_owned());

    let errors = parse_form(&form).unwrap_err();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.reason_for(NAME_FIELD), Some("required"));
    assert_eq!(errors.reason_for("fruity"), Some("must be an integer"));
    assert_eq!(errors.reason_for("sugarpercent"), Some("must be a number"));
  }

  #[test]
  fn empty_submission_reports_every_field() {
    let errors = parse_form(&HashMap::new()).unwrap_err();
    // name + 9 flags + 3 percentages
    assert_eq!(errors.len(), 13);
    assert!(errors.iter().all(|e| e.reason == "required"));
  }
}

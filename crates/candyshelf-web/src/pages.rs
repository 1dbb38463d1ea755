//! HTML page generation.
//!
//! Pages are assembled in-process with an escaping writer; there is no
//! template engine. The list page embeds the standings projection as a JSON
//! `<script>` block for client-side charting.

use std::collections::HashMap;

use candyshelf_core::{
  candy::Candy,
  form::{FLAG_FIELDS, FormErrors, NAME_FIELD, PERCENT_FIELDS},
};

// ─── Escaping ────────────────────────────────────────────────────────────────

/// Escape `s` for use in HTML text and double-quoted attribute values.
fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(c),
    }
  }
  out
}

/// Make a JSON string safe inside a `<script>` block: a candy name
/// containing `</script>` must not terminate the block early.
fn script_safe(json: &str) -> String {
  json.replace('<', "\\u003c")
}

fn page(title: &str, body: &str) -> String {
  format!(
    "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
     <title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
    escape(title),
    body
  )
}

// ─── List page ───────────────────────────────────────────────────────────────

/// Render the list page: a table of every field per record, plus the
/// standings JSON in a `<script id=\"standings\">` block.
pub fn list_page(candies: &[Candy], standings_json: &str) -> String {
  let mut body = String::new();
  body.push_str("<h1>Candies</h1>\n<table>\n<tr><th>id</th><th>name</th>");
  for field in FLAG_FIELDS {
    body.push_str(&format!("<th>{field}</th>"));
  }
  for field in PERCENT_FIELDS {
    body.push_str(&format!("<th>{field}</th>"));
  }
  body.push_str("</tr>\n");

  for candy in candies {
    let a = &candy.attrs;
    body.push_str(&format!(
      "<tr><td>{}</td><td>{}</td>",
      candy.id,
      escape(&a.name)
    ));
    for flag in [
      a.chocolate,
      a.fruity,
      a.caramel,
      a.peanutyalmondy,
      a.nougat,
      a.crispedricewafer,
      a.hard,
      a.bar,
      a.pluribus,
    ] {
      body.push_str(&format!("<td>{flag}</td>"));
    }
    for pct in [a.sugarpercent, a.pricepercent, a.winpercent] {
      body.push_str(&format!("<td>{pct}</td>"));
    }
    body.push_str("</tr>\n");
  }

  body.push_str("</table>\n<p><a href=\"/create\">Add a candy</a></p>\n");
  body.push_str(&format!(
    "<script id=\"standings\" type=\"application/json\">{}</script>\n",
    script_safe(standings_json)
  ));

  page("Candies", &body)
}

// ─── Form page ───────────────────────────────────────────────────────────────

/// Render the create form. `values` carries the previous submission when
/// re-rendering after a failure; `errors` annotates offending fields.
pub fn form_page(
  values: &HashMap<String, String>,
  errors: &FormErrors,
) -> String {
  let mut body = String::new();
  body.push_str(
    "<h1>Add a candy</h1>\n<form method=\"post\" action=\"/create\">\n",
  );

  input_row(&mut body, NAME_FIELD, values, errors);
  for field in FLAG_FIELDS {
    input_row(&mut body, field, values, errors);
  }
  for field in PERCENT_FIELDS {
    input_row(&mut body, field, values, errors);
  }

  body.push_str(
    "<p><button type=\"submit\">Create</button></p>\n</form>\n\
     <p><a href=\"/\">Back to the list</a></p>\n",
  );

  page("Add a candy", &body)
}

fn input_row(
  body: &mut String,
  field: &str,
  values: &HashMap<String, String>,
  errors: &FormErrors,
) {
  let value = values.get(field).map(String::as_str).unwrap_or("");
  body.push_str(&format!(
    "<p><label for=\"{field}\">{field}</label> \
     <input id=\"{field}\" name=\"{field}\" value=\"{}\">",
    escape(value)
  ));
  if let Some(reason) = errors.reason_for(field) {
    body.push_str(&format!(
      " <span class=\"error\">{}</span>",
      escape(reason)
    ));
  }
  body.push_str("</p>\n");
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use candyshelf_core::candy::CandyAttrs;

  use super::*;

  #[test]
  fn escape_covers_markup_characters() {
    assert_eq!(escape("a&b<c>\"d'"), "a&amp;b&lt;c&gt;&quot;d&#39;");
  }

  #[test]
  fn list_page_escapes_names() {
    let candy = Candy {
      id:    1,
      attrs: CandyAttrs {
        name: "<script>oops".to_owned(),
        chocolate: 0,
        fruity: 0,
        caramel: 0,
        peanutyalmondy: 0,
        nougat: 0,
        crispedricewafer: 0,
        hard: 0,
        bar: 0,
        pluribus: 0,
        sugarpercent: 0.0,
        pricepercent: 0.0,
        winpercent: 0.0,
      },
    };
    let html = list_page(&[candy], "[]");
    assert!(html.contains("&lt;script&gt;oops"));
    assert!(!html.contains("<script>oops"));
  }

  #[test]
  fn standings_json_cannot_break_out_of_script_block() {
    let html = list_page(&[], r#"[{"name":"</script>","winpercent":0.1}]"#);
    assert!(!html.contains("</script>\",\"winpercent\""));
    assert!(html.contains("\\u003c/script>"));
  }

  #[test]
  fn form_page_annotates_only_offending_fields() {
    let mut errors = FormErrors::default();
    errors.push("sugarpercent", "must be a number");

    let html = form_page(&HashMap::new(), &errors);
    assert_eq!(html.matches("class=\"error\"").count(), 1);
    assert!(html.contains("must be a number"));
  }

  #[test]
  fn form_page_keeps_submitted_values() {
    let mut values = HashMap::new();
    values.insert(NAME_FIELD.to_owned(), "Nerds".to_owned());

    let html = form_page(&values, &FormErrors::default());
    assert!(html.contains("value=\"Nerds\""));
  }
}

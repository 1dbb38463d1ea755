//! Request handlers for the list and create routes.
//!
//! | Method | Path      | Notes |
//! |--------|-----------|-------|
//! | `GET`  | `/`       | List page with embedded standings JSON |
//! | `GET`  | `/create` | Blank submission form |
//! | `POST` | `/create` | 303 to `/` on success; re-rendered form otherwise |

use std::collections::HashMap;

use axum::{
  extract::{Form, State},
  http::StatusCode,
  response::{Html, IntoResponse, Redirect, Response},
};
use candyshelf_core::{
  candy::standings,
  form::{self, FormErrors},
  store::{CandyStore, CreateError},
};

use crate::{AppState, error::Error, pages};

/// `GET /`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Html<String>, Error>
where
  S: CandyStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let candies = state.store.list_all().await.map_err(Error::store)?;
  let json = serde_json::to_string(&standings(&candies))?;
  Ok(Html(pages::list_page(&candies, &json)))
}

/// `GET /create`
pub async fn show_form<S>(State(_state): State<AppState<S>>) -> Html<String>
where
  S: CandyStore + Clone + Send + Sync + 'static,
{
  Html(pages::form_page(&HashMap::new(), &FormErrors::default()))
}

/// `POST /create`
///
/// Validation failure re-renders the form with the submitted values and per
/// field errors; nothing is written. A duplicate name surfaces as 409 with a
/// conflict annotation on the name field.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(fields): Form<HashMap<String, String>>,
) -> Result<Response, Error>
where
  S: CandyStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let attrs = match form::parse_form(&fields) {
    Ok(attrs) => attrs,
    Err(errors) => {
      return Ok(Html(pages::form_page(&fields, &errors)).into_response());
    }
  };

  match state.store.create(attrs).await {
    Ok(candy) => {
      tracing::info!(id = candy.id, name = %candy.attrs.name, "created candy");
      Ok(Redirect::to("/").into_response())
    }
    Err(CreateError::NameTaken(_)) => {
      let mut errors = FormErrors::default();
      errors.push(form::NAME_FIELD, "already taken");
      Ok(
        (StatusCode::CONFLICT, Html(pages::form_page(&fields, &errors)))
          .into_response(),
      )
    }
    Err(CreateError::Store(e)) => Err(Error::store(e)),
  }
}

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::get,
    Form, Json, Router,
};

use itemservice_core::{DomainError, DomainResult, Entity, ItemId};
use itemservice_items::{Item, ItemPayload};

use crate::app::services::AppServices;
use crate::app::{dto, errors, form};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items))
        .route("/add", get(add_form).post(add_item))
        .route("/:id", get(get_item))
        .route("/:id/edit", get(edit_form).post(edit_item))
}

pub async fn list_items(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let items = services
        .store()
        .find_all()
        .iter()
        .map(dto::item_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid item id"),
    };
    match services.store().find_by_id(id) {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn add_form() -> axum::response::Response {
    let item = dto::payload_to_json(None, &ItemPayload::default());
    (StatusCode::OK, Json(dto::form_view(item, vec![]))).into_response()
}

/// Decoded form pairs, or axum's rejection when the body is not a form.
type FormBody = Result<Form<Vec<(String, String)>>, FormRejection>;

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: FormBody,
) -> axum::response::Response {
    let store = services.store();
    handle_submission(&services, FormTarget::Add, body, |payload| Ok(store.save(payload)))
}

pub async fn edit_form(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid item id"),
    };
    match services.store().find_by_id(id) {
        Ok(item) => {
            (StatusCode::OK, Json(dto::form_view(dto::item_to_json(&item), vec![]))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn edit_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: FormBody,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid item id"),
    };
    let store = services.store();
    handle_submission(&services, FormTarget::Edit(id), body, |payload| {
        store.update(id, payload)
    })
}

/// Which form a submission came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum FormTarget {
    Add,
    Edit(ItemId),
}

impl FormTarget {
    fn label(self) -> &'static str {
        match self {
            FormTarget::Add => "add",
            FormTarget::Edit(_) => "edit",
        }
    }

    fn item_id(self) -> Option<ItemId> {
        match self {
            FormTarget::Add => None,
            FormTarget::Edit(id) => Some(id),
        }
    }

    fn redirect_location(self, id: ItemId) -> String {
        match self {
            FormTarget::Add => format!("/items/{id}?status=true"),
            FormTarget::Edit(_) => format!("/items/{id}"),
        }
    }
}

/// Bind → validate → persist, then map the outcome to a response:
/// 303 to the detail view, 422 redisplay with violations, or 400 redisplay
/// with binding failures.
fn handle_submission<F>(
    services: &AppServices,
    target: FormTarget,
    body: FormBody,
    persist: F,
) -> axum::response::Response
where
    F: FnOnce(ItemPayload) -> DomainResult<Item>,
{
    let body = match body {
        Ok(Form(pairs)) => dto::ItemForm::from_pairs(pairs),
        Err(rejection) => {
            tracing::info!(form = target.label(), %rejection, "item form could not be decoded");
            let item = dto::raw_form_to_json(target.item_id(), &dto::ItemForm::default());
            let errors = vec![dto::undecodable_form_to_json(rejection.body_text())];
            return (StatusCode::BAD_REQUEST, Json(dto::form_view(item, errors))).into_response();
        }
    };

    let payload = match body.parse() {
        Ok(p) => p,
        Err(DomainError::MalformedInput(failures)) => {
            tracing::info!(form = target.label(), ?failures, "item form could not be bound");
            let errors = failures
                .iter()
                .map(|f| dto::binding_failure_to_json(f, services.messages()))
                .collect();
            let item = dto::raw_form_to_json(target.item_id(), &body);
            return (StatusCode::BAD_REQUEST, Json(dto::form_view(item, errors))).into_response();
        }
        Err(e) => return errors::domain_error_to_response(e),
    };

    match form::submit(services.validator(), payload.clone(), persist) {
        Ok(item) => {
            tracing::info!(form = target.label(), item_id = %item.id(), "item form accepted");
            Redirect::to(&target.redirect_location(*item.id())).into_response()
        }
        Err(DomainError::ValidationFailed(violations)) => {
            tracing::info!(form = target.label(), errors = %violations, "item form rejected");
            let errors = dto::violations_to_json(&violations, services.messages());
            let item = dto::payload_to_json(target.item_id(), &payload);
            (StatusCode::UNPROCESSABLE_ENTITY, Json(dto::form_view(item, errors))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

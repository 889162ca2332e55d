use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::{cookie::CookieJar, WithRejection};
use common::pagination::PageRequest;
use serde::Deserialize;
use service::{
    errors::ServiceError,
    house::{HouseEditForm, HouseRegisterForm, HouseRepository as _},
};
use tracing::{info, warn};

use crate::{
    errors::JsonApiError,
    metrics,
    state::AppState,
    view::{self, View},
};

pub const INDEX_PATH: &str = "/admin/houses";

pub const MSG_REGISTERED: &str = "House registered.";
pub const MSG_UPDATED: &str = "House updated.";
pub const MSG_DELETED: &str = "House deleted.";

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Substring to look for in the house name
    pub keyword: Option<String>,
    /// 0-based page index
    pub page: Option<u64>,
    /// Page size, 1..=100
    pub size: Option<u64>,
    /// `field` or `field,asc|desc`
    pub sort: Option<String>,
}

#[utoipa::path(
    get, path = "/admin/houses", tag = "houses",
    params(ListQuery),
    responses(
        (status = 200, description = "Listing view"),
        (status = 400, description = "Bad paging or sort parameter")
    )
)]
pub async fn index(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Query(q), _): WithRejection<Query<ListQuery>, JsonApiError>,
) -> Result<View, JsonApiError> {
    let req = PageRequest::from_parts(q.page, q.size, q.sort.as_deref())
        .map_err(|e| JsonApiError::bad_request(e.to_string()))?;
    let houses = state.houses.search(q.keyword.as_deref(), &req).await?;
    info!(count = houses.content.len(), total = houses.total_elements, page = req.page, "list houses");
    Ok(View::new(view::INDEX)
        .with("houses", &houses)
        .with("keyword", &q.keyword)
        .with_flash(state.flash.take(&jar)))
}

#[utoipa::path(
    get, path = "/admin/houses/{id}", tag = "houses",
    params(("id" = i32, Path, description = "House ID")),
    responses(
        (status = 200, description = "Detail view"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn show(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Path(id), _): WithRejection<Path<i32>, JsonApiError>,
) -> Result<View, JsonApiError> {
    let house = state.houses.get(id).await?;
    Ok(View::new(view::SHOW).with("house", &house).with_flash(state.flash.take(&jar)))
}

#[utoipa::path(
    get, path = "/admin/houses/register", tag = "houses",
    responses((status = 200, description = "Empty registration form"))
)]
pub async fn register(State(state): State<AppState>, jar: CookieJar) -> View {
    View::new(view::REGISTER)
        .with("house_register_form", &HouseRegisterForm::default())
        .with_flash(state.flash.take(&jar))
}

#[utoipa::path(
    post, path = "/admin/houses/create", tag = "houses",
    responses(
        (status = 303, description = "Registered, redirect to listing"),
        (status = 422, description = "Registration form with field errors"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Form(form), _): WithRejection<Form<HouseRegisterForm>, JsonApiError>,
) -> Result<Response, JsonApiError> {
    match state.house_service.create(&form).await {
        Ok(house) => {
            metrics::record_write("create");
            info!(id = house.id, "registered house");
            let jar = state.flash.put(jar, MSG_REGISTERED);
            Ok((jar, Redirect::to(INDEX_PATH)).into_response())
        }
        Err(ServiceError::InvalidForm(errors)) => {
            metrics::record_rejection("register");
            warn!(errors = errors.len(), "house registration rejected");
            Ok(View::new(view::REGISTER)
                .status(StatusCode::UNPROCESSABLE_ENTITY)
                .with("house_register_form", &form)
                .with("errors", &errors)
                .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    get, path = "/admin/houses/{id}/edit", tag = "houses",
    params(("id" = i32, Path, description = "House ID")),
    responses(
        (status = 200, description = "Pre-filled edit form"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn edit(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Path(id), _): WithRejection<Path<i32>, JsonApiError>,
) -> Result<View, JsonApiError> {
    let house = state.houses.get(id).await?;
    Ok(View::new(view::EDIT)
        .with("image_name", &house.image_name)
        .with("house_edit_form", &HouseEditForm::from_house(&house))
        .with_flash(state.flash.take(&jar)))
}

#[utoipa::path(
    post, path = "/admin/houses/{id}/update", tag = "houses",
    params(("id" = i32, Path, description = "House ID")),
    responses(
        (status = 303, description = "Updated, redirect to listing"),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Edit form with field errors"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Path(id), _): WithRejection<Path<i32>, JsonApiError>,
    WithRejection(Form(mut form), _): WithRejection<Form<HouseEditForm>, JsonApiError>,
) -> Result<Response, JsonApiError> {
    // the path decides which row is edited
    form.id = Some(id);
    match state.house_service.update(id, &form).await {
        Ok(house) => {
            metrics::record_write("update");
            info!(id = house.id, "updated house");
            let jar = state.flash.put(jar, MSG_UPDATED);
            Ok((jar, Redirect::to(INDEX_PATH)).into_response())
        }
        Err(ServiceError::InvalidForm(errors)) => {
            metrics::record_rejection("edit");
            warn!(id, errors = errors.len(), "house edit rejected");
            let image_name = state.houses.get(id).await?.image_name;
            Ok(View::new(view::EDIT)
                .status(StatusCode::UNPROCESSABLE_ENTITY)
                .with("image_name", &image_name)
                .with("house_edit_form", &form)
                .with("errors", &errors)
                .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    post, path = "/admin/houses/{id}/delete", tag = "houses",
    params(("id" = i32, Path, description = "House ID")),
    responses(
        (status = 303, description = "Deleted, redirect to listing"),
        (status = 404, description = "No house with this id"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Path(id), _): WithRejection<Path<i32>, JsonApiError>,
) -> Result<Response, JsonApiError> {
    if !state.houses.delete_by_id(id).await? {
        return Err(JsonApiError::not_found(format!("house {id} not found")));
    }
    metrics::record_write("delete");
    info!(id, "deleted house");
    let jar = state.flash.put(jar, MSG_DELETED);
    Ok((jar, Redirect::to(INDEX_PATH)).into_response())
}

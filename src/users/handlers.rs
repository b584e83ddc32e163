use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{info, instrument};

use crate::{clock, error::ApiError, ident, state::AppState};

use super::dto::{default_avatar, CreateUser, UpdateUser, User, UserResponse};
use super::{repo, rules};

fn no_such_user(user_id: &str) -> ApiError {
    ApiError::NotFound(format!(
        "Invalid user ID: {user_id}. There is no user with such ID in the database"
    ))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = repo::find_all(&state.db).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUser>,
) -> Result<impl IntoResponse, ApiError> {
    rules::validate_create(&payload)?;

    let now = clock::now();
    let image_url = payload
        .image_url
        .or_else(|| Some(default_avatar(payload.sex.as_deref()).to_string()));
    let user = User {
        id: None,
        name: payload.name.unwrap_or_default(),
        username: payload.username.unwrap_or_default(),
        password: payload.password,
        sex: payload.sex.unwrap_or_default(),
        role: payload.role,
        image_url,
        description: payload.description,
        status_of_acc: payload.status_of_acc,
        date_of_reg: now.clone(),
        date_of_last_change: now,
    };

    info!(username = %user.username, "inserting user");
    let id = repo::insert(&state.db, &user)
        .await?
        .ok_or_else(|| ApiError::Persistence("user insert was not acknowledged".into()))?;
    let user = User {
        id: Some(id),
        ..user
    };

    let location = format!("/api/users/{}", id.to_hex());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(user)),
    ))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let oid = ident::to_object_id("user", &user_id)?;
    match repo::find_by_id(&state.db, oid).await? {
        Some(user) => Ok(Json(UserResponse::from(user))),
        None => Err(no_such_user(&user_id)),
    }
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<UpdateUser>,
) -> Result<Json<UserResponse>, ApiError> {
    if payload.id.as_deref() != Some(user_id.as_str()) {
        return Err(ApiError::IdentifierMismatch(format!(
            "User ID does not match: {} vs. {}",
            user_id,
            payload.id.as_deref().unwrap_or("(none)")
        )));
    }
    rules::validate_update(&payload)?;
    let oid = ident::to_object_id("user", &user_id)?;

    // Replace drops unspecified optional fields; only the registration
    // stamp is carried over from the stored document.
    let existing = repo::find_by_id(&state.db, oid)
        .await?
        .ok_or_else(|| no_such_user(&user_id))?;

    let user = User {
        id: Some(oid),
        name: payload.name.unwrap_or_default(),
        username: payload.username.unwrap_or_default(),
        password: payload.password,
        sex: payload.sex.unwrap_or_default(),
        role: payload.role,
        image_url: payload.image_url,
        description: payload.description,
        status_of_acc: payload.status_of_acc,
        date_of_reg: existing.date_of_reg,
        date_of_last_change: clock::now(),
    };

    info!(user_id = %user_id, "updating user");
    let matched = repo::replace(&state.db, oid, &user).await?;
    if matched == 0 {
        return Err(no_such_user(&user_id));
    }
    Ok(Json(UserResponse::from(user)))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let oid = ident::to_object_id("user", &user_id)?;
    match repo::delete(&state.db, oid).await? {
        Some(user) => {
            info!(user_id = %user_id, "user deleted");
            Ok(Json(UserResponse::from(user)))
        }
        None => Err(ApiError::NotFound(format!("Invalid user ID: {user_id}"))),
    }
}

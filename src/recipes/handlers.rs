use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use mongodb::{bson::oid::ObjectId, Database};
use tracing::{info, instrument};

use crate::{clock, error::ApiError, ident, state::AppState, users};

use super::dto::{Recipe, RecipePayload, RecipeResponse};
use super::{repo, rules};

/// Parent check, sequenced strictly before any recipe operation. A
/// malformed or unknown user id short-circuits the whole request.
async fn require_user(db: &Database, user_id: &str) -> Result<ObjectId, ApiError> {
    let oid = ident::to_object_id("user", user_id)?;
    users::repo::find_by_id(db, oid).await?.ok_or_else(|| {
        ApiError::NotFound(format!(
            "Invalid user ID: {user_id}. There is no user with such ID in the database"
        ))
    })?;
    Ok(oid)
}

#[instrument(skip(state))]
pub async fn list_recipes(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<RecipeResponse>>, ApiError> {
    require_user(&state.db, &user_id).await?;
    let recipes = repo::find_by_user(&state.db, &user_id).await?;
    Ok(Json(recipes.into_iter().map(RecipeResponse::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn create_recipe(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<RecipePayload>,
) -> Result<impl IntoResponse, ApiError> {
    require_user(&state.db, &user_id).await?;
    rules::validate_payload(&payload)?;

    let now = clock::now();
    let recipe = Recipe {
        id: None,
        user_id: user_id.clone(),
        name: payload.name.unwrap_or_default(),
        short_descr: payload.short_descr.unwrap_or_default(),
        time: payload.time,
        image_url: payload.image_url,
        long_descr: payload.long_descr,
        date_of_publ: now.clone(),
        date_of_last_change: now,
    };

    info!(name = %recipe.name, user_id = %user_id, "inserting recipe");
    let id = repo::insert(&state.db, &recipe)
        .await?
        .ok_or_else(|| ApiError::Persistence("recipe insert was not acknowledged".into()))?;
    let recipe = Recipe {
        id: Some(id),
        ..recipe
    };

    let location = format!("/api/users/{user_id}/recipes/{}", id.to_hex());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(RecipeResponse::from(recipe)),
    ))
}

#[instrument(skip(state))]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path((user_id, recipe_id)): Path<(String, String)>,
) -> Result<Json<RecipeResponse>, ApiError> {
    require_user(&state.db, &user_id).await?;
    let oid = ident::to_object_id("recipe", &recipe_id)?;
    match repo::find_by_id(&state.db, oid).await? {
        Some(recipe) => Ok(Json(RecipeResponse::from(recipe))),
        None => Err(ApiError::NotFound(format!("Invalid recipe ID: {recipe_id}"))),
    }
}

#[instrument(skip(state, payload))]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path((user_id, recipe_id)): Path<(String, String)>,
    Json(payload): Json<RecipePayload>,
) -> Result<Json<RecipeResponse>, ApiError> {
    require_user(&state.db, &user_id).await?;
    let oid = ident::to_object_id("recipe", &recipe_id)?;
    rules::validate_payload(&payload)?;

    // Carry the set-once publication stamp over from the stored document.
    let existing = repo::find_by_owner(&state.db, oid, &user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Invalid recipe ID: {recipe_id}")))?;

    let recipe = Recipe {
        id: Some(oid),
        user_id: user_id.clone(),
        name: payload.name.unwrap_or_default(),
        short_descr: payload.short_descr.unwrap_or_default(),
        time: payload.time,
        image_url: payload.image_url,
        long_descr: payload.long_descr,
        date_of_publ: existing.date_of_publ,
        date_of_last_change: clock::now(),
    };

    info!(recipe_id = %recipe_id, user_id = %user_id, "updating recipe");
    let matched = repo::replace(&state.db, oid, &user_id, &recipe).await?;
    if matched == 0 {
        return Err(ApiError::NotFound(format!("Invalid recipe ID: {recipe_id}")));
    }
    Ok(Json(RecipeResponse::from(recipe)))
}

#[instrument(skip(state))]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path((user_id, recipe_id)): Path<(String, String)>,
) -> Result<Json<RecipeResponse>, ApiError> {
    require_user(&state.db, &user_id).await?;
    let oid = ident::to_object_id("recipe", &recipe_id)?;
    match repo::delete(&state.db, oid).await? {
        Some(recipe) => {
            info!(recipe_id = %recipe_id, "recipe deleted");
            Ok(Json(RecipeResponse::from(recipe)))
        }
        None => Err(ApiError::NotFound(format!("Invalid recipe ID: {recipe_id}"))),
    }
}

mod dto;
mod handlers;
mod repo;
mod rules;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/users/:userId/recipes",
            get(handlers::list_recipes).post(handlers::create_recipe),
        )
        .route(
            "/users/:userId/recipes/:recipeId",
            get(handlers::get_recipe)
                .put(handlers::update_recipe)
                .delete(handlers::delete_recipe),
        )
}

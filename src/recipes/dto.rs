use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Stored recipe document. `userId` holds the owner's external hex id as
/// a plain string, the same form the HTTP path carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub name: String,
    pub short_descr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_descr: Option<String>,
    pub date_of_publ: String,
    pub date_of_last_change: String,
}

/// Inbound body for both creation and update; the same ruleset governs
/// the two operations.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePayload {
    pub name: Option<String>,
    pub short_descr: Option<String>,
    pub time: Option<String>,
    pub image_url: Option<String>,
    pub long_descr: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub short_descr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_descr: Option<String>,
    pub date_of_publ: String,
    pub date_of_last_change: String,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            user_id: recipe.user_id,
            name: recipe.name,
            short_descr: recipe.short_descr,
            time: recipe.time,
            image_url: recipe.image_url,
            long_descr: recipe.long_descr,
            date_of_publ: recipe.date_of_publ,
            date_of_last_change: recipe.date_of_last_change,
        }
    }
}

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FEMALE_AVATAR: &str =
    "http://wuf9.org/wp-content/themes/wuf9/img/default-female.jpg";
pub const DEFAULT_MALE_AVATAR: &str =
    "https://www.mastermindpromotion.com/wp-content/uploads/2015/02/facebook-default-no-profile-pic-300x300.jpg";

/// Avatar assigned at creation when the payload carries no imageUrl.
pub fn default_avatar(sex: Option<&str>) -> &'static str {
    match sex {
        Some("f") => DEFAULT_FEMALE_AVATAR,
        _ => DEFAULT_MALE_AVATAR,
    }
}

/// Stored user document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub sex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_of_acc: Option<String>,
    pub date_of_reg: String,
    pub date_of_last_change: String,
}

/// Creation payload. Everything is optional here so the ruleset, not the
/// deserializer, reports missing fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub sex: Option<String>,
    pub role: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub status_of_acc: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub id: Option<String>,
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub sex: Option<String>,
    pub role: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub status_of_acc: Option<String>,
}

/// Wire form: the stored `_id` becomes the external `id` hex string.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub sex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_of_acc: Option<String>,
    pub date_of_reg: String,
    pub date_of_last_change: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: user.name,
            username: user.username,
            password: user.password,
            sex: user.sex,
            role: user.role,
            image_url: user.image_url,
            description: user.description,
            status_of_acc: user.status_of_acc,
            date_of_reg: user.date_of_reg,
            date_of_last_change: user.date_of_last_change,
        }
    }
}

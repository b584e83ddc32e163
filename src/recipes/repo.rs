use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};

use crate::state::RECIPES_COLLECTION;

use super::dto::Recipe;

fn collection(db: &Database) -> Collection<Recipe> {
    db.collection(RECIPES_COLLECTION)
}

pub async fn find_by_user(db: &Database, user_id: &str) -> mongodb::error::Result<Vec<Recipe>> {
    collection(db)
        .find(doc! { "userId": user_id }, None)
        .await?
        .try_collect()
        .await
}

pub async fn find_by_id(db: &Database, id: ObjectId) -> mongodb::error::Result<Option<Recipe>> {
    collection(db).find_one(doc! { "_id": id }, None).await
}

pub async fn find_by_owner(
    db: &Database,
    id: ObjectId,
    user_id: &str,
) -> mongodb::error::Result<Option<Recipe>> {
    collection(db)
        .find_one(doc! { "_id": id, "userId": user_id }, None)
        .await
}

pub async fn insert(db: &Database, recipe: &Recipe) -> mongodb::error::Result<Option<ObjectId>> {
    let result = collection(db).insert_one(recipe, None).await?;
    Ok(result.inserted_id.as_object_id())
}

/// Replace keyed by `_id` and owner, so a recipe can only be rewritten
/// under its own user's path.
pub async fn replace(
    db: &Database,
    id: ObjectId,
    user_id: &str,
    recipe: &Recipe,
) -> mongodb::error::Result<u64> {
    let result = collection(db)
        .replace_one(doc! { "_id": id, "userId": user_id }, recipe, None)
        .await?;
    Ok(result.matched_count)
}

pub async fn delete(db: &Database, id: ObjectId) -> mongodb::error::Result<Option<Recipe>> {
    collection(db)
        .find_one_and_delete(doc! { "_id": id }, None)
        .await
}

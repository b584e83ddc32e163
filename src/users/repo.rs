use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};

use crate::state::USERS_COLLECTION;

use super::dto::User;

fn collection(db: &Database) -> Collection<User> {
    db.collection(USERS_COLLECTION)
}

pub async fn find_all(db: &Database) -> mongodb::error::Result<Vec<User>> {
    collection(db).find(None, None).await?.try_collect().await
}

pub async fn find_by_id(db: &Database, id: ObjectId) -> mongodb::error::Result<Option<User>> {
    collection(db).find_one(doc! { "_id": id }, None).await
}

/// Returns the driver-assigned id, or `None` when the write produced no
/// usable id (treated as an unacknowledged insert by the caller).
pub async fn insert(db: &Database, user: &User) -> mongodb::error::Result<Option<ObjectId>> {
    let result = collection(db).insert_one(user, None).await?;
    Ok(result.inserted_id.as_object_id())
}

/// Full-document replace keyed by `_id`; returns the matched count.
pub async fn replace(db: &Database, id: ObjectId, user: &User) -> mongodb::error::Result<u64> {
    let result = collection(db)
        .replace_one(doc! { "_id": id }, user, None)
        .await?;
    Ok(result.matched_count)
}

pub async fn delete(db: &Database, id: ObjectId) -> mongodb::error::Result<Option<User>> {
    collection(db)
        .find_one_and_delete(doc! { "_id": id }, None)
        .await
}

use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub review: String,
    pub rating: Option<i16>,
    pub is_public: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_rating(rating: i16) -> Result<(), ModelError> {
    if !(1..=5).contains(&rating) {
        return Err(ModelError::Validation("rating must be within [1, 5]".into()));
    }
    Ok(())
}

/// New reviews always start hidden; moderation flips `is_public`.
pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    email: Option<&str>,
    review: &str,
    rating: Option<i16>,
) -> Result<Model, ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if review.trim().is_empty() {
        return Err(ModelError::Validation("review text required".into()));
    }
    if let Some(r) = rating {
        validate_rating(r)?;
    }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        email: Set(email.filter(|e| !e.trim().is_empty()).map(str::to_string)),
        review: Set(review.to_string()),
        rating: Set(rating),
        is_public: Set(false),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(ModelError::from_db)
}

/// Moderation gate: show or hide a review on the public listing.
pub async fn set_public(db: &DatabaseConnection, id: Uuid, is_public: bool) -> Result<Model, ModelError> {
    let found = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(ModelError::from_db)?
        .ok_or_else(|| ModelError::NotFound("review not found".into()))?;
    let mut am: ActiveModel = found.into();
    am.is_public = Set(is_public);
    am.update(db).await.map_err(ModelError::from_db)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(ModelError::from_db)?;
    Ok(res.rows_affected > 0)
}

/// Last `limit` public reviews, newest first.
pub async fn list_public(db: &DatabaseConnection, limit: u64) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .filter(Column::IsPublic.eq(true))
        .order_by_desc(Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await
        .map_err(ModelError::from_db)
}

/// Moderation view: every review, newest first.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await
        .map_err(ModelError::from_db)
}

#[cfg(test)]
mod tests {
    use super::validate_rating;

    #[test]
    fn rating_bounds() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }
}

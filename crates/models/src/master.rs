use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::social;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "master")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub photo: String,
    pub specialty: String,
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Social,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Social => Entity::has_many(social::Entity).into(),
        }
    }
}

impl Related<social::Entity> for Entity {
    fn to() -> RelationDef { Relation::Social.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    photo: &str,
    specialty: &str,
    description: &str,
) -> Result<Model, ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        photo: Set(photo.to_string()),
        specialty: Set(specialty.to_string()),
        description: Set(description.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(ModelError::from_db)
}

pub async fn update(
    db: &DatabaseConnection,
    id: Uuid,
    name: Option<&str>,
    photo: Option<&str>,
    specialty: Option<&str>,
    description: Option<&str>,
) -> Result<Model, ModelError> {
    let found = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(ModelError::from_db)?
        .ok_or_else(|| ModelError::NotFound("master not found".into()))?;
    let mut am: ActiveModel = found.into();
    if let Some(v) = name {
        if v.trim().is_empty() {
            return Err(ModelError::Validation("name required".into()));
        }
        am.name = Set(v.to_string());
    }
    if let Some(v) = photo { am.photo = Set(v.to_string()); }
    if let Some(v) = specialty { am.specialty = Set(v.to_string()); }
    if let Some(v) = description { am.description = Set(v.to_string()); }
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(ModelError::from_db)
}

/// Deleting a master cascades to its social links at the FK level.
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(ModelError::from_db)?;
    Ok(res.rows_affected > 0)
}

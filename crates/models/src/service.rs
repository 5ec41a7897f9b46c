use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::{price_item, service_subsection};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub title_image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Subsection,
    PriceItem,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Subsection => Entity::has_many(service_subsection::Entity).into(),
            Relation::PriceItem => Entity::has_many(price_item::Entity).into(),
        }
    }
}

impl Related<service_subsection::Entity> for Entity {
    fn to() -> RelationDef { Relation::Subsection.def() }
}

impl Related<price_item::Entity> for Entity {
    fn to() -> RelationDef { Relation::PriceItem.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    description: Option<&str>,
    title_image: Option<&str>,
) -> Result<Model, ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    let clash = Entity::find()
        .filter(Column::Name.eq(name))
        .one(db)
        .await
        .map_err(ModelError::from_db)?;
    if clash.is_some() {
        return Err(ModelError::Validation(format!("service '{name}' already exists")));
    }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        description: Set(description.map(str::to_string)),
        title_image: Set(title_image.map(str::to_string)),
    };
    am.insert(db).await.map_err(ModelError::from_db)
}

pub async fn update(
    db: &DatabaseConnection,
    id: Uuid,
    name: Option<&str>,
    description: Option<&str>,
    title_image: Option<&str>,
) -> Result<Model, ModelError> {
    let found = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(ModelError::from_db)?
        .ok_or_else(|| ModelError::NotFound("service not found".into()))?;
    let mut am: ActiveModel = found.into();
    if let Some(v) = name {
        if v.trim().is_empty() {
            return Err(ModelError::Validation("name required".into()));
        }
        let clash = Entity::find()
            .filter(Column::Name.eq(v))
            .filter(Column::Id.ne(id))
            .one(db)
            .await
            .map_err(ModelError::from_db)?;
        if clash.is_some() {
            return Err(ModelError::Validation(format!("service '{v}' already exists")));
        }
        am.name = Set(v.to_string());
    }
    if let Some(v) = description { am.description = Set(Some(v.to_string())); }
    if let Some(v) = title_image { am.title_image = Set(Some(v.to_string())); }
    am.update(db).await.map_err(ModelError::from_db)
}

/// Cascades to subsections and price items at the FK level.
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(ModelError::from_db)?;
    Ok(res.rows_affected > 0)
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::Name)
        .all(db)
        .await
        .map_err(ModelError::from_db)
}

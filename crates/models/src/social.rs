use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::master;

/// Icon classes the admin UI offers for social links. Stored as free-form
/// strings, so custom classes keep working.
pub mod icons {
    pub const TWITTER: &str = "fa-brands fa-twitter";
    pub const ODNOKLASSNIKI: &str = "fa-brands fa-square-odnoklassniki";
    pub const VK: &str = "fa-brands fa-vk";
    pub const TELEGRAM: &str = "fa-brands fa-telegram";
    pub const PHONE: &str = "fa-solid fa-phone";
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "social")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub master_id: Uuid,
    pub href: String,
    pub icon: String,
    pub color: String,
    pub sort_order: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Master,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Master => Entity::belongs_to(master::Entity)
                .from(Column::MasterId)
                .to(master::Column::Id)
                .into(),
        }
    }
}

impl Related<master::Entity> for Entity {
    fn to() -> RelationDef { Relation::Master.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Empty string is allowed; anything else must be `#rrggbb`.
pub fn validate_hex_color(value: &str) -> Result<(), ModelError> {
    if value.is_empty() {
        return Ok(());
    }
    let ok = value.len() == 7
        && value.starts_with('#')
        && value[1..].bytes().all(|b| b.is_ascii_hexdigit());
    if !ok {
        return Err(ModelError::Validation(
            "color must be in #rrggbb format, e.g. #1a2b3c".into(),
        ));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    master_id: Uuid,
    href: &str,
    icon: &str,
    color: &str,
    sort_order: i32,
) -> Result<Model, ModelError> {
    if href.trim().is_empty() {
        return Err(ModelError::Validation("href required".into()));
    }
    validate_hex_color(color)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        master_id: Set(master_id),
        href: Set(href.to_string()),
        icon: Set(icon.to_string()),
        color: Set(color.to_string()),
        sort_order: Set(sort_order),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(ModelError::from_db)
}

pub async fn update(
    db: &DatabaseConnection,
    id: Uuid,
    href: Option<&str>,
    icon: Option<&str>,
    color: Option<&str>,
    sort_order: Option<i32>,
) -> Result<Model, ModelError> {
    let found = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(ModelError::from_db)?
        .ok_or_else(|| ModelError::NotFound("social link not found".into()))?;
    let mut am: ActiveModel = found.into();
    if let Some(v) = href { am.href = Set(v.to_string()); }
    if let Some(v) = icon { am.icon = Set(v.to_string()); }
    if let Some(v) = color {
        validate_hex_color(v)?;
        am.color = Set(v.to_string());
    }
    if let Some(v) = sort_order { am.sort_order = Set(v); }
    am.update(db).await.map_err(ModelError::from_db)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(ModelError::from_db)?;
    Ok(res.rows_affected > 0)
}

/// Links of one master in display order.
pub async fn list_for_master(db: &DatabaseConnection, master_id: Uuid) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .filter(Column::MasterId.eq(master_id))
        .order_by_asc(Column::SortOrder)
        .all(db)
        .await
        .map_err(ModelError::from_db)
}

#[cfg(test)]
mod tests {
    use super::validate_hex_color;

    #[test]
    fn empty_color_is_allowed() {
        assert!(validate_hex_color("").is_ok());
    }

    #[test]
    fn well_formed_colors_pass() {
        assert!(validate_hex_color("#1da1f2").is_ok());
        assert!(validate_hex_color("#ABCDEF").is_ok());
    }

    #[test]
    fn malformed_colors_fail() {
        assert!(validate_hex_color("1da1f2").is_err());
        assert!(validate_hex_color("#1da1f").is_err());
        assert!(validate_hex_color("#1da1f2a").is_err());
        assert!(validate_hex_color("#1da1fg").is_err());
    }
}

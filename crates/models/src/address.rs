use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "address")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub opening_hours: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Grouped human-readable form of the stored phone, e.g. `+7 (912) 345-67-89`.
    pub fn formatted_phone_number(&self) -> String {
        format_phone(&self.phone)
    }
}

/// Best-effort phone formatting. A 12-character `+7XXXXXXXXXX` number is
/// regrouped; anything else comes back unchanged.
pub fn format_phone(phone: &str) -> String {
    if phone.len() == 12
        && phone.starts_with("+7")
        && phone.as_bytes()[2..].iter().all(|b| b.is_ascii_digit())
    {
        format!(
            "+7 ({}) {}-{}-{}",
            &phone[2..5],
            &phone[5..8],
            &phone[8..10],
            &phone[10..12]
        )
    } else {
        phone.to_string()
    }
}

pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ModelError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ModelError::Validation("latitude must be within [-90, 90]".into()));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ModelError::Validation("longitude must be within [-180, 180]".into()));
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    address: &str,
    email: &str,
    phone: &str,
    opening_hours: &str,
    latitude: f64,
    longitude: f64,
) -> Result<Model, ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if address.trim().is_empty() {
        return Err(ModelError::Validation("address required".into()));
    }
    validate_coordinates(latitude, longitude)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        address: Set(address.to_string()),
        email: Set(email.to_string()),
        phone: Set(phone.to_string()),
        opening_hours: Set(opening_hours.to_string()),
        latitude: Set(latitude),
        longitude: Set(longitude),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(errors::ModelError::from_db)
}

#[allow(clippy::too_many_arguments)]
pub async fn update(
    db: &DatabaseConnection,
    id: Uuid,
    name: Option<&str>,
    address: Option<&str>,
    email: Option<&str>,
    phone: Option<&str>,
    opening_hours: Option<&str>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<Model, ModelError> {
    let found = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(ModelError::from_db)?
        .ok_or_else(|| ModelError::NotFound("address not found".into()))?;
    let lat = latitude.unwrap_or(found.latitude);
    let lon = longitude.unwrap_or(found.longitude);
    validate_coordinates(lat, lon)?;
    let mut am: ActiveModel = found.into();
    if let Some(v) = name { am.name = Set(v.to_string()); }
    if let Some(v) = address { am.address = Set(v.to_string()); }
    if let Some(v) = email { am.email = Set(v.to_string()); }
    if let Some(v) = phone { am.phone = Set(v.to_string()); }
    if let Some(v) = opening_hours { am.opening_hours = Set(v.to_string()); }
    am.latitude = Set(lat);
    am.longitude = Set(lon);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(ModelError::from_db)
}

/// The presentation layer reads a single contact record: the oldest row.
pub async fn first(db: &DatabaseConnection) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::CreatedAt)
        .one(db)
        .await
        .map_err(ModelError::from_db)
}

#[cfg(test)]
mod tests {
    use super::format_phone;

    #[test]
    fn formats_full_russian_number() {
        assert_eq!(format_phone("+71234567890"), "+7 (123) 456-78-90");
    }

    #[test]
    fn leaves_short_input_unchanged() {
        assert_eq!(format_phone("12345"), "12345");
    }

    #[test]
    fn leaves_wrong_prefix_unchanged() {
        assert_eq!(format_phone("+81234567890"), "+81234567890");
    }

    #[test]
    fn leaves_non_digit_tail_unchanged() {
        assert_eq!(format_phone("+7123456789x"), "+7123456789x");
    }

    #[test]
    fn coordinate_ranges() {
        assert!(super::validate_coordinates(55.75, 37.61).is_ok());
        assert!(super::validate_coordinates(90.1, 0.0).is_err());
        assert!(super::validate_coordinates(0.0, -180.5).is_err());
    }
}

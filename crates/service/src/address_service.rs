use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use uuid::Uuid;

use models::address;

use crate::dto::AddressOut;
use crate::errors::ServiceError;

pub async fn list_addresses(db: &DatabaseConnection) -> Result<Vec<address::Model>, ServiceError> {
    address::Entity::find()
        .order_by_asc(address::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Contact record for the landing page; `None` when no row exists yet.
pub async fn current_address(db: &DatabaseConnection) -> Result<Option<AddressOut>, ServiceError> {
    Ok(address::first(db).await?.map(AddressOut::from))
}

#[allow(clippy::too_many_arguments)]
pub async fn create_address(
    db: &DatabaseConnection,
    name: &str,
    addr: &str,
    email: &str,
    phone: &str,
    opening_hours: &str,
    latitude: f64,
    longitude: f64,
) -> Result<address::Model, ServiceError> {
    Ok(address::create(db, name, addr, email, phone, opening_hours, latitude, longitude).await?)
}

#[allow(clippy::too_many_arguments)]
pub async fn update_address(
    db: &DatabaseConnection,
    id: Uuid,
    name: Option<&str>,
    addr: Option<&str>,
    email: Option<&str>,
    phone: Option<&str>,
    opening_hours: Option<&str>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<address::Model, ServiceError> {
    Ok(address::update(db, id, name, addr, email, phone, opening_hours, latitude, longitude).await?)
}

pub async fn delete_address(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = address::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

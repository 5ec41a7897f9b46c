use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use uuid::Uuid;

use models::gallery_image;

use crate::errors::ServiceError;

pub async fn list_images(db: &DatabaseConnection) -> Result<Vec<gallery_image::Model>, ServiceError> {
    gallery_image::Entity::find()
        .order_by_asc(gallery_image::Column::CreatedAt)
        .order_by_asc(gallery_image::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn first_images(db: &DatabaseConnection, limit: u64) -> Result<Vec<gallery_image::Model>, ServiceError> {
    Ok(gallery_image::list_first(db, limit).await?)
}

pub async fn get_image(db: &DatabaseConnection, id: Uuid) -> Result<Option<gallery_image::Model>, ServiceError> {
    gallery_image::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn create_image(db: &DatabaseConnection, title: &str, image: &str) -> Result<gallery_image::Model, ServiceError> {
    Ok(gallery_image::create(db, title, image).await?)
}

pub async fn update_image(
    db: &DatabaseConnection,
    id: Uuid,
    title: Option<&str>,
    image: Option<&str>,
) -> Result<gallery_image::Model, ServiceError> {
    Ok(gallery_image::update(db, id, title, image).await?)
}

pub async fn delete_image(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    Ok(gallery_image::delete(db, id).await?)
}

//! Service/subsection/price-item catalog: CRUD plus the derived price-list
//! projection. Fetching and assembly are split so the grouping logic stays
//! testable without a database.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use models::price_item::{self, PriceOwner};
use models::{service, service_subsection};

use crate::dto::{PriceItemOut, PriceList, ServiceOut, SubsectionOut};
use crate::errors::ServiceError;

pub async fn list_services(db: &DatabaseConnection) -> Result<Vec<service::Model>, ServiceError> {
    Ok(service::list(db).await?)
}

pub async fn get_service(db: &DatabaseConnection, id: Uuid) -> Result<Option<service::Model>, ServiceError> {
    service::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn create_service(
    db: &DatabaseConnection,
    name: &str,
    description: Option<&str>,
    title_image: Option<&str>,
) -> Result<service::Model, ServiceError> {
    Ok(service::create(db, name, description, title_image).await?)
}

pub async fn update_service(
    db: &DatabaseConnection,
    id: Uuid,
    name: Option<&str>,
    description: Option<&str>,
    title_image: Option<&str>,
) -> Result<service::Model, ServiceError> {
    Ok(service::update(db, id, name, description, title_image).await?)
}

pub async fn delete_service(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    Ok(service::delete(db, id).await?)
}

pub async fn list_subsections(
    db: &DatabaseConnection,
    service_id: Uuid,
) -> Result<Vec<service_subsection::Model>, ServiceError> {
    Ok(service_subsection::list_for_service(db, service_id).await?)
}

pub async fn create_subsection(
    db: &DatabaseConnection,
    service_id: Uuid,
    name: &str,
    description: Option<&str>,
    title_image: Option<&str>,
) -> Result<service_subsection::Model, ServiceError> {
    Ok(service_subsection::create(db, service_id, name, description, title_image).await?)
}

pub async fn update_subsection(
    db: &DatabaseConnection,
    id: Uuid,
    name: Option<&str>,
    description: Option<&str>,
    title_image: Option<&str>,
) -> Result<service_subsection::Model, ServiceError> {
    Ok(service_subsection::update(db, id, name, description, title_image).await?)
}

pub async fn delete_subsection(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    Ok(service_subsection::delete(db, id).await?)
}

pub async fn create_price_item(
    db: &DatabaseConnection,
    operation_name: &str,
    price: Decimal,
    duration_minutes: Option<i32>,
    owner: PriceOwner,
) -> Result<price_item::Model, ServiceError> {
    Ok(price_item::create(db, operation_name, price, duration_minutes, owner).await?)
}

pub async fn update_price_item(
    db: &DatabaseConnection,
    id: Uuid,
    operation_name: Option<&str>,
    price: Option<Decimal>,
    duration_minutes: Option<Option<i32>>,
    owner: Option<PriceOwner>,
) -> Result<price_item::Model, ServiceError> {
    Ok(price_item::update(db, id, operation_name, price, duration_minutes, owner).await?)
}

pub async fn delete_price_item(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    Ok(price_item::delete(db, id).await?)
}

/// Pure assembly of the catalog projection from already-fetched rows.
/// Subsections are expected name-ordered and items operation-name-ordered;
/// the grouping preserves those orders.
pub fn assemble_services(
    services: Vec<service::Model>,
    subsections: Vec<service_subsection::Model>,
    items: Vec<price_item::Model>,
) -> Vec<ServiceOut> {
    let mut by_service: HashMap<Uuid, Vec<price_item::Model>> = HashMap::new();
    let mut by_subsection: HashMap<Uuid, Vec<price_item::Model>> = HashMap::new();
    for item in items {
        match item.owner() {
            Some(PriceOwner::Service(id)) => by_service.entry(id).or_default().push(item),
            Some(PriceOwner::Subsection(id)) => by_subsection.entry(id).or_default().push(item),
            None => {}
        }
    }

    let mut subs_by_service: HashMap<Uuid, Vec<service_subsection::Model>> = HashMap::new();
    for sub in subsections {
        subs_by_service.entry(sub.service_id).or_default().push(sub);
    }

    services
        .into_iter()
        .map(|svc| {
            let subs = subs_by_service.remove(&svc.id).unwrap_or_default();
            let price_list = if subs.is_empty() {
                let direct = by_service.remove(&svc.id).unwrap_or_default();
                PriceList::Flat(direct.into_iter().map(PriceItemOut::from).collect())
            } else {
                let groups = subs
                    .iter()
                    .map(|sub| {
                        let items = by_subsection.get(&sub.id).cloned().unwrap_or_default();
                        (
                            sub.name.clone(),
                            items.into_iter().map(PriceItemOut::from).collect(),
                        )
                    })
                    .collect();
                PriceList::Grouped(groups)
            };
            let subsections = subs
                .into_iter()
                .map(|sub| {
                    let items = by_subsection.remove(&sub.id).unwrap_or_default();
                    SubsectionOut::from_parts(sub, items)
                })
                .collect();
            ServiceOut::from_parts(svc, subsections, price_list)
        })
        .collect()
}

/// All services with nested subsections, price items and the derived price
/// list. Three queries total, grouped in memory.
pub async fn list_services_with_prices(db: &DatabaseConnection) -> Result<Vec<ServiceOut>, ServiceError> {
    let services = service::list(db).await?;
    let subsections = service_subsection::Entity::find()
        .order_by_asc(service_subsection::Column::Name)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let items = price_item::Entity::find()
        .order_by_asc(price_item::Column::OperationName)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(assemble_services(services, subsections, items))
}

/// Derived price list of a single service, the shape the landing cards render.
pub async fn price_list_for_service(db: &DatabaseConnection, service_id: Uuid) -> Result<PriceList, ServiceError> {
    let svc = get_service(db, service_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("service"))?;
    let subsections = service_subsection::list_for_service(db, service_id).await?;
    let items = price_item::Entity::find()
        .filter(
            price_item::Column::ServiceId
                .eq(service_id)
                .or(price_item::Column::SubsectionId.is_in(subsections.iter().map(|s| s.id))),
        )
        .order_by_asc(price_item::Column::OperationName)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let assembled = assemble_services(vec![svc], subsections, items);
    Ok(assembled
        .into_iter()
        .next()
        .map(|s| s.price_list)
        .unwrap_or(PriceList::Flat(Vec::new())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::PriceList;

    fn svc(name: &str) -> service::Model {
        service::Model {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            title_image: None,
        }
    }

    fn sub(service_id: Uuid, name: &str) -> service_subsection::Model {
        service_subsection::Model {
            id: Uuid::new_v4(),
            service_id,
            name: name.into(),
            description: None,
            title_image: None,
        }
    }

    fn item(name: &str, owner: PriceOwner) -> price_item::Model {
        let (service_id, subsection_id) = owner.into_columns();
        price_item::Model {
            id: Uuid::new_v4(),
            operation_name: name.into(),
            price: Decimal::new(100000, 2),
            duration_minutes: None,
            service_id,
            subsection_id,
        }
    }

    #[test]
    fn service_without_subsections_gets_flat_list() {
        let s = svc("Nails");
        let items = vec![
            item("Gel polish", PriceOwner::Service(s.id)),
            item("Manicure", PriceOwner::Service(s.id)),
        ];
        let out = assemble_services(vec![s], vec![], items);
        assert_eq!(out.len(), 1);
        assert!(!out[0].has_subsections);
        match &out[0].price_list {
            PriceList::Flat(list) => assert_eq!(list.len(), 2),
            PriceList::Grouped(_) => panic!("expected flat list"),
        }
    }

    #[test]
    fn service_with_subsections_gets_grouped_list() {
        let s = svc("Hairdressing");
        let hall = sub(s.id, "Ladies hall");
        let items = vec![item("Styling", PriceOwner::Subsection(hall.id))];
        let out = assemble_services(vec![s], vec![hall], items);
        assert!(out[0].has_subsections);
        match &out[0].price_list {
            PriceList::Grouped(groups) => {
                assert_eq!(groups.len(), 1);
                assert_eq!(groups["Ladies hall"].len(), 1);
                assert_eq!(groups["Ladies hall"][0].operation_name, "Styling");
            }
            PriceList::Flat(_) => panic!("expected grouped list"),
        }
        assert_eq!(out[0].subsections.len(), 1);
        assert_eq!(out[0].subsections[0].price_items.len(), 1);
    }

    #[test]
    fn direct_items_are_ignored_when_subsections_exist() {
        let s = svc("Hairdressing");
        let hall = sub(s.id, "Hall");
        let items = vec![
            item("Direct", PriceOwner::Service(s.id)),
            item("Grouped", PriceOwner::Subsection(hall.id)),
        ];
        let out = assemble_services(vec![s], vec![hall], items);
        match &out[0].price_list {
            PriceList::Grouped(groups) => {
                assert_eq!(groups.len(), 1);
                assert!(groups.values().all(|v| v.iter().all(|i| i.operation_name == "Grouped")));
            }
            PriceList::Flat(_) => panic!("expected grouped list"),
        }
    }

    #[test]
    fn empty_service_yields_empty_flat_list() {
        let out = assemble_services(vec![svc("Empty")], vec![], vec![]);
        assert!(out[0].price_list.is_empty());
        assert!(!out[0].has_subsections);
    }
}

//! Wire-format projections of the entities. The schema is declared once in
//! `models`; everything a client sees goes through these mappings.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use models::{address, gallery_image, master, price_item, review, service, service_subsection, social};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddressOut {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub opening_hours: String,
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_phone_number: String,
}

impl From<address::Model> for AddressOut {
    fn from(m: address::Model) -> Self {
        let formatted_phone_number = m.formatted_phone_number();
        Self {
            name: m.name,
            address: m.address,
            email: m.email,
            phone: m.phone,
            opening_hours: m.opening_hours,
            latitude: m.latitude,
            longitude: m.longitude,
            formatted_phone_number,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SocialOut {
    pub href: String,
    pub icon: String,
    pub color: String,
}

impl From<social::Model> for SocialOut {
    fn from(m: social::Model) -> Self {
        Self { href: m.href, icon: m.icon, color: m.color }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MasterOut {
    pub id: Uuid,
    pub name: String,
    pub photo: String,
    pub specialty: String,
    pub description: String,
    pub socials: Vec<SocialOut>,
}

impl MasterOut {
    pub fn from_parts(m: master::Model, socials: Vec<social::Model>) -> Self {
        Self {
            id: m.id,
            name: m.name,
            photo: m.photo,
            specialty: m.specialty,
            description: m.description,
            socials: socials.into_iter().map(SocialOut::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GalleryImageOut {
    pub id: Uuid,
    pub title: String,
    pub image: String,
}

impl From<gallery_image::Model> for GalleryImageOut {
    fn from(m: gallery_image::Model) -> Self {
        Self { id: m.id, title: m.title, image: m.image }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewOut {
    pub id: Uuid,
    pub name: String,
    pub review: String,
    pub rating: Option<i16>,
    pub created_at: DateTime<FixedOffset>,
}

impl From<review::Model> for ReviewOut {
    fn from(m: review::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            review: m.review,
            rating: m.rating,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PriceItemOut {
    pub id: Uuid,
    pub operation_name: String,
    #[schema(value_type = String)]
    pub price: Decimal,
    pub duration_minutes: Option<i32>,
}

impl From<price_item::Model> for PriceItemOut {
    fn from(m: price_item::Model) -> Self {
        Self {
            id: m.id,
            operation_name: m.operation_name,
            price: m.price,
            duration_minutes: m.duration_minutes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubsectionOut {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub title_image: Option<String>,
    pub price_items: Vec<PriceItemOut>,
}

impl SubsectionOut {
    pub fn from_parts(m: service_subsection::Model, items: Vec<price_item::Model>) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            title_image: m.title_image,
            price_items: items.into_iter().map(PriceItemOut::from).collect(),
        }
    }
}

/// Derived price list of one service. Flat when the service has no
/// subsections, otherwise grouped by subsection name.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum PriceList {
    Flat(Vec<PriceItemOut>),
    Grouped(BTreeMap<String, Vec<PriceItemOut>>),
}

impl PriceList {
    pub fn is_empty(&self) -> bool {
        match self {
            PriceList::Flat(items) => items.is_empty(),
            PriceList::Grouped(groups) => groups.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceOut {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub title_image: Option<String>,
    pub has_subsections: bool,
    pub subsections: Vec<SubsectionOut>,
    pub price_list: PriceList,
}

impl ServiceOut {
    pub fn from_parts(
        m: service::Model,
        subsections: Vec<SubsectionOut>,
        price_list: PriceList,
    ) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            title_image: m.title_image,
            has_subsections: !subsections.is_empty(),
            subsections,
            price_list,
        }
    }
}

/// Read-only snapshot for the landing page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageContext {
    pub masters: Vec<MasterOut>,
    pub images: Vec<GalleryImageOut>,
    pub reviews: Vec<ReviewOut>,
    pub services: Vec<ServiceOut>,
    pub address: Option<AddressOut>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> PriceItemOut {
        PriceItemOut {
            id: Uuid::new_v4(),
            operation_name: name.into(),
            price: Decimal::new(150000, 2),
            duration_minutes: Some(30),
        }
    }

    #[test]
    fn flat_price_list_serializes_as_array() {
        let list = PriceList::Flat(vec![item("Haircut")]);
        let json = serde_json::to_value(&list).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["operation_name"], "Haircut");
    }

    #[test]
    fn grouped_price_list_serializes_as_map() {
        let mut groups = BTreeMap::new();
        groups.insert("Ladies hall".to_string(), vec![item("Styling")]);
        let list = PriceList::Grouped(groups);
        let json = serde_json::to_value(&list).unwrap();
        assert!(json.is_object());
        assert_eq!(json["Ladies hall"][0]["operation_name"], "Styling");
    }

    #[test]
    fn formatted_phone_is_carried_on_address() {
        let m = models::address::Model {
            id: Uuid::new_v4(),
            name: "Salon".into(),
            address: "Main st. 1".into(),
            email: "salon@example.com".into(),
            phone: "+71234567890".into(),
            opening_hours: "9-20".into(),
            latitude: 55.75,
            longitude: 37.61,
            created_at: chrono::Utc::now().into(),
            updated_at: chrono::Utc::now().into(),
        };
        let out = AddressOut::from(m);
        assert_eq!(out.formatted_phone_number, "+7 (123) 456-78-90");
        assert_eq!(out.phone, "+71234567890");
    }
}

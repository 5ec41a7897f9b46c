//! Price-list positions. Each row belongs to exactly one owner: a service
//! (flat price list) or a subsection. The owner-exclusivity and scoped
//! name-uniqueness checks run inside `before_save`, so every persistence
//! path is covered, not just the admin handlers.

use rust_decimal::Decimal;
use sea_orm::{
    entity::prelude::*,
    sea_query::{Expr, Func},
    ActiveValue, ConnectionTrait, DatabaseConnection, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::{service, service_subsection};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "price_item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub operation_name: String,
    pub price: Decimal,
    pub duration_minutes: Option<i32>,
    pub service_id: Option<Uuid>,
    pub subsection_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Service,
    Subsection,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Service => Entity::belongs_to(service::Entity)
                .from(Column::ServiceId)
                .to(service::Column::Id)
                .into(),
            Relation::Subsection => Entity::belongs_to(service_subsection::Entity)
                .from(Column::SubsectionId)
                .to(service_subsection::Column::Id)
                .into(),
        }
    }
}

impl Related<service::Entity> for Entity {
    fn to() -> RelationDef { Relation::Service.def() }
}

impl Related<service_subsection::Entity> for Entity {
    fn to() -> RelationDef { Relation::Subsection.def() }
}

/// The owner scope of a price item. Callers pick one variant; both-set and
/// neither-set are not expressible through this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceOwner {
    Service(Uuid),
    Subsection(Uuid),
}

impl PriceOwner {
    pub fn into_columns(self) -> (Option<Uuid>, Option<Uuid>) {
        match self {
            PriceOwner::Service(id) => (Some(id), None),
            PriceOwner::Subsection(id) => (None, Some(id)),
        }
    }
}

impl Model {
    /// `None` only for rows that predate the invariant (should not happen).
    pub fn owner(&self) -> Option<PriceOwner> {
        match (self.service_id, self.subsection_id) {
            (Some(id), None) => Some(PriceOwner::Service(id)),
            (None, Some(id)) => Some(PriceOwner::Subsection(id)),
            _ => None,
        }
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        enforce_owner_invariants(&self, db, insert).await?;
        Ok(self)
    }
}

fn set_or_unchanged<T>(v: &ActiveValue<T>) -> Option<&T>
where
    T: Into<sea_orm::Value>,
{
    match v {
        ActiveValue::Set(x) | ActiveValue::Unchanged(x) => Some(x),
        ActiveValue::NotSet => None,
    }
}

/// Rule 1: exactly one of service_id/subsection_id is set.
/// Rule 2: operation_name is unique (case-insensitive) within the owner
/// scope; on update the row itself is excluded, so renaming an item to its
/// current name never trips the check.
///
/// Two concurrent inserts of the same name can both pass the lookup before
/// either row lands; there is no serializing guard beyond single-row
/// atomicity of the insert itself.
async fn enforce_owner_invariants<C>(am: &ActiveModel, db: &C, insert: bool) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    // On update, fall back to the stored row for fields the caller left
    // untouched.
    let existing = if insert {
        None
    } else {
        let id = set_or_unchanged(&am.id)
            .copied()
            .ok_or_else(|| DbErr::Custom("price item update without id".into()))?;
        Entity::find_by_id(id).one(db).await?
    };

    let operation_name = set_or_unchanged(&am.operation_name)
        .cloned()
        .or_else(|| existing.as_ref().map(|m| m.operation_name.clone()))
        .ok_or_else(|| DbErr::Custom("operation_name required".into()))?;
    let service_id = match set_or_unchanged(&am.service_id) {
        Some(v) => *v,
        None => existing.as_ref().and_then(|m| m.service_id),
    };
    let subsection_id = match set_or_unchanged(&am.subsection_id) {
        Some(v) => *v,
        None => existing.as_ref().and_then(|m| m.subsection_id),
    };

    match (service_id, subsection_id) {
        (Some(_), Some(_)) => {
            return Err(DbErr::Custom(
                "a price item cannot be attached to both a service and a subsection".into(),
            ));
        }
        (None, None) => {
            return Err(DbErr::Custom(
                "a price item must be attached to either a service or a subsection".into(),
            ));
        }
        _ => {}
    }

    let mut query = Entity::find().filter(
        Expr::expr(Func::lower(Expr::col(Column::OperationName)))
            .eq(operation_name.to_lowercase()),
    );
    query = match (service_id, subsection_id) {
        (Some(sid), None) => query.filter(Column::ServiceId.eq(sid)),
        (None, Some(sid)) => query.filter(Column::SubsectionId.eq(sid)),
        _ => unreachable!(),
    };
    if let Some(current) = &existing {
        query = query.filter(Column::Id.ne(current.id));
    }
    if query.one(db).await?.is_some() {
        let scope = if service_id.is_some() { "service" } else { "subsection" };
        return Err(DbErr::Custom(format!(
            "operation '{operation_name}' already exists for this {scope}"
        )));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    operation_name: &str,
    price: Decimal,
    duration_minutes: Option<i32>,
    owner: PriceOwner,
) -> Result<Model, ModelError> {
    if operation_name.trim().is_empty() {
        return Err(ModelError::Validation("operation_name required".into()));
    }
    let (service_id, subsection_id) = owner.into_columns();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        operation_name: Set(operation_name.to_string()),
        price: Set(price),
        duration_minutes: Set(duration_minutes),
        service_id: Set(service_id),
        subsection_id: Set(subsection_id),
    };
    am.insert(db).await.map_err(ModelError::from_db)
}

pub async fn update(
    db: &DatabaseConnection,
    id: Uuid,
    operation_name: Option<&str>,
    price: Option<Decimal>,
    duration_minutes: Option<Option<i32>>,
    owner: Option<PriceOwner>,
) -> Result<Model, ModelError> {
    let found = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(ModelError::from_db)?
        .ok_or_else(|| ModelError::NotFound("price item not found".into()))?;
    let mut am: ActiveModel = found.into();
    if let Some(v) = operation_name {
        if v.trim().is_empty() {
            return Err(ModelError::Validation("operation_name required".into()));
        }
        am.operation_name = Set(v.to_string());
    }
    if let Some(v) = price { am.price = Set(v); }
    if let Some(v) = duration_minutes { am.duration_minutes = Set(v); }
    if let Some(o) = owner {
        let (service_id, subsection_id) = o.into_columns();
        am.service_id = Set(service_id);
        am.subsection_id = Set(subsection_id);
    }
    am.update(db).await.map_err(ModelError::from_db)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(ModelError::from_db)?;
    Ok(res.rows_affected > 0)
}

/// Items of one owner scope in display order.
pub async fn list_for_owner(db: &DatabaseConnection, owner: PriceOwner) -> Result<Vec<Model>, ModelError> {
    let finder = match owner {
        PriceOwner::Service(id) => Entity::find().filter(Column::ServiceId.eq(id)),
        PriceOwner::Subsection(id) => Entity::find().filter(Column::SubsectionId.eq(id)),
    };
    finder
        .order_by_asc(Column::OperationName)
        .all(db)
        .await
        .map_err(ModelError::from_db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_maps_to_exactly_one_column() {
        let id = Uuid::new_v4();
        assert_eq!(PriceOwner::Service(id).into_columns(), (Some(id), None));
        assert_eq!(PriceOwner::Subsection(id).into_columns(), (None, Some(id)));
    }

    #[test]
    fn model_owner_rejects_illegal_rows() {
        let base = Model {
            id: Uuid::new_v4(),
            operation_name: "Haircut".into(),
            price: Decimal::new(150000, 2),
            duration_minutes: None,
            service_id: None,
            subsection_id: None,
        };
        assert_eq!(base.owner(), None);

        let sid = Uuid::new_v4();
        let owned = Model { service_id: Some(sid), ..base.clone() };
        assert_eq!(owned.owner(), Some(PriceOwner::Service(sid)));

        let both = Model { service_id: Some(sid), subsection_id: Some(Uuid::new_v4()), ..base };
        assert_eq!(both.owner(), None);
    }
}

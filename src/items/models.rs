use crate::common::errors::{ALL_FIELDS_REQUIRED, ApiError};
use crate::common::validation::present;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Data columns are nullable: `PUT /items/{id}` writes whatever it is given,
/// including nothing.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "items")]
#[schema(as = Item)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    /// Serial number or similar
    pub identifier: Option<String>,
    pub responsible_person: Option<String>,
    pub project_id: Option<i32>,
    pub order_date: Option<String>,
    pub last_storage_date: Option<String>,
    pub current_user_id: Option<i32>,
    pub guarantee: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Request body of `POST /items` and `PUT /items/{id}`
#[derive(Debug, Deserialize, ToSchema)]
pub struct ItemPayload {
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub identifier: Option<String>,
    pub responsible_person: Option<String>,
    pub project_id: Option<i32>,
    pub order_date: Option<String>,
    pub last_storage_date: Option<String>,
    pub current_user_id: Option<i32>,
    pub guarantee: Option<String>,
}

impl ItemPayload {
    /// Creation requires all nine fields. A zero `project_id` or
    /// `current_user_id` is rejected like a missing one.
    pub fn into_new_item(self) -> Result<ActiveModel, ApiError> {
        let (
            Some(name),
            Some(manufacturer),
            Some(identifier),
            Some(responsible_person),
            Some(project_id),
            Some(order_date),
            Some(last_storage_date),
            Some(current_user_id),
            Some(guarantee),
        ) = (
            present(self.name),
            present(self.manufacturer),
            present(self.identifier),
            present(self.responsible_person),
            present(self.project_id),
            present(self.order_date),
            present(self.last_storage_date),
            present(self.current_user_id),
            present(self.guarantee),
        )
        else {
            return Err(ApiError::Validation(ALL_FIELDS_REQUIRED));
        };

        Ok(ActiveModel {
            id: NotSet,
            name: Set(Some(name)),
            manufacturer: Set(Some(manufacturer)),
            identifier: Set(Some(identifier)),
            responsible_person: Set(Some(responsible_person)),
            project_id: Set(Some(project_id)),
            order_date: Set(Some(order_date)),
            last_storage_date: Set(Some(last_storage_date)),
            current_user_id: Set(Some(current_user_id)),
            guarantee: Set(Some(guarantee)),
        })
    }

    /// Every column is overwritten, absent fields with NULL.
    pub fn into_replacement(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            manufacturer: Set(self.manufacturer),
            identifier: Set(self.identifier),
            responsible_person: Set(self.responsible_person),
            project_id: Set(self.project_id),
            order_date: Set(self.order_date),
            last_storage_date: Set(self.last_storage_date),
            current_user_id: Set(self.current_user_id),
            guarantee: Set(self.guarantee),
        }
    }
}

pub async fn insert(db: &DatabaseConnection, item: ActiveModel) -> Result<(), DbErr> {
    Entity::insert(item).exec_without_returning(db).await?;
    Ok(())
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
    Entity::find().all(db).await
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Vec<Model>, DbErr> {
    Entity::find().filter(Column::Id.eq(id)).all(db).await
}

/// Single `UPDATE ... WHERE id = ?`; returns the affected-row count, which
/// may be zero.
pub async fn update(db: &DatabaseConnection, id: i32, item: ActiveModel) -> Result<u64, DbErr> {
    let result = Entity::update_many()
        .set(item)
        .filter(Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

/// Usage rows that reference the item are left untouched.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<u64, DbErr> {
    let result = Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}

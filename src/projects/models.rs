use crate::common::errors::{ALL_FIELDS_REQUIRED, ApiError};
use crate::common::validation::present;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "projects")]
#[schema(as = Project)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Request body of `POST /projects`. Every field must be present and non-empty.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProjectCreate {
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ProjectCreate {
    pub fn into_active_model(self) -> Result<ActiveModel, ApiError> {
        let (Some(name), Some(start_date), Some(end_date)) = (
            present(self.name),
            present(self.start_date),
            present(self.end_date),
        ) else {
            return Err(ApiError::Validation(ALL_FIELDS_REQUIRED));
        };

        Ok(ActiveModel {
            id: NotSet,
            name: Set(name),
            start_date: Set(start_date),
            end_date: Set(end_date),
        })
    }
}

pub async fn insert(db: &DatabaseConnection, project: ActiveModel) -> Result<(), DbErr> {
    Entity::insert(project).exec_without_returning(db).await?;
    Ok(())
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
    Entity::find().all(db).await
}

/// Rows whose id equals `id`, returned as-is (zero or one element)
pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Vec<Model>, DbErr> {
    Entity::find().filter(Column::Id.eq(id)).all(db).await
}

use crate::common::errors::{ApiError, NAME_REQUIRED};
use crate::common::validation::present;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "users")]
#[schema(as = User)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UserCreate {
    pub name: Option<String>,
}

impl UserCreate {
    pub fn into_active_model(self) -> Result<ActiveModel, ApiError> {
        let name = present(self.name).ok_or(ApiError::Validation(NAME_REQUIRED))?;
        Ok(ActiveModel {
            id: NotSet,
            name: Set(name),
        })
    }
}

pub async fn insert(db: &DatabaseConnection, user: ActiveModel) -> Result<(), DbErr> {
    Entity::insert(user).exec_without_returning(db).await?;
    Ok(())
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
    Entity::find().all(db).await
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Vec<Model>, DbErr> {
    Entity::find().filter(Column::Id.eq(id)).all(db).await
}

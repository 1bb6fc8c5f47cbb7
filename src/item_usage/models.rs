use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One period during which a user had an item
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "item_usage")]
#[schema(as = ItemUsage)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub item_id: Option<i32>,
    pub user_id: Option<i32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Request body of `POST /item-usage`. Nothing is required.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ItemUsageCreate {
    pub item_id: Option<i32>,
    pub user_id: Option<i32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl From<ItemUsageCreate> for ActiveModel {
    fn from(usage: ItemUsageCreate) -> Self {
        ActiveModel {
            id: NotSet,
            item_id: Set(usage.item_id),
            user_id: Set(usage.user_id),
            start_date: Set(usage.start_date),
            end_date: Set(usage.end_date),
        }
    }
}

pub async fn insert(db: &DatabaseConnection, usage: ActiveModel) -> Result<(), DbErr> {
    Entity::insert(usage).exec_without_returning(db).await?;
    Ok(())
}

pub async fn list_for_item(db: &DatabaseConnection, item_id: i32) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::ItemId.eq(item_id))
        .all(db)
        .await
}

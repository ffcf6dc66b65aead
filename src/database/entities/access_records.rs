use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "access_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub webpage_id: i32,
    pub date: ChronoDate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::webpages::Entity",
        from = "Column::WebpageId",
        to = "super::webpages::Column::Id"
    )]
    Webpages,
}

impl Related<super::webpages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Webpages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

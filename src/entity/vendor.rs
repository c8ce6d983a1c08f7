use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vendor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vendor_items::Entity")]
    VendorItems,
}

impl Related<super::vendor_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VendorItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

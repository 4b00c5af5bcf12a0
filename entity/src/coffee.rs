use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "coffee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub brand: String,
    #[sea_orm(default_value = 0)]
    pub recommendations: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::coffee_flavor::Entity")]
    CoffeeFlavor,
}

impl Related<super::coffee_flavor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoffeeFlavor.def()
    }
}

impl Related<super::flavor::Entity> for Entity {
    fn to() -> RelationDef {
        super::coffee_flavor::Relation::Flavor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::coffee_flavor::Relation::Coffee.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    // clients pick their own ids on create
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub diameter: i32,
    pub rotation: i32,
    pub terrain: String,
}
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::people::Entity")]
    People,
}
impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}
impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for common::backend::PlanetRecord {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            diameter: model.diameter,
            rotation: model.rotation,
            terrain: model.terrain,
        }
    }
}

use sea_orm::entity::prelude::*;
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    // clients pick their own ids on create
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub height: i32,
    pub mass: i32,
    pub hair_color: String,
    pub planet_id: Option<i32>,
}
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id"
    )]
    Planet,
}
impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}
impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for common::backend::PersonRecord {
    fn from(model: Model) -> Self {
        // planet_id stays internal
        Self {
            id: model.id,
            name: model.name,
            height: model.height,
            mass: model.mass,
            hair_color: model.hair_color,
        }
    }
}

#[cfg(test)]
mod people_tests {
    use super::*;

    #[test]
    fn serialize_keeps_planet_id_internal() {
        let model = Model {
            id: 1,
            name: "Luke".to_owned(),
            height: 172,
            mass: 77,
            hair_color: "blond".to_owned(),
            planet_id: Some(1),
        };
        let record = common::backend::PersonRecord::from(model);
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("planet_id"));
    }
}

use sea_orm::entity::prelude::*;
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    // stored but kept out of every response body
    pub password: String,
    pub is_active: bool,
}
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}
impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}
impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for common::backend::UserRecord {
    fn from(model: Model) -> Self {
        // the password column never crosses this boundary
        Self {
            id: model.id,
            email: model.email,
            is_active: model.is_active,
        }
    }
}

#[cfg(test)]
mod user_tests {
    use super::*;

    #[test]
    fn serialize_drops_password() {
        let model = Model {
            id: 1,
            email: "user@example.com".to_owned(),
            password: "hunter2".to_owned(),
            is_active: true,
        };
        let record = common::backend::UserRecord::from(model);
        assert_eq!(record.id, 1);
        assert_eq!(record.email, "user@example.com");
        assert!(record.is_active);
    }
}

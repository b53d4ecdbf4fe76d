//! sea-orm entities for the four tables plus the schema bootstrap used when
//! the backing store starts empty (the sqlite fallback in particular).

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;

use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

/// Creates the tables and the `(user_id, name)` uniqueness index when they do
/// not exist yet. Idempotent, so it runs on every startup.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut tables = vec![
        schema.create_table_from_entity(user::Entity),
        schema.create_table_from_entity(planet::Entity),
        schema.create_table_from_entity(people::Entity),
        schema.create_table_from_entity(favorite::Entity),
    ];
    for table in tables.iter_mut() {
        table.if_not_exists();
        db.execute(backend.build(table)).await?;
    }

    // a user cannot favorite the same name twice; names are shared between
    // planets and people, so two entities with one name collide here
    let favorite_unique = Index::create()
        .name("favorite_unique")
        .table(favorite::Entity)
        .col(favorite::Column::UserId)
        .col(favorite::Column::Name)
        .unique()
        .if_not_exists()
        .to_owned();
    db.execute(backend.build(&favorite_unique)).await?;

    Ok(())
}

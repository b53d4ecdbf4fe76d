//! Star Wars CRUD API server: starts the HTTP listener, connects the
//! database, and registers the endpoints.

#![warn(rustdoc::private_doc_tests)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
mod api;
mod database;
mod error;

use actix_web::{web, web::Data, App, HttpServer};
use api::*;
use error::ApiError;
use log::info;
use sea_orm::{Database, DatabaseConnection};

/// Used when `DATABASE_URL` is unset; `mode=rwc` creates the file on first
/// run.
const FALLBACK_DATABASE_URL: &str = "sqlite:///tmp/starwars.db?mode=rwc";

/// Identity favorites belong to until real authentication exists; override
/// with `CURRENT_USER_ID`.
const DEFAULT_CURRENT_USER: i32 = 1;

fn env_var_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let db_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| FALLBACK_DATABASE_URL.to_string());
    let port: u16 = env_var_or("PORT", 3000);
    let current_user = CurrentUser(env_var_or("CURRENT_USER_ID", DEFAULT_CURRENT_USER));

    let db = Database::connect(&db_url)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    database::create_tables(&db)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let db_data: Data<DatabaseConnection> = Data::new(db);

    info!("listening on 0.0.0.0:{}", port);
    HttpServer::new(move || {
        App::new()
            .app_data(db_data.clone())
            .app_data(Data::new(current_user))
            // absent or malformed bodies answer in the same error shape as
            // every other validation failure
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                ApiError::bad_request(format!("body must be valid json: {}", err)).into()
            }))
            .service(sitemap_request)
            .service(get_users_request)
            .service(get_user_favorites_request)
            .service(get_planets_request)
            .service(get_planet_request)
            .service(create_planet_request)
            .service(update_planet_request)
            .service(delete_planet_request)
            .service(add_favorite_planet_request)
            .service(delete_favorite_planet_request)
            .service(get_people_request)
            .service(get_person_request)
            .service(create_people_request)
            .service(update_people_request)
            .service(delete_people_request)
            .service(add_favorite_people_request)
            .service(delete_favorite_people_request)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::backend::SitemapResponse;

    #[actix_web::test]
    async fn sitemap_lists_every_route() {
        let app = actix_web::test::init_service(App::new().service(sitemap_request)).await;
        let req = actix_web::test::TestRequest::default().uri("/").to_request();
        let resp: SitemapResponse = actix_web::test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.routes.len(), 17);
        assert!(resp.routes.contains(&"POST /favorite/planet/{planet_id}".to_string()));
        assert!(resp.routes.contains(&"GET /user/favorite".to_string()));
    }

    #[test]
    fn env_var_or_falls_back() {
        std::env::remove_var("NOT_SET_FOR_TEST");
        let port: u16 = env_var_or("NOT_SET_FOR_TEST", 3000);
        assert_eq!(port, 3000);
    }
}

use super::*;
use actix_web::{dev::ServiceResponse, http::StatusCode, test};
use sea_orm::MockDatabase;

#[actix_web::test]
async fn list_users_never_serializes_passwords() {
    let db = MockDatabase::new(sea_orm::DatabaseBackend::Postgres)
        .append_query_results([[
            user::Model {
                id: 1,
                email: "leia@rebellion.example".to_string(),
                password: "secret".to_string(),
                is_active: true,
            },
            user::Model {
                id: 2,
                email: "han@rebellion.example".to_string(),
                password: "secret2".to_string(),
                is_active: false,
            },
        ]])
        .into_connection();
    let app = test::init_service(
        actix_web::App::new()
            .app_data(web::Data::new(db))
            .service(get_users_request),
    )
    .await;
    let req = test::TestRequest::default().uri("/user").to_request();
    let resp: ServiceResponse = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("leia@rebellion.example"));
    assert!(!body.contains("password"));
    assert!(!body.contains("secret"));
}

#[actix_web::test]
async fn list_users_returns_both_active_flags() {
    let db = MockDatabase::new(sea_orm::DatabaseBackend::Postgres)
        .append_query_results([[
            user::Model {
                id: 1,
                email: "leia@rebellion.example".to_string(),
                password: "secret".to_string(),
                is_active: true,
            },
            user::Model {
                id: 2,
                email: "han@rebellion.example".to_string(),
                password: "secret2".to_string(),
                is_active: false,
            },
        ]])
        .into_connection();
    let app = test::init_service(
        actix_web::App::new()
            .app_data(web::Data::new(db))
            .service(get_users_request),
    )
    .await;
    let req = test::TestRequest::default().uri("/user").to_request();
    let resp: ListUsersResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        resp.users,
        vec![
            UserRecord {
                id: 1,
                email: "leia@rebellion.example".to_string(),
                is_active: true,
            },
            UserRecord {
                id: 2,
                email: "han@rebellion.example".to_string(),
                is_active: false,
            },
        ]
    );
}

#[actix_web::test]
async fn list_favorites_empty_is_ok() {
    let db = MockDatabase::new(sea_orm::DatabaseBackend::Postgres)
        .append_query_results([Vec::<favorite::Model>::new()])
        .into_connection();
    let app = test::init_service(
        actix_web::App::new()
            .app_data(web::Data::new(db))
            .service(get_user_favorites_request),
    )
    .await;
    let req = test::TestRequest::default()
        .uri("/user/favorite")
        .to_request();
    let resp: ListFavoritesResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.favorites, vec![]);
}

#[actix_web::test]
async fn list_favorites_spans_all_users() {
    let db = MockDatabase::new(sea_orm::DatabaseBackend::Postgres)
        .append_query_results([[
            favorite::Model {
                id: 1,
                name: "Tatooine".to_string(),
                user_id: 1,
            },
            favorite::Model {
                id: 2,
                name: "Luke".to_string(),
                user_id: 2,
            },
        ]])
        .into_connection();
    let app = test::init_service(
        actix_web::App::new()
            .app_data(web::Data::new(db))
            .service(get_user_favorites_request),
    )
    .await;
    let req = test::TestRequest::default()
        .uri("/user/favorite")
        .to_request();
    let resp: ListFavoritesResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.favorites.len(), 2);
    assert_eq!(resp.favorites[1].user_id, 2);
}

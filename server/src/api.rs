use crate::database::*;
use crate::error::ApiError;
use actix_web::{delete, get, post, put, web, HttpResponse, Responder, Result};
use common::backend::*;
use log::{error, info};
use sea_orm::{
    entity::prelude::*, ActiveValue::NotSet, Condition, DatabaseConnection, DbErr, Set,
    TransactionTrait,
};

/// Identity favorites are recorded under. Threaded through the favorite
/// handlers as app data until real authentication exists.
#[derive(Clone, Copy, Debug)]
pub struct CurrentUser(pub i32);

/// Every route the server registers, in registration order. `GET /` serves
/// this table so the API is discoverable from a browser.
const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/user"),
    ("GET", "/user/favorite"),
    ("GET", "/planet"),
    ("GET", "/planet/{planet_id}"),
    ("POST", "/planet"),
    ("PUT", "/planet"),
    ("DELETE", "/planet/{planet_id}"),
    ("POST", "/favorite/planet/{planet_id}"),
    ("DELETE", "/favorite/planet/{planet_id}"),
    ("GET", "/people"),
    ("GET", "/people/{people_id}"),
    ("POST", "/people"),
    ("PUT", "/people"),
    ("DELETE", "/people/{people_id}"),
    ("POST", "/favorite/people/{people_id}"),
    ("DELETE", "/favorite/people/{people_id}"),
];

/// get / endpoint listing every registered route
#[get("/")]
pub(crate) async fn sitemap_request() -> Result<impl Responder> {
    Ok(web::Json(SitemapResponse {
        msg: "registered routes".to_string(),
        routes: ROUTES
            .iter()
            .map(|(method, path)| format!("{} {}", method, path))
            .collect(),
    }))
}

// USER ENDPOINTS

/// get /user endpoint for retrieving every user, passwords excluded
#[get("/user")]
pub(crate) async fn get_users_request(data: web::Data<DatabaseConnection>) -> Result<impl Responder> {
    let users = user::Entity::find()
        .all(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("couldn't fetch users: {}", e)))?;
    Ok(web::Json(ListUsersResponse {
        msg: "user list".to_string(),
        users: users.into_iter().map(UserRecord::from).collect(),
    }))
}

/// get /user/favorite endpoint for retrieving every favorite row, across all
/// users
#[get("/user/favorite")]
pub(crate) async fn get_user_favorites_request(data: web::Data<DatabaseConnection>) -> Result<impl Responder> {
    let favorites = favorite::Entity::find()
        .all(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("couldn't fetch favorites: {}", e)))?;
    Ok(web::Json(ListFavoritesResponse {
        msg: "favorite list".to_string(),
        favorites: favorites.into_iter().map(FavoriteRecord::from).collect(),
    }))
}

// PLANET ENDPOINTS

/// get /planet endpoint for retrieving every planet
#[get("/planet")]
pub(crate) async fn get_planets_request(data: web::Data<DatabaseConnection>) -> Result<impl Responder> {
    let planets = planet::Entity::find()
        .all(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("couldn't fetch planets: {}", e)))?;
    Ok(web::Json(ListPlanetsResponse {
        msg: "planet list".to_string(),
        planets: planets.into_iter().map(PlanetRecord::from).collect(),
    }))
}

/// get /planet/{planet_id} endpoint for retrieving a single planet
#[get("/planet/{planet_id}")]
pub(crate) async fn get_planet_request(
    data: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<impl Responder> {
    let planet_id = path.into_inner();
    let planet = planet::Entity::find_by_id(planet_id)
        .one(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("couldn't fetch planet: {}", e)))?
        // lookup misses are 400 here, not 404; the API has always answered
        // this way and clients depend on it
        .ok_or_else(|| ApiError::bad_request(format!("no planet with id {}", planet_id)))?;
    Ok(web::Json(GetPlanetResponse {
        msg: "planet found".to_string(),
        planet: planet.into(),
    }))
}

/// post /planet endpoint creating one planet with a client-supplied id
#[post("/planet")]
pub(crate) async fn create_planet_request(
    data: web::Data<DatabaseConnection>,
    req: web::Json<PlanetPayload>,
) -> Result<impl Responder> {
    info!("create_planet_request: {:?}", req);
    let body = req
        .into_inner()
        .validate()
        .map_err(|field| ApiError::bad_request(format!("missing field: {}", field)))?;
    let new_planet = planet::ActiveModel {
        id: Set(body.id),
        name: Set(body.name),
        diameter: Set(body.diameter),
        rotation: Set(body.rotation),
        terrain: Set(body.terrain),
    };
    let inserted = new_planet
        .insert(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("planet not inserted: {}", e)))?;
    Ok(web::Json(CreatePlanetResponse {
        msg: "planet created".to_string(),
        planet: inserted.into(),
    }))
}

/// put /planet endpoint replacing the full field set of the planet named by
/// the body's id
#[put("/planet")]
pub(crate) async fn update_planet_request(
    data: web::Data<DatabaseConnection>,
    req: web::Json<PlanetPayload>,
) -> Result<impl Responder> {
    let body = req
        .into_inner()
        .validate()
        .map_err(|field| ApiError::bad_request(format!("missing field: {}", field)))?;
    let planet = planet::Entity::find_by_id(body.id)
        .one(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("couldn't fetch planet: {}", e)))?
        .ok_or_else(|| ApiError::bad_request(format!("no planet with id {}", body.id)))?;
    let mut planet: planet::ActiveModel = planet.into();
    planet.name = Set(body.name);
    planet.diameter = Set(body.diameter);
    planet.rotation = Set(body.rotation);
    planet.terrain = Set(body.terrain);
    planet
        .update(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("planet not updated: {}", e)))?;
    Ok(web::Json(MessageResponse {
        msg: "planet updated".to_string(),
    }))
}

/// delete /planet/{planet_id} endpoint
#[delete("/planet/{planet_id}")]
pub(crate) async fn delete_planet_request(
    data: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<impl Responder> {
    let planet_id = path.into_inner();
    info!("delete_planet_request: {}", planet_id);
    planet::Entity::find_by_id(planet_id)
        .one(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("couldn't fetch planet: {}", e)))?
        .ok_or_else(|| ApiError::bad_request(format!("no planet with id {}", planet_id)))?
        .delete(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("planet not deleted: {}", e)))?;
    Ok(web::Json(MessageResponse {
        msg: "planet deleted".to_string(),
    }))
}

// FAVORITE ENDPOINTS

/// Creates a favorite for `name` unless one already exists. Shared by the
/// planet and people endpoints because favorites are keyed by name alone,
/// not by entity type.
async fn add_favorite(db: &DatabaseConnection, user_id: i32, name: &str) -> Result<HttpResponse> {
    // the existence check is deliberately not scoped to the user: the first
    // favorite recorded for a name blocks every later one
    let existing = favorite::Entity::find()
        .filter(favorite::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(|e| ApiError::internal(format!("couldn't fetch favorite: {}", e)))?;
    if existing.is_some() {
        return Ok(HttpResponse::Ok().json(FavoriteStatusResponse {
            ok: true,
            msg: "favorite already exists".to_string(),
        }));
    }

    let new_favorite = favorite::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        user_id: Set(user_id),
    };
    match new_favorite.insert(db).await {
        Ok(model) => Ok(HttpResponse::Created().json(FavoriteRecord::from(model))),
        Err(e) => {
            error!("couldn't create favorite: {}", e);
            Ok(HttpResponse::InternalServerError().json(MessageResponse {
                msg: "server side error".to_string(),
            }))
        }
    }
}

/// Removes the favorite for `(name, user_id)` inside a transaction; any
/// persistence failure rolls the whole delete back.
async fn remove_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    name: &str,
) -> Result<HttpResponse> {
    let favorite = favorite::Entity::find()
        .filter(
            Condition::all()
                .add(favorite::Column::Name.eq(name))
                .add(favorite::Column::UserId.eq(user_id)),
        )
        .one(db)
        .await
        .map_err(|e| ApiError::internal(format!("couldn't fetch favorite: {}", e)))?;
    let Some(favorite) = favorite else {
        return Ok(HttpResponse::NotFound().json(FavoriteStatusResponse {
            ok: false,
            msg: "favorite does not exist".to_string(),
        }));
    };

    let deleted: std::result::Result<(), DbErr> = async {
        let txn = db.begin().await?;
        favorite.delete(&txn).await?;
        txn.commit().await?;
        Ok(())
    }
    .await;
    match deleted {
        Ok(()) => Ok(HttpResponse::Ok().json(FavoriteStatusResponse {
            ok: true,
            msg: "favorite removed".to_string(),
        })),
        Err(e) => {
            // the uncommitted transaction rolls back when dropped
            error!("couldn't delete favorite: {}", e);
            Ok(HttpResponse::InternalServerError().json(MessageResponse {
                msg: "server side error".to_string(),
            }))
        }
    }
}

/// post /favorite/planet/{planet_id} endpoint marking a planet favorite for
/// the current user
#[post("/favorite/planet/{planet_id}")]
pub(crate) async fn add_favorite_planet_request(
    data: web::Data<DatabaseConnection>,
    current_user: web::Data<CurrentUser>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let planet_id = path.into_inner();
    let planet = planet::Entity::find_by_id(planet_id)
        .one(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("couldn't fetch planet: {}", e)))?;
    let Some(planet) = planet else {
        return Ok(HttpResponse::NotFound().json(MessageResponse {
            msg: format!("no planet with id {}", planet_id),
        }));
    };
    add_favorite(data.as_ref(), current_user.0, &planet.name).await
}

/// delete /favorite/planet/{planet_id} endpoint
#[delete("/favorite/planet/{planet_id}")]
pub(crate) async fn delete_favorite_planet_request(
    data: web::Data<DatabaseConnection>,
    current_user: web::Data<CurrentUser>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let planet_id = path.into_inner();
    let planet = planet::Entity::find_by_id(planet_id)
        .one(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("couldn't fetch planet: {}", e)))?;
    let Some(planet) = planet else {
        return Ok(HttpResponse::NotFound().json(MessageResponse {
            msg: format!("no planet with id {}", planet_id),
        }));
    };
    remove_favorite(data.as_ref(), current_user.0, &planet.name).await
}

// PEOPLE ENDPOINTS

/// get /people endpoint for retrieving every person
#[get("/people")]
pub(crate) async fn get_people_request(data: web::Data<DatabaseConnection>) -> Result<impl Responder> {
    let people = people::Entity::find()
        .all(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("couldn't fetch people: {}", e)))?;
    Ok(web::Json(ListPeopleResponse {
        msg: "people list".to_string(),
        people: people.into_iter().map(PersonRecord::from).collect(),
    }))
}

/// get /people/{people_id} endpoint for retrieving a single person
#[get("/people/{people_id}")]
pub(crate) async fn get_person_request(
    data: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<impl Responder> {
    let people_id = path.into_inner();
    let person = people::Entity::find_by_id(people_id)
        .one(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("couldn't fetch person: {}", e)))?
        .ok_or_else(|| ApiError::bad_request(format!("no person with id {}", people_id)))?;
    Ok(web::Json(GetPersonResponse {
        msg: "person found".to_string(),
        person: person.into(),
    }))
}

/// post /people endpoint creating one person with a client-supplied id
#[post("/people")]
pub(crate) async fn create_people_request(
    data: web::Data<DatabaseConnection>,
    req: web::Json<PeoplePayload>,
) -> Result<impl Responder> {
    info!("create_people_request: {:?}", req);
    let body = req
        .into_inner()
        .validate()
        .map_err(|field| ApiError::bad_request(format!("missing field: {}", field)))?;
    let new_person = people::ActiveModel {
        id: Set(body.id),
        name: Set(body.name),
        height: Set(body.height),
        mass: Set(body.mass),
        hair_color: Set(body.hair_color),
        planet_id: Set(body.planet_id),
    };
    let inserted = new_person
        .insert(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("person not inserted: {}", e)))?;
    Ok(web::Json(CreatePersonResponse {
        msg: "person created".to_string(),
        person: inserted.into(),
    }))
}

/// put /people endpoint replacing the full field set of the person named by
/// the body's id
#[put("/people")]
pub(crate) async fn update_people_request(
    data: web::Data<DatabaseConnection>,
    req: web::Json<PeoplePayload>,
) -> Result<impl Responder> {
    let body = req
        .into_inner()
        .validate()
        .map_err(|field| ApiError::bad_request(format!("missing field: {}", field)))?;
    let person = people::Entity::find_by_id(body.id)
        .one(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("couldn't fetch person: {}", e)))?
        .ok_or_else(|| ApiError::bad_request(format!("no person with id {}", body.id)))?;
    let mut person: people::ActiveModel = person.into();
    person.name = Set(body.name);
    person.height = Set(body.height);
    person.mass = Set(body.mass);
    person.hair_color = Set(body.hair_color);
    if body.planet_id.is_some() {
        person.planet_id = Set(body.planet_id);
    }
    person
        .update(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("person not updated: {}", e)))?;
    Ok(web::Json(MessageResponse {
        msg: "person updated".to_string(),
    }))
}

/// delete /people/{people_id} endpoint
#[delete("/people/{people_id}")]
pub(crate) async fn delete_people_request(
    data: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<impl Responder> {
    let people_id = path.into_inner();
    info!("delete_people_request: {}", people_id);
    people::Entity::find_by_id(people_id)
        .one(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("couldn't fetch person: {}", e)))?
        .ok_or_else(|| ApiError::bad_request(format!("no person with id {}", people_id)))?
        .delete(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("person not deleted: {}", e)))?;
    Ok(web::Json(MessageResponse {
        msg: "person deleted".to_string(),
    }))
}

/// post /favorite/people/{people_id} endpoint marking a person favorite for
/// the current user
#[post("/favorite/people/{people_id}")]
pub(crate) async fn add_favorite_people_request(
    data: web::Data<DatabaseConnection>,
    current_user: web::Data<CurrentUser>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let people_id = path.into_inner();
    let person = people::Entity::find_by_id(people_id)
        .one(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("couldn't fetch person: {}", e)))?;
    let Some(person) = person else {
        return Ok(HttpResponse::NotFound().json(MessageResponse {
            msg: format!("no person with id {}", people_id),
        }));
    };
    add_favorite(data.as_ref(), current_user.0, &person.name).await
}

/// delete /favorite/people/{people_id} endpoint
#[delete("/favorite/people/{people_id}")]
pub(crate) async fn delete_favorite_people_request(
    data: web::Data<DatabaseConnection>,
    current_user: web::Data<CurrentUser>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let people_id = path.into_inner();
    let person = people::Entity::find_by_id(people_id)
        .one(data.as_ref())
        .await
        .map_err(|e| ApiError::internal(format!("couldn't fetch person: {}", e)))?;
    let Some(person) = person else {
        return Ok(HttpResponse::NotFound().json(MessageResponse {
            msg: format!("no person with id {}", people_id),
        }));
    };
    remove_favorite(data.as_ref(), current_user.0, &person.name).await
}

#[cfg(test)]
#[path = "./tests/test_planets.rs"]
mod test_planets;

#[cfg(test)]
#[path = "./tests/test_people.rs"]
mod test_people;

#[cfg(test)]
#[path = "./tests/test_favorites.rs"]
mod test_favorites;

#[cfg(test)]
#[path = "./tests/test_users.rs"]
mod test_users;

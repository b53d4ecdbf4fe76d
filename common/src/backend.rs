//! This file outlines all the structures the server and clients exchange over
//! the REST API: request payloads with their validation-order contract, and
//! the serialized record types each endpoint returns.

use serde::{Deserialize, Serialize};

use crate::*;

/// # SHARED RESPONSES

/// Plain status message, used by PUT and DELETE endpoints.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    /// human-readable outcome of the request
    pub msg: String,
}

/// Favorite toggle outcome ("already exists", "removed", "does not exist").
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FavoriteStatusResponse {
    /// whether the toggle ended in the requested state
    pub ok: bool,
    /// human-readable outcome of the request
    pub msg: String,
}

/// reqwest::get("/") — every registered route as "METHOD /path"
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SitemapResponse {
    /// human-readable status
    pub msg: String,
    /// registered routes in registration order
    pub routes: Vec<String>,
}

/// # USER API

/// Serialized user. The password column is deliberately absent from this
/// struct so it can never reach a response body.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    /// DB primary key
    pub id: UserId,
    /// unique login email
    pub email: String,
    /// whether the account is active
    pub is_active: bool,
}

/// reqwest::get("/user")
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ListUsersResponse {
    /// human-readable status
    pub msg: String,
    /// all users, serialized
    pub users: Vec<UserRecord>,
}

/// # FAVORITE API

/// Serialized favorite row. `name` is a denormalized copy of the favorited
/// entity's name, not a typed reference to a planet or a person.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FavoriteRecord {
    /// DB primary key
    pub id: FavoriteId,
    /// name of the favorited entity
    pub name: String,
    /// owner of the favorite
    pub user_id: UserId,
}

/// reqwest::get("/user/favorite")
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ListFavoritesResponse {
    /// human-readable status
    pub msg: String,
    /// every favorite row, across all users
    pub favorites: Vec<FavoriteRecord>,
}

/// # PLANET API

/// Serialized planet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanetRecord {
    /// DB primary key
    pub id: PlanetId,
    /// planet name
    pub name: String,
    /// diameter in kilometers
    pub diameter: i32,
    /// rotation period in hours
    pub rotation: i32,
    /// dominant terrain
    pub terrain: String,
}

/// reqwest::get("/planet")
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ListPlanetsResponse {
    /// human-readable status
    pub msg: String,
    /// all planets, serialized
    pub planets: Vec<PlanetRecord>,
}

/// reqwest::get("/planet/{id}")
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GetPlanetResponse {
    /// human-readable status
    pub msg: String,
    /// the requested planet
    pub planet: PlanetRecord,
}

/// reqwest::post("/planet") success body
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreatePlanetResponse {
    /// human-readable status
    pub msg: String,
    /// the freshly inserted planet
    pub planet: PlanetRecord,
}

/// reqwest::post("/planet").body(PlanetPayload) — also the PUT body.
///
/// Every field is optional at the serde layer; [`PlanetPayload::validate`]
/// enforces presence in the documented order so the first missing field names
/// the error.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PlanetPayload {
    /// client-supplied primary key
    pub id: Option<PlanetId>,
    /// planet name
    pub name: Option<String>,
    /// diameter in kilometers
    pub diameter: Option<i32>,
    /// rotation period in hours
    pub rotation: Option<i32>,
    /// dominant terrain
    pub terrain: Option<String>,
}

/// A planet body that passed validation; the only way to obtain one is
/// [`PlanetPayload::validate`].
#[derive(Debug, PartialEq)]
pub struct ValidPlanet {
    /// client-supplied primary key
    pub id: PlanetId,
    /// planet name
    pub name: String,
    /// diameter in kilometers
    pub diameter: i32,
    /// rotation period in hours
    pub rotation: i32,
    /// dominant terrain
    pub terrain: String,
}

impl PlanetPayload {
    /// Checks fields in the contract order `id, name, diameter, rotation,
    /// terrain`; the first one absent is returned as the error.
    pub fn validate(self) -> Result<ValidPlanet, &'static str> {
        let id = self.id.ok_or("id")?;
        let name = self.name.ok_or("name")?;
        let diameter = self.diameter.ok_or("diameter")?;
        let rotation = self.rotation.ok_or("rotation")?;
        let terrain = self.terrain.ok_or("terrain")?;
        Ok(ValidPlanet {
            id,
            name,
            diameter,
            rotation,
            terrain,
        })
    }
}

/// # PEOPLE API

/// Serialized person. `planet_id` stays internal, matching the original
/// projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonRecord {
    /// DB primary key
    pub id: PeopleId,
    /// person name
    pub name: String,
    /// height in centimeters
    pub height: i32,
    /// mass in kilograms
    pub mass: i32,
    /// hair color
    pub hair_color: String,
}

/// reqwest::get("/people")
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ListPeopleResponse {
    /// human-readable status
    pub msg: String,
    /// all people, serialized
    pub people: Vec<PersonRecord>,
}

/// reqwest::get("/people/{id}")
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GetPersonResponse {
    /// human-readable status
    pub msg: String,
    /// the requested person
    pub person: PersonRecord,
}

/// reqwest::post("/people") success body
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreatePersonResponse {
    /// human-readable status
    pub msg: String,
    /// the freshly inserted person
    pub person: PersonRecord,
}

/// reqwest::post("/people").body(PeoplePayload) — also the PUT body.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PeoplePayload {
    /// client-supplied primary key
    pub id: Option<PeopleId>,
    /// person name
    pub name: Option<String>,
    /// height in centimeters
    pub height: Option<i32>,
    /// mass in kilograms
    pub mass: Option<i32>,
    /// hair color
    pub hair_color: Option<String>,
    /// optional home planet reference; never required
    pub planet_id: Option<PlanetId>,
}

/// A people body that passed validation; the only way to obtain one is
/// [`PeoplePayload::validate`].
#[derive(Debug, PartialEq)]
pub struct ValidPerson {
    /// client-supplied primary key
    pub id: PeopleId,
    /// person name
    pub name: String,
    /// height in centimeters
    pub height: i32,
    /// mass in kilograms
    pub mass: i32,
    /// hair color
    pub hair_color: String,
    /// optional home planet reference
    pub planet_id: Option<PlanetId>,
}

impl PeoplePayload {
    /// Checks fields in the contract order `id, name, height, mass,
    /// hair_color`; the first one absent is returned as the error.
    /// `planet_id` is optional and never part of the check.
    pub fn validate(self) -> Result<ValidPerson, &'static str> {
        let id = self.id.ok_or("id")?;
        let name = self.name.ok_or("name")?;
        let height = self.height.ok_or("height")?;
        let mass = self.mass.ok_or("mass")?;
        let hair_color = self.hair_color.ok_or("hair_color")?;
        Ok(ValidPerson {
            id,
            name,
            height,
            mass,
            hair_color,
            planet_id: self.planet_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_serde_commutes<T: std::fmt::Debug + Serialize + for<'a> Deserialize<'a> + PartialEq>(
        obj: T,
    ) {
        let serialized = serde_json::to_string(&obj).unwrap();
        let deser_obj = serde_json::from_str(&serialized).unwrap();
        assert_eq!(obj, deser_obj);
    }

    #[test]
    fn serde_planet_payload() {
        test_serde_commutes(PlanetPayload {
            id: Some(1),
            name: Some("Tatooine".to_owned()),
            diameter: Some(10465),
            rotation: Some(23),
            terrain: Some("desert".to_owned()),
        });
    }

    #[test]
    fn serde_favorite_record() {
        test_serde_commutes(FavoriteRecord {
            id: 1,
            name: "Tatooine".to_owned(),
            user_id: 1,
        });
    }

    #[test]
    fn planet_validation_order_is_fixed() {
        let empty = PlanetPayload::default();
        assert_eq!(empty.validate().unwrap_err(), "id");

        let missing_two = PlanetPayload {
            id: Some(1),
            name: None,
            diameter: None,
            rotation: Some(23),
            terrain: Some("desert".to_owned()),
        };
        // name comes before diameter in the contract
        assert_eq!(missing_two.validate().unwrap_err(), "name");

        let missing_last = PlanetPayload {
            id: Some(1),
            name: Some("Tatooine".to_owned()),
            diameter: Some(10465),
            rotation: Some(23),
            terrain: None,
        };
        assert_eq!(missing_last.validate().unwrap_err(), "terrain");
    }

    #[test]
    fn people_validation_ignores_planet_id() {
        let body = PeoplePayload {
            id: Some(1),
            name: Some("Luke".to_owned()),
            height: Some(172),
            mass: Some(77),
            hair_color: Some("blond".to_owned()),
            planet_id: None,
        };
        let valid = body.validate().unwrap();
        assert_eq!(valid.planet_id, None);

        let missing_hair = PeoplePayload {
            id: Some(2),
            name: Some("Leia".to_owned()),
            height: Some(150),
            mass: Some(49),
            hair_color: None,
            planet_id: Some(2),
        };
        assert_eq!(missing_hair.validate().unwrap_err(), "hair_color");
    }

    #[test]
    fn user_record_has_no_password_field() {
        let serialized = serde_json::to_string(&UserRecord {
            id: 1,
            email: "user@example.com".to_owned(),
            is_active: true,
        })
        .unwrap();
        assert!(!serialized.contains("password"));
    }
}

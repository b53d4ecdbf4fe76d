//! The common crate contains the wire structures shared by the server and any
//! client implementation of the Star Wars CRUD API.

#![warn(rustdoc::private_doc_tests)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backend;

/// Primary key for users
pub type UserId = i32;

/// Primary key for planets
/// Note: supplied by the client on create, not generated by the database.
pub type PlanetId = i32;

/// Primary key for people
/// Note: supplied by the client on create, not generated by the database.
pub type PeopleId = i32;

/// Primary key for favorites
pub type FavoriteId = i32;

//! SeaORM entities.

pub mod caught_pokemon;
pub mod pokemon;
pub mod user;

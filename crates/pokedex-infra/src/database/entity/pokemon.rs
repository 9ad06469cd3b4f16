//! Pokemon entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pokemon")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub kind: String,
    pub height: i32,
    pub weight: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Pokemon.
impl From<Model> for pokedex_core::domain::Pokemon {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            kind: model.kind,
            height: model.height,
            weight: model.weight,
            description: model.description,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Pokemon to SeaORM ActiveModel.
impl From<pokedex_core::domain::Pokemon> for ActiveModel {
    fn from(pokemon: pokedex_core::domain::Pokemon) -> Self {
        Self {
            id: Set(pokemon.id),
            name: Set(pokemon.name),
            kind: Set(pokemon.kind),
            height: Set(pokemon.height),
            weight: Set(pokemon.weight),
            description: Set(pokemon.description),
            created_at: Set(pokemon.created_at.into()),
            updated_at: Set(pokemon.updated_at.into()),
        }
    }
}

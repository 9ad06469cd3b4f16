//! CaughtPokemon entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "caught_pokemon")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub pokemon_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pokemon::Entity",
        from = "Column::PokemonId",
        to = "super::pokemon::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Pokemon,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::pokemon::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pokemon.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain CaughtPokemon.
impl From<Model> for pokedex_core::domain::CaughtPokemon {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            pokemon_id: model.pokemon_id,
            user_id: model.user_id,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from Domain CaughtPokemon to SeaORM ActiveModel.
impl From<pokedex_core::domain::CaughtPokemon> for ActiveModel {
    fn from(caught: pokedex_core::domain::CaughtPokemon) -> Self {
        Self {
            id: Set(caught.id),
            pokemon_id: Set(caught.pokemon_id),
            user_id: Set(caught.user_id),
            created_at: Set(caught.created_at.into()),
        }
    }
}

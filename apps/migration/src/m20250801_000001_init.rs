use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Pokemon {
    Table,
    Id,
    Name,
    Kind,
    Height,
    Weight,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum CaughtPokemon {
    Table,
    Id,
    PokemonId,
    UserId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // pokemon
        manager
            .create_table(
                Table::create()
                    .table(Pokemon::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Pokemon::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Pokemon::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Pokemon::Kind).string().not_null())
                    .col(ColumnDef::new(Pokemon::Height).integer().not_null())
                    .col(ColumnDef::new(Pokemon::Weight).integer().not_null())
                    .col(ColumnDef::new(Pokemon::Description).text().not_null())
                    .col(
                        ColumnDef::new(Pokemon::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Pokemon::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // caught_pokemon
        manager
            .create_table(
                Table::create()
                    .table(CaughtPokemon::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CaughtPokemon::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CaughtPokemon::PokemonId).uuid().not_null())
                    .col(ColumnDef::new(CaughtPokemon::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(CaughtPokemon::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_caught_pokemon_pokemon_id")
                            .from(CaughtPokemon::Table, CaughtPokemon::PokemonId)
                            .to(Pokemon::Table, Pokemon::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_caught_pokemon_user_id")
                            .from(CaughtPokemon::Table, CaughtPokemon::UserId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CaughtPokemon::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Pokemon::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

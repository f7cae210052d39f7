use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240902_000002_create_people_table::People;

static FK_PLANETS_ID_PEOPLE: &str = "fk_planets_id_people";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline as SQLite cannot add them to an existing table
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(pk_auto(Planets::Id))
                    .col(string_uniq(Planets::Name))
                    .col(string(Planets::Gravity))
                    .col(string(Planets::Population))
                    .col(string(Planets::Terrain))
                    .col(integer_null(Planets::IdPeople))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLANETS_ID_PEOPLE)
                            .from(Planets::Table, Planets::IdPeople)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planets {
    Table,
    Id,
    Name,
    Gravity,
    Population,
    Terrain,
    IdPeople,
}

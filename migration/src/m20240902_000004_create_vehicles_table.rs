use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240902_000002_create_people_table::People;

static FK_VEHICLES_PEOPLE_ID: &str = "fk_vehicles_people_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicles::Id))
                    .col(string_uniq(Vehicles::Name))
                    .col(string(Vehicles::Model))
                    .col(string(Vehicles::Manufacturer))
                    .col(string(Vehicles::CostInCredits))
                    .col(integer_null(Vehicles::PeopleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VEHICLES_PEOPLE_ID)
                            .from(Vehicles::Table, Vehicles::PeopleId)
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
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vehicles {
    Table,
    Id,
    Name,
    Model,
    Manufacturer,
    CostInCredits,
    PeopleId,
}

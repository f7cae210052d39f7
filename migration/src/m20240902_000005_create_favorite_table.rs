use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20240902_000001_create_user_table::User, m20240902_000002_create_people_table::People,
    m20240902_000003_create_planets_table::Planets,
    m20240902_000004_create_vehicles_table::Vehicles,
};

static IDX_FAVORITE_USER_ID: &str = "idx_favorite_user_id";
static FK_FAVORITE_USER_ID: &str = "fk_favorite_user_id";
static FK_FAVORITE_PEOPLE_ID: &str = "fk_favorite_people_id";
static FK_FAVORITE_PLANET_ID: &str = "fk_favorite_planet_id";
static FK_FAVORITE_VEHICLE_ID: &str = "fk_favorite_vehicle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::UserId))
                    .col(integer_null(Favorite::PeopleId))
                    .col(integer_null(Favorite::PlanetId))
                    .col(integer_null(Favorite::VehicleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_USER_ID)
                            .from(Favorite::Table, Favorite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_PEOPLE_ID)
                            .from(Favorite::Table, Favorite::PeopleId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_PLANET_ID)
                            .from(Favorite::Table, Favorite::PlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_VEHICLE_ID)
                            .from(Favorite::Table, Favorite::VehicleId)
                            .to(Vehicles::Table, Vehicles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorite {
    Table,
    Id,
    UserId,
    PeopleId,
    PlanetId,
    VehicleId,
}

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::favorite::FavoriteTarget;

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favorite linking the user to the target
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<entity::favorite::Model, DbErr> {
        let mut favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            people_id: ActiveValue::Set(None),
            planet_id: ActiveValue::Set(None),
            vehicle_id: ActiveValue::Set(None),
            ..Default::default()
        };

        match target {
            FavoriteTarget::Person(id) => favorite.people_id = ActiveValue::Set(Some(id)),
            FavoriteTarget::Planet(id) => favorite.planet_id = ActiveValue::Set(Some(id)),
            FavoriteTarget::Vehicle(id) => favorite.vehicle_id = ActiveValue::Set(Some(id)),
        }

        favorite.insert(self.db).await
    }

    /// Finds the first favorite of the user pointing at the target
    pub async fn find(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        let target_column = match target {
            FavoriteTarget::Person(_) => entity::favorite::Column::PeopleId,
            FavoriteTarget::Planet(_) => entity::favorite::Column::PlanetId,
            FavoriteTarget::Vehicle(_) => entity::favorite::Column::VehicleId,
        };

        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(target_column.eq(target.id()))
            .order_by_asc(entity::favorite::Column::Id)
            .one(self.db)
            .await
    }

    /// Gets all favorites of the provided user ID ordered by ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}

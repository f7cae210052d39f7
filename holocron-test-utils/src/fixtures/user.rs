use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(&self, email: &str) -> Result<entity::user::Model, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                password: ActiveValue::Set("password".to_string()),
                is_active: ActiveValue::Set(true),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        self.insert_favorite(user_id, None, Some(planet_id), None)
            .await
    }

    pub async fn insert_favorite_person(
        &self,
        user_id: i32,
        people_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        self.insert_favorite(user_id, Some(people_id), None, None)
            .await
    }

    pub async fn insert_favorite_vehicle(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        self.insert_favorite(user_id, None, None, Some(vehicle_id))
            .await
    }

    async fn insert_favorite(
        &self,
        user_id: i32,
        people_id: Option<i32>,
        planet_id: Option<i32>,
        vehicle_id: Option<i32>,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                people_id: ActiveValue::Set(people_id),
                planet_id: ActiveValue::Set(planet_id),
                vehicle_id: ActiveValue::Set(vehicle_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}

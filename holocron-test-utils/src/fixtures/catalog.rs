use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                gravity: ActiveValue::Set("1 standard".to_string()),
                population: ActiveValue::Set("200000".to_string()),
                terrain: ActiveValue::Set("desert".to_string()),
                id_people: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_person(&self, name: &str) -> Result<entity::person::Model, TestError> {
        Ok(
            entity::prelude::Person::insert(entity::person::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                gender: ActiveValue::Set("male".to_string()),
                birth_year: ActiveValue::Set("19BBY".to_string()),
                mass: ActiveValue::Set("77".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_vehicle(&self, name: &str) -> Result<entity::vehicle::Model, TestError> {
        Ok(
            entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                model: ActiveValue::Set("Digger Crawler".to_string()),
                manufacturer: ActiveValue::Set("Corellia Mining Corporation".to_string()),
                cost_in_credits: ActiveValue::Set("150000".to_string()),
                people_id: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Inserts a planet whose origin is the provided person
    pub async fn insert_planet_of_person(
        &self,
        name: &str,
        person_id: i32,
    ) -> Result<entity::planet::Model, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                gravity: ActiveValue::Set("1 standard".to_string()),
                population: ActiveValue::Set("200000".to_string()),
                terrain: ActiveValue::Set("desert".to_string()),
                id_people: ActiveValue::Set(Some(person_id)),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}

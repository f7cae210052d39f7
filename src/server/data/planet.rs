use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

/// Mutable fields of a planet, all of them required.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetFields {
    pub name: String,
    pub gravity: String,
    pub population: String,
    pub terrain: String,
}

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new planet
    pub async fn create(&self, fields: PlanetFields) -> Result<entity::planet::Model, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(fields.name),
            gravity: ActiveValue::Set(fields.gravity),
            population: ActiveValue::Set(fields.population),
            terrain: ActiveValue::Set(fields.terrain),
            id_people: ActiveValue::Set(None),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn get(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Gets every planet ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a planet by name, ignoring the planet with ID `excluding` if provided
    pub async fn find_by_name(
        &self,
        name: &str,
        excluding: Option<i32>,
    ) -> Result<Option<entity::planet::Model>, DbErr> {
        let mut query =
            entity::prelude::Planet::find().filter(entity::planet::Column::Name.eq(name));

        if let Some(planet_id) = excluding {
            query = query.filter(entity::planet::Column::Id.ne(planet_id));
        }

        query.one(self.db).await
    }

    /// Overwrites every mutable field of a planet
    ///
    /// Returns `Ok(None)` if the planet does not exist.
    pub async fn update(
        &self,
        planet_id: i32,
        fields: PlanetFields,
    ) -> Result<Option<entity::planet::Model>, DbErr> {
        let planet = match entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?
        {
            Some(planet) => planet,
            None => return Ok(None),
        };

        let mut planet_am = planet.into_active_model();
        planet_am.name = ActiveValue::Set(fields.name);
        planet_am.gravity = ActiveValue::Set(fields.gravity);
        planet_am.population = ActiveValue::Set(fields.population);
        planet_am.terrain = ActiveValue::Set(fields.terrain);

        let planet = planet_am.update(self.db).await?;

        Ok(Some(planet))
    }

    /// Deletes a planet
    ///
    /// Returns OK regardless of planet existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}

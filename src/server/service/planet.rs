use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::catalog::{PlanetDto, PlanetPayloadDto},
    server::{
        data::planet::{PlanetFields, PlanetRepository},
        error::{catalog::CatalogError, Error},
        util::field::required,
    },
};

static NOT_FOUND: &str = "No se ha encontrado";
static PLANET_NOT_FOUND: &str = "Planeta no encontrado";
static PLANET_EXISTS: &str = "El planeta ya existe";
static MISSING_FIELDS: &str = "name, gravity, population and terrain are required";

/// Service for creating, reading, updating & deleting planets.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every planet
    ///
    /// # Returns
    /// - `Ok(Vec<PlanetDto>)` - At least one planet exists
    /// - `Err(Error::CatalogError(CatalogError::NotFound))` - No planets exist
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn list(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        if planets.is_empty() {
            return Err(CatalogError::NotFound(NOT_FOUND).into());
        }

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    pub async fn get(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let planet = PlanetRepository::new(self.db)
            .get(planet_id)
            .await?
            .ok_or(CatalogError::NotFound(NOT_FOUND))?;

        Ok(planet.into())
    }

    /// Creates a planet from the payload
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - The created planet
    /// - `Err(Error::CatalogError(CatalogError::MissingFields))` - A field is absent
    /// - `Err(Error::CatalogError(CatalogError::AlreadyExists))` - The name is taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, payload: PlanetPayloadDto) -> Result<PlanetDto, Error> {
        let fields = planet_fields(&payload).ok_or(CatalogError::MissingFields(MISSING_FIELDS))?;

        let txn = self.db.begin().await?;
        let planet_repo = PlanetRepository::new(&txn);

        if planet_repo.find_by_name(&fields.name, None).await?.is_some() {
            return Err(CatalogError::AlreadyExists(PLANET_EXISTS).into());
        }

        let planet = planet_repo.create(fields).await?;
        txn.commit().await?;

        tracing::debug!(planet_id = planet.id, "Created planet {}", planet.name);

        Ok(planet.into())
    }

    /// Replaces every field of an existing planet
    ///
    /// Existence is checked before the payload, so an unknown ID is reported as not
    /// found even when the payload is incomplete.
    pub async fn update(
        &self,
        planet_id: i32,
        payload: PlanetPayloadDto,
    ) -> Result<PlanetDto, Error> {
        let txn = self.db.begin().await?;
        let planet_repo = PlanetRepository::new(&txn);

        if planet_repo.get(planet_id).await?.is_none() {
            return Err(CatalogError::NotFound(PLANET_NOT_FOUND).into());
        }

        let fields = planet_fields(&payload).ok_or(CatalogError::MissingFields(MISSING_FIELDS))?;

        if planet_repo
            .find_by_name(&fields.name, Some(planet_id))
            .await?
            .is_some()
        {
            return Err(CatalogError::AlreadyExists(PLANET_EXISTS).into());
        }

        let planet = planet_repo
            .update(planet_id, fields)
            .await?
            .ok_or(CatalogError::NotFound(PLANET_NOT_FOUND))?;
        txn.commit().await?;

        Ok(planet.into())
    }

    pub async fn delete(&self, planet_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let planet_repo = PlanetRepository::new(&txn);

        if planet_repo.get(planet_id).await?.is_none() {
            return Err(CatalogError::NotFound(PLANET_NOT_FOUND).into());
        }

        planet_repo.delete(planet_id).await?;
        txn.commit().await?;

        Ok(())
    }
}

fn planet_fields(payload: &PlanetPayloadDto) -> Option<PlanetFields> {
    Some(PlanetFields {
        name: required(payload.name.as_ref())?,
        gravity: required(payload.gravity.as_ref())?,
        population: required(payload.population.as_ref())?,
        terrain: required(payload.terrain.as_ref())?,
    })
}

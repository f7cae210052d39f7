use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::catalog::{VehicleDto, VehiclePayloadDto},
    server::{
        data::vehicle::{VehicleFields, VehicleRepository},
        error::{catalog::CatalogError, Error},
        util::field::required,
    },
};

static NOT_FOUND: &str = "No se ha encontrado ningún vehiculo";
static VEHICLE_NOT_FOUND: &str = "Vehiculo no encontrado";
static VEHICLE_EXISTS: &str = "El vehiculo ya existe";
static MISSING_FIELDS: &str = "name, model, manufacturer and cost_in_credits are required";

/// Service for creating, reading, updating & deleting vehicles.
pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    /// Creates a new instance of [`VehicleService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every vehicle, failing with NotFound when there are none
    pub async fn list(&self) -> Result<Vec<VehicleDto>, Error> {
        let vehicles = VehicleRepository::new(self.db).get_all().await?;

        if vehicles.is_empty() {
            return Err(CatalogError::NotFound(NOT_FOUND).into());
        }

        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }

    pub async fn get(&self, vehicle_id: i32) -> Result<VehicleDto, Error> {
        let vehicle = VehicleRepository::new(self.db)
            .get(vehicle_id)
            .await?
            .ok_or(CatalogError::NotFound(NOT_FOUND))?;

        Ok(vehicle.into())
    }

    pub async fn create(&self, payload: VehiclePayloadDto) -> Result<VehicleDto, Error> {
        let fields =
            vehicle_fields(&payload).ok_or(CatalogError::MissingFields(MISSING_FIELDS))?;

        let txn = self.db.begin().await?;
        let vehicle_repo = VehicleRepository::new(&txn);

        if vehicle_repo.find_by_name(&fields.name, None).await?.is_some() {
            return Err(CatalogError::AlreadyExists(VEHICLE_EXISTS).into());
        }

        let vehicle = vehicle_repo.create(fields).await?;
        txn.commit().await?;

        tracing::debug!(vehicle_id = vehicle.id, "Created vehicle {}", vehicle.name);

        Ok(vehicle.into())
    }

    /// Replaces every field of an existing vehicle
    pub async fn update(
        &self,
        vehicle_id: i32,
        payload: VehiclePayloadDto,
    ) -> Result<VehicleDto, Error> {
        let txn = self.db.begin().await?;
        let vehicle_repo = VehicleRepository::new(&txn);

        if vehicle_repo.get(vehicle_id).await?.is_none() {
            return Err(CatalogError::NotFound(VEHICLE_NOT_FOUND).into());
        }

        let fields =
            vehicle_fields(&payload).ok_or(CatalogError::MissingFields(MISSING_FIELDS))?;

        if vehicle_repo
            .find_by_name(&fields.name, Some(vehicle_id))
            .await?
            .is_some()
        {
            return Err(CatalogError::AlreadyExists(VEHICLE_EXISTS).into());
        }

        let vehicle = vehicle_repo
            .update(vehicle_id, fields)
            .await?
            .ok_or(CatalogError::NotFound(VEHICLE_NOT_FOUND))?;
        txn.commit().await?;

        Ok(vehicle.into())
    }

    pub async fn delete(&self, vehicle_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let vehicle_repo = VehicleRepository::new(&txn);

        if vehicle_repo.get(vehicle_id).await?.is_none() {
            return Err(CatalogError::NotFound(VEHICLE_NOT_FOUND).into());
        }

        vehicle_repo.delete(vehicle_id).await?;
        txn.commit().await?;

        Ok(())
    }
}

fn vehicle_fields(payload: &VehiclePayloadDto) -> Option<VehicleFields> {
    Some(VehicleFields {
        name: required(payload.name.as_ref())?,
        model: required(payload.model.as_ref())?,
        manufacturer: required(payload.manufacturer.as_ref())?,
        cost_in_credits: required(payload.cost_in_credits.as_ref())?,
    })
}

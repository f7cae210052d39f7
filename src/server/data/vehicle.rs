use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

/// Mutable fields of a vehicle, all of them required.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleFields {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
}

pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new instance of [`VehicleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new vehicle
    pub async fn create(&self, fields: VehicleFields) -> Result<entity::vehicle::Model, DbErr> {
        let vehicle = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(fields.name),
            model: ActiveValue::Set(fields.model),
            manufacturer: ActiveValue::Set(fields.manufacturer),
            cost_in_credits: ActiveValue::Set(fields.cost_in_credits),
            people_id: ActiveValue::Set(None),
            ..Default::default()
        };

        vehicle.insert(self.db).await
    }

    pub async fn get(&self, vehicle_id: i32) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await
    }

    /// Gets every vehicle ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a vehicle by name, ignoring the vehicle with ID `excluding` if provided
    pub async fn find_by_name(
        &self,
        name: &str,
        excluding: Option<i32>,
    ) -> Result<Option<entity::vehicle::Model>, DbErr> {
        let mut query =
            entity::prelude::Vehicle::find().filter(entity::vehicle::Column::Name.eq(name));

        if let Some(vehicle_id) = excluding {
            query = query.filter(entity::vehicle::Column::Id.ne(vehicle_id));
        }

        query.one(self.db).await
    }

    /// Overwrites every mutable field of a vehicle
    ///
    /// Returns `Ok(None)` if the vehicle does not exist.
    pub async fn update(
        &self,
        vehicle_id: i32,
        fields: VehicleFields,
    ) -> Result<Option<entity::vehicle::Model>, DbErr> {
        let vehicle = match entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await?
        {
            Some(vehicle) => vehicle,
            None => return Ok(None),
        };

        let mut vehicle_am = vehicle.into_active_model();
        vehicle_am.name = ActiveValue::Set(fields.name);
        vehicle_am.model = ActiveValue::Set(fields.model);
        vehicle_am.manufacturer = ActiveValue::Set(fields.manufacturer);
        vehicle_am.cost_in_credits = ActiveValue::Set(fields.cost_in_credits);

        let vehicle = vehicle_am.update(self.db).await?;

        Ok(Some(vehicle))
    }

    pub async fn delete(&self, vehicle_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Vehicle::delete_by_id(vehicle_id)
            .exec(self.db)
            .await
    }
}

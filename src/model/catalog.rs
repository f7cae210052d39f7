//! Planet, person & vehicle bodies.
//!
//! Incoming payloads keep every field as a raw JSON value so presence can be checked
//! the same way for strings and numbers; see [`crate::server::util::field`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub gravity: String,
    pub population: String,
    pub terrain: String,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            gravity: planet.gravity,
            population: planet.population,
            terrain: planet.terrain,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PlanetPayloadDto {
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub gravity: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub population: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub terrain: Option<Value>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PlanetCreatedDto {
    pub message: String,
    #[serde(rename = "Planet")]
    pub planet: PlanetDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PlanetUpdatedDto {
    pub message: String,
    #[serde(rename = "Planeta actualizado")]
    pub planet: PlanetDto,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub birth_year: String,
    pub mass: String,
}

impl From<entity::person::Model> for PersonDto {
    fn from(person: entity::person::Model) -> Self {
        Self {
            id: person.id,
            name: person.name,
            gender: person.gender,
            birth_year: person.birth_year,
            mass: person.mass,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PersonPayloadDto {
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub gender: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub birth_year: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub mass: Option<Value>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PersonCreatedDto {
    pub message: String,
    #[serde(rename = "People")]
    pub person: PersonDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PersonUpdatedDto {
    pub message: String,
    #[serde(rename = "Persona actualizada")]
    pub person: PersonDto,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
}

impl From<entity::vehicle::Model> for VehicleDto {
    fn from(vehicle: entity::vehicle::Model) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            model: vehicle.model,
            manufacturer: vehicle.manufacturer,
            cost_in_credits: vehicle.cost_in_credits,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct VehiclePayloadDto {
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub model: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub manufacturer: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub cost_in_credits: Option<Value>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct VehicleCreatedDto {
    pub message: String,
    #[serde(rename = "Vehicle")]
    pub vehicle: VehicleDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct VehicleUpdatedDto {
    pub message: String,
    #[serde(rename = "Vehiculo actualizado")]
    pub vehicle: VehicleDto,
}

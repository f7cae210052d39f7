use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// A user as exposed by the API, the password is never serialized
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    pub favoritos: Vec<FavoriteDto>,
}

impl UserDto {
    pub fn new(user: entity::user::Model, favorites: Vec<entity::favorite::Model>) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
            favoritos: favorites.into_iter().map(FavoriteDto::from).collect(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UserPayloadDto {
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub password: Option<Value>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserCreatedDto {
    pub message: String,
    #[serde(rename = "User")]
    pub user: UserDto,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub people_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub vehicle_id: Option<i32>,
}

impl From<entity::favorite::Model> for FavoriteDto {
    fn from(favorite: entity::favorite::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            people_id: favorite.people_id,
            planet_id: favorite.planet_id,
            vehicle_id: favorite.vehicle_id,
        }
    }
}

/// Identifies the user adding or removing a favorite
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct FavoritePayloadDto {
    #[schema(value_type = Option<i32>)]
    pub user_id: Option<Value>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct FavoritesDto {
    #[serde(rename = "Favoritos")]
    pub favoritos: Vec<FavoriteDto>,
}

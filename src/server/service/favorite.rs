use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::{
    model::user::FavoritePayloadDto,
    server::{
        data::{
            favorite::FavoriteRepository, person::PersonRepository, planet::PlanetRepository,
            user::UserRepository, vehicle::VehicleRepository,
        },
        error::{catalog::CatalogError, Error},
        model::favorite::FavoriteTarget,
        util::field::required_id,
    },
};

static USER_NOT_FOUND: &str = "No se ha encontrado usuario";
static FAVORITE_NOT_FOUND: &str = "No se ha encontrado favorito";

/// Service for adding & removing catalog entries from a user's favorites.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds the target to the favorites of the user in the payload
    ///
    /// The target is checked before the user, so a request naming both a missing
    /// target & a missing user fails with the target's message.
    pub async fn add(
        &self,
        target: FavoriteTarget,
        payload: FavoritePayloadDto,
    ) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        if !target_exists(&txn, target).await? {
            return Err(CatalogError::NotFound(target.missing_message()).into());
        }

        let user_id =
            required_id(payload.user_id.as_ref()).ok_or(CatalogError::NotFound(USER_NOT_FOUND))?;

        if UserRepository::new(&txn).get(user_id).await?.is_none() {
            return Err(CatalogError::NotFound(USER_NOT_FOUND).into());
        }

        let favorite = FavoriteRepository::new(&txn).create(user_id, target).await?;
        txn.commit().await?;

        tracing::debug!(
            favorite_id = favorite.id,
            user_id,
            "Added favorite {:?}",
            target
        );

        Ok(())
    }

    /// Removes the favorite linking the user in the payload to the target
    pub async fn remove(
        &self,
        target: FavoriteTarget,
        payload: FavoritePayloadDto,
    ) -> Result<(), Error> {
        let user_id = required_id(payload.user_id.as_ref())
            .ok_or(CatalogError::NotFound(FAVORITE_NOT_FOUND))?;

        let txn = self.db.begin().await?;
        let favorite_repo = FavoriteRepository::new(&txn);

        let favorite = favorite_repo
            .find(user_id, target)
            .await?
            .ok_or(CatalogError::NotFound(FAVORITE_NOT_FOUND))?;

        favorite_repo.delete(favorite.id).await?;
        txn.commit().await?;

        Ok(())
    }
}

async fn target_exists(txn: &DatabaseTransaction, target: FavoriteTarget) -> Result<bool, DbErr> {
    let exists = match target {
        FavoriteTarget::Person(id) => PersonRepository::new(txn).get(id).await?.is_some(),
        FavoriteTarget::Planet(id) => PlanetRepository::new(txn).get(id).await?.is_some(),
        FavoriteTarget::Vehicle(id) => VehicleRepository::new(txn).get(id).await?.is_some(),
    };

    Ok(exists)
}

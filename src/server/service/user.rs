use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::{FavoriteDto, UserDto, UserPayloadDto},
    server::{
        data::{favorite::FavoriteRepository, user::UserRepository},
        error::{catalog::CatalogError, Error},
        util::field::required,
    },
};

static NOT_FOUND: &str = "No se ha encontrado";
static USER_NOT_FOUND: &str = "No se ha encontrado usuario";
static USER_EXISTS: &str = "El usuario ya existe";
static MISSING_FIELDS: &str = "email and password are required";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every user along with their favorites
    pub async fn list(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all_with_favorites().await?;

        if users.is_empty() {
            return Err(CatalogError::NotFound(NOT_FOUND).into());
        }

        Ok(users
            .into_iter()
            .map(|(user, favorites)| UserDto::new(user, favorites))
            .collect())
    }

    /// Registers a new user, storing an Argon2 hash of the password
    pub async fn create(&self, payload: UserPayloadDto) -> Result<UserDto, Error> {
        let (Some(email), Some(password)) = (
            required(payload.email.as_ref()),
            required(payload.password.as_ref()),
        ) else {
            return Err(CatalogError::MissingFields(MISSING_FIELDS).into());
        };

        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(CatalogError::AlreadyExists(USER_EXISTS).into());
        }

        let password_hash = hash_password(&password).map_err(Error::PasswordHashError)?;

        let user = user_repo
            .create(email, password_hash, payload.is_active.unwrap_or(true))
            .await?;
        txn.commit().await?;

        tracing::debug!(user_id = user.id, "Created user {}", user.email);

        Ok(UserDto::new(user, Vec::new()))
    }

    /// Gets the favorites of a user, failing with NotFound for an unknown user
    pub async fn favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        if UserRepository::new(self.db).get(user_id).await?.is_none() {
            return Err(CatalogError::NotFound(USER_NOT_FOUND).into());
        }

        let favorites = FavoriteRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok(favorites.into_iter().map(FavoriteDto::from).collect())
    }
}

fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    mod create {
        use holocron_test_utils::prelude::*;
        use serde_json::json;

        use crate::{
            model::user::UserPayloadDto,
            server::{
                data::user::UserRepository,
                error::{catalog::CatalogError, Error},
                service::user::UserService,
            },
        };

        /// Expect the password to be stored hashed and the account active by default
        #[tokio::test]
        async fn stores_hashed_password() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;

            let user = UserService::new(&test.state.db)
                .create(UserPayloadDto {
                    email: Some(json!("leia@alderaan.gov")),
                    password: Some(json!("help-me-obi-wan")),
                    is_active: None,
                })
                .await
                .unwrap();

            assert!(user.is_active);
            assert!(user.favoritos.is_empty());

            let stored = UserRepository::new(&test.state.db)
                .get(user.id)
                .await?
                .unwrap();
            assert_ne!(stored.password, "help-me-obi-wan");
            assert!(stored.password.starts_with("$argon2"));

            Ok(())
        }

        /// Expect AlreadyExists for an email that is already registered
        #[tokio::test]
        async fn fails_for_duplicate_email() -> Result<(), TestError> {
            let mut test = test_setup_with_catalog_tables!()?;
            let leia = test.user().insert_user("leia@alderaan.gov").await?;

            let result = UserService::new(&test.state.db)
                .create(UserPayloadDto {
                    email: Some(json!("leia@alderaan.gov")),
                    password: Some(json!("password")),
                    is_active: Some(false),
                })
                .await;

            assert!(matches!(
                result,
                Err(Error::CatalogError(CatalogError::AlreadyExists(_)))
            ));
            let stored = UserRepository::new(&test.state.db)
                .find_by_email("leia@alderaan.gov")
                .await?;
            assert_eq!(stored, Some(leia));

            Ok(())
        }

        /// Expect MissingFields when no password is provided
        #[tokio::test]
        async fn fails_for_missing_password() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;

            let result = UserService::new(&test.state.db)
                .create(UserPayloadDto {
                    email: Some(json!("leia@alderaan.gov")),
                    ..Default::default()
                })
                .await;

            assert!(matches!(
                result,
                Err(Error::CatalogError(CatalogError::MissingFields(_)))
            ));

            Ok(())
        }
    }

    mod list {
        use holocron_test_utils::prelude::*;

        use crate::server::{
            error::{catalog::CatalogError, Error},
            service::user::UserService,
        };

        /// Expect each user to be listed with their own favorites
        #[tokio::test]
        async fn lists_users_with_favorites() -> Result<(), TestError> {
            let mut test = test_setup_with_catalog_tables!()?;
            let luke = test.user().insert_user("luke@tatooine.net").await?;
            let leia = test.user().insert_user("leia@alderaan.gov").await?;
            let tatooine = test.catalog().insert_planet("Tatooine").await?;
            let favorite = test
                .user()
                .insert_favorite_planet(luke.id, tatooine.id)
                .await?;

            let users = UserService::new(&test.state.db).list().await.unwrap();

            assert_eq!(users.len(), 2);
            assert_eq!(users[0].id, luke.id);
            assert_eq!(users[0].favoritos.len(), 1);
            assert_eq!(users[0].favoritos[0].id, favorite.id);
            assert_eq!(users[1].id, leia.id);
            assert!(users[1].favoritos.is_empty());

            Ok(())
        }

        /// Expect NotFound when no users exist
        #[tokio::test]
        async fn fails_when_no_users_exist() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;

            let result = UserService::new(&test.state.db).list().await;

            assert!(matches!(
                result,
                Err(Error::CatalogError(CatalogError::NotFound(_)))
            ));

            Ok(())
        }
    }

    mod favorites {
        use holocron_test_utils::prelude::*;

        use crate::server::{
            error::{catalog::CatalogError, Error},
            service::user::UserService,
        };

        /// Expect only the favorites of the requested user
        #[tokio::test]
        async fn returns_favorites_of_user() -> Result<(), TestError> {
            let mut test = test_setup_with_catalog_tables!()?;
            let luke = test.user().insert_user("luke@tatooine.net").await?;
            let leia = test.user().insert_user("leia@alderaan.gov").await?;
            let yoda = test.catalog().insert_person("Yoda").await?;
            let crawler = test.catalog().insert_vehicle("Sand Crawler").await?;
            test.user().insert_favorite_person(leia.id, yoda.id).await?;
            let favorite = test
                .user()
                .insert_favorite_vehicle(luke.id, crawler.id)
                .await?;

            let favorites = UserService::new(&test.state.db)
                .favorites(luke.id)
                .await
                .unwrap();

            assert_eq!(favorites.len(), 1);
            assert_eq!(favorites[0].id, favorite.id);
            assert_eq!(favorites[0].vehicle_id, Some(crawler.id));

            Ok(())
        }

        /// Expect NotFound for a user that does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_user() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;

            let result = UserService::new(&test.state.db).favorites(2).await;

            assert!(matches!(
                result,
                Err(Error::CatalogError(CatalogError::NotFound(_)))
            ));

            Ok(())
        }
    }
}

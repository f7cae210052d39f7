use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::catalog::{PersonDto, PersonPayloadDto},
    server::{
        data::person::{PersonFields, PersonRepository},
        error::{catalog::CatalogError, Error},
        util::field::required,
    },
};

static NOT_FOUND: &str = "No se ha encontrado";
static PERSON_NOT_FOUND: &str = "Persona no encontrada";
static PERSON_EXISTS: &str = "La persona ya existe";
static MISSING_FIELDS: &str = "name, gender, birth_year and mass are required";

/// Service for creating, reading, updating & deleting people.
pub struct PersonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonService<'a> {
    /// Creates a new instance of [`PersonService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every person, failing with NotFound when there are none
    pub async fn list(&self) -> Result<Vec<PersonDto>, Error> {
        let people = PersonRepository::new(self.db).get_all().await?;

        if people.is_empty() {
            return Err(CatalogError::NotFound(NOT_FOUND).into());
        }

        Ok(people.into_iter().map(PersonDto::from).collect())
    }

    pub async fn get(&self, person_id: i32) -> Result<PersonDto, Error> {
        let person = PersonRepository::new(self.db)
            .get(person_id)
            .await?
            .ok_or(CatalogError::NotFound(NOT_FOUND))?;

        Ok(person.into())
    }

    pub async fn create(&self, payload: PersonPayloadDto) -> Result<PersonDto, Error> {
        let fields = person_fields(&payload).ok_or(CatalogError::MissingFields(MISSING_FIELDS))?;

        let txn = self.db.begin().await?;
        let person_repo = PersonRepository::new(&txn);

        if person_repo.find_by_name(&fields.name, None).await?.is_some() {
            return Err(CatalogError::AlreadyExists(PERSON_EXISTS).into());
        }

        let person = person_repo.create(fields).await?;
        txn.commit().await?;

        tracing::debug!(person_id = person.id, "Created person {}", person.name);

        Ok(person.into())
    }

    /// Replaces every field of an existing person
    pub async fn update(
        &self,
        person_id: i32,
        payload: PersonPayloadDto,
    ) -> Result<PersonDto, Error> {
        let txn = self.db.begin().await?;
        let person_repo = PersonRepository::new(&txn);

        if person_repo.get(person_id).await?.is_none() {
            return Err(CatalogError::NotFound(PERSON_NOT_FOUND).into());
        }

        let fields = person_fields(&payload).ok_or(CatalogError::MissingFields(MISSING_FIELDS))?;

        if person_repo
            .find_by_name(&fields.name, Some(person_id))
            .await?
            .is_some()
        {
            return Err(CatalogError::AlreadyExists(PERSON_EXISTS).into());
        }

        let person = person_repo
            .update(person_id, fields)
            .await?
            .ok_or(CatalogError::NotFound(PERSON_NOT_FOUND))?;
        txn.commit().await?;

        Ok(person.into())
    }

    pub async fn delete(&self, person_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let person_repo = PersonRepository::new(&txn);

        if person_repo.get(person_id).await?.is_none() {
            return Err(CatalogError::NotFound(PERSON_NOT_FOUND).into());
        }

        person_repo.delete(person_id).await?;
        txn.commit().await?;

        Ok(())
    }
}

fn person_fields(payload: &PersonPayloadDto) -> Option<PersonFields> {
    Some(PersonFields {
        name: required(payload.name.as_ref())?,
        gender: required(payload.gender.as_ref())?,
        birth_year: required(payload.birth_year.as_ref())?,
        mass: required(payload.mass.as_ref())?,
    })
}

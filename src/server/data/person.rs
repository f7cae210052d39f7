use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

/// Mutable fields of a person, all of them required.
#[derive(Clone, Debug, PartialEq)]
pub struct PersonFields {
    pub name: String,
    pub gender: String,
    pub birth_year: String,
    pub mass: String,
}

pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    /// Creates a new instance of [`PersonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new person
    pub async fn create(&self, fields: PersonFields) -> Result<entity::person::Model, DbErr> {
        let person = entity::person::ActiveModel {
            name: ActiveValue::Set(fields.name),
            gender: ActiveValue::Set(fields.gender),
            birth_year: ActiveValue::Set(fields.birth_year),
            mass: ActiveValue::Set(fields.mass),
            ..Default::default()
        };

        person.insert(self.db).await
    }

    pub async fn get(&self, person_id: i32) -> Result<Option<entity::person::Model>, DbErr> {
        entity::prelude::Person::find_by_id(person_id)
            .one(self.db)
            .await
    }

    /// Gets every person ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::person::Model>, DbErr> {
        entity::prelude::Person::find()
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a person by name, ignoring the person with ID `excluding` if provided
    pub async fn find_by_name(
        &self,
        name: &str,
        excluding: Option<i32>,
    ) -> Result<Option<entity::person::Model>, DbErr> {
        let mut query =
            entity::prelude::Person::find().filter(entity::person::Column::Name.eq(name));

        if let Some(person_id) = excluding {
            query = query.filter(entity::person::Column::Id.ne(person_id));
        }

        query.one(self.db).await
    }

    /// Overwrites every mutable field of a person
    ///
    /// Returns `Ok(None)` if the person does not exist.
    pub async fn update(
        &self,
        person_id: i32,
        fields: PersonFields,
    ) -> Result<Option<entity::person::Model>, DbErr> {
        let person = match entity::prelude::Person::find_by_id(person_id)
            .one(self.db)
            .await?
        {
            Some(person) => person,
            None => return Ok(None),
        };

        let mut person_am = person.into_active_model();
        person_am.name = ActiveValue::Set(fields.name);
        person_am.gender = ActiveValue::Set(fields.gender);
        person_am.birth_year = ActiveValue::Set(fields.birth_year);
        person_am.mass = ActiveValue::Set(fields.mass);

        let person = person_am.update(self.db).await?;

        Ok(Some(person))
    }

    /// Deletes a person
    ///
    /// Planets & vehicles linked to the person are kept with their link cleared, favorites
    /// of the person are removed. Check [`DeleteResult::rows_affected`] to confirm deletion.
    pub async fn delete(&self, person_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Person::delete_by_id(person_id)
            .exec(self.db)
            .await
    }
}

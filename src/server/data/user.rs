use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    LoaderTrait, QueryFilter, QueryOrder,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// # Arguments
    /// - `email` - Unique email address of the user
    /// - `password_hash` - PHC string of the user's hashed password
    /// - `is_active` - Whether the account is active
    pub async fn create(
        &self,
        email: String,
        password_hash: String,
        is_active: bool,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(password_hash),
            is_active: ActiveValue::Set(is_active),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Gets every user ordered by ID along with their favorites
    pub async fn get_all_with_favorites(
        &self,
    ) -> Result<Vec<(entity::user::Model, Vec<entity::favorite::Model>)>, DbErr> {
        let users = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        let favorites = users
            .load_many(
                entity::prelude::Favorite::find().order_by_asc(entity::favorite::Column::Id),
                self.db,
            )
            .await?;

        Ok(users.into_iter().zip(favorites).collect())
    }
}

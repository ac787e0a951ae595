use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user::{entities::User, ports::UserRepository, value_objects::CreateUserRequest},
    },
    entity::users::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_insert_error(e: DbErr) -> CoreError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
        return CoreError::UserExists;
    }

    error!("Failed to create user: {}", e);
    CoreError::InternalServerError
}

impl UserRepository for PostgresUserRepository {
    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        let user = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by email: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<User, CoreError> {
        let user = User::new(request.email, request.name, Some(request.password_hash));

        let active_model = ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            name: Set(user.name.clone()),
            password: Set(user.password_hash.clone()),
            created_at: Set(user.created_at.fixed_offset()),
            updated_at: Set(user.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(map_insert_error)?;

        Ok(User::from(created))
    }

    async fn update_password(&self, user_id: Uuid, password_hash: String) -> Result<(), CoreError> {
        let active_model = ActiveModel {
            id: Set(user_id),
            password: Set(Some(password_hash)),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => CoreError::UserNotFound,
            e => {
                error!("Failed to update user password: {}", e);
                CoreError::InternalServerError
            }
        })?;

        Ok(())
    }
}

use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserCreate};
use crate::utils::token::{self, encrypt, new_secret};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Directory lookup: does this email belong to an account?
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.database_connection)
            .await?)
    }

    /// Signup: create user. Emails are stored lowercased so invites and
    /// logins agree on identity.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<Uuid, AppError> {
        let email = payload.email.trim().to_lowercase();
        if self.user_exists_by_email(&email).await? {
            return Err(AppError::AlreadyExists);
        }
        let uid = token::new_id();
        let now = Utc::now();

        User::insert(UserActive {
            id: Set(uid),
            name: Set(payload.name),
            email: Set(email),
            auth_hash: Set(payload.auth_hash),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.database_connection)
        .await?;

        Ok(uid)
    }

    /// Rotate the token secret; returns the new plaintext secret for the
    /// caller to hand out once.
    pub async fn regenerate_user_token(&self, user_id: &Uuid) -> Result<String, AppError> {
        let user = self.get_user_by_id(user_id).await?;
        let secret = new_secret();
        let encrypted =
            encrypt(&secret).map_err(|e| AppError::Internal(format!("hashing failed: {e}")))?;
        let mut am: UserActive = user.into();
        am.auth_hash = Set(encrypted);
        am.updated_at = Set(Utc::now());
        am.update(&self.database_connection).await?;
        Ok(secret)
    }
}

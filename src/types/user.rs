use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct RUserCreate {
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize)]
pub struct UserCreateRes {
    pub id: uuid::Uuid,
    pub token: String,
}

#[derive(Serialize, Deserialize)]
pub struct UserRegenerateTokenRes {
    pub token: String,
}

/// What the db layer needs to persist a new account. The plaintext token
/// never reaches the database, only its argon2 hash.
pub struct DBUserCreate {
    pub name: String,
    pub email: String,
    pub auth_hash: String,
}

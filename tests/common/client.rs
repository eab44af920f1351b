use actix_web::{web, App};
use rifa_api::{
    db::postgres_service::PostgresService,
    types::user::DBUserCreate,
    utils::token::{construct_token, encrypt, new_secret},
};
use std::sync::Arc;
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(rifa_api::routes::configure_routes)
    }

    /// Create an account straight through the db layer and return its id
    /// plus a usable bearer token.
    pub async fn create_test_user(&self, name: &str, email: &str) -> (Uuid, String) {
        let secret = new_secret();
        let encrypted = encrypt(&secret).expect("Failed to encrypt token");
        let user_id = self
            .db
            .create_user(DBUserCreate {
                name: name.to_string(),
                email: email.to_string(),
                auth_hash: encrypted,
            })
            .await
            .expect("Failed to create test user");
        (user_id, construct_token(&user_id, &secret))
    }

    pub async fn create_raffle_owned_by(&self, owner_id: Uuid) -> Uuid {
        self.db
            .create_raffle(owner_id, super::test_data::sample_raffle())
            .await
            .expect("Failed to create test raffle")
    }

    /// Full invite + accept round trip through the db layer, leaving the
    /// target as an active member.
    pub async fn add_member_via_invite(
        &self,
        raffle_id: Uuid,
        inviter_id: Uuid,
        target_email: &str,
        target_id: Uuid,
        role: entity::sea_orm_active_enums::TeamRole,
    ) -> Uuid {
        let invite = self
            .db
            .create_invite(raffle_id, inviter_id, target_email, role)
            .await
            .expect("Failed to create invite");
        self.db
            .accept_invite(invite.id, target_id)
            .await
            .expect("Failed to accept invite");
        self.db
            .find_membership(raffle_id, target_id)
            .await
            .expect("Failed to look up membership")
            .expect("Membership missing after accept")
            .id
    }
}

mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use entity::sea_orm_active_enums::{InviteStatus, TeamRole};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

#[actix_web::test]
async fn accepting_creates_membership_with_invited_role() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (alice_id, _) = client.create_test_user("Alice", "alice@test.com").await;
    let (bob_id, bob_token) = client.create_test_user("Bob", "bob@test.com").await;
    let raffle_id = client.create_raffle_owned_by(alice_id).await;

    let invite = ctx
        .db
        .create_invite(raffle_id, alice_id, "bob@test.com", TeamRole::Manager)
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/invite/{}/accept", invite.id))
        .insert_header(("Authorization", format!("Bearer {}", bob_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let membership = ctx
        .db
        .find_membership(raffle_id, bob_id)
        .await
        .unwrap()
        .expect("membership should exist after accept");
    assert_eq!(membership.role, TeamRole::Manager);

    let stored = ctx.db.get_invite(invite.id).await.unwrap();
    assert_eq!(stored.status, InviteStatus::Accepted);
}

#[actix_web::test]
async fn only_the_invitee_can_accept_or_decline() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (alice_id, _) = client.create_test_user("Alice", "alice@test.com").await;
    client.create_test_user("Bob", "bob@test.com").await;
    let (_carol_id, carol_token) = client.create_test_user("Carol", "carol@test.com").await;
    let raffle_id = client.create_raffle_owned_by(alice_id).await;

    let invite = ctx
        .db
        .create_invite(raffle_id, alice_id, "bob@test.com", TeamRole::Vendor)
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/invite/{}/accept", invite.id))
        .insert_header(("Authorization", format!("Bearer {}", carol_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri(&format!("/invite/{}/decline", invite.id))
        .insert_header(("Authorization", format!("Bearer {}", carol_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Untouched by the failed attempts.
    let stored = ctx.db.get_invite(invite.id).await.unwrap();
    assert_eq!(stored.status, InviteStatus::Pending);
}

#[actix_web::test]
async fn second_accept_conflicts_and_membership_stays_single() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (alice_id, _) = client.create_test_user("Alice", "alice@test.com").await;
    let (bob_id, bob_token) = client.create_test_user("Bob", "bob@test.com").await;
    let raffle_id = client.create_raffle_owned_by(alice_id).await;

    let invite = ctx
        .db
        .create_invite(raffle_id, alice_id, "bob@test.com", TeamRole::Vendor)
        .await
        .unwrap();
    ctx.db.accept_invite(invite.id, bob_id).await.unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/invite/{}/accept", invite.id))
        .insert_header(("Authorization", format!("Bearer {}", bob_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_STATE");

    let memberships = entity::membership::Entity::find()
        .filter(entity::membership::Column::RaffleId.eq(raffle_id))
        .filter(entity::membership::Column::UserId.eq(bob_id))
        .all(&ctx.db.database_connection)
        .await
        .unwrap();
    assert_eq!(memberships.len(), 1);
}

#[actix_web::test]
async fn accept_converges_when_membership_already_exists() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let (alice_id, _) = client.create_test_user("Alice", "alice@test.com").await;
    let (bob_id, _) = client.create_test_user("Bob", "bob@test.com").await;
    let raffle_id = client.create_raffle_owned_by(alice_id).await;

    let invite = ctx
        .db
        .create_invite(raffle_id, alice_id, "bob@test.com", TeamRole::Vendor)
        .await
        .unwrap();

    // Simulate a concurrent path having inserted the membership first.
    entity::membership::Entity::insert(entity::membership::ActiveModel {
        id: Set(uuid::Uuid::new_v4()),
        raffle_id: Set(raffle_id),
        user_id: Set(bob_id),
        role: Set(TeamRole::Vendor),
        created_at: Set(chrono::Utc::now()),
    })
    .exec(&ctx.db.database_connection)
    .await
    .unwrap();

    ctx.db.accept_invite(invite.id, bob_id).await.unwrap();

    let stored = ctx.db.get_invite(invite.id).await.unwrap();
    assert_eq!(stored.status, InviteStatus::Accepted);

    let memberships = entity::membership::Entity::find()
        .filter(entity::membership::Column::RaffleId.eq(raffle_id))
        .filter(entity::membership::Column::UserId.eq(bob_id))
        .all(&ctx.db.database_connection)
        .await
        .unwrap();
    assert_eq!(memberships.len(), 1);
}

#[actix_web::test]
async fn decline_is_idempotent_and_blocks_accept() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (alice_id, _) = client.create_test_user("Alice", "alice@test.com").await;
    let (bob_id, bob_token) = client.create_test_user("Bob", "bob@test.com").await;
    let raffle_id = client.create_raffle_owned_by(alice_id).await;

    let invite = ctx
        .db
        .create_invite(raffle_id, alice_id, "bob@test.com", TeamRole::Vendor)
        .await
        .unwrap();

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri(&format!("/invite/{}/decline", invite.id))
            .insert_header(("Authorization", format!("Bearer {}", bob_token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let stored = ctx.db.get_invite(invite.id).await.unwrap();
    assert_eq!(stored.status, InviteStatus::Declined);

    // Declined invitations cannot be accepted.
    let req = test::TestRequest::post()
        .uri(&format!("/invite/{}/accept", invite.id))
        .insert_header(("Authorization", format!("Bearer {}", bob_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    assert!(ctx
        .db
        .find_membership(raffle_id, bob_id)
        .await
        .unwrap()
        .is_none());
}

#[actix_web::test]
async fn pending_invites_show_up_on_the_invitee_dashboard() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (alice_id, _) = client.create_test_user("Alice", "alice@test.com").await;
    let (bob_id, bob_token) = client.create_test_user("Bob", "bob@test.com").await;
    let raffle_id = client.create_raffle_owned_by(alice_id).await;

    let invite = ctx
        .db
        .create_invite(raffle_id, alice_id, "bob@test.com", TeamRole::Vendor)
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/invite")
        .insert_header(("Authorization", format!("Bearer {}", bob_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let list = body.as_array().expect("expected an array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["invite_id"], serde_json::to_value(invite.id).unwrap());
    assert_eq!(list[0]["raffle_title"], "iPhone 15 Pro Max");
    assert_eq!(list[0]["owner_email"], "alice@test.com");

    // Accepted invites disappear from the list.
    ctx.db.accept_invite(invite.id, bob_id).await.unwrap();
    let req = test::TestRequest::get()
        .uri("/invite")
        .insert_header(("Authorization", format!("Bearer {}", bob_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body.as_array().unwrap().is_empty());
}

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::RTeamInvite;
use crate::utils::webutils::acting_user;
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/*
Invites never send email. The invited account sees the invitation on its
own dashboard (GET /invite) and accepts or declines from there, which is
how the product has always worked.
*/

#[post("/{id}/team/invites")]
async fn invite(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    data: web::Json<RTeamInvite>,
    tok: BearerAuth,
) -> ApiResult<entity::invitation::Model> {
    let inviter_id = acting_user(&tok)?;
    let raffle_id = path.into_inner();

    let invitation = db
        .create_invite(raffle_id, inviter_id, &data.email, data.role)
        .await?;
    info!(%raffle_id, invite_id = %invitation.id, "invitation created");

    Ok(ApiResponse::Created(invitation))
}

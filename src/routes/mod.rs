use crate::utils::webutils::validate_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod health;
pub mod invite;
pub mod public;
pub mod raffle;
pub mod team;
pub mod ticket;
pub mod user;
pub mod validate;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let auth = HttpAuthentication::bearer(validate_token);

    cfg.service(web::scope("/health").service(health::health));

    cfg.service(
        web::scope("/auth")
            .service(user::create::signup)
            .service(
                web::scope("/validate")
                    .wrap(auth.clone())
                    .service(validate::validate),
            )
            .service(
                web::scope("/regenerate")
                    .wrap(auth.clone())
                    .service(user::regenerate::regenerate),
            ),
    );

    cfg.service(
        web::scope("/raffle")
            .wrap(auth.clone())
            .service(raffle::create::create)
            .service(raffle::list::list_mine)
            .service(raffle::get::get_raffle)
            .service(raffle::update::update)
            .service(raffle::delete::delete)
            .service(team::members::members)
            .service(team::invites::invites)
            .service(team::invite::invite)
            .service(ticket::sales::sales),
    );

    cfg.service(
        web::scope("/team")
            .wrap(auth.clone())
            .service(team::remove_member::remove_member)
            .service(team::set_role::set_role),
    );

    cfg.service(
        web::scope("/invite")
            .wrap(auth.clone())
            .service(invite::mine::mine)
            .service(invite::accept::accept)
            .service(invite::decline::decline)
            .service(invite::cancel::cancel),
    );

    cfg.service(
        web::scope("/ticket")
            .wrap(auth)
            .service(ticket::mark_paid::mark_paid),
    );

    // Buyer-facing surface: no account needed to view a raffle or buy a
    // number.
    cfg.service(
        web::scope("/public")
            .service(public::raffle::get_raffle)
            .service(public::raffle::numbers)
            .service(public::purchase::purchase),
    );
}

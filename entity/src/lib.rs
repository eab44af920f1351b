pub mod invitation;
pub mod membership;
pub mod raffle;
pub mod sea_orm_active_enums;
pub mod ticket;
pub mod user;

/*
 A raffle always has exactly one owner (raffle.owner_id) who is never a
 membership row. Vendors and managers join through invitations:
 owner/manager creates an invitation for an email, the invited user
 accepts it from their dashboard and becomes a membership row. Tickets
 reference the vendor who sold them, or nobody for public sales.
 */

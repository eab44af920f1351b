pub mod invite;
pub mod invites;
pub mod members;
pub mod remove_member;
pub mod set_role;

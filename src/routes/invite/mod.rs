pub mod accept;
pub mod cancel;
pub mod decline;
pub mod mine;

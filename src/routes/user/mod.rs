pub mod create;
pub mod regenerate;

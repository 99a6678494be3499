pub mod auth;
pub mod trace;

pub mod get_session;
pub mod login;

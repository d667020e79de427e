pub mod create_session;
pub mod delete_session;
pub mod get_session;
pub mod reset_session;

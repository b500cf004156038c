pub mod create_user;
pub mod get_user;
pub mod get_user_by_email;
pub mod update_profile;

pub mod about;
pub mod error_page;
pub mod home_page;
pub mod login;
pub mod profile;
pub mod user_friends;
pub mod user_posts;

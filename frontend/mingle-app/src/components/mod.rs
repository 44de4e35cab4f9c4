pub mod loading;
pub mod user_card;

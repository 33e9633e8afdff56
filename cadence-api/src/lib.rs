pub mod constant;
pub mod health;
pub mod history;
pub mod playlist;
pub mod song;
pub mod user;

pub mod history;
pub mod playlist;
pub mod song;
pub mod user;

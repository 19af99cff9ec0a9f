pub mod category;
pub mod game;

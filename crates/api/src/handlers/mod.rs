pub mod categories;
pub mod games;
pub mod home;
pub mod search;

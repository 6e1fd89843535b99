pub mod interview;
pub mod user;

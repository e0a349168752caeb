pub mod car;
pub mod people;

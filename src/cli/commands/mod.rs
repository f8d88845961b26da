pub mod list;
pub mod plate;

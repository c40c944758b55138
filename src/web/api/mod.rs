pub mod constellation;
pub mod error;

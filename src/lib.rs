pub mod driver;
pub mod translate;

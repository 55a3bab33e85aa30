pub mod core;
pub mod entity;
pub mod records;

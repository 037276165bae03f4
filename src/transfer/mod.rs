mod entity;
mod repo;

pub use entity::*;

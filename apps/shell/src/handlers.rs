pub mod builder;
pub mod factory;
pub mod singleton;

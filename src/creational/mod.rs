//! Creational patterns: who builds an object, and how.

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod singleton;

//! Behavioural patterns: how objects hand work to each other.

pub mod chain;
pub mod command;
pub mod iterator;
pub mod observer;
pub mod prototype;
pub mod state;
pub mod strategy;
pub mod template_method;

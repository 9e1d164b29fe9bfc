//! # Design Patterns Catalogue
//!
//! Runnable, self-contained demonstrations of the classic object-oriented
//! design patterns, expressed with traits, enums and ownership rather than
//! class hierarchies.
//!
//! ## Behavioural
//! - Chain of Responsibility (owned successor links)
//! - Command (remote control over boxed commands)
//! - Iterator (cursor plus `std::iter::Iterator`)
//! - Observer (subscription handles)
//! - Prototype (`Clone` and a prototype registry)
//! - State (closed enum of player states)
//! - Strategy (cart generic over its payment method)
//! - Template Method (provided trait method as the skeleton)
//!
//! ## Creational
//! - Abstract Factory, Builder (with director), Factory Method
//! - Singleton (caller-owned instance registry, no globals)
//!
//! ## Structural
//! - Adapter, Bridge, Composite, Decorator, Facade
//! - Flyweight (caller-owned pool), Proxy (lazy backend)
//!
//! Run one demo with `cargo run --bin <pattern>` (for example
//! `cargo run --bin state`), or all of them with
//! `cargo run --bin all_patterns [slug ...]`.

pub mod behavioural;
pub mod catalogue;
pub mod config;
pub mod console;
pub mod creational;
pub mod error;
pub mod logging;
pub mod runner;
pub mod structural;

pub use catalogue::{Category, Pattern};
pub use config::DemoConfig;
pub use console::Transcript;
pub use error::PatternError;

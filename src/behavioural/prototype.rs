// Prototype: new objects are copies of an existing exemplar.

use std::collections::HashMap;
use std::fmt;

use crate::console::Transcript;
use crate::error::PatternError;

/// Anything that can hand out an independent copy of itself.
pub trait Prototype: Clone {
    fn prototype(&self) -> Self {
        self.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheep {
    pub name: String,
    pub category: String,
}

impl Sheep {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }

    /// Copy with a new name; every other field comes from `self`.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        let mut copy = self.prototype();
        copy.name = name.into();
        copy
    }
}

impl Prototype for Sheep {}

impl fmt::Display for Sheep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

/// Named exemplars that new instances are spawned from.
#[derive(Debug, Default)]
pub struct PrototypeRegistry<T: Prototype> {
    exemplars: HashMap<String, T>,
}

impl<T: Prototype> PrototypeRegistry<T> {
    pub fn new() -> Self {
        Self {
            exemplars: HashMap::new(),
        }
    }

    pub fn register(&mut self, key: impl Into<String>, exemplar: T) {
        self.exemplars.insert(key.into(), exemplar);
    }

    pub fn spawn(&self, key: &str) -> Result<T, PatternError> {
        self.exemplars
            .get(key)
            .map(T::prototype)
            .ok_or_else(|| PatternError::UnknownPrototype(key.to_string()))
    }
}

pub fn demo(out: &mut Transcript) {
    let original = Sheep::new("Dolly", "Merino");
    out.say(format!("Original Sheep: {original}"));

    let cloned = original.renamed("Lily");
    out.say(format!("Cloned Sheep: {cloned}"));

    let mut registry = PrototypeRegistry::new();
    registry.register("merino", original);
    match registry.spawn("merino") {
        Ok(sheep) => out.say(format!("Spawned from registry: {sheep}")),
        Err(err) => out.error(err.to_string()),
    }
    if let Err(err) = registry.spawn("suffolk") {
        out.error(err.to_string());
    }
}

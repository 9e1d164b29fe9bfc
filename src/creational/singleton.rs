// Singleton without a global: one instance per type, owned by the caller's
// registry and handed to consumers by reference.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::console::Transcript;

#[derive(Default)]
pub struct InstanceRegistry {
    instances: HashMap<TypeId, Rc<dyn Any>>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<T: Any>(&self) -> Option<Rc<T>> {
        self.instances
            .get(&TypeId::of::<T>())
            .and_then(|instance| Rc::clone(instance).downcast::<T>().ok())
    }

    /// Returns the registered `T`, creating it with `init` on first request.
    pub fn get_or_init<T: Any>(&mut self, init: impl FnOnce() -> T) -> Rc<T> {
        if let Some(existing) = self.get::<T>() {
            return existing;
        }

        let instance = Rc::new(init());
        debug!(type_name = std::any::type_name::<T>(), "creating single instance");
        self.instances
            .insert(TypeId::of::<T>(), Rc::clone(&instance) as Rc<dyn Any>);
        instance
    }

    pub fn instance<T: Any + Default>(&mut self) -> Rc<T> {
        self.get_or_init(T::default)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct AppSettings {
    pub app_name: String,
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            app_name: "design-patterns".to_string(),
            debug_mode: cfg!(debug_assertions),
        }
    }
}

/// A consumer that asks the registry instead of reaching for a global.
pub struct ReportService {
    settings: Rc<AppSettings>,
}

impl ReportService {
    pub fn new(registry: &mut InstanceRegistry) -> Self {
        Self {
            settings: registry.instance::<AppSettings>(),
        }
    }

    pub fn settings(&self) -> &Rc<AppSettings> {
        &self.settings
    }
}

pub fn demo(out: &mut Transcript) {
    let mut registry = InstanceRegistry::new();

    let singleton1 = registry.instance::<AppSettings>();
    let singleton2 = registry.instance::<AppSettings>();
    out.say(format!("Same instance: {}", Rc::ptr_eq(&singleton1, &singleton2)));

    let service = ReportService::new(&mut registry);
    out.say(format!(
        "ReportService shares it: {}",
        Rc::ptr_eq(service.settings(), &singleton1)
    ));
    out.say(format!("Instances in registry: {}", registry.len()));
}

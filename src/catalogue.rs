// The full list of patterns, their grouping, and how to run each demo.

use std::fmt;
use std::str::FromStr;

use crate::behavioural::{
    chain, command, iterator, observer, prototype, state, strategy, template_method,
};
use crate::config::DemoConfig;
use crate::console::Transcript;
use crate::creational::{abstract_factory, builder, factory_method, singleton};
use crate::error::PatternError;
use crate::structural::{adapter, bridge, composite, decorator, facade, flyweight, proxy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Behavioural,
    Creational,
    Structural,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Behavioural => "Behavioural",
            Category::Creational => "Creational",
            Category::Structural => "Structural",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    ChainOfResponsibility,
    Command,
    Iterator,
    Observer,
    Prototype,
    State,
    Strategy,
    TemplateMethod,
    AbstractFactory,
    Builder,
    FactoryMethod,
    Singleton,
    Adapter,
    Bridge,
    Composite,
    Decorator,
    Facade,
    Flyweight,
    Proxy,
}

impl Pattern {
    pub const ALL: [Pattern; 19] = [
        Pattern::ChainOfResponsibility,
        Pattern::Command,
        Pattern::Iterator,
        Pattern::Observer,
        Pattern::Prototype,
        Pattern::State,
        Pattern::Strategy,
        Pattern::TemplateMethod,
        Pattern::AbstractFactory,
        Pattern::Builder,
        Pattern::FactoryMethod,
        Pattern::Singleton,
        Pattern::Adapter,
        Pattern::Bridge,
        Pattern::Composite,
        Pattern::Decorator,
        Pattern::Facade,
        Pattern::Flyweight,
        Pattern::Proxy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::ChainOfResponsibility => "Chain of Responsibility",
            Pattern::Command => "Command",
            Pattern::Iterator => "Iterator",
            Pattern::Observer => "Observer",
            Pattern::Prototype => "Prototype",
            Pattern::State => "State",
            Pattern::Strategy => "Strategy",
            Pattern::TemplateMethod => "Template Method",
            Pattern::AbstractFactory => "Abstract Factory",
            Pattern::Builder => "Builder",
            Pattern::FactoryMethod => "Factory Method",
            Pattern::Singleton => "Singleton",
            Pattern::Adapter => "Adapter",
            Pattern::Bridge => "Bridge",
            Pattern::Composite => "Composite",
            Pattern::Decorator => "Decorator",
            Pattern::Facade => "Facade",
            Pattern::Flyweight => "Flyweight",
            Pattern::Proxy => "Proxy",
        }
    }

    /// Matches the binary name for the pattern.
    pub fn slug(self) -> &'static str {
        match self {
            Pattern::ChainOfResponsibility => "chain_of_responsibility",
            Pattern::Command => "command",
            Pattern::Iterator => "iterator",
            Pattern::Observer => "observer",
            Pattern::Prototype => "prototype",
            Pattern::State => "state",
            Pattern::Strategy => "strategy",
            Pattern::TemplateMethod => "template_method",
            Pattern::AbstractFactory => "abstract_factory",
            Pattern::Builder => "builder",
            Pattern::FactoryMethod => "factory_method",
            Pattern::Singleton => "singleton",
            Pattern::Adapter => "adapter",
            Pattern::Bridge => "bridge",
            Pattern::Composite => "composite",
            Pattern::Decorator => "decorator",
            Pattern::Facade => "facade",
            Pattern::Flyweight => "flyweight",
            Pattern::Proxy => "proxy",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Pattern::ChainOfResponsibility
            | Pattern::Command
            | Pattern::Iterator
            | Pattern::Observer
            | Pattern::Prototype
            | Pattern::State
            | Pattern::Strategy
            | Pattern::TemplateMethod => Category::Behavioural,
            Pattern::AbstractFactory
            | Pattern::Builder
            | Pattern::FactoryMethod
            | Pattern::Singleton => Category::Creational,
            Pattern::Adapter
            | Pattern::Bridge
            | Pattern::Composite
            | Pattern::Decorator
            | Pattern::Facade
            | Pattern::Flyweight
            | Pattern::Proxy => Category::Structural,
        }
    }

    pub fn in_category(category: Category) -> impl Iterator<Item = Pattern> {
        Self::ALL.into_iter().filter(move |p| p.category() == category)
    }

    /// Runs the pattern's fixed demonstration.
    pub fn run(self, config: &DemoConfig, out: &mut Transcript) {
        match self {
            Pattern::ChainOfResponsibility => chain::demo(out),
            Pattern::Command => command::demo(out),
            Pattern::Iterator => iterator::demo(out),
            Pattern::Observer => observer::demo(out),
            Pattern::Prototype => prototype::demo(out),
            Pattern::State => state::demo(out),
            Pattern::Strategy => strategy::demo(out),
            Pattern::TemplateMethod => template_method::demo(out),
            Pattern::AbstractFactory => abstract_factory::demo(out),
            Pattern::Builder => builder::demo(out),
            Pattern::FactoryMethod => factory_method::demo(out),
            Pattern::Singleton => singleton::demo(out),
            Pattern::Adapter => adapter::demo(out),
            Pattern::Bridge => bridge::demo(out),
            Pattern::Composite => composite::demo(out),
            Pattern::Decorator => decorator::demo(out),
            Pattern::Facade => facade::demo(out),
            Pattern::Flyweight => flyweight::demo(out, &config.flyweight),
            Pattern::Proxy => proxy::demo(out),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Accepts the slug in any case, with `-` or `_` as separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|p| p.slug() == wanted)
            .ok_or_else(|| PatternError::UnknownPattern(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nineteen_distinct_patterns() {
        let slugs: HashSet<&str> = Pattern::ALL.iter().map(|p| p.slug()).collect();
        assert_eq!(slugs.len(), 19);
    }

    #[test]
    fn test_category_sizes() {
        assert_eq!(Pattern::in_category(Category::Behavioural).count(), 8);
        assert_eq!(Pattern::in_category(Category::Creational).count(), 4);
        assert_eq!(Pattern::in_category(Category::Structural).count(), 7);
    }

    #[test]
    fn test_slug_round_trip() {
        for pattern in Pattern::ALL {
            assert_eq!(pattern.slug().parse::<Pattern>().unwrap(), pattern);
        }
    }

    #[test]
    fn test_lenient_parsing() {
        assert_eq!(
            "Chain-Of-Responsibility".parse::<Pattern>().unwrap(),
            Pattern::ChainOfResponsibility
        );
        assert!(matches!(
            "visitor".parse::<Pattern>(),
            Err(PatternError::UnknownPattern(_))
        ));
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Pattern::TemplateMethod.to_string(), "Template Method");
        assert_eq!(Category::Structural.to_string(), "Structural");
    }
}

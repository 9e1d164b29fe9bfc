// Chain of Responsibility: each link consumes a request or forwards it.

use tracing::debug;

use crate::console::Transcript;

pub trait Handler {
    /// Returns `true` when some link in the chain consumed the request.
    fn handle(&self, request: &str, out: &mut Transcript) -> bool;
}

/// A link that consumes exactly one request name.
///
/// Each link owns its successor, so a chain can never loop back on itself.
pub struct NamedHandler {
    name: String,
    accepts: String,
    next: Option<Box<dyn Handler>>,
}

impl NamedHandler {
    pub fn new(name: impl Into<String>, accepts: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accepts: accepts.into(),
            next: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_next(&mut self, next: Box<dyn Handler>) {
        self.next = Some(next);
    }

    pub fn with_next(mut self, next: impl Handler + 'static) -> Self {
        self.set_next(Box::new(next));
        self
    }
}

impl Handler for NamedHandler {
    fn handle(&self, request: &str, out: &mut Transcript) -> bool {
        if request == self.accepts {
            out.say(format!("{} handles the request.", self.name));
            return true;
        }

        match &self.next {
            Some(next) => {
                debug!(handler = %self.name, request, "forwarding request");
                next.handle(request, out)
            }
            None => {
                debug!(handler = %self.name, request, "end of chain reached");
                false
            }
        }
    }
}

/// Links handlers in the given order and returns the head of the chain.
pub fn build_chain(links: Vec<NamedHandler>) -> Option<NamedHandler> {
    links.into_iter().rev().reduce(|next, mut link| {
        link.set_next(Box::new(next));
        link
    })
}

pub fn demo(out: &mut Transcript) {
    let chain = build_chain(vec![
        NamedHandler::new("ConcreteHandlerA", "A"),
        NamedHandler::new("ConcreteHandlerB", "B"),
        NamedHandler::new("ConcreteHandlerC", "C"),
    ]);

    let Some(chain) = chain else {
        return;
    };

    for request in ["A", "B", "C", "Z"] {
        if !chain.handle(request, out) {
            out.error(format!("No handler accepted request '{request}'."));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn abc_chain() -> NamedHandler {
        NamedHandler::new("ConcreteHandlerA", "A").with_next(
            NamedHandler::new("ConcreteHandlerB", "B")
                .with_next(NamedHandler::new("ConcreteHandlerC", "C")),
        )
    }

    #[test]
    fn test_first_match_only_prints() {
        let chain = abc_chain();
        let mut out = Transcript::buffered();

        assert!(chain.handle("A", &mut out));
        assert_eq!(out.lines(), ["ConcreteHandlerA handles the request."]);
    }

    #[test]
    fn test_each_request_resolves_once() {
        let chain = abc_chain();
        let mut out = Transcript::buffered();

        for request in ["A", "B", "C"] {
            assert!(chain.handle(request, &mut out));
        }

        assert_eq!(
            out.lines(),
            [
                "ConcreteHandlerA handles the request.",
                "ConcreteHandlerB handles the request.",
                "ConcreteHandlerC handles the request.",
            ]
        );
    }

    #[test]
    fn test_unmatched_falls_off_the_end() {
        let chain = abc_chain();
        let mut out = Transcript::buffered();

        assert!(!chain.handle("Z", &mut out));
        assert!(out.is_empty());
    }

    #[test]
    fn test_duplicate_criteria_first_wins() {
        let chain = build_chain(vec![
            NamedHandler::new("First", "A"),
            NamedHandler::new("Second", "A"),
        ])
        .unwrap();
        let mut out = Transcript::buffered();

        chain.handle("A", &mut out);
        assert_eq!(out.lines(), ["First handles the request."]);
    }

    #[test]
    fn test_build_chain_keeps_order() {
        let head = build_chain(vec![
            NamedHandler::new("H1", "1"),
            NamedHandler::new("H2", "2"),
        ])
        .unwrap();
        assert_eq!(head.name(), "H1");

        assert!(build_chain(Vec::new()).is_none());
    }

    #[test]
    fn test_demo_reports_unhandled() {
        let mut out = Transcript::buffered();
        demo(&mut out);
        assert_eq!(out.last(), Some("No handler accepted request 'Z'."));
        assert_eq!(out.len(), 4);
    }

    proptest! {
        #[test]
        fn prop_request_resolves_at_matching_link(len in 1usize..8, pick in 0usize..8) {
            let links = (0..len)
                .map(|i| NamedHandler::new(format!("H{i}"), i.to_string()))
                .collect();
            let chain = build_chain(links).unwrap();
            let mut out = Transcript::buffered();

            let handled = chain.handle(&pick.to_string(), &mut out);
            prop_assert_eq!(handled, pick < len);
            if handled {
                let expected = format!("H{pick} handles the request.");
                prop_assert_eq!(out.lines(), [expected]);
            } else {
                prop_assert!(out.is_empty());
            }
        }
    }
}

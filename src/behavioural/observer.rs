// Observer: a news agency pushes every update to its subscribed channels.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::console::Transcript;

pub trait Subscriber {
    fn update(&self, message: &str, out: &mut Transcript);
}

/// Handle returned by [`NewsAgency::attach`], used to detach later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct NewsAgency {
    subscribers: Vec<(SubscriptionId, Rc<dyn Subscriber>)>,
    next_id: u64,
    latest_news: Option<String>,
}

impl NewsAgency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, subscriber: Rc<dyn Subscriber>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber));
        debug!(?id, total = self.subscribers.len(), "subscriber attached");
        id
    }

    /// Removes one subscription. Returns `false` if it was already gone.
    pub fn detach(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        let removed = self.subscribers.len() < before;
        debug!(?id, removed, "subscriber detached");
        removed
    }

    /// Calls every subscriber synchronously, in attach order.
    pub fn notify(&self, message: &str, out: &mut Transcript) {
        for (_, subscriber) in &self.subscribers {
            subscriber.update(message, out);
        }
    }

    pub fn set_news(&mut self, news: impl Into<String>, out: &mut Transcript) {
        let news = news.into();
        self.notify(&news, out);
        self.latest_news = Some(news);
    }

    pub fn latest_news(&self) -> Option<&str> {
        self.latest_news.as_deref()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[derive(Debug)]
pub struct NewsChannel {
    name: String,
    inbox: RefCell<Vec<String>>,
}

impl NewsChannel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inbox: RefCell::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<String> {
        self.inbox.borrow().clone()
    }
}

impl Subscriber for NewsChannel {
    fn update(&self, message: &str, out: &mut Transcript) {
        self.inbox.borrow_mut().push(message.to_string());
        out.say(format!("{} received news: {}", self.name, message));
    }
}

pub fn demo(out: &mut Transcript) {
    let mut agency = NewsAgency::new();

    let channel1 = Rc::new(NewsChannel::new("Channel 1"));
    let channel2 = Rc::new(NewsChannel::new("Channel 2"));

    let first = agency.attach(channel1);
    agency.attach(channel2);

    agency.set_news(
        "Breaking News: Rust ranked as the most loved language!",
        out,
    );

    agency.detach(first);

    agency.set_news("New AI breakthrough announced!", out);
}

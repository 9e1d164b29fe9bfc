// Proxy: stands in for the real connection and creates it on first use.

use std::cell::{Cell, OnceCell};

use tracing::debug;

use crate::console::Transcript;

pub trait NetworkConnection {
    fn connect(&self, url: &str, out: &mut Transcript);
}

#[derive(Debug, Default)]
pub struct RealConnection;

impl NetworkConnection for RealConnection {
    fn connect(&self, url: &str, out: &mut Transcript) {
        out.say(format!("Connecting to {url}..."));
    }
}

#[derive(Debug, Default)]
pub struct ConnectionProxy {
    real: OnceCell<RealConnection>,
    backends_created: Cell<usize>,
}

impl ConnectionProxy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_backend(&self) -> bool {
        self.real.get().is_some()
    }

    pub fn backends_created(&self) -> usize {
        self.backends_created.get()
    }

    fn backend(&self) -> &RealConnection {
        self.real.get_or_init(|| {
            debug!("creating real connection");
            self.backends_created.set(self.backends_created.get() + 1);
            RealConnection
        })
    }
}

impl NetworkConnection for ConnectionProxy {
    fn connect(&self, url: &str, out: &mut Transcript) {
        let real = self.backend();
        out.say("Proxy: Checking user access...");
        real.connect(url, out);
    }
}

pub fn demo(out: &mut Transcript) {
    let proxy = ConnectionProxy::new();

    proxy.connect("http://example.com", out);
    proxy.connect("https://example.org", out);
}

// Abstract Factory: one factory per platform yields a matching widget family.

use std::str::FromStr;

use crate::console::Transcript;
use crate::error::PatternError;

// ============================================================================
// Products
// ============================================================================

pub trait Button {
    fn click(&self, out: &mut Transcript);
}

pub trait Checkbox {
    fn check(&self, out: &mut Transcript);
}

pub struct WindowsButton;

impl Button for WindowsButton {
    fn click(&self, out: &mut Transcript) {
        out.say("Windows-style Button clicked.");
    }
}

pub struct MacButton;

impl Button for MacButton {
    fn click(&self, out: &mut Transcript) {
        out.say("Mac-style Button clicked.");
    }
}

pub struct WindowsCheckbox;

impl Checkbox for WindowsCheckbox {
    fn check(&self, out: &mut Transcript) {
        out.say("Windows-style Checkbox checked.");
    }
}

pub struct MacCheckbox;

impl Checkbox for MacCheckbox {
    fn check(&self, out: &mut Transcript) {
        out.say("Mac-style Checkbox checked.");
    }
}

// ============================================================================
// Factories
// ============================================================================

pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

pub struct WindowsFactory;

impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox)
    }
}

pub struct MacFactory;

impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Mac,
}

impl Platform {
    pub fn factory(self) -> Box<dyn GuiFactory> {
        match self {
            Platform::Windows => Box::new(WindowsFactory),
            Platform::Mac => Box::new(MacFactory),
        }
    }
}

impl FromStr for Platform {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(Platform::Windows),
            "mac" | "macos" => Ok(Platform::Mac),
            _ => Err(PatternError::UnknownPlatform(s.to_string())),
        }
    }
}

/// Client code: only ever sees the abstract factory.
pub fn create_gui(factory: &dyn GuiFactory) -> (Box<dyn Button>, Box<dyn Checkbox>) {
    (factory.create_button(), factory.create_checkbox())
}

pub fn demo(out: &mut Transcript) {
    for name in ["windows", "mac", "linux"] {
        match name.parse::<Platform>() {
            Ok(platform) => {
                let factory = platform.factory();
                let (button, checkbox) = create_gui(factory.as_ref());
                button.click(out);
                checkbox.check(out);
            }
            Err(err) => out.error(err.to_string()),
        }
    }
}

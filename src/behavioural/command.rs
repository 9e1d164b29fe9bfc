// Command: an action and its receiver bundled into one object, invoked
// later by a remote control that only knows button names.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::warn;

use crate::console::Transcript;
use crate::error::PatternError;

// ============================================================================
// Receivers
// ============================================================================

pub trait Device {
    fn turn_on(&self, out: &mut Transcript);
    fn turn_off(&self, out: &mut Transcript);
    fn is_on(&self) -> bool;
}

#[derive(Debug, Default)]
pub struct Television {
    powered: Cell<bool>,
}

impl Device for Television {
    fn turn_on(&self, out: &mut Transcript) {
        self.powered.set(true);
        out.say("TV is turned on.");
    }

    fn turn_off(&self, out: &mut Transcript) {
        self.powered.set(false);
        out.say("TV is turned off.");
    }

    fn is_on(&self) -> bool {
        self.powered.get()
    }
}

#[derive(Debug, Default)]
pub struct Stereo {
    powered: Cell<bool>,
}

impl Device for Stereo {
    fn turn_on(&self, out: &mut Transcript) {
        self.powered.set(true);
        out.say("Stereo is turned on.");
    }

    fn turn_off(&self, out: &mut Transcript) {
        self.powered.set(false);
        out.say("Stereo is turned off.");
    }

    fn is_on(&self) -> bool {
        self.powered.get()
    }
}

// ============================================================================
// Commands
// ============================================================================

pub trait Command {
    fn execute(&self, out: &mut Transcript);
}

pub struct TurnOnCommand {
    device: Rc<dyn Device>,
}

impl TurnOnCommand {
    pub fn new(device: Rc<dyn Device>) -> Self {
        Self { device }
    }
}

impl Command for TurnOnCommand {
    fn execute(&self, out: &mut Transcript) {
        self.device.turn_on(out);
    }
}

pub struct TurnOffCommand {
    device: Rc<dyn Device>,
}

impl TurnOffCommand {
    pub fn new(device: Rc<dyn Device>) -> Self {
        Self { device }
    }
}

impl Command for TurnOffCommand {
    fn execute(&self, out: &mut Transcript) {
        self.device.turn_off(out);
    }
}

// ============================================================================
// Invoker
// ============================================================================

#[derive(Default)]
pub struct RemoteControl {
    commands: HashMap<String, Box<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a button; rebinding an existing name replaces the old command.
    pub fn add_command(&mut self, name: impl Into<String>, command: Box<dyn Command>) {
        self.commands.insert(name.into(), command);
    }

    pub fn has_button(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn try_press(&self, name: &str, out: &mut Transcript) -> Result<(), PatternError> {
        let command = self
            .commands
            .get(name)
            .ok_or_else(|| PatternError::InvalidCommand(name.to_string()))?;
        command.execute(out);
        Ok(())
    }

    /// Presses a button. Unknown buttons print "Invalid command!" and
    /// return `false`.
    pub fn press_button(&self, name: &str, out: &mut Transcript) -> bool {
        match self.try_press(name, out) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "button press ignored");
                out.error("Invalid command!");
                false
            }
        }
    }
}

pub fn demo(out: &mut Transcript) {
    let tv: Rc<dyn Device> = Rc::new(Television::default());
    let stereo: Rc<dyn Device> = Rc::new(Stereo::default());

    let mut remote = RemoteControl::new();
    remote.add_command("on_tv", Box::new(TurnOnCommand::new(Rc::clone(&tv))));
    remote.add_command("off_tv", Box::new(TurnOffCommand::new(Rc::clone(&tv))));
    remote.add_command("on_stereo", Box::new(TurnOnCommand::new(Rc::clone(&stereo))));
    remote.add_command("off_stereo", Box::new(TurnOffCommand::new(stereo)));

    for button in ["on_tv", "off_tv", "on_stereo", "off_stereo", "invalid"] {
        remote.press_button(button, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote_with_tv() -> (RemoteControl, Rc<Television>) {
        let tv = Rc::new(Television::default());
        let mut remote = RemoteControl::new();
        remote.add_command("on", Box::new(TurnOnCommand::new(tv.clone())));
        remote.add_command("off", Box::new(TurnOffCommand::new(tv.clone())));
        (remote, tv)
    }

    #[test]
    fn test_press_runs_bound_command() {
        let (remote, tv) = remote_with_tv();
        let mut out = Transcript::buffered();

        assert!(remote.press_button("on", &mut out));
        assert!(tv.is_on());
        assert_eq!(out.lines(), ["TV is turned on."]);

        assert!(remote.press_button("off", &mut out));
        assert!(!tv.is_on());
        assert_eq!(out.last(), Some("TV is turned off."));
    }

    #[test]
    fn test_unknown_button_prints_invalid() {
        let (remote, tv) = remote_with_tv();
        let mut out = Transcript::buffered();

        assert!(!remote.press_button("invalid", &mut out));
        assert_eq!(out.lines(), ["Invalid command!"]);
        assert!(!tv.is_on());

        // later presses are unaffected
        assert!(remote.press_button("on", &mut out));
    }

    #[test]
    fn test_try_press_returns_typed_error() {
        let remote = RemoteControl::new();
        let mut out = Transcript::buffered();

        match remote.try_press("nope", &mut out) {
            Err(PatternError::InvalidCommand(name)) => assert_eq!(name, "nope"),
            other => panic!("expected InvalidCommand, got {other:?}"),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn test_rebinding_replaces_command() {
        let stereo = Rc::new(Stereo::default());
        let mut remote = RemoteControl::new();
        remote.add_command("x", Box::new(TurnOnCommand::new(stereo.clone())));
        remote.add_command("x", Box::new(TurnOffCommand::new(stereo.clone())));

        let mut out = Transcript::buffered();
        remote.press_button("x", &mut out);
        assert_eq!(out.lines(), ["Stereo is turned off."]);
        assert!(remote.has_button("x"));
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::buffered();
        demo(&mut out);
        assert_eq!(
            out.lines(),
            [
                "TV is turned on.",
                "TV is turned off.",
                "Stereo is turned on.",
                "Stereo is turned off.",
                "Invalid command!",
            ]
        );
    }
}

// State: an audio player whose behaviour is delegated to its current state.

use std::fmt;

use tracing::debug;

use crate::console::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Stopped,
    Playing,
    Paused,
}

/// What a state decided to do with an operation: the line to report and the
/// state to switch to, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub message: &'static str,
    pub next: Option<PlayerState>,
}

impl Outcome {
    fn stay(message: &'static str) -> Self {
        Self {
            message,
            next: None,
        }
    }

    fn switch(message: &'static str, next: PlayerState) -> Self {
        Self {
            message,
            next: Some(next),
        }
    }
}

impl PlayerState {
    pub fn play(self) -> Outcome {
        match self {
            PlayerState::Stopped => Outcome::switch("Starting playback...", PlayerState::Playing),
            PlayerState::Playing => Outcome::stay("Already playing."),
            PlayerState::Paused => Outcome::switch("Resuming playback...", PlayerState::Playing),
        }
    }

    pub fn pause(self) -> Outcome {
        match self {
            PlayerState::Stopped => Outcome::stay("Playback has not started yet."),
            PlayerState::Playing => Outcome::switch("Pausing...", PlayerState::Paused),
            PlayerState::Paused => Outcome::stay("Already paused."),
        }
    }

    pub fn stop(self) -> Outcome {
        match self {
            PlayerState::Stopped => Outcome::stay("Already stopped."),
            PlayerState::Playing | PlayerState::Paused => {
                Outcome::switch("Stopping...", PlayerState::Stopped)
            }
        }
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerState::Stopped => "Stopped",
            PlayerState::Playing => "Playing",
            PlayerState::Paused => "Paused",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub struct AudioPlayer {
    state: PlayerState,
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioPlayer {
    pub fn new() -> Self {
        Self {
            state: PlayerState::Stopped,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn play(&mut self, out: &mut Transcript) -> bool {
        let outcome = self.state.play();
        self.apply(outcome, out)
    }

    pub fn pause(&mut self, out: &mut Transcript) -> bool {
        let outcome = self.state.pause();
        self.apply(outcome, out)
    }

    pub fn stop(&mut self, out: &mut Transcript) -> bool {
        let outcome = self.state.stop();
        self.apply(outcome, out)
    }

    // Returns whether the state changed.
    fn apply(&mut self, outcome: Outcome, out: &mut Transcript) -> bool {
        out.say(outcome.message);
        match outcome.next {
            Some(next) => {
                debug!(from = %self.state, to = %next, "player transition");
                self.state = next;
                true
            }
            None => false,
        }
    }
}

pub fn demo(out: &mut Transcript) {
    let mut player = AudioPlayer::new();

    player.play(out);
    player.pause(out);
    player.play(out);
    player.stop(out);
    player.pause(out);
}

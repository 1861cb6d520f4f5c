//! Fire-and-forget feedback cues (audio on the web build).
//!
//! The session calls [`CueSink::notify`] after a transition has already been
//! applied and never looks at the outcome. Sinks swallow their own failures.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Feedback moments emitted by the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Select,
    Deselect,
    Match,
    Miss,
    LevelComplete,
    GameOver,
}

pub trait CueSink {
    fn notify(&self, cue: Cue);
}

/// Sink that drops every cue. Used when audio cues are disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl CueSink for Silent {
    fn notify(&self, _cue: Cue) {}
}

/// Sink that remembers cues in order.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct Recorder {
    cues: Rc<RefCell<Vec<Cue>>>,
}

#[cfg(test)]
impl Recorder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Cues received so far (shared with every clone of this recorder).
    pub(crate) fn cues(&self) -> Vec<Cue> {
        self.cues.borrow().clone()
    }
}

#[cfg(test)]
impl CueSink for Recorder {
    fn notify(&self, cue: Cue) {
        self.cues.borrow_mut().push(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_clones_share_history() {
        let rec = Recorder::new();
        let handle = rec.clone();
        rec.notify(Cue::Select);
        rec.notify(Cue::Match);
        assert_eq!(handle.cues(), vec![Cue::Select, Cue::Match]);
    }

    #[test]
    fn silent_accepts_everything() {
        Silent.notify(Cue::GameOver);
    }
}

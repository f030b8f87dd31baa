//! Enter/leave transition state machine.
//!
//! A transition moves its child through a small set of stages, each carrying
//! the class tokens that drive a CSS transition. The machine is pure; the
//! `Transition` component owns the timers that advance it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay between the "start" and "active" stage of a transition, one frame.
pub const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Hidden,
    EnterStart,
    Entering,
    Entered,
    LeaveStart,
    Leaving,
}

impl Stage {
    /// Stage at mount; a child shown from the start does not animate in.
    pub fn initial(show: bool) -> Self {
        if show { Stage::Entered } else { Stage::Hidden }
    }

    pub fn is_mounted(self) -> bool {
        self != Stage::Hidden
    }

    /// Reacts to a change of the `show` flag.
    ///
    /// Returns `None` when the stage already agrees with `show`. An in-flight
    /// transition is reversed from where it is rather than restarted.
    pub fn toggle(self, show: bool) -> Option<Self> {
        let next = match (self, show) {
            (Stage::Hidden, true) => Stage::EnterStart,
            (Stage::LeaveStart, true) => Stage::Entered,
            (Stage::Leaving, true) => Stage::Entering,
            (Stage::Entered, false) => Stage::LeaveStart,
            (Stage::EnterStart, false) => Stage::Hidden,
            (Stage::Entering, false) => Stage::Leaving,
            _ => return None,
        };
        Some(next)
    }

    /// The stage reached once this one's timer fires, if it has one.
    pub fn advance(self) -> Option<Self> {
        match self {
            Stage::EnterStart => Some(Stage::Entering),
            Stage::Entering => Some(Stage::Entered),
            Stage::LeaveStart => Some(Stage::Leaving),
            Stage::Leaving => Some(Stage::Hidden),
            Stage::Hidden | Stage::Entered => None,
        }
    }

    /// How long this stage lasts before `advance` applies.
    pub fn hold(self, timing: TransitionTiming) -> Option<Duration> {
        match self {
            Stage::EnterStart | Stage::LeaveStart => Some(FRAME),
            Stage::Entering => Some(timing.enter()),
            Stage::Leaving => Some(timing.leave()),
            Stage::Hidden | Stage::Entered => None,
        }
    }

    pub fn class(self, classes: &TransitionClasses) -> String {
        let tokens: [&str; 2] = match self {
            Stage::EnterStart => [classes.enter, classes.enter_from],
            Stage::Entering => [classes.enter, classes.enter_to],
            Stage::LeaveStart => [classes.leave, classes.leave_from],
            Stage::Leaving => [classes.leave, classes.leave_to],
            Stage::Hidden | Stage::Entered => ["", ""],
        };
        tokens
            .iter()
            .filter(|t| !t.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Class tokens applied during each phase of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitionClasses {
    pub enter: &'static str,
    pub enter_from: &'static str,
    pub enter_to: &'static str,
    pub leave: &'static str,
    pub leave_from: &'static str,
    pub leave_to: &'static str,
}

impl TransitionClasses {
    pub fn fade() -> Self {
        Self {
            enter: "transition-opacity ease-out duration-200",
            enter_from: "opacity-0",
            enter_to: "opacity-100",
            leave: "transition-opacity ease-in duration-200",
            leave_from: "opacity-100",
            leave_to: "opacity-0",
        }
    }

    /// Horizontal slide between `offscreen` and the resting position.
    pub fn slide(offscreen: &'static str) -> Self {
        const MOTION: &str = "transform transition ease-in-out duration-500 sm:duration-700";
        Self {
            enter: MOTION,
            enter_from: offscreen,
            enter_to: "translate-x-0",
            leave: MOTION,
            leave_from: "translate-x-0",
            leave_to: offscreen,
        }
    }
}

/// Enter and leave durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTiming {
    pub enter_ms: u64,
    pub leave_ms: u64,
}

impl TransitionTiming {
    pub const FADE: Self = Self { enter_ms: 200, leave_ms: 200 };
    // sm:duration-700 is the longest the slide can take.
    pub const SLIDE: Self = Self { enter_ms: 700, leave_ms: 700 };

    pub fn enter(self) -> Duration {
        Duration::from_millis(self.enter_ms)
    }

    pub fn leave(self) -> Duration {
        Duration::from_millis(self.leave_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_stage() {
        assert_eq!(Stage::initial(true), Stage::Entered);
        assert_eq!(Stage::initial(false), Stage::Hidden);
        assert!(!Stage::Hidden.is_mounted());
        assert!(Stage::Leaving.is_mounted());
    }

    #[test]
    fn full_enter_then_leave() {
        let mut stage = Stage::Hidden.toggle(true).unwrap();
        assert_eq!(stage, Stage::EnterStart);
        while let Some(next) = stage.advance() {
            stage = next;
        }
        assert_eq!(stage, Stage::Entered);

        stage = stage.toggle(false).unwrap();
        assert_eq!(stage, Stage::LeaveStart);
        while let Some(next) = stage.advance() {
            stage = next;
        }
        assert_eq!(stage, Stage::Hidden);
    }

    #[test]
    fn toggle_to_same_state_is_ignored() {
        assert_eq!(Stage::Entered.toggle(true), None);
        assert_eq!(Stage::Entering.toggle(true), None);
        assert_eq!(Stage::Hidden.toggle(false), None);
        assert_eq!(Stage::Leaving.toggle(false), None);
    }

    #[test]
    fn rapid_toggle_reverses() {
        assert_eq!(Stage::Leaving.toggle(true), Some(Stage::Entering));
        assert_eq!(Stage::Entering.toggle(false), Some(Stage::Leaving));
        assert_eq!(Stage::LeaveStart.toggle(true), Some(Stage::Entered));
        assert_eq!(Stage::EnterStart.toggle(false), Some(Stage::Hidden));
    }

    #[test]
    fn hold_durations() {
        let t = TransitionTiming::SLIDE;
        assert_eq!(Stage::EnterStart.hold(t), Some(FRAME));
        assert_eq!(Stage::Entering.hold(t), Some(Duration::from_millis(700)));
        assert_eq!(Stage::Leaving.hold(TransitionTiming::FADE), Some(Duration::from_millis(200)));
        assert_eq!(Stage::Entered.hold(t), None);
        assert_eq!(Stage::Hidden.hold(t), None);
    }

    #[test]
    fn slide_classes_per_stage() {
        let c = TransitionClasses::slide("translate-x-full");
        assert_eq!(
            Stage::EnterStart.class(&c),
            "transform transition ease-in-out duration-500 sm:duration-700 translate-x-full"
        );
        assert!(Stage::Entering.class(&c).ends_with(" translate-x-0"));
        assert!(Stage::LeaveStart.class(&c).ends_with(" translate-x-0"));
        assert!(Stage::Leaving.class(&c).ends_with(" translate-x-full"));
        assert_eq!(Stage::Entered.class(&c), "");
    }

    #[test]
    fn fade_classes_per_stage() {
        let c = TransitionClasses::fade();
        assert_eq!(Stage::EnterStart.class(&c), "transition-opacity ease-out duration-200 opacity-0");
        assert_eq!(Stage::Entering.class(&c), "transition-opacity ease-out duration-200 opacity-100");
        assert_eq!(Stage::Leaving.class(&c), "transition-opacity ease-in duration-200 opacity-0");
    }
}

//! Flap input boundary
//!
//! Turns raw keyboard/mouse/touch events into flap requests. The engine
//! treats every request as a deliberate impulse, so duplicates are dropped
//! here: key auto-repeat, and the click a browser synthesizes after a tap.

/// A raw browser event relevant to flapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// `code` is the physical key (`KeyboardEvent.code`)
    Key { code: String, repeat: bool },
    Click,
    TouchStart,
}

impl RawInput {
    pub fn key(code: &str) -> Self {
        RawInput::Key {
            code: code.to_string(),
            repeat: false,
        }
    }

    /// Whether the event belongs to the flap control at all
    /// (the shell suppresses the browser default for these)
    pub fn is_flap_control(&self) -> bool {
        match self {
            RawInput::Key { code, .. } => code == InputBoundary::FLAP_KEY,
            RawInput::Click | RawInput::TouchStart => true,
        }
    }
}

/// Deduplicates raw events within one frame
#[derive(Debug, Default)]
pub struct InputBoundary {
    touched_this_frame: bool,
    flaps_this_frame: u32,
}

impl InputBoundary {
    pub const FLAP_KEY: &'static str = "Space";

    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the event should be delivered as a flap
    pub fn accept(&mut self, input: &RawInput) -> bool {
        let flap = match input {
            RawInput::Key { code, repeat } => code == Self::FLAP_KEY && !repeat,
            RawInput::TouchStart => {
                self.touched_this_frame = true;
                true
            }
            // Compatibility click following a touch in the same frame
            RawInput::Click => !self.touched_this_frame,
        };
        if flap {
            self.flaps_this_frame += 1;
        }
        flap
    }

    /// Flaps delivered since the last `end_frame`
    pub fn flaps_this_frame(&self) -> u32 {
        self.flaps_this_frame
    }

    /// Call once per rendered frame, after `advance`
    pub fn end_frame(&mut self) {
        self.touched_this_frame = false;
        self.flaps_this_frame = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_space_flaps() {
        let mut input = InputBoundary::new();
        assert!(input.accept(&RawInput::key("Space")));
        assert!(!input.accept(&RawInput::key("Enter")));
        assert!(!input.accept(&RawInput::key("KeyW")));
        assert!(!RawInput::key("Enter").is_flap_control());
        assert!(RawInput::Click.is_flap_control());
    }

    #[test]
    fn test_key_repeat_is_dropped() {
        let mut input = InputBoundary::new();
        let held = RawInput::Key {
            code: "Space".into(),
            repeat: true,
        };
        assert!(!input.accept(&held));
        assert_eq!(input.flaps_this_frame(), 0);
    }

    #[test]
    fn test_click_after_touch_is_deduplicated() {
        let mut input = InputBoundary::new();
        assert!(input.accept(&RawInput::TouchStart));
        assert!(!input.accept(&RawInput::Click));
        assert_eq!(input.flaps_this_frame(), 1);

        input.end_frame();
        assert!(input.accept(&RawInput::Click));
    }

    #[test]
    fn test_distinct_presses_all_pass() {
        let mut input = InputBoundary::new();
        assert!(input.accept(&RawInput::key("Space")));
        assert!(input.accept(&RawInput::Click));
        assert!(input.accept(&RawInput::key("Space")));
        assert_eq!(input.flaps_this_frame(), 3);
        input.end_frame();
        assert_eq!(input.flaps_this_frame(), 0);
    }
}

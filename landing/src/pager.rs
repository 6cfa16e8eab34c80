//! Scroll pagination state machine.
//!
//! Pure logic for the full-page section pager: gesture classification and
//! index bookkeeping live here, DOM wiring lives in [`crate::scroll`].

/// Cool-down after a transition, during which further gestures are ignored.
pub const COOLDOWN_MS: u64 = 800;

/// Minimum touch travel, in pixels, to count as a swipe.
pub const MIN_SWIPE_PX: f64 = 50.0;

/// Viewport width, in pixels, below which pagination gives way to a plain
/// stacked page.
pub const STACKED_MAX_WIDTH_PX: i32 = 768;

/// Where a navigation gesture asks to go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIntent {
    Next,
    Prev,
    First,
    Last,
    Jump(usize),
}

/// Classifies a wheel delta; the sign picks the direction.
pub fn wheel_intent(delta_y: f64) -> Option<NavIntent> {
    if delta_y > 0.0 {
        Some(NavIntent::Next)
    } else if delta_y < 0.0 {
        Some(NavIntent::Prev)
    } else {
        None
    }
}

/// Classifies a completed touch. `delta_y` is start minus end screen Y, so
/// positive means the finger moved up and the content should advance.
pub fn swipe_intent(delta_y: f64) -> Option<NavIntent> {
    if delta_y.abs() <= MIN_SWIPE_PX {
        None
    } else if delta_y > 0.0 {
        Some(NavIntent::Next)
    } else {
        Some(NavIntent::Prev)
    }
}

/// Classifies a key press by its `key` value.
pub fn key_intent(key: &str) -> Option<NavIntent> {
    match key {
        "ArrowDown" | "PageDown" => Some(NavIntent::Next),
        "ArrowUp" | "PageUp" => Some(NavIntent::Prev),
        "Home" => Some(NavIntent::First),
        "End" => Some(NavIntent::Last),
        _ => None,
    }
}

/// Is this viewport too narrow for pagination?
pub fn is_stacked_viewport(width: i32) -> bool {
    width < STACKED_MAX_WIDTH_PX
}

/// "01 / 06" style progress counter.
pub fn counter_label(current: usize, total: usize) -> String {
    format!("{:02} / {:02}", current + 1, total)
}

/// Progress bar width for the current section, in percent.
pub fn progress_percent(current: usize, total: usize) -> f64 {
    ((current + 1) as f64 / total.max(1) as f64) * 100.0
}

/// Index bookkeeping for the section pager.
///
/// [`Pager::apply`] resolves an intent against the current position and the
/// transition latch. A successful move latches the pager until
/// [`Pager::settle`] ends the cool-down; ignored gestures leave it unlatched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    total: usize,
    transitioning: bool,
}

impl Pager {
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total: total.max(1),
            transitioning: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Resolves `intent`. `Some(index)` means the pager moved and is now
    /// latched; `None` means the gesture was ignored (mid-transition, edge
    /// no-op, or an out-of-range jump).
    pub fn apply(&mut self, intent: NavIntent) -> Option<usize> {
        if self.transitioning {
            return None;
        }
        let target = match intent {
            NavIntent::Next => self.current.checked_add(1).filter(|&index| index < self.total)?,
            NavIntent::Prev => self.current.checked_sub(1)?,
            NavIntent::First => 0,
            NavIntent::Last => self.total - 1,
            NavIntent::Jump(index) if index < self.total => index,
            NavIntent::Jump(_) => return None,
        };
        if target == self.current {
            return None;
        }
        self.current = target;
        self.transitioning = true;
        Some(target)
    }

    /// Ends the cool-down started by the last successful [`Pager::apply`].
    pub fn settle(&mut self) {
        self.transitioning = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_sign_picks_direction() {
        assert_eq!(wheel_intent(3.0), Some(NavIntent::Next));
        assert_eq!(wheel_intent(-3.0), Some(NavIntent::Prev));
        assert_eq!(wheel_intent(0.0), None);
    }

    #[test]
    fn swipe_requires_minimum_travel() {
        assert_eq!(swipe_intent(50.0), None);
        assert_eq!(swipe_intent(-50.0), None);
        assert_eq!(swipe_intent(51.0), Some(NavIntent::Next));
        assert_eq!(swipe_intent(-51.0), Some(NavIntent::Prev));
    }

    #[test]
    fn keys_map_to_intents() {
        assert_eq!(key_intent("ArrowDown"), Some(NavIntent::Next));
        assert_eq!(key_intent("PageDown"), Some(NavIntent::Next));
        assert_eq!(key_intent("ArrowUp"), Some(NavIntent::Prev));
        assert_eq!(key_intent("PageUp"), Some(NavIntent::Prev));
        assert_eq!(key_intent("Home"), Some(NavIntent::First));
        assert_eq!(key_intent("End"), Some(NavIntent::Last));
        assert_eq!(key_intent(" "), None);
        assert_eq!(key_intent("Enter"), None);
    }

    #[test]
    fn never_advances_past_the_last_section() {
        let mut pager = Pager::new(3);
        for _ in 0..10 {
            if pager.apply(NavIntent::Next).is_some() {
                pager.settle();
            }
        }
        assert_eq!(pager.current(), 2);
        assert_eq!(pager.apply(NavIntent::Next), None);
    }

    #[test]
    fn never_moves_before_the_first_section() {
        let mut pager = Pager::new(3);
        assert_eq!(pager.apply(NavIntent::Prev), None);
        assert_eq!(pager.current(), 0);
    }

    #[test]
    fn gestures_during_cooldown_are_ignored() {
        let mut pager = Pager::new(4);
        assert_eq!(pager.apply(NavIntent::Next), Some(1));
        assert_eq!(pager.apply(NavIntent::Next), None);
        assert_eq!(pager.apply(NavIntent::Prev), None);
        assert_eq!(pager.current(), 1);

        pager.settle();
        assert_eq!(pager.apply(NavIntent::Next), Some(2));
    }

    #[test]
    fn edge_no_op_does_not_start_a_cooldown() {
        let mut pager = Pager::new(2);
        assert_eq!(pager.apply(NavIntent::Prev), None);
        assert!(!pager.is_transitioning());
        assert_eq!(pager.apply(NavIntent::Next), Some(1));
    }

    #[test]
    fn home_and_end_jump_to_the_extremes() {
        let mut pager = Pager::new(6);
        assert_eq!(pager.apply(NavIntent::Last), Some(5));
        pager.settle();
        assert_eq!(pager.apply(NavIntent::First), Some(0));
        pager.settle();
        // Already there: no move, no latch.
        assert_eq!(pager.apply(NavIntent::First), None);
        assert!(!pager.is_transitioning());
    }

    #[test]
    fn jump_targets_one_section_directly() {
        let mut pager = Pager::new(6);
        assert_eq!(pager.apply(NavIntent::Jump(4)), Some(4));
        pager.settle();
        assert_eq!(pager.apply(NavIntent::Jump(4)), None);
        assert_eq!(pager.apply(NavIntent::Jump(9)), None);
        assert_eq!(pager.current(), 4);
    }

    #[test]
    fn single_section_pager_never_moves() {
        let mut pager = Pager::new(1);
        for intent in [
            NavIntent::Next,
            NavIntent::Prev,
            NavIntent::First,
            NavIntent::Last,
            NavIntent::Jump(0),
        ] {
            assert_eq!(pager.apply(intent), None);
        }
        assert_eq!(pager.current(), 0);
    }

    #[test]
    fn counter_is_zero_padded() {
        assert_eq!(counter_label(0, 6), "01 / 06");
        assert_eq!(counter_label(5, 6), "06 / 06");
        assert_eq!(counter_label(9, 12), "10 / 12");
    }

    #[test]
    fn progress_tracks_position() {
        assert_eq!(progress_percent(0, 6), 100.0 / 6.0);
        assert_eq!(progress_percent(2, 6), 50.0);
        assert_eq!(progress_percent(5, 6), 100.0);
    }

    #[test]
    fn stacked_threshold_is_exclusive() {
        assert!(is_stacked_viewport(767));
        assert!(!is_stacked_viewport(768));
        assert!(!is_stacked_viewport(1440));
    }
}

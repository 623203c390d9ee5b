//! Swipe State Machine
//!
//! Offset/rotation tracking for the single active card, independent of
//! any DOM event source.

use serde::{Deserialize, Serialize};

/// Tunable swipe constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// |offset.x| must strictly exceed this to commit
    pub threshold_px: f64,
    /// rotation = offset.x / tilt_divisor * tilt_factor (radians)
    pub tilt_divisor: f64,
    pub tilt_factor: f64,
    /// Off-screen animation length
    pub exit_duration_ms: u32,
    /// Horizontal target of the exit animation
    pub exit_distance_px: f64,
    /// Extra downward drift during the exit animation
    pub exit_drop_px: f64,
    /// Spring-back animation length
    pub spring_duration_ms: u32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold_px: 120.0,
            tilt_divisor: 300.0,
            tilt_factor: 0.25,
            exit_duration_ms: 800,
            exit_distance_px: 1200.0,
            exit_drop_px: 40.0,
            spring_duration_ms: 300,
        }
    }
}

/// Committed decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Keep
    Right,
    /// Discard
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwipePhase {
    #[default]
    Idle,
    Dragging,
    /// Decision abandoned, animating back to rest
    Returning,
    /// Decision committed, animating off-screen
    Exiting(SwipeDirection),
}

/// Result of releasing the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Commit(SwipeDirection),
    SpringBack,
    /// Release without an active drag
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Transform state of the topmost card
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeState {
    pub config: SwipeConfig,
    pub phase: SwipePhase,
    pub offset: Offset,
    /// Radians
    pub rotation: f64,
    last_pointer: Option<(f64, f64)>,
}

impl SwipeState {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == SwipePhase::Dragging
    }

    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, SwipePhase::Exiting(_))
    }

    /// Begin a drag at pointer position. Returns false while an exit
    /// animation is running.
    pub fn press(&mut self, x: f64, y: f64) -> bool {
        if self.is_exiting() {
            return false;
        }
        // A press during spring-back takes over from the current rest offset
        self.phase = SwipePhase::Dragging;
        self.last_pointer = Some((x, y));
        true
    }

    /// Track pointer movement; no-op unless dragging
    pub fn move_to(&mut self, x: f64, y: f64) {
        if !self.is_dragging() {
            return;
        }
        if let Some((last_x, last_y)) = self.last_pointer {
            self.drag_by(x - last_x, y - last_y);
        }
        self.last_pointer = Some((x, y));
    }

    /// Apply a relative change to the offset
    pub fn drag_by(&mut self, dx: f64, dy: f64) {
        self.offset.x += dx;
        self.offset.y += dy;
        self.rotation = self.tilt_for(self.offset.x);
    }

    pub fn tilt_for(&self, x: f64) -> f64 {
        x / self.config.tilt_divisor * self.config.tilt_factor
    }

    /// Decision for a horizontal offset; strict inequality on the threshold
    pub fn decide(&self, x: f64) -> Option<SwipeDirection> {
        if x > self.config.threshold_px {
            Some(SwipeDirection::Right)
        } else if x < -self.config.threshold_px {
            Some(SwipeDirection::Left)
        } else {
            None
        }
    }

    /// End of gesture
    pub fn release(&mut self) -> SwipeOutcome {
        if !self.is_dragging() {
            return SwipeOutcome::Ignored;
        }
        self.last_pointer = None;

        match self.decide(self.offset.x) {
            Some(direction) => {
                self.phase = SwipePhase::Exiting(direction);
                self.offset.x = match direction {
                    SwipeDirection::Right => self.config.exit_distance_px,
                    SwipeDirection::Left => -self.config.exit_distance_px,
                };
                self.offset.y += self.config.exit_drop_px;
                SwipeOutcome::Commit(direction)
            }
            None => {
                self.phase = SwipePhase::Returning;
                self.offset = Offset::default();
                self.rotation = 0.0;
                SwipeOutcome::SpringBack
            }
        }
    }

    /// Pointer cancelled by the platform: never commits
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            self.phase = SwipePhase::Returning;
            self.offset = Offset::default();
            self.rotation = 0.0;
            self.last_pointer = None;
        }
    }

    /// Exit animation finished; next card becomes active at rest
    pub fn finish_exit(&mut self) {
        self.reset();
    }

    /// Spring-back finished
    pub fn settle(&mut self) {
        if self.phase == SwipePhase::Returning {
            self.phase = SwipePhase::Idle;
        }
    }

    /// Zero all transform state
    pub fn reset(&mut self) {
        self.phase = SwipePhase::Idle;
        self.offset = Offset::default();
        self.rotation = 0.0;
        self.last_pointer = None;
    }

    /// CSS `transform` value for the active card
    pub fn transform_css(&self) -> String {
        format!(
            "translate({:.1}px, {:.1}px) rotate({:.4}rad)",
            self.offset.x, self.offset.y, self.rotation
        )
    }

    /// CSS `transition` value matching the current phase
    pub fn transition_css(&self) -> String {
        match self.phase {
            SwipePhase::Idle | SwipePhase::Dragging => "none".to_string(),
            SwipePhase::Returning => format!(
                "transform {}ms cubic-bezier(0.175, 0.885, 0.32, 1.275)",
                self.config.spring_duration_ms
            ),
            SwipePhase::Exiting(_) => {
                format!("transform {}ms ease-out", self.config.exit_duration_ms)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragged_to(x: f64) -> SwipeState {
        let mut state = SwipeState::new(SwipeConfig::default());
        assert!(state.press(0.0, 0.0));
        state.move_to(x, 10.0);
        state
    }

    #[test]
    fn offset_exactly_at_threshold_springs_back() {
        let mut state = dragged_to(120.0);
        assert_eq!(state.release(), SwipeOutcome::SpringBack);
        assert_eq!(state.phase, SwipePhase::Returning);
        assert_eq!(state.offset, Offset::default());
        assert_eq!(state.rotation, 0.0);
    }

    #[test]
    fn one_unit_past_threshold_commits() {
        let mut state = dragged_to(121.0);
        assert_eq!(state.release(), SwipeOutcome::Commit(SwipeDirection::Right));

        let mut state = dragged_to(-121.0);
        assert_eq!(state.release(), SwipeOutcome::Commit(SwipeDirection::Left));
        assert_eq!(state.offset.x, -1200.0);
        assert_eq!(state.offset.y, 50.0);
    }

    #[test]
    fn negative_threshold_is_strict_too() {
        let mut state = dragged_to(-120.0);
        assert_eq!(state.release(), SwipeOutcome::SpringBack);
    }

    #[test]
    fn rotation_follows_horizontal_offset() {
        let state = dragged_to(150.0);
        assert!((state.rotation - 0.125).abs() < 1e-9);
        assert_eq!(state.offset.y, 10.0);
    }

    #[test]
    fn moves_accumulate_from_last_pointer() {
        let mut state = SwipeState::new(SwipeConfig::default());
        state.press(100.0, 100.0);
        state.move_to(130.0, 100.0);
        state.move_to(180.0, 90.0);
        assert_eq!(state.offset, Offset { x: 80.0, y: -10.0 });
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut state = SwipeState::new(SwipeConfig::default());
        state.move_to(300.0, 0.0);
        assert_eq!(state.offset, Offset::default());
        assert_eq!(state.release(), SwipeOutcome::Ignored);
    }

    #[test]
    fn press_during_exit_is_rejected() {
        let mut state = dragged_to(200.0);
        state.release();
        assert!(state.is_exiting());
        assert!(!state.press(0.0, 0.0));

        state.finish_exit();
        assert_eq!(state.phase, SwipePhase::Idle);
        assert_eq!(state.offset, Offset::default());
        assert!(state.press(0.0, 0.0));
    }

    #[test]
    fn press_during_spring_back_takes_over() {
        let mut state = dragged_to(50.0);
        state.release();
        assert_eq!(state.phase, SwipePhase::Returning);
        assert!(state.press(10.0, 10.0));
        assert!(state.is_dragging());
    }

    #[test]
    fn cancel_never_commits() {
        let mut state = dragged_to(500.0);
        state.cancel();
        assert_eq!(state.phase, SwipePhase::Returning);
        assert_eq!(state.release(), SwipeOutcome::Ignored);
    }

    #[test]
    fn transition_matches_phase() {
        let mut state = dragged_to(10.0);
        assert_eq!(state.transition_css(), "none");
        state.release();
        assert!(state.transition_css().starts_with("transform 300ms"));
        state.settle();
        assert_eq!(state.transition_css(), "none");
    }
}

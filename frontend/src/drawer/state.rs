//! Drawer gesture state machine
//!
//! Pure transition logic: pointer and click events in, phase changes and
//! animation targets out. No DOM or timer access, so every rule is unit
//! tested natively.

use shared::DrawerSection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerPhase {
    Open,
    Closed,
}

impl DrawerPhase {
    pub fn from_open(open: bool) -> Self {
        if open { DrawerPhase::Open } else { DrawerPhase::Closed }
    }

    pub fn is_open(self) -> bool {
        self == DrawerPhase::Open
    }

    pub fn flipped(self) -> Self {
        match self {
            DrawerPhase::Open => DrawerPhase::Closed,
            DrawerPhase::Closed => DrawerPhase::Open,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawerEvent {
    /// Primary button went down on the drawer, client x in px
    PointerPressed { x: f64 },
    PointerMoved { x: f64 },
    PointerReleased,
    /// The browser took the pointer away mid-gesture (`pointercancel`)
    PointerCancelled,
    TogglePressed,
    /// A press landed outside the drawer
    OutsidePressed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionCause {
    DragClose,
    DragOpen,
    Toggle,
    OutsidePress,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: DrawerPhase,
    pub to: DrawerPhase,
    pub cause: TransitionCause,
}

/// Drag distances are fractions of the drawer width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub width: f64,
    pub close_fraction: f64,
    pub open_fraction: f64,
}

impl Thresholds {
    pub fn from_config(drawer: &DrawerSection) -> Self {
        Self {
            width: drawer.width,
            close_fraction: drawer.close_fraction,
            open_fraction: drawer.open_fraction,
        }
    }

    fn closes(&self, delta_x: f64) -> bool {
        delta_x < -(self.width * self.close_fraction)
    }

    fn opens(&self, delta_x: f64) -> bool {
        delta_x > self.width * self.open_fraction
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::from_config(&DrawerSection::default())
    }
}

/// The pointer gesture in progress, or the last one.
///
/// `delta_x` survives the release until the next press, so the click the
/// browser fires right after a drag is not taken for a toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Gesture {
    pub pressed: bool,
    pub origin_x: f64,
    pub delta_x: f64,
}

/// Values the animations chase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerTargets {
    /// 0 while open, 1 while closed; drives tint and overlay colours
    pub closed_progress: f64,
    /// 0 while open, `-width` while closed
    pub drawer_offset: f64,
    /// Pointer displacement while pressed, otherwise 0
    pub drag_offset: f64,
    /// The drag offset follows the pointer without animation
    pub dragging: bool,
}

/// Horizontal translation applied to the drawer; it never moves right of its
/// open position.
pub fn rendered_translation(drag_offset: f64, drawer_offset: f64) -> f64 {
    (drag_offset + drawer_offset).min(0.0)
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawerState {
    phase: DrawerPhase,
    gesture: Gesture,
    thresholds: Thresholds,
}

impl DrawerState {
    pub fn new(phase: DrawerPhase, thresholds: Thresholds) -> Self {
        Self {
            phase,
            gesture: Gesture::default(),
            thresholds,
        }
    }

    pub fn phase(&self) -> DrawerPhase {
        self.phase
    }

    /// Apply one event; returns the phase change it caused, if any.
    pub fn apply(&mut self, event: DrawerEvent) -> Option<Transition> {
        match event {
            DrawerEvent::PointerPressed { x } => {
                self.gesture = Gesture {
                    pressed: true,
                    origin_x: x,
                    delta_x: 0.0,
                };
                None
            }
            DrawerEvent::PointerMoved { x } => {
                if self.gesture.pressed {
                    self.gesture.delta_x = x - self.gesture.origin_x;
                }
                None
            }
            DrawerEvent::PointerReleased => {
                if !self.gesture.pressed {
                    return None;
                }
                self.gesture.pressed = false;
                let delta_x = self.gesture.delta_x;
                if delta_x == 0.0 {
                    return None;
                }
                match self.phase {
                    DrawerPhase::Open if self.thresholds.closes(delta_x) => {
                        self.transition(DrawerPhase::Closed, TransitionCause::DragClose)
                    }
                    DrawerPhase::Closed if self.thresholds.opens(delta_x) => {
                        self.transition(DrawerPhase::Open, TransitionCause::DragOpen)
                    }
                    _ => None,
                }
            }
            DrawerEvent::PointerCancelled => {
                if self.gesture.pressed {
                    self.gesture.pressed = false;
                    self.gesture.delta_x = 0.0;
                }
                None
            }
            DrawerEvent::TogglePressed => {
                if self.gesture.delta_x != 0.0 {
                    return None;
                }
                self.transition(self.phase.flipped(), TransitionCause::Toggle)
            }
            DrawerEvent::OutsidePressed => {
                if !self.gesture.pressed {
                    self.gesture.delta_x = 0.0;
                }
                if !self.phase.is_open() {
                    return None;
                }
                self.transition(DrawerPhase::Closed, TransitionCause::OutsidePress)
            }
        }
    }

    fn transition(&mut self, to: DrawerPhase, cause: TransitionCause) -> Option<Transition> {
        let from = self.phase;
        self.phase = to;
        Some(Transition { from, to, cause })
    }

    pub fn targets(&self) -> DrawerTargets {
        let open = self.phase.is_open();
        DrawerTargets {
            closed_progress: if open { 0.0 } else { 1.0 },
            drawer_offset: if open { 0.0 } else { -self.thresholds.width },
            drag_offset: if self.gesture.pressed { self.gesture.delta_x } else { 0.0 },
            dragging: self.gesture.pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 600.0;

    fn state(phase: DrawerPhase) -> DrawerState {
        DrawerState::new(
            phase,
            Thresholds {
                width: WIDTH,
                close_fraction: 0.5,
                open_fraction: 0.25,
            },
        )
    }

    fn drag(state: &mut DrawerState, from: f64, to: f64) -> Option<Transition> {
        state.apply(DrawerEvent::PointerPressed { x: from });
        state.apply(DrawerEvent::PointerMoved { x: (from + to) / 2.0 });
        state.apply(DrawerEvent::PointerMoved { x: to });
        state.apply(DrawerEvent::PointerReleased)
    }

    // Deltas from -2 widths to +2 widths in 7.5 px steps
    fn deltas() -> impl Iterator<Item = f64> {
        (-160..=160).map(|step| f64::from(step) * 7.5)
    }

    #[test]
    fn test_drag_past_half_width_closes_open_drawer() {
        for delta in deltas() {
            let mut drawer = state(DrawerPhase::Open);
            let transition = drag(&mut drawer, 700.0, 700.0 + delta);
            if delta < -WIDTH / 2.0 {
                assert_eq!(drawer.phase(), DrawerPhase::Closed, "delta {delta}");
                assert_eq!(
                    transition,
                    Some(Transition {
                        from: DrawerPhase::Open,
                        to: DrawerPhase::Closed,
                        cause: TransitionCause::DragClose,
                    })
                );
            } else {
                assert_eq!(drawer.phase(), DrawerPhase::Open, "delta {delta}");
                assert_eq!(transition, None);
            }
        }
    }

    #[test]
    fn test_drag_past_quarter_width_opens_closed_drawer() {
        for delta in deltas() {
            let mut drawer = state(DrawerPhase::Closed);
            let transition = drag(&mut drawer, 10.0, 10.0 + delta);
            if delta > WIDTH / 4.0 {
                assert_eq!(drawer.phase(), DrawerPhase::Open, "delta {delta}");
                assert_eq!(transition.map(|t| t.cause), Some(TransitionCause::DragOpen));
            } else {
                assert_eq!(drawer.phase(), DrawerPhase::Closed, "delta {delta}");
            }
        }
    }

    #[test]
    fn test_threshold_boundaries_are_exclusive() {
        let mut open = state(DrawerPhase::Open);
        drag(&mut open, 400.0, 100.0);
        assert_eq!(open.phase(), DrawerPhase::Open);

        let mut closed = state(DrawerPhase::Closed);
        drag(&mut closed, 0.0, 150.0);
        assert_eq!(closed.phase(), DrawerPhase::Closed);
    }

    #[test]
    fn test_only_final_delta_counts() {
        let mut drawer = state(DrawerPhase::Open);
        drawer.apply(DrawerEvent::PointerPressed { x: 500.0 });
        drawer.apply(DrawerEvent::PointerMoved { x: 0.0 });
        drawer.apply(DrawerEvent::PointerMoved { x: 450.0 });
        drawer.apply(DrawerEvent::PointerReleased);
        assert_eq!(drawer.phase(), DrawerPhase::Open);
    }

    #[test]
    fn test_toggle_with_zero_delta_flips() {
        for phase in [DrawerPhase::Open, DrawerPhase::Closed] {
            let mut drawer = state(phase);
            let transition = drawer.apply(DrawerEvent::TogglePressed);
            assert_eq!(drawer.phase(), phase.flipped());
            assert_eq!(transition.map(|t| t.cause), Some(TransitionCause::Toggle));

            drawer.apply(DrawerEvent::TogglePressed);
            assert_eq!(drawer.phase(), phase);
        }
    }

    #[test]
    fn test_press_and_release_in_place_then_toggle_flips() {
        let mut drawer = state(DrawerPhase::Open);
        assert_eq!(drag(&mut drawer, 580.0, 580.0), None);
        drawer.apply(DrawerEvent::TogglePressed);
        assert_eq!(drawer.phase(), DrawerPhase::Closed);
    }

    #[test]
    fn test_toggle_with_nonzero_delta_is_ignored() {
        for delta in deltas().filter(|delta| *delta != 0.0) {
            for phase in [DrawerPhase::Open, DrawerPhase::Closed] {
                let mut drawer = state(phase);
                drawer.apply(DrawerEvent::PointerPressed { x: 300.0 });
                drawer.apply(DrawerEvent::PointerMoved { x: 300.0 + delta });
                assert_eq!(drawer.apply(DrawerEvent::TogglePressed), None);
                assert_eq!(drawer.phase(), phase, "delta {delta}");
            }
        }
    }

    #[test]
    fn test_click_after_drag_release_is_ignored() {
        let mut drawer = state(DrawerPhase::Open);
        drag(&mut drawer, 300.0, 250.0);
        assert_eq!(drawer.phase(), DrawerPhase::Open);
        assert_eq!(drawer.gesture.delta_x, -50.0);

        assert_eq!(drawer.apply(DrawerEvent::TogglePressed), None);
        assert_eq!(drawer.phase(), DrawerPhase::Open);

        // The next press starts a fresh gesture
        drawer.apply(DrawerEvent::PointerPressed { x: 10.0 });
        drawer.apply(DrawerEvent::PointerReleased);
        drawer.apply(DrawerEvent::TogglePressed);
        assert_eq!(drawer.phase(), DrawerPhase::Closed);
    }

    #[test]
    fn test_moves_without_press_are_ignored() {
        let mut drawer = state(DrawerPhase::Open);
        drawer.apply(DrawerEvent::PointerMoved { x: -900.0 });
        assert_eq!(drawer.gesture.delta_x, 0.0);
        assert_eq!(drawer.apply(DrawerEvent::PointerReleased), None);
        assert_eq!(drawer.phase(), DrawerPhase::Open);
    }

    #[test]
    fn test_outside_press_closes_open_drawer_only() {
        let mut open = state(DrawerPhase::Open);
        let transition = open.apply(DrawerEvent::OutsidePressed);
        assert_eq!(open.phase(), DrawerPhase::Closed);
        assert_eq!(transition.map(|t| t.cause), Some(TransitionCause::OutsidePress));

        let mut closed = state(DrawerPhase::Closed);
        assert_eq!(closed.apply(DrawerEvent::OutsidePressed), None);
        assert_eq!(closed.phase(), DrawerPhase::Closed);
    }

    #[test]
    fn test_press_then_click_on_body_toggle_reopens() {
        // Pointer-down on the body button closes, its click flips back open
        let mut drawer = state(DrawerPhase::Open);

        let transition = drawer.apply(DrawerEvent::OutsidePressed);
        assert_eq!(drawer.phase(), DrawerPhase::Closed);
        assert_eq!(transition.map(|t| t.cause), Some(TransitionCause::OutsidePress));

        let transition = drawer.apply(DrawerEvent::TogglePressed);
        assert_eq!(drawer.phase(), DrawerPhase::Open);
        assert_eq!(transition.map(|t| t.cause), Some(TransitionCause::Toggle));

        // From closed the press is a no-op and the click opens
        let mut drawer = state(DrawerPhase::Closed);
        assert_eq!(drawer.apply(DrawerEvent::OutsidePressed), None);
        drawer.apply(DrawerEvent::TogglePressed);
        assert_eq!(drawer.phase(), DrawerPhase::Open);
    }

    #[test]
    fn test_cancelled_gesture_springs_back_without_transition() {
        let mut drawer = state(DrawerPhase::Open);
        drawer.apply(DrawerEvent::PointerPressed { x: 500.0 });
        drawer.apply(DrawerEvent::PointerMoved { x: -200.0 });
        assert!(drawer.targets().dragging);

        assert_eq!(drawer.apply(DrawerEvent::PointerCancelled), None);
        assert_eq!(drawer.phase(), DrawerPhase::Open);
        let targets = drawer.targets();
        assert!(!targets.dragging);
        assert_eq!(targets.drag_offset, 0.0);

        // Later moves and releases belong to no gesture
        drawer.apply(DrawerEvent::PointerMoved { x: -400.0 });
        assert_eq!(drawer.apply(DrawerEvent::PointerReleased), None);
        assert_eq!(drawer.phase(), DrawerPhase::Open);

        // Nothing residual blocks the toggle
        drawer.apply(DrawerEvent::TogglePressed);
        assert_eq!(drawer.phase(), DrawerPhase::Closed);
    }

    #[test]
    fn test_cancel_without_gesture_keeps_residual_delta() {
        let mut drawer = state(DrawerPhase::Open);
        drag(&mut drawer, 300.0, 280.0);
        drawer.apply(DrawerEvent::PointerCancelled);
        assert_eq!(drawer.gesture.delta_x, -20.0);
    }

    #[test]
    fn test_outside_press_clears_residual_drag_delta() {
        let mut drawer = state(DrawerPhase::Open);
        drag(&mut drawer, 300.0, 280.0);
        assert_ne!(drawer.gesture.delta_x, 0.0);

        drawer.apply(DrawerEvent::OutsidePressed);
        assert_eq!(drawer.gesture.delta_x, 0.0);
        assert_eq!(drawer.phase(), DrawerPhase::Closed);
    }

    #[test]
    fn test_targets_follow_phase_and_drag() {
        let mut drawer = state(DrawerPhase::Open);
        assert_eq!(
            drawer.targets(),
            DrawerTargets {
                closed_progress: 0.0,
                drawer_offset: 0.0,
                drag_offset: 0.0,
                dragging: false,
            }
        );

        drawer.apply(DrawerEvent::PointerPressed { x: 400.0 });
        drawer.apply(DrawerEvent::PointerMoved { x: 300.0 });
        let targets = drawer.targets();
        assert!(targets.dragging);
        assert_eq!(targets.drag_offset, -100.0);

        drawer.apply(DrawerEvent::PointerMoved { x: 0.0 });
        drawer.apply(DrawerEvent::PointerReleased);
        let targets = drawer.targets();
        assert!(!targets.dragging);
        assert_eq!(targets.drag_offset, 0.0);
        assert_eq!(targets.drawer_offset, -WIDTH);
        assert_eq!(targets.closed_progress, 1.0);
    }

    #[test]
    fn test_rendered_translation_is_clamped() {
        assert_eq!(rendered_translation(120.0, 0.0), 0.0);
        assert_eq!(rendered_translation(-80.0, 0.0), -80.0);
        assert_eq!(rendered_translation(200.0, -WIDTH), -400.0);
        assert_eq!(rendered_translation(0.0, -WIDTH), -WIDTH);
    }

    #[test]
    fn test_default_thresholds_match_shell_defaults() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.width, 600.0);
        assert_eq!(thresholds.close_fraction, 0.5);
        assert_eq!(thresholds.open_fraction, 0.25);
    }
}

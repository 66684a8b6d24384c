//! Drawer interaction domain
//!
//! `DrawerController` owns the gesture state machine in an Actor and keeps
//! three springs chasing its targets: the drawer offset, the drag offset and
//! the closed progress that drives colours and the toggle button offset.

pub mod outside_press;
pub mod state;

use state::{DrawerEvent, DrawerPhase, DrawerState, DrawerTargets, Thresholds, Transition};

use crate::animation::{AnimatedValue, ColorTween, SpringConfig, SpringTarget};
use crate::dataflow::{Actor, Relay, relay};
use futures::StreamExt;
use shared::{ColorsSection, ShellConfig};
use zoon::*;

#[derive(Clone, Debug)]
struct DrawerAnimations {
    drawer_offset: AnimatedValue,
    drag_offset: AnimatedValue,
    closed_progress: AnimatedValue,
}

impl DrawerAnimations {
    fn new(targets: DrawerTargets, config: SpringConfig) -> Self {
        Self {
            drawer_offset: AnimatedValue::new(targets.drawer_offset, config),
            drag_offset: AnimatedValue::new(targets.drag_offset, config),
            closed_progress: AnimatedValue::new(targets.closed_progress, config),
        }
    }

    fn retarget(&self, targets: DrawerTargets) {
        self.drawer_offset
            .set_target(SpringTarget::animated(targets.drawer_offset));
        self.drag_offset.set_target(if targets.dragging {
            SpringTarget::immediate(targets.drag_offset)
        } else {
            SpringTarget::animated(0.0)
        });
        self.closed_progress
            .set_target(SpringTarget::animated(targets.closed_progress));
    }
}

#[derive(Clone, Debug)]
pub struct DrawerController {
    state: Actor<DrawerState>,
    drawer_event_relay: Relay<DrawerEvent>,
    animations: DrawerAnimations,
    width: f64,
    z_index: i32,
    handle_closed_offset_percent: f64,
    tint: ColorTween,
    overlay: ColorTween,
}

impl DrawerController {
    pub fn new(config: &ShellConfig) -> Self {
        let initial = DrawerState::new(
            DrawerPhase::from_open(config.drawer.initially_open),
            Thresholds::from_config(&config.drawer),
        );
        let animations = DrawerAnimations::new(initial.targets(), config.spring.into());
        let (drawer_event_relay, mut drawer_event_stream) = relay::<DrawerEvent>();

        let state = Actor::new(initial, {
            let animations = animations.clone();
            async move |state| {
                while let Some(event) = drawer_event_stream.next().await {
                    let (transition, targets) = {
                        let mut drawer = state.lock_mut();
                        let transition = drawer.apply(event);
                        (transition, drawer.targets())
                    };
                    if let Some(Transition { from, to, cause }) = transition {
                        zoon::println!("Drawer {:?} -> {:?} ({:?})", from, to, cause);
                    }
                    animations.retarget(targets);
                }
            }
        });

        let defaults = ColorsSection::default();
        let colors = &config.colors;

        Self {
            state,
            drawer_event_relay,
            animations,
            width: config.drawer.width,
            z_index: config.drawer.z_index,
            handle_closed_offset_percent: config.drawer.handle_closed_offset_percent,
            tint: ColorTween::parse(
                &colors.open_tint,
                &colors.closed_tint,
                (defaults.open_tint.as_str(), defaults.closed_tint.as_str()),
            ),
            overlay: ColorTween::parse(
                &colors.overlay_open,
                &colors.overlay_closed,
                (defaults.overlay_open.as_str(), defaults.overlay_closed.as_str()),
            ),
        }
    }

    // Every UI source funnels through here so the relay has one emitter
    fn dispatch(&self, event: DrawerEvent) {
        self.drawer_event_relay.send(event);
    }

    pub fn pointer_pressed(&self, x: f64) {
        self.dispatch(DrawerEvent::PointerPressed { x });
    }

    pub fn pointer_moved(&self, x: f64) {
        self.dispatch(DrawerEvent::PointerMoved { x });
    }

    pub fn pointer_released(&self) {
        self.dispatch(DrawerEvent::PointerReleased);
    }

    pub fn pointer_cancelled(&self) {
        self.dispatch(DrawerEvent::PointerCancelled);
    }

    pub fn toggle_pressed(&self) {
        self.dispatch(DrawerEvent::TogglePressed);
    }

    pub fn outside_pressed(&self) {
        self.dispatch(DrawerEvent::OutsidePressed);
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    pub fn phase_signal(&self) -> impl Signal<Item = DrawerPhase> + use<> {
        self.state.signal().map(|drawer| drawer.phase()).dedupe()
    }

    /// Drawer `translateX` in px
    pub fn translate_x_signal(&self) -> impl Signal<Item = f64> + use<> {
        let drag_offset = self.animations.drag_offset.signal();
        let drawer_offset = self.animations.drawer_offset.signal();
        map_ref! {
            let drag_offset = drag_offset,
            let drawer_offset = drawer_offset =>
            state::rendered_translation(*drag_offset, *drawer_offset)
        }
    }

    /// Toggle button `translateX`, in percent of its own width
    pub fn handle_offset_signal(&self) -> impl Signal<Item = f64> + use<> {
        let closed_offset = self.handle_closed_offset_percent;
        self.animations
            .closed_progress
            .signal()
            .map(move |progress| progress * closed_offset)
    }

    /// Icon and text colour of the toggle buttons
    pub fn tint_signal(&self) -> impl Signal<Item = String> + use<> {
        self.tint.signal(self.animations.closed_progress.signal())
    }

    pub fn overlay_signal(&self) -> impl Signal<Item = String> + use<> {
        self.overlay.signal(self.animations.closed_progress.signal())
    }
}

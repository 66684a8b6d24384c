//! Spring-driven values for the drawer chrome

pub mod spring;

pub use spring::{Spring, SpringConfig, SpringTarget};

use crate::dataflow::{Actor, Relay, relay};
use etxe_ui::{FRAME_INTERVAL_MS, mix, parse_color, to_css};
use futures::{FutureExt, StreamExt, select};
use palette::Srgba;
use zoon::*;

/// A number that eases toward its latest target.
///
/// The Actor sleeps while the spring is at rest and ticks once per frame
/// while it moves.
#[derive(Clone, Debug)]
pub struct AnimatedValue {
    value: Actor<f64>,
    target_changed_relay: Relay<SpringTarget>,
}

impl AnimatedValue {
    pub fn new(initial: f64, config: SpringConfig) -> Self {
        let (target_changed_relay, mut target_changed_stream) = relay::<SpringTarget>();

        let value = Actor::new(initial, async move |state| {
            let mut spring = Spring::new(initial, config);
            let mut last_frame_ms = now_ms();

            loop {
                if spring.is_settled() {
                    let Some(target) = target_changed_stream.next().await else {
                        break;
                    };
                    spring.set_target(target);
                    last_frame_ms = now_ms();
                } else {
                    select! {
                        target = target_changed_stream.next() => {
                            let Some(target) = target else { break };
                            spring.set_target(target);
                        }
                        _ = Timer::sleep(FRAME_INTERVAL_MS).fuse() => {
                            let now = now_ms();
                            spring.advance(now - last_frame_ms);
                            last_frame_ms = now;
                        }
                    }
                }
                state.set_neq(spring.position());
            }
        });

        Self {
            value,
            target_changed_relay,
        }
    }

    pub fn set_target(&self, target: SpringTarget) {
        self.target_changed_relay.send(target);
    }

    pub fn signal(&self) -> impl Signal<Item = f64> + use<> {
        self.value.signal()
    }
}

// Frame timestamps; without a Performance object assume nominal frames
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(f64::from(FRAME_INTERVAL_MS))
}

/// Two colours and the CSS value at any progress between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorTween {
    from: Srgba,
    to: Srgba,
}

impl ColorTween {
    pub fn new(from: Srgba, to: Srgba) -> Self {
        Self { from, to }
    }

    /// Parse both endpoints, falling back to `fallback` for each one that
    /// is not a supported colour.
    pub fn parse(from: &str, to: &str, fallback: (&str, &str)) -> Self {
        let endpoint = |value: &str, fallback: &str| {
            parse_color(value)
                .or_else(|| parse_color(fallback))
                .unwrap_or_default()
        };
        Self::new(endpoint(from, fallback.0), endpoint(to, fallback.1))
    }

    pub fn css_at(&self, progress: f64) -> String {
        to_css(mix(self.from, self.to, progress as f32))
    }

    pub fn signal(
        self,
        progress: impl Signal<Item = f64> + 'static,
    ) -> impl Signal<Item = String> + 'static {
        progress.map(move |progress| self.css_at(progress)).dedupe_cloned()
    }
}

//! Falling emoji confetti played once when the last chapter is solved.
//!
//! The layer owns two browser timers per burst: a [`FALL_TICK_MS`] interval
//! that steps every particle and a [`CONFETTI_LIFETIME_MS`] timeout that
//! clears them. Both live in the effect's teardown, so replacing the burst or
//! unmounting the layer cancels them before they can fire.
use crate::app::ConfettiBurst;
use crate::dom::{Interval, Timeout};
use crate::game::{CONFETTI_LIFETIME_MS, ConfettiParticle, FALL_TICK_MS};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use yew::prelude::*;

/// Delay before the page scrolls back up to the reward.
const SCROLL_DELAY_MS: u32 = 300;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub burst: ConfettiBurst,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Falling {
    pub particles: Vec<ConfettiParticle>,
}

pub enum FallAction {
    Load(Rc<Vec<ConfettiParticle>>),
    Tick,
    Clear,
}

impl Reducible for Falling {
    type Action = FallAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FallAction::Load(batch) => {
                let mut particles = self.particles.clone();
                particles.extend(batch.iter().cloned());
                Rc::new(Self { particles })
            }
            FallAction::Tick if self.particles.is_empty() => self,
            FallAction::Tick => {
                let particles = self
                    .particles
                    .iter()
                    .cloned()
                    .map(|mut p| {
                        p.step();
                        p
                    })
                    .filter(|p| !p.is_offscreen())
                    .collect();
                Rc::new(Self { particles })
            }
            FallAction::Clear => Rc::new(Self::default()),
        }
    }
}

struct FallTimers {
    _tick: Interval,
    _clear: Timeout,
    _scroll: Timeout,
}

fn start_timers(dispatcher: &UseReducerDispatcher<Falling>) -> Result<FallTimers, JsValue> {
    let tick = {
        let dispatcher = dispatcher.clone();
        Interval::new(FALL_TICK_MS, move || dispatcher.dispatch(FallAction::Tick))?
    };
    let clear = {
        let dispatcher = dispatcher.clone();
        Timeout::new(CONFETTI_LIFETIME_MS, move || {
            dispatcher.dispatch(FallAction::Clear);
        })?
    };
    let scroll = Timeout::new(SCROLL_DELAY_MS, crate::dom::scroll_to_top)?;
    Ok(FallTimers {
        _tick: tick,
        _clear: clear,
        _scroll: scroll,
    })
}

fn particle_style(p: &ConfettiParticle) -> String {
    format!(
        "left:{:.1}%;top:{:.1}%;transform:rotate({}deg)",
        p.x, p.y, p.rotation
    )
}

#[function_component(ConfettiLayer)]
pub fn confetti_layer(p: &Props) -> Html {
    let falling = use_reducer(Falling::default);
    {
        let dispatcher = falling.dispatcher();
        use_effect_with(p.burst.clone(), move |burst| {
            let mut timers = None;
            if !burst.is_empty() {
                dispatcher.dispatch(FallAction::Load(burst.particles.clone()));
                match start_timers(&dispatcher) {
                    Ok(started) => timers = Some(started),
                    Err(err) => {
                        log::warn!("confetti timers unavailable: {}", crate::dom::js_error_message(&err));
                        dispatcher.dispatch(FallAction::Clear);
                    }
                }
            }
            move || drop(timers)
        });
    }

    html! {
        <div class="confetti-layer" aria-hidden="true">
            { for falling.particles.iter().map(|particle| html! {
                <span key={particle.id.to_string()} class="confetti" style={particle_style(particle)}>
                    { particle.glyph }
                </span>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{DEFAULT_BURST, confetti_burst, seeded_rng};

    fn loaded() -> Rc<Falling> {
        let batch = Rc::new(confetti_burst(&mut seeded_rng(5), DEFAULT_BURST, 0));
        Rc::new(Falling::default()).reduce(FallAction::Load(batch))
    }

    #[test]
    fn bursts_accumulate_until_cleared() {
        let once = loaded();
        assert_eq!(once.particles.len(), DEFAULT_BURST);
        let batch = Rc::new(confetti_burst(&mut seeded_rng(6), 10, 1_000));
        let twice = once.reduce(FallAction::Load(batch));
        assert_eq!(twice.particles.len(), DEFAULT_BURST + 10);
        assert!(twice.reduce(FallAction::Clear).particles.is_empty());
    }

    #[test]
    fn ticks_move_particles_and_drop_offscreen_ones() {
        let start = loaded();
        let first_y = start.particles[0].y;
        let moved = start.reduce(FallAction::Tick);
        assert!(moved.particles[0].y > first_y);

        let mut state = moved;
        for _ in 0..400 {
            state = state.reduce(FallAction::Tick);
        }
        assert!(state.particles.is_empty());
    }

    #[test]
    fn style_positions_and_rotates() {
        let state = loaded();
        let particle = &state.particles[0];
        let style = particle_style(particle);
        assert!(style.starts_with("left:"));
        assert!(style.contains("top:-5.0%"));
        assert!(style.ends_with(&format!("rotate({}deg)", particle.rotation)));
    }
}

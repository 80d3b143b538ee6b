use crate::game::{
    ConfettiParticle, Configuration, DEFAULT_BURST, Hint, ProgressController, WebProgressStorage,
    confetti_burst, page_configuration, seeded_rng,
};
use crate::i18n::t;
use std::rc::Rc;
use yew::prelude::*;

/// Feedback shown under the chapter bar after "Get hint".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintNotice {
    Revealed(Hint),
    Exhausted,
}

impl HintNotice {
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::Revealed(hint) => {
                let text = t(hint.key());
                if text == hint.key() {
                    hint.text().to_string()
                } else {
                    text
                }
            }
            Self::Exhausted => t("hint.exhausted"),
        }
    }
}

/// The latest confetti burst. A new burst carries fresh particle ids so the
/// layer can tell bursts apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfettiBurst {
    pub particles: Rc<Vec<ConfettiParticle>>,
    next_id: u64,
}

impl ConfettiBurst {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// A fresh burst seeded from `seed`, numbered after this one.
    #[must_use]
    pub fn next(&self, seed: u64) -> Self {
        let particles = confetti_burst(&mut seeded_rng(seed), DEFAULT_BURST, self.next_id);
        let next_id = particles.last().map_or(self.next_id, |p| p.id + 1);
        Self {
            particles: Rc::new(particles),
            next_id,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: UseStateHandle<Configuration>,
    pub progress: UseStateHandle<ProgressController<WebProgressStorage>>,
    pub hint: UseStateHandle<Option<HintNotice>>,
    pub confetti: UseStateHandle<ConfettiBurst>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        config: use_state(page_configuration),
        progress: use_state(|| ProgressController::new(WebProgressStorage)),
        hint: use_state(|| None::<HintNotice>),
        confetti: use_state(ConfettiBurst::default),
        current_language: use_state(crate::i18n::current_lang),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bursts_number_particles_consecutively() {
        let first = ConfettiBurst::default().next(1);
        assert_eq!(first.particles.len(), DEFAULT_BURST);
        let second = first.next(2);
        let last_of_first = first.particles.last().map(|p| p.id);
        let first_of_second = second.particles.first().map(|p| p.id);
        assert_eq!(last_of_first.map(|id| id + 1), first_of_second);
        assert_ne!(first, second);
    }

    #[test]
    fn hint_notices_use_the_bundle() {
        crate::i18n::set_lang("en");
        assert_eq!(
            HintNotice::Revealed(Hint::Cipher).message(),
            Hint::Cipher.text()
        );
        assert_eq!(HintNotice::Exhausted.message(), "No hints left.");
        crate::i18n::set_lang("es");
        assert_eq!(
            HintNotice::Revealed(Hint::NoneNeeded).message(),
            "¡Aquí no hace falta pista!"
        );
        crate::i18n::set_lang("en");
    }
}

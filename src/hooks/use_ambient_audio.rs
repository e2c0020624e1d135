use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::services::ambient_audio::log_outcomes;
use crate::services::{AmbientAudioState, AmbientController, WebAudioBackend};

/// Keep the ambient soundscape in step with the toggle and the current route.
///
/// The controller lives as long as the calling component. Every change of
/// either flag tears down the previous playback before starting again, and
/// unmounting releases whatever is still playing.
pub fn use_ambient_audio(enabled: bool, is_live_session: bool) {
    let controller = use_hook(|| Rc::new(RefCell::new(AmbientController::new(WebAudioBackend))));

    let effect_controller = controller.clone();
    use_effect(use_reactive((&enabled, &is_live_session), move |(enabled, is_live_session)| {
        let state = AmbientAudioState { enabled, is_live_session };
        let session = effect_controller.borrow_mut().reconcile(state);

        match session {
            Some(session) => {
                let task_controller = effect_controller.clone();
                spawn(async move {
                    let outcomes = session.start().await;
                    let audible = log_outcomes(&outcomes);
                    log::debug!(
                        "Ambient audio is now {:?}, {} of {} tracks audible",
                        task_controller.borrow().phase(),
                        audible,
                        outcomes.len()
                    );
                });
            }
            None => {
                log::debug!("Ambient audio is now {:?}", effect_controller.borrow().phase());
            }
        }
    }));

    use_drop(move || {
        controller.borrow_mut().stop();
        log::debug!("Ambient audio released on unmount");
    });
}

use async_trait::async_trait;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use super::ambient_audio::{AmbientAudio, AmbientError, AmbientTrack, AudioBackend};

fn describe(value: JsValue) -> String {
    format!("{:?}", value)
}

/// Detached `<audio>` elements, never attached to the document
#[derive(Clone, Copy, Debug, Default)]
pub struct WebAudioBackend;

pub struct WebAudio {
    element: HtmlAudioElement,
}

impl AudioBackend for WebAudioBackend {
    type Audio = WebAudio;

    #[cfg(target_arch = "wasm32")]
    fn acquire(&self, track: &AmbientTrack) -> Result<WebAudio, AmbientError> {
        HtmlAudioElement::new_with_src(track.url)
            .map(|element| WebAudio { element })
            .map_err(|e| AmbientError::Acquire {
                track: track.name,
                reason: describe(e),
            })
    }

    // web-sys bindings panic outside the browser, e.g. when the shell is
    // rendered to a string on the host.
    #[cfg(not(target_arch = "wasm32"))]
    fn acquire(&self, track: &AmbientTrack) -> Result<WebAudio, AmbientError> {
        Err(AmbientError::Acquire {
            track: track.name,
            reason: "audio elements are only available in the browser".to_string(),
        })
    }
}

#[async_trait(?Send)]
impl AmbientAudio for WebAudio {
    fn configure(&self, looping: bool, volume: f64) {
        self.element.set_loop(looping);
        self.element.set_volume(volume.clamp(0.0, 1.0));
    }

    async fn play(&self) -> Result<(), String> {
        // play() returns a Promise that rejects when autoplay is blocked
        let promise = self.element.play().map_err(describe)?;
        JsFuture::from(promise).await.map(|_| ()).map_err(describe)
    }

    fn pause(&self) -> Result<(), String> {
        self.element.pause().map_err(describe)
    }
}

impl Drop for WebAudio {
    fn drop(&mut self) {
        // Dropping the source stops any pending network fetch
        if let Err(e) = self.element.pause() {
            log::debug!("Pause failed: {:?}", e);
        }
        if let Err(e) = self.element.remove_attribute("src") {
            log::debug!("Failed to clear audio source: {:?}", e);
        }
        self.element.load();
    }
}

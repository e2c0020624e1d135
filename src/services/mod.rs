// Browser-facing services used by the shell

pub mod ambient_audio;
pub mod web_audio;

pub use ambient_audio::{AmbientAudioState, AmbientController};
pub use web_audio::WebAudioBackend;

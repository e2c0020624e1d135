pub mod use_ambient_audio;

pub use use_ambient_audio::use_ambient_audio;

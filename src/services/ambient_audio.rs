//! Ambient soundscape lifecycle for the app shell.
//!
//! The controller owns every audio handle it acquires. Each call to
//! [`AmbientController::reconcile`] releases the previous session before
//! deciding whether to start a new one, so the toggle, route changes and
//! unmount all go through the same release path.

use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;
use thiserror::Error;

/// A looping background track
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientTrack {
    pub name: &'static str,
    pub url: &'static str,
    pub volume: f64,
}

pub const WATER_TRACK: AmbientTrack = AmbientTrack {
    name: "water",
    url: "https://www.soundjay.com/misc/sounds/water-stream-01.mp3",
    volume: 0.3,
};

pub const MUSIC_TRACK: AmbientTrack = AmbientTrack {
    name: "music",
    url: "https://www.soundjay.com/misc/sounds/ambient-music-01.mp3",
    volume: 0.2,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmbientError {
    #[error("Failed to create audio element for {track} track: {reason}")]
    Acquire { track: &'static str, reason: String },

    #[error("Playback of {track} track was refused: {reason}")]
    PlaybackRefused { track: &'static str, reason: String },
}

/// Result of a best-effort start. Only ever logged.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackOutcome {
    Started,
    Blocked(AmbientError),
    /// The session was released before the start finished
    Cancelled,
}

/// Inputs the controller re-evaluates on every change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbientAudioState {
    pub enabled: bool,
    pub is_live_session: bool,
}

impl Default for AmbientAudioState {
    fn default() -> Self {
        Self {
            enabled: true,
            is_live_session: false,
        }
    }
}

impl AmbientAudioState {
    pub fn should_play(&self) -> bool {
        self.enabled && !self.is_live_session
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbientPhase {
    Playing,
    Stopped,
    /// Live sessions stay silent regardless of the toggle
    Suppressed,
}

/// A single audio handle the controller can drive
#[async_trait(?Send)]
pub trait AmbientAudio {
    fn configure(&self, looping: bool, volume: f64);

    /// Resolves once the platform accepted (or refused) playback
    async fn play(&self) -> Result<(), String>;

    fn pause(&self) -> Result<(), String>;
}

/// Creates audio handles for a track
pub trait AudioBackend {
    type Audio: AmbientAudio;

    fn acquire(&self, track: &AmbientTrack) -> Result<Self::Audio, AmbientError>;
}

fn pause_quietly<A: AmbientAudio>(audio: &A, track: &AmbientTrack) {
    if let Err(e) = audio.pause() {
        log::debug!("Pause failed for {} track: {}", track.name, e);
    }
}

/// Both tracks of one playback period. Released exactly once.
pub struct AmbientSession<A: AmbientAudio> {
    water: A,
    music: A,
    released: Cell<bool>,
}

impl<A: AmbientAudio> AmbientSession<A> {
    fn open<B: AudioBackend<Audio = A>>(backend: &B) -> Result<Self, AmbientError> {
        let water = backend.acquire(&WATER_TRACK)?;
        water.configure(true, WATER_TRACK.volume);

        let music = backend.acquire(&MUSIC_TRACK)?;
        music.configure(true, MUSIC_TRACK.volume);

        Ok(Self {
            water,
            music,
            released: Cell::new(false),
        })
    }

    /// Start water then music. A failure on one does not prevent the other.
    pub async fn start(&self) -> [PlaybackOutcome; 2] {
        let water = self.start_track(&self.water, &WATER_TRACK).await;
        let music = self.start_track(&self.music, &MUSIC_TRACK).await;
        [water, music]
    }

    async fn start_track(&self, audio: &A, track: &AmbientTrack) -> PlaybackOutcome {
        if self.is_released() {
            return PlaybackOutcome::Cancelled;
        }

        let result = audio.play().await;

        // Released while the start was pending: nothing may keep playing.
        if self.is_released() {
            pause_quietly(audio, track);
            return PlaybackOutcome::Cancelled;
        }

        match result {
            Ok(()) => PlaybackOutcome::Started,
            Err(reason) => PlaybackOutcome::Blocked(AmbientError::PlaybackRefused {
                track: track.name,
                reason,
            }),
        }
    }

    pub fn release(&self) {
        if self.released.replace(true) {
            return;
        }
        pause_quietly(&self.water, &WATER_TRACK);
        pause_quietly(&self.music, &MUSIC_TRACK);
    }

    pub fn is_released(&self) -> bool {
        self.released.get()
    }
}

impl<A: AmbientAudio> Drop for AmbientSession<A> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Owns the ambient session for the lifetime of the shell
pub struct AmbientController<B: AudioBackend> {
    backend: B,
    session: Option<Rc<AmbientSession<B::Audio>>>,
    state: AmbientAudioState,
}

impl<B: AudioBackend> AmbientController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            session: None,
            state: AmbientAudioState::default(),
        }
    }

    /// Tear down any current playback, then open a new session if `state`
    /// allows it. The caller starts the returned session.
    pub fn reconcile(&mut self, state: AmbientAudioState) -> Option<Rc<AmbientSession<B::Audio>>> {
        self.state = state;
        self.stop();

        if !state.should_play() {
            log::debug!(
                "Ambient audio off (enabled: {}, live session: {})",
                state.enabled,
                state.is_live_session
            );
            return None;
        }

        match AmbientSession::open(&self.backend) {
            Ok(session) => {
                let session = Rc::new(session);
                self.session = Some(session.clone());
                Some(session)
            }
            Err(e) => {
                log::error!("{}", e);
                None
            }
        }
    }

    /// Pause and release the current session, if any
    pub fn stop(&mut self) {
        if let Some(session) = self.session.take() {
            session.release();
        }
    }

    pub fn phase(&self) -> AmbientPhase {
        if self.session.is_some() {
            AmbientPhase::Playing
        } else if self.state.is_live_session {
            AmbientPhase::Suppressed
        } else {
            AmbientPhase::Stopped
        }
    }
}

impl<B: AudioBackend> Drop for AmbientController<B> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Write the diagnostic for each start attempt and return how many tracks
/// are audible. A refused start leaves the session open but silent.
pub fn log_outcomes(outcomes: &[PlaybackOutcome]) -> usize {
    let mut audible = 0;
    for outcome in outcomes {
        match outcome {
            PlaybackOutcome::Started => {
                audible += 1;
                log::debug!("Ambient track started");
            }
            PlaybackOutcome::Blocked(e) => {
                log::info!("Audio autoplay prevented - user interaction required ({})", e)
            }
            PlaybackOutcome::Cancelled => log::debug!("Ambient track start cancelled"),
        }
    }
    audible
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Configure { looping: bool, volume: f64 },
        Play,
        Pause,
    }

    #[derive(Default)]
    struct FakeShared {
        calls: RefCell<Vec<(&'static str, Call)>>,
        handles: RefCell<Vec<(&'static str, Rc<Cell<bool>>)>>,
        refused: RefCell<Vec<&'static str>>,
        fail_acquire: Cell<bool>,
        water_gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    #[derive(Clone, Default)]
    struct FakeBackend {
        shared: Rc<FakeShared>,
    }

    impl FakeBackend {
        fn is_playing(&self, name: &str) -> bool {
            self.shared
                .handles
                .borrow()
                .iter()
                .any(|(n, playing)| *n == name && playing.get())
        }

        fn count(&self, name: &str, call: &Call) -> usize {
            self.shared
                .calls
                .borrow()
                .iter()
                .filter(|(n, c)| *n == name && c == call)
                .count()
        }

        fn total_calls(&self) -> usize {
            self.shared.calls.borrow().len()
        }
    }

    struct FakeAudio {
        name: &'static str,
        playing: Rc<Cell<bool>>,
        shared: Rc<FakeShared>,
    }

    #[async_trait(?Send)]
    impl AmbientAudio for FakeAudio {
        fn configure(&self, looping: bool, volume: f64) {
            self.shared
                .calls
                .borrow_mut()
                .push((self.name, Call::Configure { looping, volume }));
        }

        async fn play(&self) -> Result<(), String> {
            self.shared.calls.borrow_mut().push((self.name, Call::Play));

            if self.name == WATER_TRACK.name {
                let gate = self.shared.water_gate.borrow_mut().take();
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
            }

            if self.shared.refused.borrow().contains(&self.name) {
                return Err("NotAllowedError".to_string());
            }
            self.playing.set(true);
            Ok(())
        }

        fn pause(&self) -> Result<(), String> {
            self.shared.calls.borrow_mut().push((self.name, Call::Pause));
            self.playing.set(false);
            Ok(())
        }
    }

    impl AudioBackend for FakeBackend {
        type Audio = FakeAudio;

        fn acquire(&self, track: &AmbientTrack) -> Result<FakeAudio, AmbientError> {
            if self.shared.fail_acquire.get() {
                return Err(AmbientError::Acquire {
                    track: track.name,
                    reason: "no audio support".to_string(),
                });
            }
            let playing = Rc::new(Cell::new(false));
            self.shared
                .handles
                .borrow_mut()
                .push((track.name, playing.clone()));
            Ok(FakeAudio {
                name: track.name,
                playing,
                shared: self.shared.clone(),
            })
        }
    }

    fn state(enabled: bool, is_live_session: bool) -> AmbientAudioState {
        AmbientAudioState {
            enabled,
            is_live_session,
        }
    }

    /// Reconcile and drive the start to completion, like the shell's effect does
    fn apply(
        controller: &mut AmbientController<FakeBackend>,
        next: AmbientAudioState,
    ) -> Option<[PlaybackOutcome; 2]> {
        controller
            .reconcile(next)
            .map(|session| block_on(session.start()))
    }

    #[test]
    fn test_should_play() {
        assert!(AmbientAudioState::default().should_play());
        assert!(state(true, false).should_play());
        assert!(!state(false, false).should_play());
        assert!(!state(true, true).should_play());
        assert!(!state(false, true).should_play());
    }

    #[test]
    fn test_enabled_outside_live_session_starts_both_tracks() {
        let backend = FakeBackend::default();
        let mut controller = AmbientController::new(backend.clone());

        let outcomes = apply(&mut controller, state(true, false));

        assert_eq!(
            outcomes,
            Some([PlaybackOutcome::Started, PlaybackOutcome::Started])
        );
        assert_eq!(backend.count("water", &Call::Play), 1);
        assert_eq!(backend.count("music", &Call::Play), 1);
        assert!(backend.is_playing("water"));
        assert!(backend.is_playing("music"));
        assert_eq!(controller.phase(), AmbientPhase::Playing);
    }

    #[test]
    fn test_tracks_loop_with_water_louder_than_music() {
        let backend = FakeBackend::default();
        let mut controller = AmbientController::new(backend.clone());
        apply(&mut controller, state(true, false));

        assert_eq!(
            backend.count("water", &Call::Configure { looping: true, volume: 0.3 }),
            1
        );
        assert_eq!(
            backend.count("music", &Call::Configure { looping: true, volume: 0.2 }),
            1
        );
        assert!(WATER_TRACK.volume > MUSIC_TRACK.volume);
    }

    #[test]
    fn test_disabled_requests_no_start() {
        let backend = FakeBackend::default();
        let mut controller = AmbientController::new(backend.clone());

        assert!(apply(&mut controller, state(false, false)).is_none());
        assert_eq!(backend.total_calls(), 0);
        assert_eq!(controller.phase(), AmbientPhase::Stopped);
    }

    #[test]
    fn test_live_session_is_suppressed() {
        let backend = FakeBackend::default();
        let mut controller = AmbientController::new(backend.clone());

        assert!(apply(&mut controller, state(true, true)).is_none());
        assert_eq!(backend.total_calls(), 0);
        assert_eq!(controller.phase(), AmbientPhase::Suppressed);
    }

    #[test]
    fn test_toggle_off_and_on() {
        let backend = FakeBackend::default();
        let mut controller = AmbientController::new(backend.clone());
        apply(&mut controller, state(true, false));

        apply(&mut controller, state(false, false));
        assert!(!backend.is_playing("water"));
        assert!(!backend.is_playing("music"));
        assert_eq!(backend.count("water", &Call::Pause), 1);
        assert_eq!(backend.count("music", &Call::Pause), 1);
        assert_eq!(controller.phase(), AmbientPhase::Stopped);

        apply(&mut controller, state(true, false));
        assert!(backend.is_playing("water"));
        assert!(backend.is_playing("music"));
        assert_eq!(backend.count("water", &Call::Play), 2);
        assert_eq!(backend.count("music", &Call::Play), 2);
    }

    #[test]
    fn test_route_into_live_session_and_back() {
        let backend = FakeBackend::default();
        let mut controller = AmbientController::new(backend.clone());
        apply(&mut controller, state(true, false));

        apply(&mut controller, state(true, true));
        assert!(!backend.is_playing("water"));
        assert!(!backend.is_playing("music"));
        assert_eq!(controller.phase(), AmbientPhase::Suppressed);

        apply(&mut controller, state(true, false));
        assert!(backend.is_playing("water"));
        assert!(backend.is_playing("music"));
        assert_eq!(controller.phase(), AmbientPhase::Playing);
    }

    #[test]
    fn test_leaving_live_session_while_disabled_stays_silent() {
        let backend = FakeBackend::default();
        let mut controller = AmbientController::new(backend.clone());
        apply(&mut controller, state(false, true));

        assert!(apply(&mut controller, state(false, false)).is_none());
        assert_eq!(backend.count("water", &Call::Play), 0);
    }

    #[test]
    fn test_drop_releases_playing_tracks() {
        let backend = FakeBackend::default();
        {
            let mut controller = AmbientController::new(backend.clone());
            apply(&mut controller, state(true, false));
            assert!(backend.is_playing("water"));
        }
        assert!(!backend.is_playing("water"));
        assert!(!backend.is_playing("music"));
    }

    #[test]
    fn test_refused_water_still_attempts_music() {
        let backend = FakeBackend::default();
        backend.shared.refused.borrow_mut().push("water");
        let mut controller = AmbientController::new(backend.clone());

        let outcomes = apply(&mut controller, state(true, false)).unwrap();

        assert!(matches!(
            &outcomes[0],
            PlaybackOutcome::Blocked(AmbientError::PlaybackRefused { track: "water", .. })
        ));
        assert_eq!(outcomes[1], PlaybackOutcome::Started);
        assert!(!backend.is_playing("water"));
        assert!(backend.is_playing("music"));
        // Refusal is not retried
        assert_eq!(backend.count("water", &Call::Play), 1);
    }

    #[test]
    fn test_refused_autoplay_keeps_session_open_but_silent() {
        let backend = FakeBackend::default();
        backend.shared.refused.borrow_mut().extend(["water", "music"]);
        let mut controller = AmbientController::new(backend.clone());

        let outcomes = apply(&mut controller, state(true, false)).unwrap();

        assert!(outcomes
            .iter()
            .all(|outcome| matches!(outcome, PlaybackOutcome::Blocked(_))));
        assert_eq!(log_outcomes(&outcomes), 0);
        // The flags still ask for sound, so the next toggle or route change
        // tears this session down like any other.
        assert_eq!(controller.phase(), AmbientPhase::Playing);
        assert!(!backend.is_playing("water"));
        assert!(!backend.is_playing("music"));
    }

    #[test]
    fn test_log_outcomes_counts_started_tracks() {
        let blocked = PlaybackOutcome::Blocked(AmbientError::PlaybackRefused {
            track: "water",
            reason: "NotAllowedError".to_string(),
        });
        assert_eq!(
            log_outcomes(&[PlaybackOutcome::Started, PlaybackOutcome::Started]),
            2
        );
        assert_eq!(log_outcomes(&[blocked, PlaybackOutcome::Started]), 1);
        assert_eq!(
            log_outcomes(&[PlaybackOutcome::Cancelled, PlaybackOutcome::Cancelled]),
            0
        );
    }

    #[test]
    fn test_acquire_failure_leaves_controller_stopped() {
        let backend = FakeBackend::default();
        backend.shared.fail_acquire.set(true);
        let mut controller = AmbientController::new(backend.clone());

        assert!(apply(&mut controller, state(true, false)).is_none());
        assert_eq!(backend.count("water", &Call::Play), 0);
        assert_eq!(controller.phase(), AmbientPhase::Stopped);
    }

    #[test]
    fn test_release_during_pending_start_leaves_nothing_playing() {
        let backend = FakeBackend::default();
        let (open_gate, gate) = oneshot::channel();
        *backend.shared.water_gate.borrow_mut() = Some(gate);
        let mut controller = AmbientController::new(backend.clone());

        let session = controller.reconcile(state(true, false)).unwrap();

        let outcomes = block_on(async {
            let mut start = Box::pin(session.start());
            assert!(futures::poll!(start.as_mut()).is_pending());

            controller.stop();
            let _ = open_gate.send(());
            start.await
        });

        assert_eq!(
            outcomes,
            [PlaybackOutcome::Cancelled, PlaybackOutcome::Cancelled]
        );
        assert!(!backend.is_playing("water"));
        assert!(!backend.is_playing("music"));
        assert_eq!(backend.count("music", &Call::Play), 0);
    }

    #[test]
    fn test_release_is_idempotent() {
        let backend = FakeBackend::default();
        let mut controller = AmbientController::new(backend.clone());
        let session = controller.reconcile(state(true, false)).unwrap();

        session.release();
        controller.stop();
        drop(session);

        assert_eq!(backend.count("water", &Call::Pause), 1);
        assert_eq!(backend.count("music", &Call::Pause), 1);
    }
}

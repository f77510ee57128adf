//! Playlist cursor and play/pause controller for the music-player widget.
//!
//! All session state (play flag, cursor, volume, mute) lives in one
//! [`Session`] owned by the [`PlaybackController`]. The controller talks to the
//! page through two seams: [`AudioOutput`] for the media element and its audio
//! context, and [`PlayerView`] for titles, icons and the visualizer fade.

use crate::constants::{ART_DIR, MUSIC_DIR};
use crate::core::error::{LandingError, Result};
use rand::Rng;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub file_name: String,
    pub album_art: String,
}

impl Track {
    pub fn new(title: &str, artist: &str, file_name: &str, album_art: &str) -> Self {
        Self {
            title: title.to_owned(),
            artist: artist.to_owned(),
            file_name: file_name.to_owned(),
            album_art: album_art.to_owned(),
        }
    }

    pub fn audio_src(&self) -> String {
        format!("{}/{}", MUSIC_DIR, self.file_name)
    }

    pub fn art_src(&self) -> String {
        format!("{}/{}", ART_DIR, self.album_art)
    }
}

/// Immutable, non-empty track list.
#[derive(Clone, Debug)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(LandingError::EmptyPlaylist);
        }
        Ok(Self { tracks })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.tracks.len()
    }

    #[inline]
    pub fn prev_index(&self, index: usize) -> usize {
        let n = self.tracks.len();
        (index % n + n - 1) % n
    }

    pub fn random_index<R: Rng>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.tracks.len())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

/// Audio context lifecycle as seen by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// No analysis pipeline was built (not yet entered, or unsupported).
    Absent,
    Suspended,
    Running,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fade {
    In,
    Out,
}

impl Fade {
    pub fn opacity(self) -> f64 {
        match self {
            Fade::In => 1.0,
            Fade::Out => 0.0,
        }
    }
}

pub trait AudioOutput {
    fn load(&mut self, track: &Track);
    /// Start playback attempt number `attempt`. Browsers may also reject
    /// asynchronously; that path is reported through
    /// [`PlaybackController::on_play_rejected`] with the same number.
    fn play(&mut self, attempt: u64) -> Result<()>;
    fn pause(&mut self);
    fn ended(&self) -> bool;
    fn set_volume(&mut self, volume: f64);
    fn set_muted(&mut self, muted: bool);
    fn context_state(&self) -> ContextState;
    fn resume_context(&mut self);
}

pub trait PlayerView {
    fn show_track(&mut self, track: &Track);
    fn show_state(&mut self, state: PlaybackState);
    fn fade_visualizer(&mut self, fade: Fade);
}

/// Mutable per-visit session state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Session {
    pub state: PlaybackState,
    pub cursor: usize,
    pub volume: f64,
    pub muted: bool,
}

pub struct PlaybackController<A, V> {
    playlist: Playlist,
    session: Session,
    play_attempt: u64,
    audio: A,
    view: V,
}

impl<A: AudioOutput, V: PlayerView> PlaybackController<A, V> {
    /// Load the track at `start_index` (wrapped) in the `Paused` state, muted
    /// at `initial_volume`.
    pub fn new(
        playlist: Playlist,
        audio: A,
        view: V,
        start_index: usize,
        initial_volume: f64,
    ) -> Self {
        let mut ctl = Self {
            session: Session {
                state: PlaybackState::Paused,
                cursor: start_index % playlist.len(),
                volume: initial_volume,
                muted: true,
            },
            play_attempt: 0,
            playlist,
            audio,
            view,
        };
        ctl.audio.set_volume(initial_volume);
        ctl.audio.set_muted(true);
        ctl.view.show_state(PlaybackState::Paused);
        ctl.select(ctl.session.cursor);
        ctl
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> PlaybackState {
        self.session.state
    }

    pub fn cursor(&self) -> usize {
        self.session.cursor
    }

    /// Number of the most recent play attempt; 0 before the first.
    pub fn play_attempt(&self) -> u64 {
        self.play_attempt
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.playlist.get(self.session.cursor)
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Load track `index` (wrapped); keeps playing if already playing.
    pub fn select(&mut self, index: usize) {
        let index = index % self.playlist.len();
        self.session.cursor = index;
        if let Some(track) = self.playlist.get(index) {
            log::info!("[player] load #{} {} - {}", index, track.title, track.artist);
            self.audio.load(track);
            self.view.show_track(track);
        }
        if self.session.state == PlaybackState::Playing {
            self.start_playback();
        }
    }

    pub fn next(&mut self) {
        self.select(self.playlist.next_index(self.session.cursor));
    }

    pub fn prev(&mut self) {
        self.select(self.playlist.prev_index(self.session.cursor));
    }

    pub fn toggle(&mut self) {
        if self.audio.context_state() == ContextState::Suspended {
            self.audio.resume_context();
        }
        if self.session.state == PlaybackState::Paused || self.audio.ended() {
            self.session.state = PlaybackState::Playing;
            self.view.show_state(PlaybackState::Playing);
            self.view.fade_visualizer(Fade::In);
            self.start_playback();
        } else {
            self.audio.pause();
            self.session.state = PlaybackState::Paused;
            self.view.show_state(PlaybackState::Paused);
            self.view.fade_visualizer(Fade::Out);
        }
    }

    fn start_playback(&mut self) {
        self.play_attempt += 1;
        if let Err(e) = self.audio.play(self.play_attempt) {
            self.on_play_rejected(self.play_attempt, &e.to_string());
        }
    }

    /// Platform refused to start playback attempt `attempt`; fall back to
    /// `Paused`. Rejections of superseded attempts are ignored.
    pub fn on_play_rejected(&mut self, attempt: u64, reason: &str) {
        if attempt != self.play_attempt {
            log::info!("[player] ignoring stale play rejection #{}: {}", attempt, reason);
            return;
        }
        log::warn!("[player] audio play blocked: {}", reason);
        if self.session.state == PlaybackState::Playing {
            self.session.state = PlaybackState::Paused;
            self.view.show_state(PlaybackState::Paused);
            self.view.fade_visualizer(Fade::Out);
        }
    }

    /// Clear the initial mute (after the splash gate).
    pub fn unmute(&mut self) {
        self.session.muted = false;
        self.audio.set_muted(false);
    }

    /// Volume slider input; zero doubles as mute.
    pub fn set_volume(&mut self, volume: f64) {
        let volume = volume.clamp(0.0, 1.0);
        self.session.volume = volume;
        self.session.muted = volume == 0.0;
        self.audio.set_volume(volume);
        self.audio.set_muted(self.session.muted);

        match self.audio.context_state() {
            ContextState::Suspended if volume > 0.0 => {
                self.audio.resume_context();
                self.view.fade_visualizer(Fade::In);
            }
            ContextState::Running if volume == 0.0 => {
                self.view.fade_visualizer(Fade::Out);
            }
            _ => {}
        }
    }
}

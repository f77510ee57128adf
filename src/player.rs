use crate::audio::{ElementAudio, SharedContext};
use crate::core::{
    Fade, LandingConfig, PlaybackController, PlaybackState, PlayerView, Playlist, Track,
};
use crate::dom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type Controller = PlaybackController<ElementAudio, DomPlayerView>;

/// Player widget DOM: title/artist labels, album art, play/pause icons and
/// the visualizer canvas whose opacity follows playback.
pub struct DomPlayerView {
    title: web::Element,
    artist: web::Element,
    album_art: web::HtmlImageElement,
    play_icon: web::Element,
    pause_icon: web::Element,
    visualizer: web::HtmlElement,
}

impl DomPlayerView {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        let player: web::Element = dom::by_id(document, dom::PLAYER_ID)?;
        let button: web::Element = dom::by_id(document, dom::PLAY_PAUSE_ID)?;
        Ok(Self {
            title: dom::query(&player, dom::TITLE_SELECTOR)?,
            artist: dom::query(&player, dom::ARTIST_SELECTOR)?,
            album_art: dom::by_id(document, dom::ALBUM_ART_ID)?,
            play_icon: dom::query(&button, dom::PLAY_ICON_SELECTOR)?,
            pause_icon: dom::query(&button, dom::PAUSE_ICON_SELECTOR)?,
            visualizer: dom::by_id(document, dom::VISUALIZER_CANVAS_ID)?,
        })
    }
}

impl PlayerView for DomPlayerView {
    fn show_track(&mut self, track: &Track) {
        self.title.set_text_content(Some(&track.title));
        self.artist.set_text_content(Some(&track.artist));
        self.album_art.set_src(&track.art_src());
        dom::set_style(&self.album_art, "display", "block");
    }

    fn show_state(&mut self, state: PlaybackState) {
        let playing = state == PlaybackState::Playing;
        dom::set_hidden(&self.play_icon, playing);
        dom::set_hidden(&self.pause_icon, !playing);
    }

    fn fade_visualizer(&mut self, fade: Fade) {
        dom::set_style(&self.visualizer, "opacity", &fade.opacity().to_string());
    }
}

/// Build the controller on a random starting track and route asynchronous
/// play rejections back into it.
pub fn build_controller(
    document: &web::Document,
    config: &LandingConfig,
    context: SharedContext,
) -> anyhow::Result<Rc<RefCell<Controller>>> {
    let audio_el: web::HtmlMediaElement = dom::by_id(document, dom::AUDIO_ID)?;
    let audio = ElementAudio::new(audio_el, context);
    let reject = audio.reject_handler();
    let view = DomPlayerView::from_document(document)?;

    let playlist = Playlist::new(config.tracks.clone())?;
    let start = playlist.random_index(&mut StdRng::from_entropy());
    let controller = Rc::new(RefCell::new(PlaybackController::new(
        playlist,
        audio,
        view,
        start,
        config.initial_volume,
    )));

    let weak = Rc::downgrade(&controller);
    *reject.borrow_mut() = Some(Box::new(move |attempt: u64, reason: String| {
        if let Some(c) = weak.upgrade() {
            c.borrow_mut().on_play_rejected(attempt, &reason);
        }
    }));
    Ok(controller)
}

pub fn wire_buttons(
    document: &web::Document,
    controller: &Rc<RefCell<Controller>>,
) -> anyhow::Result<()> {
    let play: web::Element = dom::by_id(document, dom::PLAY_PAUSE_ID)?;
    let prev: web::Element = dom::by_id(document, dom::PREV_ID)?;
    let next: web::Element = dom::by_id(document, dom::NEXT_ID)?;

    let c = controller.clone();
    dom::add_click_listener(&play, move || c.borrow_mut().toggle());
    let c = controller.clone();
    dom::add_click_listener(&prev, move || c.borrow_mut().prev());
    let c = controller.clone();
    dom::add_click_listener(&next, move || c.borrow_mut().next());
    Ok(())
}

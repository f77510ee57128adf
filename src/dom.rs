use crate::core::LayoutRect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Element ids and selectors the page template provides
pub const AUDIO_ID: &str = "bg-audio";
pub const VIDEO_ID: &str = "bg-video";
pub const SPLASH_ID: &str = "splash-screen";
pub const VISUALIZER_CANVAS_ID: &str = "audio-visualizer";
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
pub const PLAYER_ID: &str = "music-player";
pub const PLAY_PAUSE_ID: &str = "play-pause-btn";
pub const PREV_ID: &str = "prev-btn";
pub const NEXT_ID: &str = "next-btn";
pub const ALBUM_ART_ID: &str = "album-art-img";
pub const AVATAR_SELECTOR: &str = ".avatar";
pub const CONTAINER_SELECTOR: &str = ".profile-col";
pub const TITLE_SELECTOR: &str = ".song-title";
pub const ARTIST_SELECTOR: &str = ".song-artist";
pub const PLAY_ICON_SELECTOR: &str = ".play-icon";
pub const PAUSE_ICON_SELECTOR: &str = ".pause-icon";
pub const VOLUME_SELECTOR: &str = ".volume-slider-new .level";
pub const SOCIAL_LINKS_SELECTOR: &str = ".socials a";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up `#id` and cast it to the expected element type.
pub fn by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

pub fn query<T: JsCast>(root: &web::Element, selector: &str) -> anyhow::Result<T> {
    root.query_selector(selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("{} has unexpected type: {:?}", selector, e))
}

pub fn query_document<T: JsCast>(document: &web::Document, selector: &str) -> anyhow::Result<T> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("{} has unexpected type: {:?}", selector, e))
}

#[inline]
pub fn add_click_listener(element: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(f);
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

pub fn layout_rect(element: &web::Element) -> LayoutRect {
    let r = element.get_bounding_client_rect();
    LayoutRect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

#[inline]
pub fn set_style(element: &web::HtmlElement, name: &str, value: &str) {
    _ = element.style().set_property(name, value);
}

#[inline]
pub fn set_hidden(element: &web::Element, hidden: bool) {
    let cl = element.class_list();
    if hidden {
        _ = cl.add_1("hidden");
    } else {
        _ = cl.remove_1("hidden");
    }
}

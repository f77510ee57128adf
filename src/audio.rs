use crate::core::{
    bin_count_for_fft, AudioOutput, ContextState, LandingError, SignalSource, Track,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Audio context shared by the analyser and the player; absent until the
/// visualizer pipeline has been built.
pub type SharedContext = Rc<RefCell<Option<web::AudioContext>>>;

/// Frequency snapshot source over a WebAudio `AnalyserNode`.
pub struct AnalyserSource {
    analyser: web::AnalyserNode,
}

impl SignalSource for AnalyserSource {
    fn fill_snapshot(&mut self, out: &mut [u8]) {
        self.analyser.get_byte_frequency_data(out);
    }
}

fn js_err(label: &str) -> impl Fn(wasm_bindgen::JsValue) -> LandingError + '_ {
    move |e| LandingError::AudioPipeline(format!("{}: {:?}", label, e))
}

/// Route `element -> analyser -> destination` and return the context with a
/// source reading `fft_size / 2` bins.
pub fn create_analyser_source(
    element: &web::HtmlMediaElement,
    fft_size: u32,
) -> Result<(web::AudioContext, AnalyserSource), LandingError> {
    let bins = bin_count_for_fft(fft_size)?;
    let ctx = web::AudioContext::new().map_err(js_err("AudioContext"))?;
    let analyser = ctx.create_analyser().map_err(js_err("AnalyserNode"))?;
    let source = ctx
        .create_media_element_source(element)
        .map_err(js_err("MediaElementSource"))?;
    source
        .connect_with_audio_node(&analyser)
        .map_err(js_err("connect source"))?;
    analyser
        .connect_with_audio_node(&ctx.destination())
        .map_err(js_err("connect destination"))?;
    analyser.set_fft_size(fft_size);
    log::info!(
        "[visualizer] analyser ready fft={} bins={}",
        fft_size,
        bins
    );
    Ok((ctx, AnalyserSource { analyser }))
}

/// Callback invoked with the attempt number and reason when the browser
/// rejects a `play()` promise.
pub type RejectHandler = Rc<RefCell<Option<Box<dyn Fn(u64, String)>>>>;

/// [`AudioOutput`] over the page's `<audio>` element.
pub struct ElementAudio {
    element: web::HtmlMediaElement,
    context: SharedContext,
    on_reject: RejectHandler,
}

impl ElementAudio {
    pub fn new(element: web::HtmlMediaElement, context: SharedContext) -> Self {
        Self {
            element,
            context,
            on_reject: Rc::new(RefCell::new(None)),
        }
    }

    pub fn reject_handler(&self) -> RejectHandler {
        self.on_reject.clone()
    }
}

impl AudioOutput for ElementAudio {
    fn load(&mut self, track: &Track) {
        self.element.set_src(&track.audio_src());
    }

    fn play(&mut self, attempt: u64) -> crate::core::error::Result<()> {
        let promise: js_sys::Promise = self
            .element
            .play()
            .map_err(|e| LandingError::PlaybackBlocked(format!("{:?}", e)))?;
        let on_reject = self.on_reject.clone();
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                if let Some(cb) = on_reject.borrow().as_ref() {
                    cb(attempt, format!("{:?}", e));
                }
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        _ = self.element.pause();
    }

    fn ended(&self) -> bool {
        self.element.ended()
    }

    fn set_volume(&mut self, volume: f64) {
        self.element.set_volume(volume);
    }

    fn set_muted(&mut self, muted: bool) {
        self.element.set_muted(muted);
    }

    fn context_state(&self) -> ContextState {
        match self.context.borrow().as_ref().map(|c| c.state()) {
            Some(web::AudioContextState::Suspended) => ContextState::Suspended,
            Some(web::AudioContextState::Running) => ContextState::Running,
            _ => ContextState::Absent,
        }
    }

    fn resume_context(&mut self) {
        if let Some(ctx) = self.context.borrow().as_ref() {
            _ = ctx.resume();
        }
    }
}

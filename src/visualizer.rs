use crate::audio::{self, AnalyserSource, SharedContext};
use crate::canvas::Canvas2d;
use crate::core::{visualizer_placement, FrameHandler, LandingConfig, Surface, Visualizer};
use crate::dom;
use web_sys as web;

enum Stage {
    Idle,
    Ready { source: AnalyserSource, ring: Visualizer },
    Disabled,
}

/// Page-side owner of the ring visualizer: built lazily on first playback,
/// pinned over the avatar, and redrawn every frame.
pub struct VisualizerHost {
    surface: Canvas2d,
    avatar: web::HtmlElement,
    container: web::Element,
    config: LandingConfig,
    context: SharedContext,
    stage: Stage,
}

impl VisualizerHost {
    pub fn new(
        document: &web::Document,
        config: LandingConfig,
        context: SharedContext,
    ) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::by_id(document, dom::VISUALIZER_CANVAS_ID)?;
        Ok(Self {
            surface: Canvas2d::new(canvas)?,
            avatar: dom::query_document(document, dom::AVATAR_SELECTOR)?,
            container: dom::query_document(document, dom::CONTAINER_SELECTOR)?,
            config,
            context,
            stage: Stage::Idle,
        })
    }

    /// Build the analysis pipeline once. Returns `true` when the visualizer is
    /// usable; a failure disables it for the rest of the session.
    pub fn setup(&mut self, audio_el: &web::HtmlMediaElement) -> bool {
        match self.stage {
            Stage::Ready { .. } => return true,
            Stage::Disabled => return false,
            Stage::Idle => {}
        }
        let built = audio::create_analyser_source(audio_el, self.config.fft_size).and_then(
            |(ctx, source)| {
                let ring =
                    Visualizer::from_fft_size(self.config.fft_size, self.config.colors.clone())?;
                Ok((ctx, source, ring))
            },
        );
        match built {
            Ok((ctx, source, ring)) => {
                *self.context.borrow_mut() = Some(ctx);
                self.stage = Stage::Ready { source, ring };
                self.update_geometry();
                true
            }
            Err(e) => {
                log::error!("[visualizer] could not create audio pipeline, disabled: {}", e);
                self.stage = Stage::Disabled;
                false
            }
        }
    }

    /// Resize the canvas to the avatar and centre it over the avatar.
    pub fn update_geometry(&mut self) {
        let avatar_width = self.avatar.offset_width() as f64;
        let placement = visualizer_placement(
            avatar_width,
            dom::layout_rect(&self.avatar),
            dom::layout_rect(&self.container),
        );
        self.surface.set_pixel_dimensions(placement.size_px, placement.size_px);
        let el = self.surface.element();
        dom::set_style(el, "left", &format!("{}px", placement.left));
        dom::set_style(el, "top", &format!("{}px", placement.top));
        dom::set_style(el, "transform", "translate(-50%, -50%)");
    }
}

impl FrameHandler for VisualizerHost {
    fn frame(&mut self, _now_ms: f64) {
        if let Stage::Ready { source, ring } = &mut self.stage {
            let avatar_width = self.avatar.offset_width() as f64;
            ring.render(source, &mut self.surface, avatar_width);
        }
    }
}

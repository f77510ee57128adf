use crate::constants::{CURSOR_MIN_VIEWPORT_PX, SURFACE_SCALE};
use glam::DVec2;

/// Snapshot of an element's on-screen bounding box (CSS pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutRect {
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Where the visualizer canvas goes: its square backing size and the
/// container-relative point its centre is pinned to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfacePlacement {
    pub size_px: u32,
    pub left: f64,
    pub top: f64,
}

pub fn visualizer_placement(
    avatar_width: f64,
    avatar: LayoutRect,
    container: LayoutRect,
) -> SurfacePlacement {
    let size = (avatar_width * SURFACE_SCALE).max(0.0);
    let center = avatar.center();
    SurfacePlacement {
        size_px: size as u32,
        left: center.x - container.left,
        top: center.y - container.top,
    }
}

/// Square ripple box for a pointer press at `offset` inside a button.
/// Returns `(side, left, top)` relative to the button.
pub fn ripple_box(client_width: f64, client_height: f64, offset: DVec2) -> (f64, f64, f64) {
    let side = client_width.max(client_height);
    (side, offset.x - side / 2.0, offset.y - side / 2.0)
}

#[inline]
pub fn cursor_enabled(viewport_width: f64) -> bool {
    viewport_width > CURSOR_MIN_VIEWPORT_PX
}

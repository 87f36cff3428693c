use eframe::egui::{Pos2, Vec2};
use glam::IVec2;

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 16.0;

/// Maps between the drawing's logical (world) coordinates and window
/// pixel (screen) coordinates. World coordinates are integral; the
/// conversion truncates toward zero.
pub struct Camera {
    pub pan_offset: Vec2,
    pub zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            pan_offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Camera {
    /// given a point in the drawing's logical coordinate system,
    /// return the point in screen-space after applying zoom and pan.
    pub fn world_to_screen(&self, p: IVec2) -> Pos2 {
        Pos2::new(
            p.x as f32 * self.zoom + self.pan_offset.x,
            p.y as f32 * self.zoom + self.pan_offset.y,
        )
    }

    pub fn screen_to_world(&self, p: Pos2) -> IVec2 {
        let w = self.screen_to_world_f(p);
        IVec2::new(w.x as i32, w.y as i32)
    }

    fn screen_to_world_f(&self, p: Pos2) -> Pos2 {
        Pos2::new(
            (p.x - self.pan_offset.x) / self.zoom,
            (p.y - self.pan_offset.y) / self.zoom,
        )
    }

    /// shift the view by a screen-space delta (e.g. a middle-button drag).
    pub fn pan(&mut self, delta: Vec2) {
        self.pan_offset += delta;
    }

    /// apply a scroll-wheel zoom step anchored at `pointer`: the world
    /// point under the pointer stays under the pointer afterwards.
    pub fn zoom_at(&mut self, pointer: Pos2, scroll_delta: f32) {
        // convert world position before zoom
        let old_world_pos = self.screen_to_world_f(pointer);

        // apply zoom
        let zoom_delta = (scroll_delta * 0.009).exp();
        self.zoom *= zoom_delta;
        self.zoom = self.zoom.clamp(MIN_ZOOM, MAX_ZOOM);

        // convert world position after zoom
        let new_world_pos = self.screen_to_world_f(pointer);

        // adjust pan offset to keep the pointer position stable
        let world_delta = Vec2::new(
            new_world_pos.x - old_world_pos.x,
            new_world_pos.y - old_world_pos.y,
        );
        self.pan_offset += world_delta * self.zoom;
    }
}

mod camera;
mod canvas;
mod input;
mod shape;

use crate::camera::Camera;
use crate::canvas::PainterCanvas;
use crate::shape::Shape;
use eframe::egui::{self, Align2, Color32, Modifiers, PointerButton, Pos2, Sense, Vec2};

const BACKGROUND_COLOR: Color32 = Color32::BLACK;
const BASE_STROKE_WIDTH: f32 = 1.0;

/// main application state
struct Drafter {
    // list to store all the shapes the user draws; append-only, and
    // only the last entry is ever touched after creation
    shapes: Vec<Shape>,

    // world/screen transform, driven by middle-drag and scroll
    camera: Camera,
}

impl Default for Drafter {
    fn default() -> Self {
        Drafter {
            shapes: Vec::new(),
            camera: Camera::default(),
        }
    }
}

fn main() -> eframe::Result {
    env_logger::init(); // log to stderr (run with `RUST_LOG=debug`)
    log::info!("starting CAD");
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "CAD",
        native_options,
        Box::new(|cc| Ok(Box::new(Drafter::new(cc)))),
    )
}

impl Drafter {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// a mouse press over the canvas: append a new shape if the
    /// button/modifier combination maps to one, anchored at the
    /// world-space position under the pointer.
    fn handle_press(&mut self, button: PointerButton, modifiers: Modifiers, screen_pos: Pos2) {
        let Some(kind) = input::shape_for_click(button, modifiers) else {
            return;
        };
        let anchor = self.camera.screen_to_world(screen_pos);
        log::debug!("new {kind:?} anchored at {anchor}");
        self.shapes.push(Shape::new(kind, anchor));
    }

    /// while the primary or secondary button stays held, the most
    /// recent shape keeps tracking the pointer. Earlier shapes are
    /// frozen for good the moment a newer one is created.
    fn drag_update(&mut self, screen_pos: Pos2) {
        let world = self.camera.screen_to_world(screen_pos);
        if let Some(active) = self.shapes.last_mut() {
            active.update(world);
        }
    }
}

impl eframe::App for Drafter {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), Sense::click_and_drag());

            // camera input: middle-drag pans, scroll zooms about the pointer
            if response.dragged_by(PointerButton::Middle) {
                self.camera.pan(response.drag_delta());
            }
            if let Some(pointer_pos) = response.hover_pos() {
                let scroll_delta = ctx.input(|i| i.smooth_scroll_delta.y);
                if scroll_delta != 0.0 {
                    self.camera.zoom_at(pointer_pos, scroll_delta);
                }
            }

            let (pressed, held, pointer_pos, modifiers) = ctx.input(|i| {
                let pressed = [PointerButton::Primary, PointerButton::Secondary]
                    .into_iter()
                    .find(|&b| i.pointer.button_pressed(b));
                let held = i.pointer.primary_down() || i.pointer.secondary_down();
                (pressed, held, i.pointer.latest_pos(), i.modifiers)
            });

            if let (Some(button), Some(pos)) = (pressed, pointer_pos) {
                if response.hovered() {
                    self.handle_press(button, modifiers, pos);
                }
            }

            // the held check is deliberately global: any held primary or
            // secondary button drives the last shape, no matter which
            // button created it
            if held && !self.shapes.is_empty() {
                if let Some(pos) = pointer_pos {
                    self.drag_update(pos);
                }
            }

            painter.rect_filled(response.rect, 0.0, BACKGROUND_COLOR);
            let mut canvas =
                PainterCanvas::new(&painter, BASE_STROKE_WIDTH * self.camera.zoom);
            for shape in &self.shapes {
                shape.draw(&self.camera, &mut canvas);
            }
        });

        self.show_controls_window(ctx);
    }
}

impl Drafter {
    // controls window
    fn show_controls_window(&self, ctx: &egui::Context) {
        egui::Window::new("Controls")
            .anchor(Align2::LEFT_TOP, Vec2::new(10.0, 10.0))
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("click: rectangle");
                ui.label("ctrl+click: circle");
                ui.label("shift+click: filled circle");
                ui.label("alt+click: curve");
                ui.label("right-click: line");
                ui.label("middle-drag: pan");
                ui.label("scroll: zoom");
                ui.label("esc: quit");
                ui.separator();
                ui.label(format!("zoom: {:.0}%", self.camera.zoom * 100.0));
                ui.label(format!("shapes: {}", self.shapes.len()));
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Shape, ShapeKind};
    use glam::IVec2;

    const NONE: Modifiers = Modifiers::NONE;
    const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };

    #[test]
    fn plain_click_then_drag_sizes_a_rectangle() {
        let mut app = Drafter::default();
        app.handle_press(PointerButton::Primary, NONE, Pos2::new(100.0, 100.0));
        assert_eq!(
            app.shapes,
            vec![Shape::Rect {
                anchor: IVec2::new(100, 100),
                size: IVec2::ZERO,
            }]
        );

        app.drag_update(Pos2::new(150.0, 120.0));
        assert_eq!(
            app.shapes,
            vec![Shape::Rect {
                anchor: IVec2::new(100, 100),
                size: IVec2::new(50, 20),
            }]
        );
    }

    #[test]
    fn a_new_shape_freezes_the_previous_one() {
        let mut app = Drafter::default();
        app.handle_press(PointerButton::Primary, NONE, Pos2::new(100.0, 100.0));
        app.drag_update(Pos2::new(150.0, 120.0));

        app.handle_press(PointerButton::Primary, CTRL, Pos2::new(200.0, 200.0));
        assert_eq!(app.shapes.len(), 2);
        assert_eq!(
            app.shapes[1],
            Shape::Circle {
                anchor: IVec2::new(200, 200),
                radius: 0,
            }
        );

        // further drags move only the circle; the rectangle stays put
        app.drag_update(Pos2::new(210.0, 200.0));
        assert_eq!(
            app.shapes[0],
            Shape::Rect {
                anchor: IVec2::new(100, 100),
                size: IVec2::new(50, 20),
            }
        );
        assert_eq!(
            app.shapes[1],
            Shape::Circle {
                anchor: IVec2::new(200, 200),
                radius: 10,
            }
        );
    }

    #[test]
    fn shapes_append_in_creation_order() {
        let mut app = Drafter::default();
        app.handle_press(PointerButton::Primary, NONE, Pos2::ZERO);
        app.handle_press(PointerButton::Secondary, NONE, Pos2::ZERO);
        app.handle_press(
            PointerButton::Primary,
            Modifiers {
                shift: true,
                ..Modifiers::NONE
            },
            Pos2::ZERO,
        );

        let kinds: Vec<ShapeKind> = app
            .shapes
            .iter()
            .map(|s| match s {
                Shape::Rect { .. } => ShapeKind::Rect,
                Shape::Line { .. } => ShapeKind::Line,
                Shape::Circle { .. } => ShapeKind::Circle,
                Shape::CircleFill { .. } => ShapeKind::CircleFill,
                Shape::Curve { .. } => ShapeKind::Curve,
            })
            .collect();
        assert_eq!(
            kinds,
            vec![ShapeKind::Rect, ShapeKind::Line, ShapeKind::CircleFill]
        );
    }

    #[test]
    fn unmapped_buttons_leave_the_registry_alone() {
        let mut app = Drafter::default();
        app.handle_press(PointerButton::Middle, NONE, Pos2::new(10.0, 10.0));
        app.handle_press(PointerButton::Middle, CTRL, Pos2::new(10.0, 10.0));
        assert!(app.shapes.is_empty());
    }

    #[test]
    fn drag_with_an_empty_registry_is_a_no_op() {
        let mut app = Drafter::default();
        app.drag_update(Pos2::new(50.0, 50.0));
        assert!(app.shapes.is_empty());
    }

    #[test]
    fn presses_convert_through_the_camera() {
        let mut app = Drafter::default();
        app.camera.pan_offset = Vec2::new(10.0, 0.0);
        app.camera.zoom = 2.0;

        app.handle_press(PointerButton::Secondary, NONE, Pos2::new(110.0, 40.0));
        assert_eq!(
            app.shapes,
            vec![Shape::Line {
                anchor: IVec2::new(50, 20),
                end_spot: IVec2::ZERO,
            }]
        );

        app.drag_update(Pos2::new(130.0, 60.0));
        assert_eq!(
            app.shapes,
            vec![Shape::Line {
                anchor: IVec2::new(50, 20),
                end_spot: IVec2::new(10, 10),
            }]
        );
    }
}

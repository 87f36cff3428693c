use crate::camera::Camera;
use crate::canvas::Canvas;
use eframe::egui::Color32;
use glam::IVec2;

const RECT_COLOR: Color32 = Color32::from_rgb(0, 255, 255);
const LINE_COLOR: Color32 = Color32::from_rgb(255, 255, 0);
const OUTLINE_COLOR: Color32 = Color32::WHITE;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Rect,
    Line,
    Circle,
    CircleFill,
    Curve,
}

/// One drawn shape: the anchor recorded at the creating click, plus the
/// single secondary attribute the variant tracks while the button stays
/// held. All coordinates are world-space.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    Rect { anchor: IVec2, size: IVec2 },
    Line { anchor: IVec2, end_spot: IVec2 },
    Circle { anchor: IVec2, radius: i32 },
    CircleFill { anchor: IVec2, radius: i32 },
    Curve { anchor: IVec2, second_point: IVec2 },
}

impl Shape {
    pub fn new(kind: ShapeKind, anchor: IVec2) -> Self {
        match kind {
            ShapeKind::Rect => Shape::Rect {
                anchor,
                size: IVec2::ZERO,
            },
            ShapeKind::Line => Shape::Line {
                anchor,
                end_spot: IVec2::ZERO,
            },
            ShapeKind::Circle => Shape::Circle { anchor, radius: 0 },
            ShapeKind::CircleFill => Shape::CircleFill { anchor, radius: 0 },
            ShapeKind::Curve => Shape::Curve {
                anchor,
                second_point: IVec2::ZERO,
            },
        }
    }

    pub fn anchor(&self) -> IVec2 {
        match *self {
            Shape::Rect { anchor, .. }
            | Shape::Line { anchor, .. }
            | Shape::Circle { anchor, .. }
            | Shape::CircleFill { anchor, .. }
            | Shape::Curve { anchor, .. } => anchor,
        }
    }

    /// re-derive the secondary attribute from the current world-space
    /// pointer position. Overwrites; nothing accumulates across calls.
    /// The circle radius tracks only the horizontal delta and may go
    /// negative when the pointer is left of the anchor.
    pub fn update(&mut self, world: IVec2) {
        match self {
            Shape::Rect { anchor, size } => *size = world - *anchor,
            Shape::Line { anchor, end_spot } => *end_spot = world - *anchor,
            Shape::Circle { anchor, radius } | Shape::CircleFill { anchor, radius } => {
                *radius = world.x - anchor.x;
            }
            Shape::Curve {
                anchor,
                second_point,
            } => *second_point = world - *anchor,
        }
    }

    /// issue one canvas primitive, converting every world point to
    /// screen space through the camera.
    pub fn draw(&self, camera: &Camera, canvas: &mut dyn Canvas) {
        match *self {
            Shape::Rect { anchor, size } => {
                let a = camera.world_to_screen(anchor);
                let b = camera.world_to_screen(anchor + size);
                canvas.rect(a, b, RECT_COLOR);
            }
            Shape::Line { anchor, end_spot } => {
                let a = camera.world_to_screen(anchor);
                let b = camera.world_to_screen(anchor + end_spot);
                canvas.line(a, b, LINE_COLOR);
            }
            Shape::Circle { anchor, radius } => {
                let center = camera.world_to_screen(anchor);
                canvas.circle(center, radius as f32 * camera.zoom, OUTLINE_COLOR);
            }
            Shape::CircleFill { anchor, radius } => {
                let center = camera.world_to_screen(anchor);
                canvas.circle_filled(center, radius as f32 * camera.zoom, OUTLINE_COLOR);
            }
            Shape::Curve {
                anchor,
                second_point,
            } => {
                let points = [
                    camera.world_to_screen(IVec2::ZERO),
                    camera.world_to_screen(anchor),
                    camera.world_to_screen(second_point),
                ];
                canvas.curve(points, OUTLINE_COLOR);
            }
        }
    }
}

use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, StrokeKind};
use kurbo::{PathEl, Point as KPoint};

/// max deviation (in pixels) when flattening a curve to line segments
const CURVE_TOLERANCE: f64 = 0.5;

/// The drawing primitives the shapes need, decoupled from any concrete
/// painter. `rect` and `circle` stroke outlines; `circle_filled` fills.
/// `curve` takes the three control points of a quadratic Bézier.
pub trait Canvas {
    fn rect(&mut self, a: Pos2, b: Pos2, color: Color32);
    fn line(&mut self, a: Pos2, b: Pos2, color: Color32);
    fn circle(&mut self, center: Pos2, radius: f32, color: Color32);
    fn circle_filled(&mut self, center: Pos2, radius: f32, color: Color32);
    fn curve(&mut self, points: [Pos2; 3], color: Color32);
}

/// `Canvas` backed by an egui `Painter`. All inputs are screen-space.
pub struct PainterCanvas<'a> {
    painter: &'a Painter,
    stroke_width: f32,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a Painter, stroke_width: f32) -> Self {
        PainterCanvas {
            painter,
            stroke_width,
        }
    }

    fn stroke(&self, color: Color32) -> Stroke {
        Stroke::new(self.stroke_width, color)
    }
}

impl Canvas for PainterCanvas<'_> {
    fn rect(&mut self, a: Pos2, b: Pos2, color: Color32) {
        // from_two_pos normalizes, so dragging up/left still yields a valid rect
        let rect = Rect::from_two_pos(a, b);
        self.painter
            .rect_stroke(rect, 0.0, self.stroke(color), StrokeKind::Middle);
    }

    fn line(&mut self, a: Pos2, b: Pos2, color: Color32) {
        self.painter.line_segment([a, b], self.stroke(color));
    }

    fn circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_stroke(center, radius.max(0.0), self.stroke(color));
    }

    fn circle_filled(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.circle_filled(center, radius.max(0.0), color);
    }

    fn curve(&mut self, points: [Pos2; 3], color: Color32) {
        // flatten the quadratic into one continuous polyline and stroke it once
        let flat = flatten_quad(points, CURVE_TOLERANCE);
        self.painter.line(flat, self.stroke(color));
    }
}

/// flatten a quadratic Bézier (start, control, end) into screen-space
/// polyline points within `tolerance`.
fn flatten_quad(points: [Pos2; 3], tolerance: f64) -> Vec<Pos2> {
    let k = |p: Pos2| KPoint::new(p.x as f64, p.y as f64);
    let path = [
        PathEl::MoveTo(k(points[0])),
        PathEl::QuadTo(k(points[1]), k(points[2])),
    ];

    let mut flat = Vec::new();
    kurbo::flatten(path, tolerance, |el| match el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => {
            flat.push(Pos2::new(p.x as f32, p.y as f32));
        }
        _ => {}
    });
    flat
}

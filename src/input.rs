use crate::shape::ShapeKind;
use eframe::egui::{Modifiers, PointerButton};

/// Map a mouse press to the shape it creates. First match wins, in the
/// order Ctrl, Shift, Alt, plain primary, secondary; any press of the
/// secondary button makes a line regardless of modifiers. Everything
/// else creates nothing.
pub fn shape_for_click(button: PointerButton, modifiers: Modifiers) -> Option<ShapeKind> {
    match button {
        PointerButton::Primary if modifiers.ctrl => Some(ShapeKind::Circle),
        PointerButton::Primary if modifiers.shift => Some(ShapeKind::CircleFill),
        PointerButton::Primary if modifiers.alt => Some(ShapeKind::Curve),
        PointerButton::Primary => Some(ShapeKind::Rect),
        PointerButton::Secondary => Some(ShapeKind::Line),
        _ => None,
    }
}

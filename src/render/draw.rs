//! Drawing helpers that take their style explicitly and leave the canvas
//! graphics state as they found it.

use crate::{
    Error,
    geometry::{Offset, Rgb, Size, Transform},
};

use super::{Canvas, PaintMode, Path, StateGuard, Stroke, TextStyle};

pub fn text(
    canvas: &mut dyn Canvas,
    text: &str,
    style: &TextStyle,
    at: Offset,
) -> Result<(), Error> {
    let mut canvas = StateGuard::new(canvas);
    canvas.set_fill_color(style.color);
    canvas.draw_text(text, style.font, at)
}

/// Text whose horizontal centre sits on `at.x`.
pub fn centered_text(
    canvas: &mut dyn Canvas,
    text: &str,
    style: &TextStyle,
    at: Offset,
) -> Result<(), Error> {
    let width = canvas.string_width(text, style.font);
    self::text(canvas, text, style, Offset::new(at.x - width / 2.0, at.y))
}

/// Centred text drawn in a frame moved to `origin` and rotated by `degrees`
/// counter-clockwise.
pub fn rotated_text(
    canvas: &mut dyn Canvas,
    text: &str,
    style: &TextStyle,
    origin: Offset,
    degrees: f32,
) -> Result<(), Error> {
    let mut canvas = StateGuard::new(canvas);
    canvas.transform(Transform::translate_rotate(origin, degrees));
    centered_text(&mut *canvas, text, style, Offset::zero())
}

pub fn line(
    canvas: &mut dyn Canvas,
    from: Offset,
    to: Offset,
    stroke: &Stroke,
) -> Result<(), Error> {
    let mut canvas = StateGuard::new(canvas);
    canvas.set_stroke_color(stroke.color);
    canvas.set_line_width(stroke.width);
    canvas.draw_line(from, to)
}

pub fn filled_circle(
    canvas: &mut dyn Canvas,
    center: Offset,
    radius: f32,
    color: Rgb,
) -> Result<(), Error> {
    let mut canvas = StateGuard::new(canvas);
    canvas.set_fill_color(color);
    canvas.draw_path(&Path::circle(center, radius), PaintMode::Fill)
}

pub fn filled_rect(
    canvas: &mut dyn Canvas,
    origin: Offset,
    size: Size,
    color: Rgb,
) -> Result<(), Error> {
    let mut canvas = StateGuard::new(canvas);
    canvas.set_fill_color(color);
    canvas.draw_path(&Path::rect(origin, size), PaintMode::Fill)
}

pub fn stroked_rect(
    canvas: &mut dyn Canvas,
    origin: Offset,
    size: Size,
    stroke: &Stroke,
) -> Result<(), Error> {
    let mut canvas = StateGuard::new(canvas);
    canvas.set_stroke_color(stroke.color);
    canvas.set_line_width(stroke.width);
    canvas.draw_path(&Path::rect(origin, size), PaintMode::Stroke)
}

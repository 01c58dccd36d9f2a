use std::ops::{Deref, DerefMut};

use crate::{
    Error,
    font::Font,
    geometry::{Offset, Rgb, Size, Transform},
};

use super::{PaintMode, Path};

/// Drawing surface of a single page.
///
/// Colours, line width and the current transform are graphics state: they
/// stick until changed or until the enclosing [`Canvas::save_state`] is
/// restored. Prefer [`StateGuard`] over calling the pair by hand.
pub trait Canvas {
    fn page_size(&self) -> Size;

    fn save_state(&mut self);

    fn restore_state(&mut self);

    fn set_fill_color(&mut self, color: Rgb);

    fn set_stroke_color(&mut self, color: Rgb);

    fn set_line_width(&mut self, width: f32);

    /// Concatenates `transform` to the current transform.
    fn transform(&mut self, transform: Transform);

    fn draw_path(&mut self, path: &Path, mode: PaintMode) -> Result<(), Error>;

    fn draw_line(&mut self, from: Offset, to: Offset) -> Result<(), Error>;

    /// Left-aligned text with its baseline starting at `at`.
    fn draw_text(&mut self, text: &str, font: Font, at: Offset) -> Result<(), Error>;

    fn string_width(&self, text: &str, font: Font) -> f32 {
        font.string_width(text)
    }

    fn debug_frame(&mut self, _origin: Offset, _size: Size) {}
}

/// Saves the graphics state on creation and restores it when dropped.
pub struct StateGuard<'a> {
    canvas: &'a mut dyn Canvas,
}

impl<'a> StateGuard<'a> {
    pub fn new(canvas: &'a mut dyn Canvas) -> Self {
        canvas.save_state();
        Self { canvas }
    }
}

impl Drop for StateGuard<'_> {
    fn drop(&mut self) {
        self.canvas.restore_state();
    }
}

impl<'a> Deref for StateGuard<'a> {
    type Target = dyn Canvas + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.canvas
    }
}

impl<'a> DerefMut for StateGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.canvas
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Rgb, width: f32) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub color: Rgb,
}

impl TextStyle {
    pub const fn new(font: Font, color: Rgb) -> Self {
        Self { font, color }
    }
}

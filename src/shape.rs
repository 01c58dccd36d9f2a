use crate::{
    Error,
    geometry::{Offset, Rgb, Size},
    render::{Canvas, PaintMode, Path, StateGuard},
};

/// Rectangle with rounded corners, filled, stroked or both.
///
/// With both colours set the outline is filled and then stroked; with only a
/// fill it is not stroked; otherwise it is stroked only, in the stroke colour
/// if one is set and the canvas's current one if not. The canvas graphics
/// state is the same after [`RoundedRect::draw`] as before it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedRect {
    origin: Offset,
    size: Size,
    radius: f32,
    fill: Option<Rgb>,
    stroke: Option<Rgb>,
    stroke_width: f32,
}

impl RoundedRect {
    /// `origin` is the lower-left corner.
    pub fn new(origin: Offset, size: Size, radius: f32) -> Self {
        Self {
            origin,
            size,
            radius,
            fill: None,
            stroke: None,
            stroke_width: 1.0,
        }
    }

    pub fn with_fill(mut self, color: Rgb) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn with_stroke(mut self, color: Rgb) -> Self {
        self.stroke = Some(color);
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn paint_mode(&self) -> PaintMode {
        match (self.fill, self.stroke) {
            (Some(_), Some(_)) => PaintMode::FillStroke,
            (Some(_), None) => PaintMode::Fill,
            (None, _) => PaintMode::Stroke,
        }
    }

    pub fn path(&self) -> Path {
        Path::rounded_rect(self.origin, self.size, self.radius)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) -> Result<(), Error> {
        let mut canvas = StateGuard::new(canvas);
        if let Some(fill) = self.fill {
            canvas.set_fill_color(fill);
        }
        if let Some(stroke) = self.stroke {
            canvas.set_stroke_color(stroke);
            canvas.set_line_width(self.stroke_width);
        }
        canvas.draw_path(&self.path(), self.paint_mode())
    }
}

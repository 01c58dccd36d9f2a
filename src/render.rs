mod canvas;
pub use canvas::*;

mod context;
pub(crate) use context::*;

pub mod draw;

mod path;
pub use path::*;

#[cfg(test)]
pub(crate) mod recording;

mod renderer;
pub use renderer::*;

use printpdf::{Color, Pt};

use crate::geometry::Rgb;

fn from_pt(pt: f32) -> printpdf::Mm {
    printpdf::Mm::from(Pt(pt))
}

fn from_rgb(color: Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(color.r, color.g, color.b, None))
}

fn from_paint_mode(mode: PaintMode) -> printpdf::path::PaintMode {
    match mode {
        PaintMode::Fill => printpdf::path::PaintMode::Fill,
        PaintMode::Stroke => printpdf::path::PaintMode::Stroke,
        PaintMode::FillStroke => printpdf::path::PaintMode::FillStroke,
    }
}

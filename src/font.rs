mod metrics;

use printpdf::BuiltinFont;

/// Standard PDF base fonts. They are referenced by name and never embedded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl Face {
    pub fn name(self) -> &'static str {
        match self {
            Face::Helvetica => "Helvetica",
            Face::HelveticaBold => "Helvetica-Bold",
            Face::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    pub(crate) fn builtin(self) -> BuiltinFont {
        match self {
            Face::Helvetica => BuiltinFont::Helvetica,
            Face::HelveticaBold => BuiltinFont::HelveticaBold,
            Face::HelveticaOblique => BuiltinFont::HelveticaOblique,
        }
    }

    /// Advance width of `ch` in thousandths of an em.
    fn advance(self, ch: char) -> u16 {
        match self {
            Face::Helvetica | Face::HelveticaOblique => metrics::helvetica(ch),
            Face::HelveticaBold => metrics::helvetica_bold(ch),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    pub face: Face,
    pub size: f32,
}

impl Font {
    pub const fn new(face: Face, size: f32) -> Self {
        Self { face, size }
    }

    pub const fn regular(size: f32) -> Self {
        Self::new(Face::Helvetica, size)
    }

    pub const fn bold(size: f32) -> Self {
        Self::new(Face::HelveticaBold, size)
    }

    pub const fn italic(size: f32) -> Self {
        Self::new(Face::HelveticaOblique, size)
    }

    /// Rendered width of `text` in points.
    pub fn string_width(&self, text: &str) -> f32 {
        let units: u32 = text.chars().map(|ch| self.face.advance(ch) as u32).sum();
        units as f32 * self.size / 1000.0
    }
}

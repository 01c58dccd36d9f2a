use printpdf::{
    CurTransMat, IndirectFontRef, Line, PdfDocumentReference, PdfLayerIndex, PdfLayerReference,
    PdfPageIndex, Point, Polygon,
};

use crate::{
    Error,
    font::{Face, Font},
    geometry::{Offset, Rgb, Size, Transform},
};

use super::{Canvas, PaintMode, Path, Segment, from_paint_mode, from_pt, from_rgb};

struct RenderFont {
    face: Face,
    font_ref: IndirectFontRef,
}

/// Built-in fonts registered with the document on first use.
pub struct RenderFonts {
    render_fonts: Vec<RenderFont>,
}

impl RenderFonts {
    pub fn new() -> Self {
        Self {
            render_fonts: vec![],
        }
    }

    pub fn get_or_add(
        &mut self,
        document: &PdfDocumentReference,
        face: Face,
    ) -> Result<&IndirectFontRef, Error> {
        let index = match self
            .render_fonts
            .iter()
            .position(|render_font| render_font.face == face)
        {
            Some(index) => index,
            None => {
                let font_ref = document
                    .add_builtin_font(face.builtin())
                    .map_err(|error| Error::PdfWrite(error.to_string()))?;
                tracing::debug!("Registered font {}", face.name());
                self.render_fonts.push(RenderFont { face, font_ref });
                self.render_fonts.len() - 1
            }
        };

        Ok(&self.render_fonts[index].font_ref)
    }
}

impl Default for RenderFonts {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RenderContext {
    fonts: RenderFonts,

    document: PdfDocumentReference,
    layer: PdfLayerReference,

    page_size: Size,
    debug_frame: bool,
}

impl RenderContext {
    pub fn new(
        document: PdfDocumentReference,
        page: PdfPageIndex,
        layer: PdfLayerIndex,
        size: Size,
    ) -> Self {
        let layer = document.get_page(page).get_layer(layer);

        Self {
            fonts: RenderFonts::new(),
            document,
            layer,
            page_size: size,
            debug_frame: false,
        }
    }

    pub fn with_debug_frame(mut self, debug_frame: bool) -> Self {
        self.debug_frame = debug_frame;
        self
    }

    pub fn save_to_bytes(self) -> Result<Vec<u8>, Error> {
        self.document
            .save_to_bytes()
            .map_err(|error| Error::PdfWrite(error.to_string()))
    }

    fn point(offset: Offset) -> Point {
        Point::new(from_pt(offset.x), from_pt(offset.y))
    }

    /// Point list in printpdf's encoding: a point flagged `true` followed by
    /// another flagged `true` opens a cubic through the next two points.
    fn path_points(path: &Path) -> Vec<(Point, bool)> {
        let mut points = vec![(Self::point(path.start()), false)];
        for segment in path.segments() {
            match segment {
                Segment::Line(to) => points.push((Self::point(*to), false)),
                Segment::Cubic(c1, c2, to) => {
                    if let Some(last) = points.last_mut() {
                        last.1 = true;
                    }
                    points.push((Self::point(*c1), true));
                    points.push((Self::point(*c2), false));
                    points.push((Self::point(*to), false));
                }
            }
        }
        points
    }

    fn line_inner(&self, points: &[Offset]) {
        let line = Line {
            points: points
                .iter()
                .map(|point| (Self::point(*point), false))
                .collect(),
            is_closed: false,
        };

        self.layer.add_line(line);
    }
}

impl Canvas for RenderContext {
    fn page_size(&self) -> Size {
        self.page_size
    }

    fn save_state(&mut self) {
        self.layer.save_graphics_state();
    }

    fn restore_state(&mut self) {
        self.layer.restore_graphics_state();
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.layer.set_fill_color(from_rgb(color));
    }

    fn set_stroke_color(&mut self, color: Rgb) {
        self.layer.set_outline_color(from_rgb(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.layer.set_outline_thickness(width);
    }

    fn transform(&mut self, transform: Transform) {
        self.layer.set_ctm(CurTransMat::Raw(transform.0));
    }

    fn draw_path(&mut self, path: &Path, mode: PaintMode) -> Result<(), Error> {
        let mut polygon = Polygon::from_iter(Self::path_points(path));
        polygon.mode = from_paint_mode(mode);

        self.layer.add_polygon(polygon);
        Ok(())
    }

    fn draw_line(&mut self, from: Offset, to: Offset) -> Result<(), Error> {
        self.line_inner(&[from, to]);
        Ok(())
    }

    fn draw_text(&mut self, text: &str, font: Font, at: Offset) -> Result<(), Error> {
        if text.is_empty() {
            return Ok(());
        }

        let font_ref = self.fonts.get_or_add(&self.document, font.face)?;
        self.layer
            .use_text(text, font.size, from_pt(at.x), from_pt(at.y), font_ref);
        Ok(())
    }

    fn debug_frame(&mut self, origin: Offset, size: Size) {
        if self.debug_frame {
            let top_right = Offset::new(origin.x + size.width, origin.y + size.height);
            let points = [
                origin,
                Offset::new(top_right.x, origin.y),
                top_right,
                Offset::new(origin.x, top_right.y),
                origin,
            ];

            self.save_state();
            self.set_stroke_color(Rgb::from_hex(0xf0f0f0));
            self.set_line_width(0.25);
            self.line_inner(&points);
            self.restore_state();
        }
    }
}

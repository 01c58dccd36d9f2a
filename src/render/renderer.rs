use printpdf::PdfDocument;

use crate::{Error, geometry::Size};

use super::{Canvas, RenderContext, from_pt};

/// Owns a single-page document for the duration of one composition.
pub struct Renderer {
    context: RenderContext,
}

impl Renderer {
    pub fn new(document_title: &str, page_size: Size) -> Self {
        let (document, page, layer) = PdfDocument::new(
            document_title,
            from_pt(page_size.width),
            from_pt(page_size.height),
            "default",
        );

        let context = RenderContext::new(document, page, layer, page_size);

        Self { context }
    }

    pub fn with_debug_frame(mut self, debug_frame: bool) -> Self {
        self.context = self.context.with_debug_frame(debug_frame);
        self
    }

    /// Runs `compose` against the page canvas and serializes the document.
    pub fn render<F>(mut self, compose: F) -> Result<Vec<u8>, Error>
    where
        F: FnOnce(&mut dyn Canvas) -> Result<(), Error>,
    {
        tracing::debug!("COMPOSE {:?}", self.context.page_size());

        compose(&mut self.context)?;

        let pdf = self.context.save_to_bytes()?;
        tracing::debug!("SAVED {} bytes", pdf.len());

        Ok(pdf)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        font::Font,
        geometry::{Offset, Rgb, Size},
        render::{TextStyle, draw},
    };

    use super::Renderer;

    #[test]
    fn renders_composition() {
        let pdf = Renderer::new("Text", Size::LETTER)
            .with_debug_frame(true)
            .render(|canvas| {
                canvas.debug_frame(Offset::new(40.0, 40.0), Size::new(532.0, 50.0));
                draw::centered_text(
                    canvas,
                    "That's where self-government begins.",
                    &TextStyle::new(Font::regular(9.0), Rgb::from_hex(0x5a7a8a)),
                    Offset::new(306.0, 52.0),
                )
            })
            .unwrap();

        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn composition_error_propagates() {
        let result = Renderer::new("Text", Size::LETTER)
            .render(|_| Err(Error::PdfWrite("no fonts".into())));

        assert!(matches!(result, Err(Error::PdfWrite(message)) if message == "no fonts"));
    }
}

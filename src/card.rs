//! The "Calm Station" coping-skills card: one US Letter page, four boxed
//! sections between a header and a footer.

mod breathe;
pub mod content;
mod energy;
mod ground;
pub mod palette;
mod reflect;

use crate::{
    Error,
    font::Font,
    geometry::{Offset, Rgb, Size},
    render::{Canvas, Stroke, TextStyle, draw},
    shape::RoundedRect,
};

pub const DOCUMENT_TITLE: &str = "Calm Station";
pub const PAGE_SIZE: Size = Size::LETTER;

const PANEL_X: f32 = 40.0;
const PANEL_RADIUS: f32 = 12.0;
/// Panel top above the section title baseline.
const PANEL_HEADROOM: f32 = 10.0;
const CONTENT_X: f32 = 60.0;

const TITLE_STYLE: TextStyle = TextStyle::new(Font::bold(14.0), palette::TEAL);

/// Vertical placement of a boxed section. Every section is positioned from the
/// page top on its own, never from the previous section's extent.
#[derive(Clone, Copy, Debug)]
struct Section {
    number: u8,
    title: &'static str,
    /// Title baseline below the page top.
    top: f32,
    /// Panel bottom below the title baseline.
    depth: f32,
}

impl Section {
    fn baseline(&self, page: Size) -> f32 {
        page.height - self.top
    }

    fn panel(&self, page: Size) -> (Offset, Size) {
        let baseline = self.baseline(page);
        (
            Offset::new(PANEL_X, baseline - self.depth),
            Size::new(page.width - 2.0 * PANEL_X, self.depth + PANEL_HEADROOM),
        )
    }

    /// Draws the panel and the numbered title, returning the title baseline.
    fn begin(&self, canvas: &mut dyn Canvas) -> Result<f32, Error> {
        let page = canvas.page_size();
        let (origin, size) = self.panel(page);

        canvas.debug_frame(origin, size);
        RoundedRect::new(origin, size, PANEL_RADIUS)
            .with_fill(palette::PANEL_FILL)
            .with_stroke(palette::PANEL_BORDER)
            .draw(canvas)?;

        let baseline = self.baseline(page);
        draw::text(
            canvas,
            &format!("{}  {}", self.number, self.title),
            &TITLE_STYLE,
            Offset::new(CONTENT_X, baseline),
        )?;
        tracing::debug!("Section {} '{}' at {baseline}", self.number, self.title);

        Ok(baseline)
    }
}

const FOOTER_BOTTOM: f32 = 18.0;
const FOOTER_HEIGHT: f32 = 40.0;
const FOOTER_RADIUS: f32 = 10.0;

/// Draws the whole card onto `canvas`.
pub fn compose(canvas: &mut dyn Canvas) -> Result<(), Error> {
    let page = canvas.page_size();

    draw::filled_rect(canvas, Offset::zero(), page, palette::BACKGROUND)?;
    header(canvas, page)?;

    energy::draw(canvas)?;
    breathe::draw(canvas)?;
    ground::draw(canvas)?;
    reflect::draw(canvas)?;

    footer(canvas, page)
}

fn header(canvas: &mut dyn Canvas, page: Size) -> Result<(), Error> {
    let center = page.width / 2.0;

    draw::centered_text(
        canvas,
        "CALM STATION",
        &TextStyle::new(Font::bold(28.0), palette::TEAL),
        Offset::new(center, page.height - 60.0),
    )?;
    draw::centered_text(
        canvas,
        "Your Regulation Tool  \u{2022}  Keep This Card Nearby",
        &TextStyle::new(Font::regular(11.0), palette::TEXT_DIM),
        Offset::new(center, page.height - 78.0),
    )?;

    let divider = page.height - 95.0;
    draw::line(
        canvas,
        Offset::new(60.0, divider),
        Offset::new(page.width - 60.0, divider),
        &Stroke::new(palette::PANEL_BORDER, 1.0),
    )
}

fn footer_panel(page: Size) -> (Offset, Size) {
    (
        Offset::new(PANEL_X, FOOTER_BOTTOM),
        Size::new(page.width - 2.0 * PANEL_X, FOOTER_HEIGHT),
    )
}

fn footer(canvas: &mut dyn Canvas, page: Size) -> Result<(), Error> {
    let (origin, size) = footer_panel(page);
    let center = page.width / 2.0;

    canvas.debug_frame(origin, size);
    RoundedRect::new(origin, size, FOOTER_RADIUS)
        .with_fill(palette::FOOTER_FILL)
        .with_stroke(palette::FOOTER_BORDER)
        .draw(canvas)?;

    draw::centered_text(
        canvas,
        "A calm person can think.  A calm person can choose.",
        &TextStyle::new(Font::italic(11.0), palette::TEAL_LIGHT),
        Offset::new(center, FOOTER_BOTTOM + 23.0),
    )?;
    draw::centered_text(
        canvas,
        "That's where self-government begins.",
        &TextStyle::new(Font::regular(9.0), palette::TEXT_DIM),
        Offset::new(center, FOOTER_BOTTOM + 9.0),
    )
}

/// Caption line centred on the page.
fn caption(canvas: &mut dyn Canvas, text: &str, color: Rgb, y: f32) -> Result<(), Error> {
    let center = canvas.page_size().width / 2.0;
    draw::centered_text(
        canvas,
        text,
        &TextStyle::new(Font::regular(9.0), color),
        Offset::new(center, y),
    )
}

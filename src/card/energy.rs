use crate::{
    Error,
    font::Font,
    geometry::{Offset, Size},
    render::{Canvas, TextStyle, draw},
    shape::RoundedRect,
};

use super::{Section, caption, content::ENERGY_LEVELS, palette};

pub(super) const SECTION: Section = Section {
    number: 1,
    title: "CHECK YOUR ENERGY",
    top: 125.0,
    depth: 155.0,
};

const FIRST_ROW: f32 = 28.0;
const ROW_STEP: f32 = 25.0;
const MARKER_X: f32 = 75.0;
const MARKER_RADIUS: f32 = 6.0;
const LABEL_X: f32 = 92.0;
/// Checkbox left edge measured from the page's right edge.
const CHECKBOX_INSET: f32 = 95.0;
const CHECKBOX_SIZE: f32 = 18.0;

const LABEL_STYLE: TextStyle = TextStyle::new(Font::bold(11.0), palette::TEXT_LIGHT);
const DESCRIPTION_STYLE: TextStyle = TextStyle::new(Font::regular(10.0), palette::TEXT_DIM);

pub(super) fn draw(canvas: &mut dyn Canvas) -> Result<(), Error> {
    let baseline = SECTION.begin(canvas)?;
    let page = canvas.page_size();

    let mut y = baseline - FIRST_ROW;
    for level in ENERGY_LEVELS.iter() {
        draw::filled_circle(
            canvas,
            Offset::new(MARKER_X, y + 4.0),
            MARKER_RADIUS,
            level.color,
        )?;

        RoundedRect::new(
            Offset::new(page.width - CHECKBOX_INSET, y - 4.0),
            Size::new(CHECKBOX_SIZE, CHECKBOX_SIZE),
            3.0,
        )
        .with_stroke(palette::CHECKBOX_BORDER)
        .draw(canvas)?;

        draw::text(canvas, level.label, &LABEL_STYLE, Offset::new(LABEL_X, y))?;

        let label_width = canvas.string_width(&format!("{}  ", level.label), LABEL_STYLE.font);
        draw::text(
            canvas,
            &format!("\u{2014} {}", level.description),
            &DESCRIPTION_STYLE,
            Offset::new(LABEL_X + label_width, y),
        )?;

        y -= ROW_STEP;
    }

    caption(
        canvas,
        "Circle where you are right now",
        palette::TEAL_LIGHT,
        baseline - 150.0,
    )
}

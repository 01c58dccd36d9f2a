use crate::{
    Error,
    font::Font,
    geometry::{Offset, Size},
    render::{Canvas, TextStyle, draw},
    shape::RoundedRect,
};

use super::{CONTENT_X, Section, content::SENSES, palette};

pub(super) const SECTION: Section = Section {
    number: 3,
    title: "GROUND YOURSELF",
    top: 485.0,
    depth: 160.0,
};

const FIRST_ROW: f32 = 42.0;
const ROW_STEP: f32 = 26.0;
const BADGE_X: f32 = 78.0;
const BADGE_RADIUS: f32 = 12.0;
const NAME_X: f32 = 100.0;
const PROMPT_X: f32 = 155.0;
/// Rightmost checkbox left edge, measured from the page's right edge.
const CHECKBOX_INSET: f32 = 100.0;
const CHECKBOX_SIZE: f32 = 14.0;
const CHECKBOX_PITCH: f32 = 20.0;

const BADGE_STYLE: TextStyle = TextStyle::new(Font::bold(12.0), palette::BACKGROUND);
const NAME_STYLE: TextStyle = TextStyle::new(Font::bold(11.0), palette::TEXT_LIGHT);
const PROMPT_STYLE: TextStyle = TextStyle::new(Font::regular(10.0), palette::TEXT_DIM);

pub(super) fn draw(canvas: &mut dyn Canvas) -> Result<(), Error> {
    let baseline = SECTION.begin(canvas)?;
    let page = canvas.page_size();

    draw::text(
        canvas,
        "Use your senses to come back to the present moment",
        &PROMPT_STYLE,
        Offset::new(CONTENT_X, baseline - 18.0),
    )?;

    let rightmost = page.width - CHECKBOX_INSET;
    let mut y = baseline - FIRST_ROW;
    for sense in SENSES.iter() {
        draw::filled_circle(
            canvas,
            Offset::new(BADGE_X, y + 4.0),
            BADGE_RADIUS,
            palette::TEAL,
        )?;
        draw::centered_text(
            canvas,
            &sense.count.to_string(),
            &BADGE_STYLE,
            Offset::new(BADGE_X, y),
        )?;

        draw::text(canvas, sense.name, &NAME_STYLE, Offset::new(NAME_X, y))?;
        draw::text(
            canvas,
            sense.prompt,
            &PROMPT_STYLE,
            Offset::new(PROMPT_X, y),
        )?;

        // one box per thing to notice, right-aligned
        for remaining in (0..sense.count).rev() {
            RoundedRect::new(
                Offset::new(rightmost - remaining as f32 * CHECKBOX_PITCH, y - 4.0),
                Size::new(CHECKBOX_SIZE, CHECKBOX_SIZE),
                2.0,
            )
            .with_stroke(palette::CHECKBOX_BORDER)
            .with_stroke_width(0.8)
            .draw(canvas)?;
        }

        y -= ROW_STEP;
    }

    Ok(())
}

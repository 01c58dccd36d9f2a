use crate::{
    Error,
    font::Font,
    geometry::{Offset, Size},
    render::{Canvas, Stroke, TextStyle, draw},
};

use super::{Section, caption, palette};

pub(super) const SECTION: Section = Section {
    number: 2,
    title: "BREATHE",
    top: 310.0,
    depth: 140.0,
};

const BOX_X: f32 = 75.0;
/// Square bottom below the title baseline.
const BOX_DROP: f32 = 100.0;
const BOX_SIZE: f32 = 90.0;
/// Distance of the side labels from the square's edges.
const SIDE_LABEL_GAP: f32 = 15.0;
/// Flow strokes stop short of the corners by this much.
const FLOW_INSET: f32 = 10.0;
const TEXT_BLOCK_X: f32 = BOX_X + BOX_SIZE + 55.0;

const EDGE_STYLE: TextStyle = TextStyle::new(Font::bold(10.0), palette::TEAL_LIGHT);
const HEADING_STYLE: TextStyle = TextStyle::new(Font::bold(11.0), palette::TEXT_MID);
const BODY_STYLE: TextStyle = TextStyle::new(Font::regular(10.0), palette::TEXT_DIM);

/// Side block lines as (drop below the title baseline, text, is heading).
const SIDE_BLOCK: [(f32, &str, bool); 6] = [
    (22.0, "BOX BREATHING", true),
    (38.0, "Equal rhythm \u{2014} steady and", false),
    (52.0, "predictable. Repeat 4 times.", false),
    (78.0, "ALSO TRY:", true),
    (94.0, "4-7-8: In 4, Hold 7, Out 8", false),
    (108.0, "Simple: In 5, Out 5", false),
];

pub(super) fn draw(canvas: &mut dyn Canvas) -> Result<(), Error> {
    let baseline = SECTION.begin(canvas)?;

    let origin = Offset::new(BOX_X, baseline - BOX_DROP);
    box_diagram(canvas, origin)?;

    for (down, text, heading) in SIDE_BLOCK {
        let style = if heading { &HEADING_STYLE } else { &BODY_STYLE };
        draw::text(
            canvas,
            text,
            style,
            Offset::new(TEXT_BLOCK_X, baseline - down),
        )?;
    }

    caption(
        canvas,
        "Do at least 4 full cycles before moving on",
        palette::TEAL,
        baseline - 132.0,
    )
}

/// Square outline with one instruction per edge, read clockwise from the top.
fn box_diagram(canvas: &mut dyn Canvas, origin: Offset) -> Result<(), Error> {
    let Offset { x, y } = origin;
    let middle = Offset::new(x + BOX_SIZE / 2.0, y + BOX_SIZE / 2.0);

    draw::stroked_rect(
        canvas,
        origin,
        Size::new(BOX_SIZE, BOX_SIZE),
        &Stroke::new(palette::TEAL, 2.0),
    )?;

    draw::centered_text(
        canvas,
        "IN \u{2014} 4 sec",
        &EDGE_STYLE,
        Offset::new(middle.x, y + BOX_SIZE + 8.0),
    )?;
    draw::rotated_text(
        canvas,
        "HOLD \u{2014} 4 sec",
        &EDGE_STYLE,
        Offset::new(x + BOX_SIZE + SIDE_LABEL_GAP, middle.y),
        90.0,
    )?;
    draw::centered_text(
        canvas,
        "OUT \u{2014} 4 sec",
        &EDGE_STYLE,
        Offset::new(middle.x, y - 16.0),
    )?;
    draw::rotated_text(
        canvas,
        "HOLD \u{2014} 4 sec",
        &EDGE_STYLE,
        Offset::new(x - SIDE_LABEL_GAP, middle.y),
        -90.0,
    )?;

    let flow = Stroke::new(palette::TEAL_LIGHT, 1.5);
    let top = y + BOX_SIZE;
    let right = x + BOX_SIZE;
    draw::line(
        canvas,
        Offset::new(x + FLOW_INSET, top),
        Offset::new(right - FLOW_INSET, top),
        &flow,
    )?;
    draw::line(
        canvas,
        Offset::new(right, top - FLOW_INSET),
        Offset::new(right, y + FLOW_INSET),
        &flow,
    )
}

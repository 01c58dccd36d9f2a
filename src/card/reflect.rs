use crate::{
    Error,
    font::Font,
    geometry::Offset,
    render::{Canvas, TextStyle, draw},
};

use super::{CONTENT_X, Section, palette};

pub(super) const SECTION: Section = Section {
    number: 4,
    title: "CHECK AGAIN",
    top: 672.0,
    depth: 56.0,
};

const QUESTION_STYLE: TextStyle = TextStyle::new(Font::regular(11.0), palette::TEXT_MID);
const GUIDANCE_STYLE: TextStyle = TextStyle::new(Font::regular(10.0), palette::TEXT_DIM);

pub(super) fn draw(canvas: &mut dyn Canvas) -> Result<(), Error> {
    let baseline = SECTION.begin(canvas)?;

    draw::text(
        canvas,
        "Where is your energy now?  Are you closer to the Calm Zone?",
        &QUESTION_STYLE,
        Offset::new(CONTENT_X, baseline - 18.0),
    )?;
    draw::text(
        canvas,
        "If yes  ->  You're ready to think and solve problems.",
        &GUIDANCE_STYLE,
        Offset::new(CONTENT_X, baseline - 34.0),
    )?;
    draw::text(
        canvas,
        "If not  ->  That's okay. Go through steps 2-3 again.",
        &GUIDANCE_STYLE,
        Offset::new(CONTENT_X, baseline - 48.0),
    )
}

#[cfg(test)]
mod tests {
    use crate::render::{PaintMode, recording::RecordingCanvas};

    #[test]
    fn guidance_without_checkboxes() {
        let mut canvas = RecordingCanvas::letter();
        super::draw(&mut canvas).unwrap();

        let lines: Vec<_> = canvas.texts().map(|(text, ..)| text).collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "4  CHECK AGAIN");
        assert!(lines[2].starts_with("If yes"));
        assert!(lines[3].starts_with("If not"));

        let paths: Vec<_> = canvas.paths().map(|(_, mode, _)| mode).collect();
        assert_eq!(paths, [PaintMode::FillStroke]);
    }

    #[test]
    fn text_stays_inside_panel() {
        let mut canvas = RecordingCanvas::letter();
        super::draw(&mut canvas).unwrap();

        let (panel, ..) = canvas.paths().next().unwrap();
        let (origin, size) = panel.bounds();
        for (_, font, at, _) in canvas.texts() {
            assert!(at.y - 0.25 * font.size > origin.y, "{at:?}");
            assert!(at.y < origin.y + size.height);
        }
    }
}

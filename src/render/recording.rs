use crate::{
    Error,
    font::Font,
    geometry::{Offset, Rgb, Size, Transform},
};

use super::{Canvas, PaintMode, Path};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsState {
    pub fill: Rgb,
    pub stroke: Rgb,
    pub line_width: f32,
    pub transform: Transform,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            fill: Rgb::new(0.0, 0.0, 0.0),
            stroke: Rgb::new(0.0, 0.0, 0.0),
            line_width: 1.0,
            transform: Transform::IDENTITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    SaveState,
    RestoreState,
    FillColor(Rgb),
    StrokeColor(Rgb),
    LineWidth(f32),
    Transform(Transform),
    Path {
        path: Path,
        mode: PaintMode,
        state: GraphicsState,
    },
    Line {
        from: Offset,
        to: Offset,
        state: GraphicsState,
    },
    Text {
        text: String,
        font: Font,
        at: Offset,
        state: GraphicsState,
    },
}

/// Canvas that keeps every call, with the graphics state in effect for each
/// drawing operation.
pub struct RecordingCanvas {
    size: Size,
    state: GraphicsState,
    stack: Vec<GraphicsState>,
    ops: Vec<Op>,
    fail_text: bool,
}

impl RecordingCanvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            state: GraphicsState::default(),
            stack: vec![],
            ops: vec![],
            fail_text: false,
        }
    }

    pub fn letter() -> Self {
        Self::new(Size::LETTER)
    }

    pub fn with_failing_text(mut self) -> Self {
        self.fail_text = true;
        self
    }

    pub fn state(&self) -> GraphicsState {
        self.state
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Font, Offset, &GraphicsState)> {
        self.ops.iter().filter_map(|op| match op {
            Op::Text {
                text,
                font,
                at,
                state,
            } => Some((text.as_str(), *font, *at, state)),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = (&Path, PaintMode, &GraphicsState)> {
        self.ops.iter().filter_map(|op| match op {
            Op::Path { path, mode, state } => Some((path, *mode, state)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Offset, Offset, &GraphicsState)> {
        self.ops.iter().filter_map(|op| match op {
            Op::Line { from, to, state } => Some((*from, *to, state)),
            _ => None,
        })
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|(text, ..)| text == needle)
    }
}

fn concat(inner: Transform, outer: Transform) -> Transform {
    let [a1, b1, c1, d1, e1, f1] = inner.0;
    let [a2, b2, c2, d2, e2, f2] = outer.0;
    Transform([
        a1 * a2 + b1 * c2,
        a1 * b2 + b1 * d2,
        c1 * a2 + d1 * c2,
        c1 * b2 + d1 * d2,
        e1 * a2 + f1 * c2 + e2,
        e1 * b2 + f1 * d2 + f2,
    ])
}

impl Canvas for RecordingCanvas {
    fn page_size(&self) -> Size {
        self.size
    }

    fn save_state(&mut self) {
        self.stack.push(self.state);
        self.ops.push(Op::SaveState);
    }

    fn restore_state(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
        self.ops.push(Op::RestoreState);
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.state.fill = color;
        self.ops.push(Op::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Rgb) {
        self.state.stroke = color;
        self.ops.push(Op::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
        self.ops.push(Op::LineWidth(width));
    }

    fn transform(&mut self, transform: Transform) {
        self.state.transform = concat(transform, self.state.transform);
        self.ops.push(Op::Transform(transform));
    }

    fn draw_path(&mut self, path: &Path, mode: PaintMode) -> Result<(), Error> {
        self.ops.push(Op::Path {
            path: path.clone(),
            mode,
            state: self.state,
        });
        Ok(())
    }

    fn draw_line(&mut self, from: Offset, to: Offset) -> Result<(), Error> {
        self.ops.push(Op::Line {
            from,
            to,
            state: self.state,
        });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, font: Font, at: Offset) -> Result<(), Error> {
        if self.fail_text {
            let message = format!("no {} on this canvas", font.face.name());
            return Err(Error::PdfWrite(message));
        }
        self.ops.push(Op::Text {
            text: text.to_owned(),
            font,
            at,
            state: self.state,
        });
        Ok(())
    }
}

use crate::geometry::{Offset, Size};

/// Control-point distance for approximating a quarter circle with one cubic.
const KAPPA: f32 = 0.552_284_75;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintMode {
    Fill,
    Stroke,
    FillStroke,
}

impl PaintMode {
    pub fn fills(self) -> bool {
        matches!(self, PaintMode::Fill | PaintMode::FillStroke)
    }

    pub fn strokes(self) -> bool {
        matches!(self, PaintMode::Stroke | PaintMode::FillStroke)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    Line(Offset),
    Cubic(Offset, Offset, Offset),
}

impl Segment {
    pub fn end(&self) -> Offset {
        match self {
            Segment::Line(end) | Segment::Cubic(_, _, end) => *end,
        }
    }
}

/// Closed outline made of straight and cubic segments.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    start: Offset,
    segments: Vec<Segment>,
}

impl Path {
    pub fn new(start: Offset) -> Self {
        Self {
            start,
            segments: vec![],
        }
    }

    pub fn line_to(mut self, to: Offset) -> Self {
        self.segments.push(Segment::Line(to));
        self
    }

    pub fn cubic_to(mut self, c1: Offset, c2: Offset, to: Offset) -> Self {
        self.segments.push(Segment::Cubic(c1, c2, to));
        self
    }

    /// Quarter arc from the current point around `center`, ending at `to`.
    fn quarter_to(self, center: Offset, to: Offset) -> Self {
        let from = self.current();
        let c1 = Offset::new(
            from.x + KAPPA * (to.x - center.x),
            from.y + KAPPA * (to.y - center.y),
        );
        let c2 = Offset::new(
            to.x + KAPPA * (from.x - center.x),
            to.y + KAPPA * (from.y - center.y),
        );
        self.cubic_to(c1, c2, to)
    }

    pub fn rect(origin: Offset, size: Size) -> Self {
        let Offset { x, y } = origin;
        Path::new(origin)
            .line_to(Offset::new(x + size.width, y))
            .line_to(Offset::new(x + size.width, y + size.height))
            .line_to(Offset::new(x, y + size.height))
    }

    /// Rectangle with quarter-circle corners. `radius` is clamped to
    /// `0..=min(width, height) / 2`; a zero radius yields [`Path::rect`].
    pub fn rounded_rect(origin: Offset, size: Size, radius: f32) -> Self {
        let radius = radius.clamp(0.0, size.width.min(size.height) / 2.0);
        if radius <= 0.0 {
            return Path::rect(origin, size);
        }

        let (left, bottom) = (origin.x, origin.y);
        let (right, top) = (left + size.width, bottom + size.height);

        Path::new(Offset::new(left + radius, bottom))
            .line_to(Offset::new(right - radius, bottom))
            .quarter_to(
                Offset::new(right - radius, bottom + radius),
                Offset::new(right, bottom + radius),
            )
            .line_to(Offset::new(right, top - radius))
            .quarter_to(
                Offset::new(right - radius, top - radius),
                Offset::new(right - radius, top),
            )
            .line_to(Offset::new(left + radius, top))
            .quarter_to(
                Offset::new(left + radius, top - radius),
                Offset::new(left, top - radius),
            )
            .line_to(Offset::new(left, bottom + radius))
            .quarter_to(
                Offset::new(left + radius, bottom + radius),
                Offset::new(left + radius, bottom),
            )
    }

    pub fn circle(center: Offset, radius: f32) -> Self {
        let Offset { x, y } = center;
        Path::new(Offset::new(x + radius, y))
            .quarter_to(center, Offset::new(x, y + radius))
            .quarter_to(center, Offset::new(x - radius, y))
            .quarter_to(center, Offset::new(x, y - radius))
            .quarter_to(center, Offset::new(x + radius, y))
    }

    pub fn start(&self) -> Offset {
        self.start
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn current(&self) -> Offset {
        self.segments.last().map_or(self.start, Segment::end)
    }

    pub fn is_curved(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Cubic(..)))
    }

    /// Bounding box of the on-curve points as `(lower-left, size)`.
    pub fn bounds(&self) -> (Offset, Size) {
        let (mut min, mut max) = (self.start, self.start);
        for point in self.segments.iter().map(Segment::end) {
            min = Offset::new(min.x.min(point.x), min.y.min(point.y));
            max = Offset::new(max.x.max(point.x), max.y.max(point.y));
        }
        (min, Size::new(max.x - min.x, max.y - min.y))
    }
}

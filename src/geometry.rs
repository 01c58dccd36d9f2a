/// Position in PDF user space: points, origin bottom-left, y grows upwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// US Letter, 8.5 x 11 in.
    pub const LETTER: Size = Size::new(612.0, 792.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
        )
    }
}

/// Affine matrix `[a b c d e f]` as used by the PDF `cm` operator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform(pub [f32; 6]);

impl Transform {
    pub const IDENTITY: Transform = Transform([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    /// Moves the origin to `origin`, then rotates counter-clockwise by `degrees`.
    pub fn translate_rotate(origin: Offset, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Transform([cos, sin, -sin, cos, origin.x, origin.y])
    }

    pub fn apply(&self, point: Offset) -> Offset {
        let [a, b, c, d, e, f] = self.0;
        Offset::new(a * point.x + c * point.y + e, b * point.x + d * point.y + f)
    }
}

use crate::geometry::Rgb;

pub const BACKGROUND: Rgb = Rgb::from_hex(0x0d1b2a);

pub const TEAL: Rgb = Rgb::from_hex(0x48b5a0);
pub const TEAL_LIGHT: Rgb = Rgb::from_hex(0x5cc8b3);

pub const TEXT_LIGHT: Rgb = Rgb::from_hex(0xc0d4e0);
pub const TEXT_MID: Rgb = Rgb::from_hex(0x8aa8b8);
pub const TEXT_DIM: Rgb = Rgb::from_hex(0x5a7a8a);

pub const ACCENT_RED: Rgb = Rgb::from_hex(0xd64550);
pub const ACCENT_ORANGE: Rgb = Rgb::from_hex(0xe8a838);
pub const ACCENT_BLUE: Rgb = Rgb::from_hex(0x4a6fa5);
pub const ACCENT_LIGHT_BLUE: Rgb = Rgb::from_hex(0x6b9ac4);

pub const PANEL_FILL: Rgb = Rgb::from_hex(0x152030);
pub const PANEL_BORDER: Rgb = Rgb::from_hex(0x2a3a4a);
pub const CHECKBOX_BORDER: Rgb = Rgb::from_hex(0x3a4a5a);

pub const FOOTER_FILL: Rgb = Rgb::from_hex(0x152a30);
pub const FOOTER_BORDER: Rgb = Rgb::from_hex(0x2a4a4a);

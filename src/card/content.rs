use crate::geometry::Rgb;

use super::palette;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyLevel {
    pub label: &'static str,
    pub description: &'static str,
    pub color: Rgb,
}

/// Highest energy first.
pub const ENERGY_LEVELS: [EnergyLevel; 5] = [
    EnergyLevel {
        label: "OVERLOAD",
        description: "Can't think straight",
        color: palette::ACCENT_RED,
    },
    EnergyLevel {
        label: "WIRED",
        description: "Restless or tense",
        color: palette::ACCENT_ORANGE,
    },
    EnergyLevel {
        label: "CALM ZONE",
        description: "Ready to think",
        color: palette::TEAL,
    },
    EnergyLevel {
        label: "LOW",
        description: "Tired or foggy",
        color: palette::ACCENT_LIGHT_BLUE,
    },
    EnergyLevel {
        label: "SHUTDOWN",
        description: "Frozen or numb",
        color: palette::ACCENT_BLUE,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sense {
    pub count: u8,
    pub name: &'static str,
    pub prompt: &'static str,
}

/// 5-4-3-2-1 grounding countdown.
pub const SENSES: [Sense; 5] = [
    Sense {
        count: 5,
        name: "SEE",
        prompt: "Name 5 things you can see",
    },
    Sense {
        count: 4,
        name: "TOUCH",
        prompt: "Name 4 things you can feel",
    },
    Sense {
        count: 3,
        name: "HEAR",
        prompt: "Name 3 things you can hear",
    },
    Sense {
        count: 2,
        name: "SMELL",
        prompt: "Name 2 things you can smell",
    },
    Sense {
        count: 1,
        name: "TASTE",
        prompt: "Name 1 thing you can taste",
    },
];

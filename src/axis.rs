//! Analog control identifiers and their static value ranges.

use core::fmt;
use core::str::FromStr;

use crate::error::{NameKind, UnknownNameError};

/// One analog control.
///
/// Besides the sticks, triggers and D-pad, the set contains the synthetic
/// combined [`Axis::Trigger`] and one analog alias per pressure-sensitive
/// button of the original Xbox controller (A/B/X/Y/Black/White).
///
/// Every axis has a fixed integer range, see [`Axis::min`] and [`Axis::max`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Left stick X
    X1,
    /// Left stick Y
    Y1,
    /// Right stick X
    X2,
    /// Right stick Y
    Y2,
    /// Left trigger
    LT,
    /// Right trigger
    RT,
    DpadX,
    DpadY,
    /// `RT - LT`, for devices and games that want one rudder-style axis.
    Trigger,
    A,
    B,
    X,
    Y,
    Black,
    White,
}

impl Axis {
    /// Number of axes.
    pub const COUNT: usize = 15;

    /// Every axis in declaration order.
    pub const ALL: [Axis; Self::COUNT] = [
        Axis::X1,
        Axis::Y1,
        Axis::X2,
        Axis::Y2,
        Axis::LT,
        Axis::RT,
        Axis::DpadX,
        Axis::DpadY,
        Axis::Trigger,
        Axis::A,
        Axis::B,
        Axis::X,
        Axis::Y,
        Axis::Black,
        Axis::White,
    ];

    /// Dense index, `0..COUNT`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowest value the axis reports.
    #[must_use]
    pub const fn min(self) -> i32 {
        match self {
            Axis::X1 | Axis::Y1 | Axis::X2 | Axis::Y2 => -32768,
            Axis::LT | Axis::RT => 0,
            Axis::DpadX | Axis::DpadY => -1,
            Axis::Trigger => -255,
            Axis::A | Axis::B | Axis::X | Axis::Y | Axis::Black | Axis::White => 0,
        }
    }

    /// Highest value the axis reports.
    #[must_use]
    pub const fn max(self) -> i32 {
        match self {
            Axis::X1 | Axis::Y1 | Axis::X2 | Axis::Y2 => 32767,
            Axis::LT | Axis::RT => 255,
            Axis::DpadX | Axis::DpadY => 1,
            Axis::Trigger => 255,
            Axis::A | Axis::B | Axis::X | Axis::Y | Axis::Black | Axis::White => 255,
        }
    }

    /// `(min, max)` pair.
    #[inline]
    #[must_use]
    pub const fn range(self) -> (i32, i32) {
        (self.min(), self.max())
    }

    /// Canonical short name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Axis::X1 => "X1",
            Axis::Y1 => "Y1",
            Axis::X2 => "X2",
            Axis::Y2 => "Y2",
            Axis::LT => "LT",
            Axis::RT => "RT",
            Axis::DpadX => "DPAD_X",
            Axis::DpadY => "DPAD_Y",
            Axis::Trigger => "TRIGGER",
            Axis::A => "BTN_A",
            Axis::B => "BTN_B",
            Axis::X => "BTN_X",
            Axis::Y => "BTN_Y",
            Axis::Black => "Black",
            Axis::White => "White",
        }
    }
}

/// Accepted spellings, matched case-insensitively.
///
/// Guitar controllers report whammy and tilt on the right stick; "white" and
/// "black" double as the LB/RB names because that is where those buttons
/// sit on the original controller.
const AXIS_ALIASES: &[(&str, Axis)] = &[
    ("x1", Axis::X1),
    ("y1", Axis::Y1),
    ("x2", Axis::X2),
    ("whammy", Axis::X2),
    ("y2", Axis::Y2),
    ("tilt", Axis::Y2),
    ("lt", Axis::LT),
    ("l2", Axis::LT),
    ("rt", Axis::RT),
    ("r2", Axis::RT),
    ("dpad_x", Axis::DpadX),
    ("dpad_y", Axis::DpadY),
    ("trigger", Axis::Trigger),
    ("z", Axis::Trigger),
    ("rudder", Axis::Trigger),
    ("btn_a", Axis::A),
    ("cross", Axis::A),
    ("btn_b", Axis::B),
    ("circle", Axis::B),
    ("btn_x", Axis::X),
    ("square", Axis::X),
    ("btn_y", Axis::Y),
    ("triangle", Axis::Y),
    ("white", Axis::White),
    ("lb", Axis::White),
    ("l1", Axis::White),
    ("black", Axis::Black),
    ("rb", Axis::Black),
    ("r1", Axis::Black),
];

impl FromStr for Axis {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AXIS_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(s))
            .map(|&(_, axis)| axis)
            .ok_or_else(|| UnknownNameError::new(NameKind::Axis, s))
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Digital control identifiers.

use core::fmt;
use core::str::FromStr;

use crate::error::{NameKind, UnknownNameError};

/// One digital control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Start,
    Guide,
    /// Select/Back
    Back,
    /// Left stick press
    ThumbL,
    /// Right stick press
    ThumbR,
    /// Left bumper
    LB,
    /// Right bumper
    RB,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    A,
    B,
    X,
    Y,
    /// Left trigger, digital
    LT,
    /// Right trigger, digital
    RT,
}

impl Button {
    /// Number of buttons.
    pub const COUNT: usize = 17;

    /// Every button in declaration order.
    pub const ALL: [Button; Self::COUNT] = [
        Button::Start,
        Button::Guide,
        Button::Back,
        Button::ThumbL,
        Button::ThumbR,
        Button::LB,
        Button::RB,
        Button::DpadUp,
        Button::DpadDown,
        Button::DpadLeft,
        Button::DpadRight,
        Button::A,
        Button::B,
        Button::X,
        Button::Y,
        Button::LT,
        Button::RT,
    ];

    /// Dense index, `0..COUNT`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical short name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Button::Start => "Start",
            Button::Guide => "Guide",
            Button::Back => "Back",
            Button::ThumbL => "TL",
            Button::ThumbR => "TR",
            Button::LB => "LB",
            Button::RB => "RB",
            Button::DpadUp => "DPAD_UP",
            Button::DpadDown => "DPAD_DOWN",
            Button::DpadLeft => "DPAD_LEFT",
            Button::DpadRight => "DPAD_RIGHT",
            Button::A => "A",
            Button::B => "B",
            Button::X => "X",
            Button::Y => "Y",
            Button::LT => "LT",
            Button::RT => "RT",
        }
    }
}

/// Accepted spellings, matched case-insensitively. Covers Xbox names,
/// PlayStation names, guitar fret colors and plain button numbers.
const BUTTON_ALIASES: &[(&str, Button)] = &[
    ("start", Button::Start),
    ("guide", Button::Guide),
    ("ps", Button::Guide),
    ("back", Button::Back),
    ("select", Button::Back),
    ("a", Button::A),
    ("1", Button::A),
    ("green", Button::A),
    ("cross", Button::A),
    ("b", Button::B),
    ("2", Button::B),
    ("red", Button::B),
    ("circle", Button::B),
    ("x", Button::X),
    ("3", Button::X),
    ("blue", Button::X),
    ("square", Button::X),
    ("y", Button::Y),
    ("4", Button::Y),
    ("yellow", Button::Y),
    ("triangle", Button::Y),
    ("lb", Button::LB),
    ("5", Button::LB),
    ("orange", Button::LB),
    ("white", Button::LB),
    ("l1", Button::LB),
    ("rb", Button::RB),
    ("6", Button::RB),
    ("black", Button::RB),
    ("r1", Button::RB),
    ("lt", Button::LT),
    ("7", Button::LT),
    ("l2", Button::LT),
    ("rt", Button::RT),
    ("8", Button::RT),
    ("r2", Button::RT),
    ("tl", Button::ThumbL),
    ("l3", Button::ThumbL),
    ("tr", Button::ThumbR),
    ("r3", Button::ThumbR),
    ("du", Button::DpadUp),
    ("up", Button::DpadUp),
    ("dd", Button::DpadDown),
    ("down", Button::DpadDown),
    ("dl", Button::DpadLeft),
    ("left", Button::DpadLeft),
    ("dr", Button::DpadRight),
    ("right", Button::DpadRight),
];

impl FromStr for Button {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BUTTON_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(s))
            .map(|&(_, button)| button)
            .ok_or_else(|| UnknownNameError::new(NameKind::Button, s))
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_index() {
        for (i, button) in Button::ALL.iter().enumerate() {
            assert_eq!(button.index(), i);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("select".parse::<Button>(), Ok(Button::Back));
        assert_eq!("PS".parse::<Button>(), Ok(Button::Guide));
        assert_eq!("l1".parse::<Button>(), Ok(Button::LB));
        assert_eq!("white".parse::<Button>(), Ok(Button::LB));
        assert_eq!("Black".parse::<Button>(), Ok(Button::RB));
        assert_eq!("triangle".parse::<Button>(), Ok(Button::Y));
        assert_eq!("3".parse::<Button>(), Ok(Button::X));
        assert_eq!("r3".parse::<Button>(), Ok(Button::ThumbR));
        assert_eq!("dl".parse::<Button>(), Ok(Button::DpadLeft));
        assert_eq!("Right".parse::<Button>(), Ok(Button::DpadRight));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "turbo".parse::<Button>().unwrap_err();
        assert_eq!(err.kind(), NameKind::Button);
        assert_eq!(err.name(), "turbo");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!("".parse::<Button>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(std::format!("{}", Button::ThumbL), "TL");
        assert_eq!(std::format!("{}", Button::DpadDown), "DPAD_DOWN");
    }
}

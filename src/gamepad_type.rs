//! Supported controller families and their names.

use core::fmt;
use core::str::FromStr;

use crate::error::{NameKind, UnknownNameError};

/// Controller family a snapshot producer talks to.
///
/// Three spellings exist per family: a short name used on command lines and
/// in config files ([`GamepadType::as_str`]), an uppercase identifier for
/// generated code and logs ([`GamepadType::macro_name`]) and a human-readable
/// name ([`fmt::Display`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GamepadType {
    Xbox360,
    Xbox360Wireless,
    Xbox360PlayNCharge,
    Xbox,
    /// Dance mat
    XboxMat,
    Xbox360Guitar,
    Firestorm,
    FirestormVsb,
    SaitekP2500,
    Playstation3Usb,
}

impl GamepadType {
    /// Every supported family, in declaration order.
    pub const ALL: [GamepadType; 10] = [
        GamepadType::Xbox360,
        GamepadType::Xbox360Wireless,
        GamepadType::Xbox360PlayNCharge,
        GamepadType::Xbox,
        GamepadType::XboxMat,
        GamepadType::Xbox360Guitar,
        GamepadType::Firestorm,
        GamepadType::FirestormVsb,
        GamepadType::SaitekP2500,
        GamepadType::Playstation3Usb,
    ];

    /// Short lowercase name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GamepadType::Xbox360 => "xbox360",
            GamepadType::Xbox360Wireless => "xbox360-wireless",
            GamepadType::Xbox360PlayNCharge => "xbox360-playncharge",
            GamepadType::Xbox => "xbox",
            GamepadType::XboxMat => "xbox-mat",
            GamepadType::Xbox360Guitar => "xbox360-guitar",
            GamepadType::Firestorm => "firestorm",
            GamepadType::FirestormVsb => "firestorm-vsb",
            GamepadType::SaitekP2500 => "saitek-p2500",
            GamepadType::Playstation3Usb => "playstation3-usb",
        }
    }

    /// Uppercase identifier prefixed with `GAMEPAD_`.
    #[must_use]
    pub const fn macro_name(self) -> &'static str {
        match self {
            GamepadType::Xbox360 => "GAMEPAD_XBOX360",
            GamepadType::Xbox360Wireless => "GAMEPAD_XBOX360_WIRELESS",
            GamepadType::Xbox360PlayNCharge => "GAMEPAD_XBOX360_PLAY_N_CHARGE",
            GamepadType::Xbox => "GAMEPAD_XBOX",
            GamepadType::XboxMat => "GAMEPAD_XBOX_MAT",
            GamepadType::Xbox360Guitar => "GAMEPAD_XBOX360_GUITAR",
            GamepadType::Firestorm => "GAMEPAD_FIRESTORM",
            GamepadType::FirestormVsb => "GAMEPAD_FIRESTORM_VSB",
            GamepadType::SaitekP2500 => "GAMEPAD_SAITEK_P2500",
            GamepadType::Playstation3Usb => "GAMEPAD_PLAYSTATION3_USB",
        }
    }

    /// Human-readable name; same text as [`fmt::Display`].
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            GamepadType::Xbox360 => "Xbox360",
            GamepadType::Xbox360Wireless => "Xbox360 (wireless)",
            GamepadType::Xbox360PlayNCharge => "Xbox360 Play&Charge",
            GamepadType::Xbox => "Xbox Classic",
            GamepadType::XboxMat => "Xbox Dancepad",
            GamepadType::Xbox360Guitar => "Xbox360 Guitar",
            GamepadType::Firestorm => "Firestorm Dual Power",
            GamepadType::FirestormVsb => "Firestorm Dual Power (vsb)",
            GamepadType::SaitekP2500 => "Saitek P2500",
            GamepadType::Playstation3Usb => "Playstation 3 USB",
        }
    }
}

impl FromStr for GamepadType {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GamepadType::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownNameError::new(NameKind::GamepadType, s))
    }
}

impl fmt::Display for GamepadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

//! Device-agnostic gamepad input snapshot and value normalization.
//!
//! Controllers disagree on almost everything: which controls exist, whether
//! a trigger or face button is analog or digital, whether the D-pad is a hat
//! or four buttons, and whether values are bytes, signed words or floats.
//! This crate gives producers (USB backends) and consumers (virtual input
//! devices) one shared representation.
//!
//! # Overview
//!
//! - [`normalize`]: stateless conversions between byte, word and float values
//! - [`GamepadSnapshot`]: one input sample; unset controls are derived from
//!   related set ones on read
//! - [`Axis`], [`Button`], [`GamepadType`]: closed identifier sets with
//!   static ranges, display names and alias parsing
//!
//! # Example
//!
//! ```rust
//! use gamepad_msg::{Axis, Button, GamepadSnapshot};
//!
//! // A backend that only reports a digital right trigger
//! let mut msg = GamepadSnapshot::new();
//! msg.set_button(Button::RT, true);
//!
//! // A consumer that wants analog values still gets them
//! assert_eq!(msg.get_axis(Axis::RT), 255);
//! assert_eq!(msg.get_axis(Axis::Trigger), 255);
//! assert_eq!(msg.get_axis_float(Axis::RT), 1.0);
//!
//! // Names come from user configuration
//! let button: Button = "select".parse().unwrap();
//! assert_eq!(button, Button::Back);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host builds)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod axis;
pub mod button;
pub mod error;
pub mod gamepad_type;
pub mod normalize;
pub mod snapshot;

// Re-export main types at crate root
pub use axis::Axis;
pub use button::Button;
pub use error::{NameKind, UnknownNameError, MAX_NAME_LEN};
pub use gamepad_type::GamepadType;
pub use normalize::{
    byte_to_float, byte_to_word, float_to_byte, float_to_range, float_to_word, range_to_float,
    word_to_float,
};
pub use snapshot::GamepadSnapshot;

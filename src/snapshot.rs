//! Gamepad input snapshot with cross-field derivation.
//!
//! Backends report different subsets of a controller: the original Xbox pad
//! has pressure-sensitive face buttons but no digital ones, some pads report
//! the D-pad as a hat (two axes), others as four buttons, and so on. A
//! [`GamepadSnapshot`] records only what the backend actually set and fills
//! in every other control on read, so consumers always see both the analog
//! and the digital view.
//!
//! # Derivation rules
//!
//! An unset button is derived from its paired axis, but only if that axis
//! was set:
//!
//! | Button | Source | Pressed when |
//! |---|---|---|
//! | A, B, X, Y | analog A, B, X, Y | value != 0 |
//! | LB, RB | Black, White | value != 0 |
//! | LT, RT | LT, RT | value != 0 |
//! | DPAD_UP, DPAD_DOWN | DPAD_Y | < 0, > 0 |
//! | DPAD_LEFT, DPAD_RIGHT | DPAD_X | < 0, > 0 |
//! | Start, Guide, Back, TL, TR | none | never |
//!
//! An unset axis is derived from set buttons:
//!
//! | Axis | Source | Value |
//! |---|---|---|
//! | A, B, X, Y | button A, B, X, Y | 0 / 255 |
//! | Black, White | LB, RB | 0 / 255 |
//! | LT, RT | LT, RT | 0 / 255 |
//! | DPAD_X | DPAD_LEFT, DPAD_RIGHT | -1, 0, 1 |
//! | DPAD_Y | DPAD_UP, DPAD_DOWN | -1, 0, 1 |
//! | TRIGGER | axes RT, LT | `RT - LT`, saturating |
//! | X1, Y1, X2, Y2 | none | 0 |
//!
//! Black pairs with LB and White with RB even though the name tables use
//! "black" for RB and "white" for LB. This matches how the original Xbox
//! controller's analog shoulder buttons were wired up and is kept as is.
//!
//! Derived values are never stored; every read recomputes them from the
//! explicitly set fields.
//!
//! # Example
//!
//! ```
//! use gamepad_msg::{Axis, Button, GamepadSnapshot};
//!
//! let mut msg = GamepadSnapshot::new();
//! msg.set_axis(Axis::LT, 255);
//!
//! assert!(msg.get_button(Button::LT));
//! assert_eq!(msg.get_axis(Axis::Trigger), -255);
//! ```

use core::fmt;

use crate::axis::Axis;
use crate::button::Button;
use crate::normalize::{float_to_range, range_to_float};

/// One sample of every axis and button on a controller.
///
/// Each field is either explicitly set or unset. Setting marks the field
/// set; only [`GamepadSnapshot::clear`] unsets it again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GamepadSnapshot {
    axes: [Option<i32>; Axis::COUNT],
    buttons: [Option<bool>; Button::COUNT],
}

impl GamepadSnapshot {
    /// Create a snapshot with every field unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            axes: [None; Axis::COUNT],
            buttons: [None; Button::COUNT],
        }
    }

    /// Unset every field.
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Lowest value `axis` reports.
    #[inline]
    #[must_use]
    pub const fn axis_min(axis: Axis) -> i32 {
        axis.min()
    }

    /// Highest value `axis` reports.
    #[inline]
    #[must_use]
    pub const fn axis_max(axis: Axis) -> i32 {
        axis.max()
    }

    /// Set a button. Overrides any axis-derived value.
    #[inline]
    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.buttons[button.index()] = Some(pressed);
    }

    /// Builder form of [`set_button`](Self::set_button).
    #[inline]
    #[must_use]
    pub fn with_button(mut self, button: Button, pressed: bool) -> Self {
        self.set_button(button, pressed);
        self
    }

    /// Whether `button` was explicitly set.
    #[inline]
    #[must_use]
    pub fn is_button_set(&self, button: Button) -> bool {
        self.buttons[button.index()].is_some()
    }

    /// The explicitly set value of `button`, if any.
    #[inline]
    #[must_use]
    pub fn explicit_button(&self, button: Button) -> Option<bool> {
        self.buttons[button.index()]
    }

    /// Read a button, deriving it from its paired axis when unset.
    #[must_use]
    pub fn get_button(&self, button: Button) -> bool {
        if let Some(pressed) = self.explicit_button(button) {
            return pressed;
        }

        match button {
            Button::A => self.axis_nonzero(Axis::A),
            Button::B => self.axis_nonzero(Axis::B),
            Button::X => self.axis_nonzero(Axis::X),
            Button::Y => self.axis_nonzero(Axis::Y),

            Button::LB => self.axis_nonzero(Axis::Black),
            Button::RB => self.axis_nonzero(Axis::White),

            Button::LT => self.axis_nonzero(Axis::LT),
            Button::RT => self.axis_nonzero(Axis::RT),

            Button::DpadUp => self.explicit_axis(Axis::DpadY).is_some_and(|v| v < 0),
            Button::DpadDown => self.explicit_axis(Axis::DpadY).is_some_and(|v| v > 0),
            Button::DpadLeft => self.explicit_axis(Axis::DpadX).is_some_and(|v| v < 0),
            Button::DpadRight => self.explicit_axis(Axis::DpadX).is_some_and(|v| v > 0),

            Button::Start | Button::Guide | Button::Back | Button::ThumbL | Button::ThumbR => {
                false
            }
        }
    }

    /// Set an axis. The value is stored as given; keeping it inside
    /// [`Axis::range`] is up to the caller.
    #[inline]
    pub fn set_axis(&mut self, axis: Axis, value: i32) {
        self.axes[axis.index()] = Some(value);
    }

    /// Builder form of [`set_axis`](Self::set_axis).
    #[inline]
    #[must_use]
    pub fn with_axis(mut self, axis: Axis, value: i32) -> Self {
        self.set_axis(axis, value);
        self
    }

    /// Whether `axis` was explicitly set.
    #[inline]
    #[must_use]
    pub fn is_axis_set(&self, axis: Axis) -> bool {
        self.axes[axis.index()].is_some()
    }

    /// The explicitly set value of `axis`, if any.
    #[inline]
    #[must_use]
    pub fn explicit_axis(&self, axis: Axis) -> Option<i32> {
        self.axes[axis.index()]
    }

    /// Read an axis, deriving it from buttons (or other axes) when unset.
    #[must_use]
    pub fn get_axis(&self, axis: Axis) -> i32 {
        if let Some(value) = self.explicit_axis(axis) {
            return value;
        }

        match axis {
            Axis::A => self.button_pressure(Button::A, axis),
            Axis::B => self.button_pressure(Button::B, axis),
            Axis::X => self.button_pressure(Button::X, axis),
            Axis::Y => self.button_pressure(Button::Y, axis),

            Axis::Black => self.button_pressure(Button::LB, axis),
            Axis::White => self.button_pressure(Button::RB, axis),

            Axis::LT => self.button_pressure(Button::LT, axis),
            Axis::RT => self.button_pressure(Button::RT, axis),

            Axis::DpadX => self.dpad_direction(Button::DpadLeft, Button::DpadRight),
            Axis::DpadY => self.dpad_direction(Button::DpadUp, Button::DpadDown),

            Axis::Trigger => self
                .get_axis(Axis::RT)
                .saturating_sub(self.get_axis(Axis::LT)),

            Axis::X1 | Axis::Y1 | Axis::X2 | Axis::Y2 => 0,
        }
    }

    /// Read an axis scaled to `[-1.0, 1.0]` (signed ranges) or `[0.0, 1.0]`
    /// (unsigned ranges). Derivation applies as for [`get_axis`](Self::get_axis).
    ///
    /// The mapping is linear over the whole range, so a centered stick (0)
    /// reads as roughly 1.5e-5 rather than exactly 0.0.
    #[must_use]
    pub fn get_axis_float(&self, axis: Axis) -> f32 {
        range_to_float(self.get_axis(axis), axis.min(), axis.max())
    }

    /// Set an axis from a float in the axis's float domain. Out-of-domain
    /// input is clamped. Marks the axis set.
    pub fn set_axis_float(&mut self, axis: Axis, value: f32) {
        self.set_axis(axis, float_to_range(value, axis.min(), axis.max()));
    }

    #[inline]
    fn axis_nonzero(&self, axis: Axis) -> bool {
        self.explicit_axis(axis).is_some_and(|v| v != 0)
    }

    #[inline]
    fn button_pressed(&self, button: Button) -> bool {
        self.explicit_button(button).unwrap_or(false)
    }

    #[inline]
    fn button_pressure(&self, button: Button, axis: Axis) -> i32 {
        if self.button_pressed(button) {
            axis.max()
        } else {
            0
        }
    }

    fn dpad_direction(&self, negative: Button, positive: Button) -> i32 {
        match (self.button_pressed(negative), self.button_pressed(positive)) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}

/// Dumps every control as `NAME:value`, axes first, buttons as `0`/`1`.
/// Unset controls are shown with their derived value.
impl fmt::Display for GamepadSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for axis in Axis::ALL {
            write!(f, "{sep}{}:{}", axis, self.get_axis(axis))?;
            sep = " ";
        }
        for button in Button::ALL {
            write!(f, "{sep}{}:{}", button, u8::from(self.get_button(button)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unset() {
        let msg = GamepadSnapshot::new();
        assert_eq!(msg, GamepadSnapshot::default());
        for axis in Axis::ALL {
            assert!(!msg.is_axis_set(axis));
            assert_eq!(msg.get_axis(axis), 0);
        }
        for button in Button::ALL {
            assert!(!msg.is_button_set(button));
            assert!(!msg.get_button(button));
        }
    }

    #[test]
    fn test_set_button_roundtrip() {
        let mut msg = GamepadSnapshot::new();
        msg.set_button(Button::Start, true);
        assert!(msg.get_button(Button::Start));
        assert!(msg.is_button_set(Button::Start));

        msg.set_button(Button::Start, false);
        assert!(!msg.get_button(Button::Start));
        assert!(msg.is_button_set(Button::Start));
    }

    #[test]
    fn test_face_button_from_analog() {
        let msg = GamepadSnapshot::new().with_axis(Axis::B, 40);
        assert!(msg.get_button(Button::B));
        assert!(!msg.get_button(Button::A));

        let msg = GamepadSnapshot::new().with_axis(Axis::B, 0);
        assert!(!msg.get_button(Button::B));
    }

    #[test]
    fn test_analog_from_face_button() {
        let msg = GamepadSnapshot::new().with_button(Button::Y, true);
        assert_eq!(msg.get_axis(Axis::Y), 255);
        assert_eq!(msg.get_axis(Axis::X), 0);
    }

    #[test]
    fn test_shoulder_cross_wiring() {
        let msg = GamepadSnapshot::new().with_axis(Axis::Black, 200);
        assert!(msg.get_button(Button::LB));
        assert!(!msg.get_button(Button::RB));

        let msg = GamepadSnapshot::new().with_axis(Axis::White, 1);
        assert!(msg.get_button(Button::RB));
        assert!(!msg.get_button(Button::LB));

        let msg = GamepadSnapshot::new().with_button(Button::LB, true);
        assert_eq!(msg.get_axis(Axis::Black), 255);
        assert_eq!(msg.get_axis(Axis::White), 0);

        let msg = GamepadSnapshot::new().with_button(Button::RB, true);
        assert_eq!(msg.get_axis(Axis::White), 255);
    }

    #[test]
    fn test_trigger_from_button() {
        let msg = GamepadSnapshot::new().with_button(Button::RT, true);
        assert_eq!(msg.get_axis(Axis::RT), 255);
        assert_eq!(msg.get_axis(Axis::LT), 0);
        assert_eq!(msg.get_axis(Axis::Trigger), 255);
    }

    #[test]
    fn test_combined_trigger() {
        let msg = GamepadSnapshot::new()
            .with_axis(Axis::LT, 100)
            .with_axis(Axis::RT, 30);
        assert_eq!(msg.get_axis(Axis::Trigger), -70);

        let msg = GamepadSnapshot::new()
            .with_button(Button::LT, true)
            .with_axis(Axis::RT, 255);
        assert_eq!(msg.get_axis(Axis::Trigger), 0);
    }

    #[test]
    fn test_combined_trigger_saturates() {
        let msg = GamepadSnapshot::new()
            .with_axis(Axis::RT, i32::MAX)
            .with_axis(Axis::LT, -1);
        assert_eq!(msg.get_axis(Axis::Trigger), i32::MAX);
        assert!(std::format!("{msg}").contains(" TRIGGER:2147483647 "));

        let msg = GamepadSnapshot::new()
            .with_axis(Axis::RT, i32::MIN)
            .with_axis(Axis::LT, 1);
        assert_eq!(msg.get_axis(Axis::Trigger), i32::MIN);
    }

    #[test]
    fn test_dpad_axis_from_buttons() {
        let msg = GamepadSnapshot::new().with_button(Button::DpadLeft, true);
        assert_eq!(msg.get_axis(Axis::DpadX), -1);

        let msg = msg.with_button(Button::DpadRight, true);
        assert_eq!(msg.get_axis(Axis::DpadX), 0);

        let msg = GamepadSnapshot::new().with_button(Button::DpadDown, true);
        assert_eq!(msg.get_axis(Axis::DpadY), 1);
        assert_eq!(msg.get_axis(Axis::DpadX), 0);

        let msg = GamepadSnapshot::new()
            .with_button(Button::DpadUp, true)
            .with_button(Button::DpadDown, false);
        assert_eq!(msg.get_axis(Axis::DpadY), -1);
    }

    #[test]
    fn test_dpad_buttons_from_axis() {
        let msg = GamepadSnapshot::new()
            .with_axis(Axis::DpadX, 1)
            .with_axis(Axis::DpadY, -1);
        assert!(msg.get_button(Button::DpadRight));
        assert!(!msg.get_button(Button::DpadLeft));
        assert!(msg.get_button(Button::DpadUp));
        assert!(!msg.get_button(Button::DpadDown));
    }

    #[test]
    fn test_set_axis_wins_over_buttons() {
        let msg = GamepadSnapshot::new()
            .with_button(Button::DpadLeft, true)
            .with_axis(Axis::DpadX, 1);
        assert_eq!(msg.get_axis(Axis::DpadX), 1);
        // The explicit button still wins on its own side.
        assert!(msg.get_button(Button::DpadLeft));
        assert!(msg.get_button(Button::DpadRight));
    }

    #[test]
    fn test_buttons_without_axis_default_false() {
        let msg = GamepadSnapshot::new()
            .with_axis(Axis::X1, 32767)
            .with_axis(Axis::Y2, -32768);
        assert!(!msg.get_button(Button::ThumbL));
        assert!(!msg.get_button(Button::ThumbR));
        assert!(!msg.get_button(Button::Guide));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut msg = GamepadSnapshot::new()
            .with_axis(Axis::X1, 1234)
            .with_button(Button::A, true)
            .with_button(Button::DpadUp, true);
        msg.clear();
        assert_eq!(msg, GamepadSnapshot::new());
        assert_eq!(msg.get_axis(Axis::A), 0);
        assert_eq!(msg.get_axis(Axis::DpadY), 0);
    }

    #[test]
    fn test_axis_float_accessors() {
        let mut msg = GamepadSnapshot::new();
        msg.set_axis_float(Axis::X1, -1.0);
        assert_eq!(msg.get_axis(Axis::X1), -32768);
        assert!(msg.is_axis_set(Axis::X1));

        msg.set_axis_float(Axis::LT, 1.0);
        assert_eq!(msg.get_axis(Axis::LT), 255);
        assert_eq!(msg.get_axis_float(Axis::LT), 1.0);

        msg.set_axis_float(Axis::DpadY, 0.0);
        assert_eq!(msg.get_axis(Axis::DpadY), 0);
    }

    #[test]
    fn test_stick_center_float_is_near_zero() {
        let msg = GamepadSnapshot::new().with_axis(Axis::X1, 0);
        let center = msg.get_axis_float(Axis::X1);
        assert!(center > 0.0 && center < 1e-4, "center = {center}");
    }

    #[test]
    fn test_axis_float_uses_derivation() {
        let msg = GamepadSnapshot::new().with_button(Button::LT, true);
        assert_eq!(msg.get_axis_float(Axis::LT), 1.0);
        assert_eq!(msg.get_axis_float(Axis::Trigger), -1.0);
    }

    #[test]
    fn test_static_bounds() {
        assert_eq!(GamepadSnapshot::axis_min(Axis::Trigger), -255);
        assert_eq!(GamepadSnapshot::axis_max(Axis::Y2), 32767);
    }

    #[test]
    fn test_display_dump() {
        let msg = GamepadSnapshot::new()
            .with_axis(Axis::X1, -5)
            .with_button(Button::RT, true);
        let dump = std::format!("{msg}");
        assert!(dump.starts_with("X1:-5 Y1:0 "));
        assert!(dump.contains(" RT:255 "));
        assert!(dump.contains(" TRIGGER:255 "));
        assert!(dump.ends_with(" LT:0 RT:1"));
    }
}

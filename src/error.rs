//! Name lookup error.

use core::fmt;

/// Longest name kept in an [`UnknownNameError`]; longer input is truncated.
pub const MAX_NAME_LEN: usize = 32;

/// What kind of identifier a failed lookup was trying to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NameKind {
    Axis,
    Button,
    GamepadType,
}

impl NameKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            NameKind::Axis => "axis",
            NameKind::Button => "button",
            NameKind::GamepadType => "gamepad type",
        }
    }
}

/// A user-supplied control or device name matched no known alias.
///
/// Carries the offending input (up to [`MAX_NAME_LEN`] bytes) so callers can
/// report it without the lookup tables allocating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNameError {
    kind: NameKind,
    name: heapless::String<MAX_NAME_LEN>,
}

impl UnknownNameError {
    pub(crate) fn new(kind: NameKind, input: &str) -> Self {
        let mut name = heapless::String::new();
        for c in input.chars() {
            if name.push(c).is_err() {
                break;
            }
        }
        log::debug!("unrecognized {} name {:?}", kind.as_str(), input);
        Self { kind, name }
    }

    /// The kind of lookup that failed.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> NameKind {
        self.kind
    }

    /// The rejected input, truncated to [`MAX_NAME_LEN`] bytes.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for UnknownNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "couldn't convert string \"{}\" to {}",
            self.name,
            self.kind.as_str()
        )
    }
}

impl core::error::Error for UnknownNameError {}

#[cfg(feature = "defmt")]
impl defmt::Format for UnknownNameError {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(
            f,
            "couldn't convert string \"{=str}\" to {=str}",
            self.name.as_str(),
            self.kind.as_str()
        );
    }
}

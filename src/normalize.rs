//! Scalar conversions between the three value encodings controllers use.
//!
//! | Encoding | Range | Typical source |
//! |---|---|---|
//! | byte | `0..=255`, center 128 | original Xbox analog buttons, HID sticks |
//! | word | `-32768..=32767`, center 0 | Xbox360 sticks, evdev absolute axes |
//! | float | `-1.0..=1.0`, center 0.0 | game APIs, scripting layers |
//!
//! The byte↔word and word↔float mappings are deliberately asymmetric: the
//! negative and positive halves use different scale factors so that the
//! center and both extremes land exactly on their counterparts. Only those
//! three points are guaranteed to survive a round trip.

/// Convert an unsigned byte (center 128) to a signed word (center 0).
///
/// # Example
///
/// ```
/// use gamepad_msg::normalize::byte_to_word;
///
/// assert_eq!(byte_to_word(0), -32768);
/// assert_eq!(byte_to_word(128), 0);
/// assert_eq!(byte_to_word(255), 32767);
/// ```
#[inline]
#[must_use]
pub const fn byte_to_word(value: u8) -> i16 {
    let v = value as i32;
    if v < 128 {
        (-32768 + v * 32768 / 128) as i16
    } else {
        ((v - 128) * 32767 / 127) as i16
    }
}

/// Convert a signed word to a float in `[-1.0, 1.0]`.
///
/// Negative values divide by 32768 and positive values by 32767, so both
/// `i16::MIN` and `i16::MAX` map to exactly ±1.0.
#[inline]
#[must_use]
pub fn word_to_float(value: i16) -> f32 {
    if value >= 0 {
        f32::from(value) / 32767.0
    } else {
        f32::from(value) / 32768.0
    }
}

/// Convert an unsigned byte to a float in `[-1.0, 1.0]`.
///
/// Plain linear mapping; 128 lands slightly above 0.0.
#[inline]
#[must_use]
pub fn byte_to_float(value: u8) -> f32 {
    f32::from(value) / 255.0 * 2.0 - 1.0
}

/// Convert a float to a signed word, clamping the input to `[-1.0, 1.0]`
/// and rounding to the nearest integer.
#[inline]
#[must_use]
pub fn float_to_word(value: f32) -> i16 {
    if value >= 0.0 {
        round_half_away(value.min(1.0) * 32767.0) as i16
    } else {
        // max() also maps NaN to -1.0
        round_half_away(value.max(-1.0) * 32768.0) as i16
    }
}

/// Convert a float in `[-1.0, 1.0]` to an unsigned byte, truncating toward zero.
#[inline]
#[must_use]
pub fn float_to_byte(value: f32) -> u8 {
    let t = ((value + 1.0) / 2.0).clamp(0.0, 1.0);
    // `as` saturates and maps NaN to 0
    (t * 255.0) as u8
}

/// Map an integer in `[min, max]` to a float.
///
/// Ranges with a negative lower bound map onto `[-1.0, 1.0]`, all other
/// ranges onto `[0.0, 1.0]`. Values outside the range are clamped first.
/// A degenerate range (`max <= min`) yields 0.0.
#[must_use]
pub fn range_to_float(value: i32, min: i32, max: i32) -> f32 {
    if max <= min {
        return 0.0;
    }

    let span = (max as f32) - (min as f32);
    let t = ((value.clamp(min, max) as f32) - (min as f32)) / span;

    if min < 0 {
        t * 2.0 - 1.0
    } else {
        t
    }
}

/// Inverse of [`range_to_float`]: map a float back into `[min, max]`.
///
/// The input is clamped to the float domain of the range (`[-1.0, 1.0]` for
/// signed ranges, `[0.0, 1.0]` otherwise) and the result is rounded to the
/// nearest integer, so the result always lies inside `[min, max]`.
#[must_use]
pub fn float_to_range(value: f32, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }

    let t = if min < 0 {
        (value.clamp(-1.0, 1.0) + 1.0) / 2.0
    } else {
        value.clamp(0.0, 1.0)
    };
    // NaN survives clamp(); treat it as the bottom of the range
    let t = if t.is_nan() { 0.0 } else { t };

    let span = (max as i64 - min as i64) as f32;
    let offset = round_half_away(t * span) as i64;
    (min as i64 + offset).clamp(min as i64, max as i64) as i32
}

/// Round to nearest, ties away from zero. `f32::round` is not in `core`.
#[inline]
fn round_half_away(v: f32) -> f32 {
    // Adding 0.5 before truncating rounds 0.49999997 up; split off the
    // fraction instead, which is exact for every f32 below 2^24.
    let whole = (v as i64) as f32;
    let frac = v - whole;
    if frac >= 0.5 {
        whole + 1.0
    } else if frac <= -0.5 {
        whole - 1.0
    } else {
        whole
    }
}

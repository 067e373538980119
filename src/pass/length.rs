//! Control-value to password-length mapping.

use super::ConfigError;

/// Shortest password the policy can still satisfy.
pub const MIN_LEN: usize = 5;
/// Longest password the generator will produce.
pub const MAX_LEN: usize = 40;

/// Map a control value in `[0, 99]` (a UI dial position) onto an effective
/// password length in `[MIN_LEN, MAX_LEN]`.
///
/// Half values round away from zero, so the mapping is monotone
/// non-decreasing with `map_length(0) == MIN_LEN` and
/// `map_length(99) == MAX_LEN`. Anything outside `[0, 99]`, negative
/// values included, is a contract violation and is rejected rather than
/// clamped.
pub fn map_length(control: i64) -> Result<usize, ConfigError> {
    if !(0..=99).contains(&control) {
        return Err(ConfigError::ControlOutOfRange(control));
    }

    // Integer rounding: the 35/100 scale factor has no exact binary float,
    // and f64::round would pull the control=90 midpoint down.
    let scaled = (MAX_LEN - MIN_LEN) * control as usize;
    Ok((scaled + 50) / 100 + MIN_LEN)
}

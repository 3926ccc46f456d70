/* trigcordic | angle.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

//! Binary radian helpers
//!
//! Angles are `i16` values where 65536 units make one full turn. Adding or
//! subtracting angles with the wrapping integer operations wraps around the
//! circle for free.

/******************************************************************************/

/// One full turn (360°); equal to 0 once truncated to `i16`
pub const FULL_TURN: i32 = 1 << 16;
/// Half a turn (±180°)
pub const HALF_TURN: i16 = i16::MIN;
/// A quarter turn (90°)
pub const QUARTER_TURN: i16 = 1 << 14;
/// An eighth of a turn (45°)
pub const EIGHTH_TURN: i16 = 1 << 13;

/******************************************************************************/

/// Converts whole degrees to binary radians, rounding to the nearest unit
///
/// Any number of degrees is accepted; the result wraps into ±180°.
/// ```
/// assert_eq!(trigcordic::angle::from_degrees(30), 5461);
/// assert_eq!(trigcordic::angle::from_degrees(-90), -16384);
/// assert_eq!(trigcordic::angle::from_degrees(450), 16384);
/// ```
pub const fn from_degrees(degrees: i32) -> i16 {
    let scaled = degrees as i64 * FULL_TURN as i64;
    let rounded = if scaled < 0 { (scaled - 180) / 360 } else { (scaled + 180) / 360 };
    rounded as i16
}

/// Converts binary radians to whole degrees, rounding to the nearest degree
///
/// The result lies in -180..=180.
pub const fn to_degrees(angle: i16) -> i32 {
    let scaled = angle as i32 * 360;
    if scaled < 0 {
        (scaled - FULL_TURN / 2) / FULL_TURN
    } else {
        (scaled + FULL_TURN / 2) / FULL_TURN
    }
}

/******************************************************************************/

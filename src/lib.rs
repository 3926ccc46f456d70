/* trigcordic | lib.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Fixed-point sine, cosine, atan2 and magnitude using integer CORDIC */

/******************************************************************************/

#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/******************************************************************************/

pub mod angle;
mod cordic;

pub use cordic::ITERATIONS;

/******************************************************************************/

/// Output amplitude standing for 1.0
///
/// Sines, cosines and magnitudes are all expressed as fractions of this value.
pub const UNIT: i16 = 30000;

/// Sine and cosine of an angle, as fractions of [`UNIT`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SinCos {
    /// Sine, in -30000..=30000
    pub sin: i16,
    /// Cosine, in -30000..=30000
    pub cos: i16
}

/// Direction and length of a vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Atan2Sqrt {
    /// Direction of the vector in binary radians (65536 units per turn)
    pub atan2: i16,
    /// Length of the vector, on the same linear scale as the coordinates
    pub sqrt: i16
}

impl From<SinCos> for (i16, i16) {
    /// Returns `(sin, cos)`
    fn from(value: SinCos) -> Self {
        (value.sin, value.cos)
    }
}

impl From<Atan2Sqrt> for (i16, i16) {
    /// Returns `(atan2, sqrt)`
    fn from(value: Atan2Sqrt) -> Self {
        (value.atan2, value.sqrt)
    }
}

/******************************************************************************/

/// Computes the sine and cosine of an angle simultaneously
///
/// The angle is in binary radians: the whole `i16` range maps onto one turn,
/// so every value is valid and overflowing angle arithmetic wraps correctly.
/// Both results are fractions of [`UNIT`] (30000 = 1.0, -30000 = -1.0).
///
/// The call always performs [`ITERATIONS`] micro-rotations, so its run time
/// does not depend on the input.
/// ```
/// let foo = trigcordic::sin_cos(5461); // 30 degrees
/// assert!((foo.sin - 15000).abs() <= 1);
/// assert!((foo.cos - 25981).abs() <= 1);
/// ```
pub const fn sin_cos(angle: i16) -> SinCos {
    let (cos, sin) = cordic::rotate(angle);
    SinCos { sin, cos }
}

/// Computes the direction and the length of the vector `(x, y)` simultaneously
///
/// `atan2` is returned in binary radians, `sqrt` is `√(x² + y²)` on the scale
/// of the inputs.
///
/// Notes:
/// * Accuracy grows with the size of `x` and `y`: consider multiplying both
///   by a scaling factor before calling the function.
/// * Vectors longer than 32767 do not fit the result; their length wraps and
///   is meaningless. No check is performed.
/// * The zero vector returns a zero angle and a zero length.
/// ```
/// let bar = trigcordic::atan2_sqrt(15000, 25980);
/// assert!((bar.atan2 - 5461).abs() <= 1);
/// assert!((bar.sqrt - 30000).abs() <= 3);
/// ```
pub const fn atan2_sqrt(y: i16, x: i16) -> Atan2Sqrt {
    let (atan2, sqrt) = cordic::vectorize(y, x);
    Atan2Sqrt { atan2, sqrt }
}

/******************************************************************************/

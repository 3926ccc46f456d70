/* trigcordic | cordic.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Shift-and-add CORDIC engine with its rotation and vectoring drivers */

/******************************************************************************/

use crate::angle::QUARTER_TURN;

include!(concat!(env!("OUT_DIR"), "/cordic_tables.rs"));

/******************************************************************************/

/// Number of micro-rotations performed by every call
pub const ITERATIONS: usize = ATAN_TABLE.len();

/// Half a turn in the engine's angle format (one turn = 2^32)
const HALF_TURN: i32 = i32::MIN;

/// Extra fractional bits carried by the engine's angle accumulator
const ANGLE_FRAC_BITS: u32 = 16;

/// Guard bits added to the vectoring-mode coordinates
///
/// A vector of length 46341 (the longest `i16` pair) still fits `i32` after
/// the CORDIC expansion.
const VECTORING_GUARD_BITS: u32 = 14;

const _: () = {
    assert!(ITERATIONS >= 2, "The arctangent table must hold at least two entries");
    assert!(ATAN_TABLE[0] == 1 << 29, "The first micro-rotation must be 45 degrees");
    let mut i = 1;
    while i < ITERATIONS {
        assert!(ATAN_TABLE[i] > 0, "Every micro-rotation must be a positive angle");
        assert!(ATAN_TABLE[i] < ATAN_TABLE[i - 1], "The arctangent table must be strictly decreasing");
        i += 1;
    }
};

/******************************************************************************/

/// Working triple carried from one micro-rotation to the next
///
/// In rotation mode `z` is the angle still to be rotated; in vectoring mode it
/// accumulates the angle removed from the input vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State {
    pub x: i32,
    pub y: i32,
    pub z: i32
}

/// Direction rule steering `z` towards zero
pub const ROTATE: bool = false;
/// Direction rule steering `y` towards zero
pub const VECTORIZE: bool = true;

/// Runs all the micro-rotations on a state
///
/// Step `i` rotates `(x, y)` by `±atan(2^-i)` using two shifts and two
/// additions, then books the same angle into `z`. The sign is the only
/// data-dependent decision.
pub const fn iterate<const VECTORING: bool>(state: State) -> State {
    let State { mut x, mut y, mut z } = state;

    let mut i = 0;
    while i < ITERATIONS {
        let counterclockwise = if VECTORING { y < 0 } else { z >= 0 };
        let (dx, dy) = (y >> i, x >> i);
        if counterclockwise {
            x -= dx;
            y += dy;
            z = z.wrapping_sub(ATAN_TABLE[i]);
        } else {
            x += dx;
            y -= dy;
            z = z.wrapping_add(ATAN_TABLE[i]);
        }
        i += 1;
    }

    State { x, y, z }
}

/******************************************************************************/

/// Rounds a rotation-mode accumulator back to the output scale
const fn round_rotation(value: i32) -> i16 {
    ((value + (1 << (ROTATION_FRAC_BITS - 1))) >> ROTATION_FRAC_BITS) as i16
}

/// Rotation mode: returns `(cos, sin)` of `angle` scaled to the unit amplitude
///
/// The seed vector is pre-shrunk by the CORDIC gain, so the engine's expansion
/// lands it exactly on the unit circle. Angles beyond ±90° start from the
/// opposite seed half a turn away, which keeps `z` inside the convergence cone.
pub const fn rotate(angle: i16) -> (i16, i16) {
    let mut x = ROTATION_SEED;
    let mut z = (angle as i32) << ANGLE_FRAC_BITS;
    if angle > QUARTER_TURN || angle < -QUARTER_TURN {
        x = -x;
        z = z.wrapping_sub(HALF_TURN);
    }

    let state = iterate::<ROTATE>(State { x, y: 0, z });
    (round_rotation(state.x), round_rotation(state.y))
}

/// Vectoring mode: returns `(angle, magnitude)` of the vector `(x, y)`
///
/// The coordinates are widened with guard bits so the floored shifts of small
/// negative values do not bias the result. Vectors in the left half-plane are
/// mirrored through the origin first, with the half turn booked into the
/// starting angle. The zero vector has no direction and yields `(0, 0)`.
pub const fn vectorize(y: i16, x: i16) -> (i16, i16) {
    if x == 0 && y == 0 {
        return (0, 0);
    }

    let mut x = (x as i32) << VECTORING_GUARD_BITS;
    let mut y = (y as i32) << VECTORING_GUARD_BITS;
    let mut z = 0;
    if x < 0 {
        x = -x;
        y = -y;
        z = HALF_TURN;
    }

    let state = iterate::<VECTORIZE>(State { x, y, z });
    let angle = state.z.wrapping_add(1 << (ANGLE_FRAC_BITS - 1)) >> ANGLE_FRAC_BITS;
    let magnitude = (state.x as i64 * GAIN_Q15 as i64 + (1 << (14 + VECTORING_GUARD_BITS))) >> (15 + VECTORING_GUARD_BITS);
    (angle as i16, magnitude as i16)
}

/******************************************************************************/

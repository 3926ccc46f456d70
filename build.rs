use std::env;
use std::f64::consts::PI;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Number of CORDIC micro-rotations
const ITERATIONS: usize = 17;
/// Output amplitude representing 1.0
const UNIT: f64 = 30000.0;
/// Extra fractional bits carried by the rotation-mode accumulators
const ROTATION_FRAC_BITS: u32 = 14;

/// atan(2^-i) in binary radians with 16 fractional bits (one turn = 2^32)
fn compute_atan_table() -> [i32; ITERATIONS] {
    (0..ITERATIONS)
        .map(|i| (f64::atan2(1.0, f64::powf(2.0, i as _)) / (2.0 * PI) * 4294967296.0).round() as i32)
        .collect::<Vec<i32>>()
        .try_into()
        .unwrap()
}

/// Reciprocal of the CORDIC expansion factor after all iterations
fn compute_gain() -> f64 {
    (0..ITERATIONS)
        .map(|i| 1.0 / f64::sqrt(1.0 + f64::powf(2.0, -2.0 * i as f64)))
        .product()
}

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("cordic_tables.rs");
    let mut f = File::create(dest_path).unwrap();

    let atan_table = compute_atan_table();
    writeln!(&mut f, "const ATAN_TABLE: [i32; {}] = {:?};", atan_table.len(), atan_table).unwrap();

    let gain = compute_gain();
    writeln!(&mut f, "const ROTATION_FRAC_BITS: u32 = {};", ROTATION_FRAC_BITS).unwrap();
    writeln!(&mut f, "const ROTATION_SEED: i32 = {};", (UNIT * gain * f64::powi(2.0, ROTATION_FRAC_BITS as i32)).round() as i32).unwrap();
    writeln!(&mut f, "const GAIN_Q15: i32 = {};", (gain * 32768.0).round() as i32).unwrap();
    writeln!(&mut f, "#[cfg(test)]").unwrap();
    writeln!(&mut f, "const CORDIC_GAIN: f64 = {:?};", gain).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}

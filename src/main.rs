//! Unit-test driver for the built-in kernel checks.
//!
//! Runs the demonstration candidates against the reference kernels and
//! reports a single binary outcome: "UNIT TEST PASSED" / "UNIT TEST
//! FAILED" on stderr, with the exit status derived from the verdicts
//! (0 for pass, nonzero for fail). Per-check detail goes through the
//! `log` facade; set RUST_LOG=info to see it.

use std::process::ExitCode;

use kernelcheck::candidate::matmul::matmul_opt;
use kernelcheck::candidate::transpose::transpose_opt;
use kernelcheck::compare::CompareError;
use kernelcheck::{Tolerance, verify_matmul, verify_transpose};
use log::info;

/// Epsilon bound for the multiply check. The lane-accumulating candidate
/// deviates by up to 64 epsilon units on these inputs; 128 leaves room
/// for more aggressive reordering without letting real bugs through.
const MATMUL_MAX_UNITS: f64 = 128.0;

fn run() -> Result<bool, CompareError> {
    let a: [f32; 16] = [
        1.0, 1.1, 1.2, 1.3, //
        2.0, 2.1, 2.2, 2.3, //
        3.0, 3.1, 3.2, 3.3, //
        4.0, 4.1, 4.2, 4.3,
    ];
    let b: [f32; 16] = [
        1.0, 2.0, 3.0, 4.0, //
        5.0, 6.0, 7.0, 8.0, //
        9.0, 10.0, 11.0, 12.0, //
        13.0, 14.0, 15.0, 16.0,
    ];

    let matmul_verdict = verify_matmul(
        matmul_opt,
        &a,
        &b,
        4,
        4,
        4,
        Tolerance::Epsilon {
            max_units: MATMUL_MAX_UNITS,
        },
    )?;
    info!("matmul 4x4: {}", matmul_verdict);

    let matrix: Vec<f32> = (0..16).map(|i| i as f32).collect();
    let transpose_verdict = verify_transpose(transpose_opt, &matrix, 4)?;
    info!("transpose 4x4: {}", transpose_verdict);

    Ok(matmul_verdict.passed() && transpose_verdict.passed())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(true) => {
            eprintln!("UNIT TEST PASSED");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            eprintln!("UNIT TEST FAILED");
            ExitCode::FAILURE
        }
        Err(e) => {
            // Wrong harness setup, not a wrong kernel.
            eprintln!("invalid comparison: {e}");
            ExitCode::FAILURE
        }
    }
}

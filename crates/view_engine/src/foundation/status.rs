//! Colorized status reporting for subsystem calls
//!
//! Every bootstrap and render step goes through [`check`], which prints a
//! green `[OK]` line on success or a red `[NG]` line on failure and converts
//! the failure into the caller's error kind. [`info`] prints a yellow `[NC]`
//! line for steps that report no status of their own.

use std::fmt::Display;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[39m";

/// Print a green `[OK]` line on stdout.
pub fn ok(label: &str) {
    println!("{}[OK]{}: {}", GREEN, RESET, label);
}

/// Print a red `[NG]` line on stderr.
pub fn fail(label: &str) {
    eprintln!("{}[NG]{}: {}", RED, RESET, label);
}

/// Print a yellow `[NC]` line on stdout. Informational only, never fails.
pub fn info(label: &str) {
    println!("{}[NC]{}: {}", YELLOW, RESET, label);
}

/// Report `result` under `label` and convert a failure through `wrap`.
///
/// On `Ok` the value passes through behind an `[OK]` line; on `Err` the
/// failure is converted into the caller's error kind behind a `[NG]` line.
pub fn check<T, E, W, F>(label: &str, result: Result<T, E>, wrap: W) -> Result<T, F>
where
    E: Display,
    W: FnOnce(E) -> F,
{
    match result {
        Ok(value) => {
            ok(label);
            Ok(value)
        }
        Err(e) => {
            fail(label);
            log::error!("{} failed: {}", label, e);
            Err(wrap(e))
        }
    }
}

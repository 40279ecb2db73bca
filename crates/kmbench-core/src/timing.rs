//! Parser for the external program's timing output.
//!
//! The program reports one line per phase ending in `Tiempo: <seconds> seg`.
//! A trial is valid only when stdout contains exactly two occurrences: the
//! first is the serial elapsed time, the second the parallel elapsed time.

use thiserror::Error;

/// Marker preceding a timing value.
const TIME_MARKER: &str = "Tiempo:";

/// Unit token following a timing value.
const TIME_UNIT: &str = "seg";

/// Timing pair extracted from one trial's stdout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialTimes {
    /// Serial elapsed seconds.
    pub serial: f64,
    /// Parallel elapsed seconds.
    pub parallel: f64,
}

/// Why a trial's output was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimingParseError {
    /// No timing occurrence found at all.
    #[error("no timing values found in output")]
    Missing,
    /// An occurrence count other than two.
    #[error("expected 2 timing values, found {0}")]
    UnexpectedCount(usize),
}

/// Interpret one trial's stdout as a `(serial, parallel)` pair.
///
/// Zero, one, or three-plus occurrences invalidate the whole trial; a pair is
/// never partially accepted.
pub fn parse_trial_output(output: &str) -> Result<TrialTimes, TimingParseError> {
    let times = extract_timings(output);
    match times.as_slice() {
        [] => Err(TimingParseError::Missing),
        [serial, parallel] => Ok(TrialTimes {
            serial: *serial,
            parallel: *parallel,
        }),
        other => Err(TimingParseError::UnexpectedCount(other.len())),
    }
}

/// Extract every `Tiempo: <seconds> seg` occurrence, in encounter order.
#[must_use]
pub fn extract_timings(output: &str) -> Vec<f64> {
    let mut times = Vec::new();
    let mut rest = output;
    while let Some(pos) = rest.find(TIME_MARKER) {
        rest = &rest[pos + TIME_MARKER.len()..];
        if let Some((value, after)) = take_seconds(rest) {
            times.push(value);
            rest = after;
        }
    }
    times
}

/// Parse `<seconds> seg` after the marker: at least one whitespace character,
/// an unsigned decimal built from digits and dots, more whitespace, then the
/// unit token. Returns the value and the remaining input.
fn take_seconds(input: &str) -> Option<(f64, &str)> {
    let after_space = input.trim_start();
    if after_space.len() == input.len() {
        return None;
    }

    let digits = after_space
        .bytes()
        .take_while(|b| b.is_ascii_digit() || *b == b'.')
        .count();
    if digits == 0 {
        return None;
    }
    let (number, rest) = after_space.split_at(digits);
    let value: f64 = number.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    let after_value = rest.trim_start();
    if after_value.len() == rest.len() || !after_value.starts_with(TIME_UNIT) {
        return None;
    }
    Some((value, after_value))
}

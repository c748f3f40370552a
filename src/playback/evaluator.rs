//! Launch outcome classification
//!
//! Exit code 0 alone does not mean playback happened: a renderer that
//! cannot initialize the display often exits 0 almost instantly with no
//! visible output. A launch only counts as success when it also ran for at
//! least the configured minimum duration.

use crate::playback::launcher::LaunchReport;
use crate::playback::types::LaunchOutcome;

/// Classify one finished launch attempt.
///
/// Diagnostics are always prefixed with the backend name so the aggregated
/// failure history in the attempt log stays attributable per candidate.
pub fn evaluate(backend: &'static str, report: &LaunchReport, min_play_seconds: f64) -> LaunchOutcome {
    let elapsed_seconds = report.elapsed.as_secs_f64();

    match report.exit_code {
        Some(0) if elapsed_seconds >= min_play_seconds => LaunchOutcome {
            backend,
            succeeded: true,
            elapsed_seconds,
            diagnostic: None,
        },
        Some(0) => LaunchOutcome {
            backend,
            succeeded: false,
            elapsed_seconds,
            diagnostic: Some(format!(
                "{backend}: exited too quickly ({elapsed_seconds:.2}s), video output likely failed to initialize"
            )),
        },
        Some(code) => LaunchOutcome {
            backend,
            succeeded: false,
            elapsed_seconds,
            diagnostic: Some(match last_stderr_line(&report.stderr) {
                Some(line) => format!("{backend}: {line}"),
                None => format!("{backend}: exited with code {code}"),
            }),
        },
        None => LaunchOutcome {
            backend,
            succeeded: false,
            elapsed_seconds,
            diagnostic: Some(format!("{backend}: terminated by signal")),
        },
    }
}

/// Last non-empty line of captured stderr, if any
fn last_stderr_line(stderr: &str) -> Option<&str> {
    stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
}

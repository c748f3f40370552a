//! Backend candidate planning
//!
//! Pure policy: maps the configured backend preference and the runtime
//! display availability to an ordered list of candidates to attempt. The
//! operator's preferred backend always comes first; the remaining entries
//! are fallbacks ordered from most to least likely to work on the
//! appliance's console. Plans are built fresh per request — display
//! availability can change between calls.

use crate::error::{Error, Result};
use crate::playback::types::{Backend, BackendCandidate, BackendPreference};

/// Build the ordered candidate plan for one playback request.
///
/// Returns `Error::NoX11Session` when x11 is explicitly requested without a
/// display: attempting it is impossible, and silently substituting another
/// backend would override the operator's explicit choice. Every other
/// preference degrades silently when its entries are unavailable.
pub fn plan(
    preference: BackendPreference,
    display_available: bool,
) -> Result<Vec<BackendCandidate>> {
    let candidates = match preference {
        BackendPreference::X11 => {
            if !display_available {
                return Err(Error::NoX11Session);
            }
            vec![
                BackendCandidate::windowed(Backend::X11),
                BackendCandidate::isolated(Backend::Drm),
                BackendCandidate::isolated(Backend::Auto),
            ]
        }
        BackendPreference::Sdl => vec![
            BackendCandidate::isolated(Backend::Sdl),
            BackendCandidate::isolated(Backend::Drm),
            BackendCandidate::isolated(Backend::Auto),
        ],
        BackendPreference::Auto => {
            let mut candidates = vec![
                BackendCandidate::isolated(Backend::Sdl),
                BackendCandidate::isolated(Backend::Drm),
            ];
            if display_available {
                candidates.push(BackendCandidate::windowed(Backend::X11));
            }
            candidates.push(BackendCandidate::windowed(Backend::Auto));
            candidates
        }
        BackendPreference::Drm => {
            let mut candidates = vec![
                BackendCandidate::isolated(Backend::Drm),
                BackendCandidate::isolated(Backend::Sdl),
                BackendCandidate::isolated(Backend::Auto),
            ];
            if display_available {
                candidates.push(BackendCandidate::windowed(Backend::X11));
            }
            candidates
        }
    };

    // Last-resort "auto" must delegate fully; never pin a renderer on it.
    debug_assert!(candidates
        .iter()
        .all(|c| c.backend != Backend::Auto || c.extra_args.is_empty()));
    debug_assert!(!candidates.is_empty());
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(plan: &[BackendCandidate]) -> Vec<&'static str> {
        plan.iter().map(|c| c.backend.name()).collect()
    }

    #[test]
    fn plans_are_never_empty_except_x11_error() {
        for preference in [
            BackendPreference::Drm,
            BackendPreference::Sdl,
            BackendPreference::Auto,
        ] {
            for display in [false, true] {
                let plan = plan(preference, display).unwrap();
                assert!(!plan.is_empty());
            }
        }
    }

    #[test]
    fn x11_without_display_is_a_config_error() {
        let result = plan(BackendPreference::X11, false);
        assert!(matches!(result, Err(Error::NoX11Session)));
    }

    #[test]
    fn x11_with_display_leads_with_windowed_x11() {
        let plan = plan(BackendPreference::X11, true).unwrap();
        assert_eq!(names(&plan), vec!["x11", "drm", "auto"]);
        assert!(!plan[0].isolate_display_env);
        assert!(plan[1..].iter().all(|c| c.isolate_display_env));
    }

    #[test]
    fn drm_preference_tries_drm_first() {
        let plan = plan(BackendPreference::Drm, false).unwrap();
        assert_eq!(names(&plan), vec!["drm", "sdl", "auto"]);
        assert!(plan.iter().all(|c| c.isolate_display_env));
    }

    #[test]
    fn drm_preference_appends_x11_when_display_present() {
        let plan = plan(BackendPreference::Drm, true).unwrap();
        assert_eq!(names(&plan), vec!["drm", "sdl", "auto", "x11"]);
        assert!(!plan[3].isolate_display_env);
    }

    #[test]
    fn auto_preference_order_depends_on_display() {
        let headless = plan(BackendPreference::Auto, false).unwrap();
        assert_eq!(names(&headless), vec!["sdl", "drm", "auto"]);

        let with_display = plan(BackendPreference::Auto, true).unwrap();
        assert_eq!(names(&with_display), vec!["sdl", "drm", "x11", "auto"]);
        // The trailing auto entry runs against the live session.
        assert!(!with_display[3].isolate_display_env);
    }

    #[test]
    fn auto_candidate_carries_no_renderer_pin() {
        let plan = plan(BackendPreference::Sdl, false).unwrap();
        let auto = plan.iter().find(|c| c.backend == Backend::Auto).unwrap();
        assert!(auto.extra_args.is_empty());
    }

    #[test]
    fn candidates_are_unique_within_a_plan() {
        for preference in [
            BackendPreference::Drm,
            BackendPreference::Sdl,
            BackendPreference::Auto,
            BackendPreference::X11,
        ] {
            let Ok(plan) = plan(preference, true) else {
                continue;
            };
            let mut seen = names(&plan);
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), plan.len());
        }
    }

    #[test]
    fn planning_is_deterministic() {
        let first = plan(BackendPreference::Auto, true).unwrap();
        let second = plan(BackendPreference::Auto, true).unwrap();
        assert_eq!(first, second);
    }
}

//! The result-poll state machine, kept DOM-free.
//!
//! While a search runs server-side, the results page polls a status URL
//! with HEAD requests. The server answers 202 while the search is still
//! running, 201 once results are ready, and 400 once it has forgotten
//! the search id.

use std::time::Duration;

/// Delay between consecutive status probes.
pub const POLL_INTERVAL: Duration = Duration::from_secs(7);

/// What one status probe tells the loop to do next.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PollVerdict {
    /// 202: still searching; probe again after [`POLL_INTERVAL`].
    Continue,
    /// 201: results are ready; reload the page.
    Done,
    /// 400: the server no longer knows the search.
    TimedOut,
    /// Anything else; give up and surface an error.
    Failed,
}

impl PollVerdict {
    /// Classify a probe's status code.
    #[must_use]
    pub const fn classify(status: u16) -> Self {
        match status {
            202 => Self::Continue,
            201 => Self::Done,
            400 => Self::TimedOut,
            _ => Self::Failed,
        }
    }

    /// True when the loop stops after this verdict.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// The URL of the results page for a submitted query.
///
/// The form's action ends in a trailing slash; the query is appended as
/// one path segment.
#[must_use]
pub fn results_url(action: &str, query: &str) -> String {
    format!("{action}{query}/")
}

#[cfg(test)]
mod tests {
    use super::{POLL_INTERVAL, PollVerdict, results_url};

    #[test]
    fn the_three_named_codes_classify_exactly() {
        assert_eq!(PollVerdict::classify(202), PollVerdict::Continue);
        assert_eq!(PollVerdict::classify(201), PollVerdict::Done);
        assert_eq!(PollVerdict::classify(400), PollVerdict::TimedOut);
    }

    #[test]
    fn every_unexpected_status_collapses_to_failed() {
        for status in [200, 204, 301, 403, 404, 500, 503] {
            assert_eq!(PollVerdict::classify(status), PollVerdict::Failed);
        }
    }

    #[test]
    fn only_continue_keeps_the_loop_alive() {
        assert!(!PollVerdict::Continue.is_terminal());
        assert!(PollVerdict::Done.is_terminal());
        assert!(PollVerdict::TimedOut.is_terminal());
        assert!(PollVerdict::Failed.is_terminal());
    }

    #[test]
    fn a_pending_search_polls_until_done() {
        // 202, 202, 201: two more probes scheduled, then a reload.
        let probes = [202, 202, 201];
        let mut rescheduled = 0;
        let mut verdict = PollVerdict::Continue;
        for status in probes {
            verdict = PollVerdict::classify(status);
            if verdict.is_terminal() {
                break;
            }
            rescheduled += 1;
        }
        assert_eq!(rescheduled, 2);
        assert_eq!(verdict, PollVerdict::Done);
    }

    #[test]
    fn probe_delay_is_seven_seconds() {
        assert_eq!(POLL_INTERVAL.as_secs(), 7);
    }

    #[test]
    fn query_is_appended_as_a_path_segment() {
        assert_eq!(
            results_url("/search/", "fish pie"),
            "/search/fish pie/"
        );
    }
}

//! The stats payload served behind the chart container's `data-url`.

use serde::Deserialize;

/// Daily site statistics, parallel series over the same dates. Days
/// where a counter was not recorded arrive as `null`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StatsPayload {
    /// ISO dates, one per sample.
    pub dates: Vec<String>,
    /// Registered users.
    pub users: Vec<Option<f64>>,
    /// Users holding at least one inbox.
    pub active_users: Vec<Option<f64>>,
    /// Total inboxes.
    pub inboxes: Vec<Option<f64>>,
    /// Inboxes that have received mail.
    pub active_inboxes: Vec<Option<f64>>,
    /// Total messages.
    pub emails: Vec<Option<f64>>,
    /// Messages that have been read.
    pub read_emails: Vec<Option<f64>>,
    /// Server timestamp of the response, carried opaquely.
    pub now: String,
}

/// One chart: a container id plus its paired series.
pub struct ChartSpec<'a> {
    /// Id of the div the canvas is prepended into.
    pub container_id: &'static str,
    /// Series drawn in the primary color.
    pub primary: &'a [Option<f64>],
    /// Series drawn in the secondary color.
    pub secondary: &'a [Option<f64>],
}

impl StatsPayload {
    /// The three charts the stats page shows, in page order.
    #[must_use]
    pub fn charts(&self) -> [ChartSpec<'_>; 3] {
        [
            ChartSpec {
                container_id: "users-chart",
                primary: &self.users,
                secondary: &self.active_users,
            },
            ChartSpec {
                container_id: "inboxes-chart",
                primary: &self.inboxes,
                secondary: &self.active_inboxes,
            },
            ChartSpec {
                container_id: "emails-chart",
                primary: &self.emails,
                secondary: &self.read_emails,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::StatsPayload;

    #[test]
    fn payload_decodes_with_null_gaps() {
        let raw = r#"{
            "dates": ["2016-01-01", "2016-01-02", "2016-01-03"],
            "users": [10, null, 12],
            "active_users": [5, 6, null],
            "inboxes": [100, 110, 120],
            "active_inboxes": [40, null, 44],
            "emails": [1000, 1100, 1200],
            "read_emails": [null, 600, 660],
            "now": "2016-01-03T12:00:00Z"
        }"#;
        let payload: StatsPayload = serde_json::from_str(raw).expect("payload should decode");
        assert_eq!(payload.dates.len(), 3);
        assert_eq!(payload.users[1], None);
        assert_eq!(payload.read_emails[0], None);

        let charts = payload.charts();
        assert_eq!(charts[0].container_id, "users-chart");
        assert_eq!(charts[1].container_id, "inboxes-chart");
        assert_eq!(charts[2].container_id, "emails-chart");
        assert_eq!(charts[2].secondary, payload.read_emails.as_slice());
    }
}

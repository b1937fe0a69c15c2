use std::time::Duration;

/// How long the loop sleeps between config polls when nothing animates.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(100);

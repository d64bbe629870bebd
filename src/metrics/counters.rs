//! Counter helpers

use super::labels;

/// A connect attempt started
pub fn connect_attempted() {
    ::metrics::counter!(labels::CONNECT_ATTEMPTS).increment(1);
}

/// A connect attempt produced a live connection
pub fn connect_successful() {
    ::metrics::counter!(labels::CONNECT_SUCCESS).increment(1);
}

/// A connect call failed
pub fn connect_failed(reason: &'static str) {
    ::metrics::counter!(labels::CONNECT_FAILURES, labels::REASON => reason).increment(1);
}

/// A call was answered by the existing connection
pub fn connect_reused() {
    ::metrics::counter!(labels::CONNECT_REUSED).increment(1);
}

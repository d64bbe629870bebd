//! Metric names and label values

/// Connect attempts that reached the connector
pub const CONNECT_ATTEMPTS: &str = "mongo_connect_attempts_total";
/// Attempts that produced a live connection
pub const CONNECT_SUCCESS: &str = "mongo_connect_success_total";
/// Failed attempts, labeled by `reason`
pub const CONNECT_FAILURES: &str = "mongo_connect_failures_total";
/// Calls answered from the existing connection
pub const CONNECT_REUSED: &str = "mongo_connect_reused_total";
/// Wall time of a connect attempt in milliseconds, labeled by `outcome`
pub const CONNECT_DURATION: &str = "mongo_connect_duration_ms";

/// Label key for failure reasons
pub const REASON: &str = "reason";
/// Label key for attempt outcome
pub const OUTCOME: &str = "outcome";

/// Rejected before any I/O
pub const REASON_CONFIG: &str = "config";
/// Driver or network failure
pub const REASON_CONNECTION: &str = "connection";
/// Caller dropped the attempt before it finished
pub const REASON_CANCELLED: &str = "cancelled";
/// Ready state bookkeeping went wrong
pub const REASON_INVALID_STATE: &str = "invalid_state";

/// Attempt succeeded
pub const OUTCOME_SUCCESS: &str = "success";
/// Attempt failed
pub const OUTCOME_ERROR: &str = "error";

/// Production GA4 Measurement Protocol collection endpoint.
pub const COLLECT_ENDPOINT: &str = "https://www.google-analytics.com/mp/collect";

/// Validation endpoint; GA4 answers with validation messages instead of recording the event.
pub const DEBUG_COLLECT_ENDPOINT: &str = "https://www.google-analytics.com/debug/mp/collect";

/// Prefix carried by `_ga` cookie values (`GA1.1.<random>.<timestamp>`).
pub const GA_COOKIE_PREFIX: &str = "GA1.1.";

/// Client id used when the record carries none, in `<random>.<epoch-seconds>` form.
pub const FALLBACK_CLIENT_ID: &str = "999999999.1609459200";

/// GA4 only surfaces events in realtime reports when an engagement time is attached.
pub const ENGAGEMENT_TIME_MSEC: &str = "100";

pub const SUCCESS_MESSAGE: &str = "Event sent to GA4";

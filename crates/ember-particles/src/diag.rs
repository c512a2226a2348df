//! Optional diagnostic sink for misconfiguration reports

/// Receives human-readable notes about silently-degraded operations:
/// clamped configuration values, spawns declined for lack of visuals.
///
/// The simulator never aborts on misconfiguration; when a sink is
/// attached it reports what it tolerated instead.
pub trait DiagnosticSink {
    fn report(&mut self, message: &str);
}

/// Writes diagnostics to stdout in the engine's log line format
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn report(&mut self, message: &str) {
        println!("[particles] {message}");
    }
}

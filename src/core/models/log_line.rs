use chrono::NaiveDateTime;

use crate::core::models::event::{Actor, EventCategory};

/// The decoded form of one persisted log line.
///
/// Only tests and tooling decode lines; the display path prints raw text.
/// Unlike [`AuditEvent`](crate::core::models::event::AuditEvent), the actor
/// here is always present: anonymous events decode to id 0 / `guest/cron`
/// exactly as they were written.
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: NaiveDateTime,
    pub category: EventCategory,
    pub actor: Actor,
    pub origin: String,
    pub message: String,
}

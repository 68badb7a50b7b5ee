//! Append-only audit trail for WordPane sites.
//!
//! The host application feeds lifecycle events (user registration,
//! profile update, user deletion, login, post deletion) into an
//! [`AuditRecorder`], which encodes each one as a single human-readable
//! line and appends it to `wordpane-audit.log` under the content root.
//! The `wordpane-audit last [N]` command shows the most recent lines.
//!
//! Auditing is best-effort by design: write failures never propagate
//! into the host operation that triggered the event.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;

pub use crate::adapters::log::tailer::{Tail, tail};
pub use crate::adapters::log::writer::FileLogWriter;
pub use crate::core::errors::{AuditError, Result};
pub use crate::core::models::event::{Actor, AuditEvent, EventCategory};
pub use crate::core::models::records::{PostRecord, UserRecord};
pub use crate::core::services::recorder::AuditRecorder;
pub use crate::core::traits::resolver::RequestContext;
pub use crate::core::traits::sink::AuditSink;

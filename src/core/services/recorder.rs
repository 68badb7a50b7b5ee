use chrono::Local;

use crate::core::models::event::{Actor, AuditEvent, EventCategory};
use crate::core::models::records::{PostRecord, UserRecord};
use crate::core::services::codec;
use crate::core::traits::resolver::RequestContext;
use crate::core::traits::sink::AuditSink;

/// Placeholder rendered for fields that could no longer be resolved
/// (e.g. a user record already purged when the delete event fires).
pub const UNKNOWN_FIELD: &str = "unknown";

/// Maps host lifecycle events to encoded log lines and hands them to the
/// sink.
///
/// Stateless: every handler captures, encodes and appends synchronously,
/// holding nothing across events. Handlers may be called from concurrent
/// request-handling contexts.
///
/// Auditing is strictly best-effort: a failed append is discarded here so
/// it can never abort or alter the host operation that triggered the
/// event. Callers that want to observe write failures should use the sink
/// directly.
pub struct AuditRecorder<S: AuditSink, R: RequestContext> {
    sink: S,
    context: R,
}

impl<S: AuditSink, R: RequestContext> AuditRecorder<S, R> {
    pub fn new(sink: S, context: R) -> Self {
        Self { sink, context }
    }

    /// A user account was created.
    pub fn user_registered(&self, user: &UserRecord) {
        let message = format!(
            "ID={} | login={} | email={} | role={}",
            user.id,
            single_line(&user.login),
            single_line(&user.email),
            user.roles.join(",")
        );
        self.record(EventCategory::UserRegister, None, message);
    }

    /// A user profile was updated.
    pub fn profile_updated(&self, user: &UserRecord) {
        let message = format!(
            "ID={} | login={} | email={}",
            user.id,
            single_line(&user.login),
            single_line(&user.email)
        );
        self.record(EventCategory::ProfileUpdate, None, message);
    }

    /// A user account was deleted.
    ///
    /// The record snapshot may already be gone; unresolved fields render
    /// as [`UNKNOWN_FIELD`] rather than dropping the line. When the
    /// request carries no actor of its own, the line's actor header falls
    /// back to the deleted user's identity.
    pub fn user_deleted(&self, user_id: u64, user: Option<&UserRecord>) {
        let login = user.map(|u| u.login.as_str()).unwrap_or(UNKNOWN_FIELD);
        let email = user.map(|u| u.email.as_str()).unwrap_or(UNKNOWN_FIELD);
        let message = format!(
            "ID={user_id} | login={} | email={}",
            single_line(login),
            single_line(email)
        );
        let fallback = Actor::new(user_id, single_line(login));
        self.record(EventCategory::DeleteUser, Some(fallback), message);
    }

    /// A user logged in.
    pub fn logged_in(&self, user: &UserRecord) {
        let message = format!(
            "ID={} | login={} | email={}",
            user.id,
            single_line(&user.login),
            single_line(&user.email)
        );
        self.record(EventCategory::Login, None, message);
    }

    /// A post or page is about to be deleted.
    ///
    /// `None` means not even a minimal record could be resolved; the
    /// event is silently dropped and no line is written.
    pub fn post_deleted(&self, post: Option<&PostRecord>) {
        let Some(post) = post else {
            return;
        };
        let message = format!(
            "ID={} | type={} | status={} | title=\"{}\"",
            post.id,
            single_line(&post.kind),
            single_line(&post.status),
            single_line(&post.title)
        );
        self.record(EventCategory::DeletePost, None, message);
    }

    fn record(&self, category: EventCategory, fallback_actor: Option<Actor>, message: String) {
        let event = AuditEvent {
            timestamp: Local::now().naive_local(),
            category,
            actor: self.context.current_actor().or(fallback_actor),
            origin: self.context.client_address(),
            message,
        };
        // best-effort: a failed append must never reach the host operation
        let _ = self.sink.append(&codec::encode(&event));
    }
}

/// Collapse any raw line breaks a host-supplied field might carry, keeping
/// the one-event-one-line invariant.
fn single_line(value: &str) -> String {
    if value.contains(['\n', '\r']) {
        value.replace(['\n', '\r'], " ")
    } else {
        value.to_string()
    }
}

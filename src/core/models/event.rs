use chrono::NaiveDateTime;

/// Login rendered for events with no resolvable actor (cron jobs,
/// anonymous visitors).
pub const GUEST_LOGIN: &str = "guest/cron";

/// Sentinel used when the client network address cannot be determined.
pub const UNKNOWN_IP: &str = "unknown_ip";

/// Category tag attached to every recorded event.
///
/// The five known kinds cover the lifecycle events the recorder observes.
/// The encoding is not closed: lines written by a newer build with extra
/// categories still decode, landing in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventCategory {
    UserRegister,
    ProfileUpdate,
    DeleteUser,
    Login,
    DeletePost,
    Other(String),
}

impl EventCategory {
    /// The lowercase snake tag persisted in the log line.
    pub fn as_tag(&self) -> &str {
        match self {
            EventCategory::UserRegister => "user_register",
            EventCategory::ProfileUpdate => "profile_update",
            EventCategory::DeleteUser => "delete_user",
            EventCategory::Login => "login",
            EventCategory::DeletePost => "delete_post",
            EventCategory::Other(tag) => tag,
        }
    }

    /// Parse a persisted tag back into a category.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "user_register" => EventCategory::UserRegister,
            "profile_update" => EventCategory::ProfileUpdate,
            "delete_user" => EventCategory::DeleteUser,
            "login" => EventCategory::Login,
            "delete_post" => EventCategory::DeletePost,
            other => EventCategory::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Identity attributed to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: u64,
    pub login: String,
}

impl Actor {
    pub fn new(id: u64, login: impl Into<String>) -> Self {
        Self {
            id,
            login: login.into(),
        }
    }
}

/// A captured audit event, ready for encoding.
///
/// Transient: only its encoded line form ever persists. An absent actor
/// is rendered as id 0 with the [`GUEST_LOGIN`] login.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEvent {
    /// Capture time, second resolution.
    pub timestamp: NaiveDateTime,
    pub category: EventCategory,
    pub actor: Option<Actor>,
    /// Best-effort client network address, or [`UNKNOWN_IP`].
    pub origin: String,
    /// Fully formatted single-line description. Must not contain raw
    /// newlines; the recorder enforces this before encoding.
    pub message: String,
}

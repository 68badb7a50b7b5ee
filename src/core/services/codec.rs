use chrono::NaiveDateTime;

use crate::core::models::event::{Actor, AuditEvent, EventCategory, GUEST_LOGIN};
use crate::core::models::log_line::LogLine;

/// Timestamp rendering used in every log line, second resolution.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A line that could not be parsed back into a [`LogLine`].
///
/// Decoding is only needed by tests and tooling; the display path prints
/// raw lines without decoding, so malformed historical lines stay visible.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("missing or unterminated timestamp bracket")]
    MissingTimestamp,

    #[error("unparseable timestamp: {0}")]
    BadTimestamp(String),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("unparseable actor id: {0}")]
    BadActorId(String),
}

/// Encode an event into its persisted line form.
///
/// Deterministic and total over valid events. The result is terminated by
/// exactly one newline and must be handed to the sink as a single append:
///
/// ```text
/// [2026-08-26 14:03:11] category=login user=ana(ID:7) ip=203.0.113.9 | ID=7 | login=ana | email=a@x.com
/// ```
///
/// Fields are not escaped; the recorder guarantees no raw newlines reach
/// the message.
pub fn encode(event: &AuditEvent) -> String {
    let (id, login) = match &event.actor {
        Some(actor) => (actor.id, actor.login.as_str()),
        None => (0, GUEST_LOGIN),
    };

    format!(
        "[{}] category={} user={}(ID:{}) ip={} | {}\n",
        event.timestamp.format(TIMESTAMP_FORMAT),
        event.category.as_tag(),
        login,
        id,
        event.origin,
        event.message
    )
}

/// Decode one raw line back into a [`LogLine`].
///
/// Tolerates a trailing newline. Any structural mismatch yields a
/// [`DecodeError`] rather than a panic.
pub fn decode(raw: &str) -> Result<LogLine, DecodeError> {
    let line = raw.strip_suffix('\n').unwrap_or(raw);

    let rest = line.strip_prefix('[').ok_or(DecodeError::MissingTimestamp)?;
    let (stamp, rest) = rest.split_once("] ").ok_or(DecodeError::MissingTimestamp)?;
    let timestamp = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
        .map_err(|_| DecodeError::BadTimestamp(stamp.to_string()))?;

    let rest = rest
        .strip_prefix("category=")
        .ok_or(DecodeError::MissingField("category"))?;
    let (tag, rest) = rest
        .split_once(" user=")
        .ok_or(DecodeError::MissingField("user"))?;

    let (actor_field, rest) = rest
        .split_once(" ip=")
        .ok_or(DecodeError::MissingField("ip"))?;
    // actor_field is `<login>(ID:<id>)`; rsplit so a login containing
    // `(ID:` still parses against the final occurrence
    let inner = actor_field
        .strip_suffix(')')
        .ok_or(DecodeError::MissingField("user"))?;
    let (login, id_text) = inner
        .rsplit_once("(ID:")
        .ok_or(DecodeError::MissingField("user"))?;
    let id = id_text
        .parse::<u64>()
        .map_err(|_| DecodeError::BadActorId(id_text.to_string()))?;

    // the first ` | ` closes the header; later pipes belong to the message
    let (origin, message) = rest
        .split_once(" | ")
        .ok_or(DecodeError::MissingField("message"))?;

    Ok(LogLine {
        timestamp,
        category: EventCategory::from_tag(tag),
        actor: Actor::new(id, login),
        origin: origin.to_string(),
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 26)
            .unwrap()
            .and_hms_opt(14, 3, 11)
            .unwrap()
    }

    fn sample_event() -> AuditEvent {
        AuditEvent {
            timestamp: stamp(),
            category: EventCategory::Login,
            actor: Some(Actor::new(7, "ana")),
            origin: "203.0.113.9".to_string(),
            message: "ID=7 | login=ana | email=a@x.com".to_string(),
        }
    }

    #[test]
    fn encode_matches_fixed_layout() {
        let line = encode(&sample_event());
        assert_eq!(
            line,
            "[2026-08-26 14:03:11] category=login user=ana(ID:7) ip=203.0.113.9 | ID=7 | login=ana | email=a@x.com\n"
        );
    }

    #[test]
    fn encode_anonymous_actor_renders_guest() {
        let mut event = sample_event();
        event.actor = None;
        let line = encode(&event);
        assert!(line.contains("user=guest/cron(ID:0)"));
    }

    #[test]
    fn round_trip_recovers_all_fields() {
        let event = sample_event();
        let decoded = decode(&encode(&event)).unwrap();

        assert_eq!(decoded.timestamp, event.timestamp);
        assert_eq!(decoded.category, event.category);
        assert_eq!(decoded.actor, Actor::new(7, "ana"));
        assert_eq!(decoded.origin, event.origin);
        assert_eq!(decoded.message, event.message);
    }

    #[test]
    fn round_trip_anonymous_actor() {
        let mut event = sample_event();
        event.actor = None;
        let decoded = decode(&encode(&event)).unwrap();

        assert_eq!(decoded.actor, Actor::new(0, GUEST_LOGIN));
    }

    #[test]
    fn message_pipes_stay_in_message() {
        let mut event = sample_event();
        event.message = "ID=3 | type=page | status=publish | title=\"a | b\"".to_string();
        let decoded = decode(&encode(&event)).unwrap();

        assert_eq!(decoded.message, event.message);
        assert_eq!(decoded.origin, "203.0.113.9");
    }

    #[test]
    fn decode_without_trailing_newline() {
        let line = encode(&sample_event());
        let decoded = decode(line.trim_end()).unwrap();
        assert_eq!(decoded.category, EventCategory::Login);
    }

    #[test]
    fn decode_unknown_tag_is_not_an_error() {
        let mut event = sample_event();
        event.category = EventCategory::Other("plugin_update".to_string());
        let decoded = decode(&encode(&event)).unwrap();
        assert_eq!(
            decoded.category,
            EventCategory::Other("plugin_update".to_string())
        );
    }

    #[test]
    fn decode_rejects_garbage() {
        assert_eq!(decode("not a log line"), Err(DecodeError::MissingTimestamp));
        assert_eq!(
            decode("[2026-99-99 14:03:11] category=login user=a(ID:1) ip=x | m"),
            Err(DecodeError::BadTimestamp("2026-99-99 14:03:11".to_string()))
        );
        assert_eq!(
            decode("[2026-08-26 14:03:11] user=a(ID:1) ip=x | m"),
            Err(DecodeError::MissingField("category"))
        );
        assert_eq!(
            decode("[2026-08-26 14:03:11] category=login user=a(ID:x) ip=y | m"),
            Err(DecodeError::BadActorId("x".to_string()))
        );
        assert_eq!(
            decode("[2026-08-26 14:03:11] category=login user=a(ID:1) ip=x"),
            Err(DecodeError::MissingField("message"))
        );
    }

    #[test]
    fn decode_empty_line_fails_cleanly() {
        assert!(decode("").is_err());
        assert!(decode("\n").is_err());
    }
}

/// Minimal user payload delivered by the upstream event source.
///
/// Shape is not validated beyond field presence; the host is expected
/// to hand over whatever its identity store returned.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: u64,
    pub login: String,
    pub email: String,
    pub roles: Vec<String>,
}

/// Minimal content payload delivered for post/page deletions.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub id: u64,
    /// Content kind, e.g. `post` or `page`.
    pub kind: String,
    pub status: String,
    pub title: String,
}

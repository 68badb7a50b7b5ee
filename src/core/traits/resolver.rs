use crate::core::models::event::Actor;

/// Port for resolving the identity and network origin of the request
/// context an event fires in.
///
/// Provided by the host application; may be called from concurrent
/// request-handling contexts.
pub trait RequestContext: Send + Sync {
    /// The identity attributed to the current request, if any.
    /// `None` means an anonymous or cron context.
    fn current_actor(&self) -> Option<Actor>;

    /// Best-effort client address. Implementations return
    /// [`UNKNOWN_IP`](crate::core::models::event::UNKNOWN_IP) when no
    /// address can be determined.
    fn client_address(&self) -> String;
}

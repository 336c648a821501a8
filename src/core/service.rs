/// Marker for host-side services (clipboard, download, ...).
///
/// The name only shows up in logs and notifications.
pub trait Service: Send + Sync {
    fn name(&self) -> &'static str;
}

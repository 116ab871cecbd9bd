use super::HookEvent;

/// Sink for hook log events.
///
/// Recording never fails the caller: implementations report their own
/// problems through `tracing` and carry on.
pub trait HookLog: Send + Sync {
    fn record(&self, event: &HookEvent);
}

impl<T: HookLog + ?Sized> HookLog for std::sync::Arc<T> {
    fn record(&self, event: &HookEvent) {
        (**self).record(event)
    }
}

impl<T: HookLog + ?Sized> HookLog for Box<T> {
    fn record(&self, event: &HookEvent) {
        (**self).record(event)
    }
}

/// Hook log that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHookLog;

impl HookLog for NullHookLog {
    fn record(&self, _event: &HookEvent) {}
}

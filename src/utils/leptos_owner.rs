use leptos::logging::log;
use leptos::*;

/// Applies `f` to `signal` unless the view that owns it has been torn down.
///
/// API calls are not cancelled on unmount, so a response can land after its
/// signals were disposed. Returns whether the update happened.
pub fn update_if_alive<T, F>(signal: RwSignal<T>, log_context: &str, f: F) -> bool
where
    F: FnOnce(&mut T),
{
    if signal.try_update(f).is_some() {
        true
    } else {
        log!("[OWNER] View disposed, dropping update: {}", log_context);
        false
    }
}

/// `update_if_alive` for a plain replacement.
pub fn set_if_alive<T>(signal: RwSignal<T>, log_context: &str, value: T) -> bool {
    update_if_alive(signal, log_context, move |slot| *slot = value)
}

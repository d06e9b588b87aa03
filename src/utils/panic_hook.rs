use leptos::logging::log;
use std::panic;

/// Sets up a custom panic hook that adds context to panics caused by disposed
/// reactive owners, the usual symptom of an API response arriving after its
/// view was unmounted.
pub fn set_custom_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        let message = panic_message(panic_info.payload());

        if is_owner_disposal(&message) {
            log!("[PANIC] Leptos owner disposal detected. This usually happens when:");
            log!("[PANIC] 1. A review or testimonial request resolved after its page was left");
            log!("[PANIC] 2. The carousel timer fired after the carousel was unmounted");
            log!("[PANIC] 3. A signal was written directly instead of through update_if_alive");
        }
    }));
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

fn is_owner_disposal(message: &str) -> bool {
    message.contains("OwnerDisposed") || message.contains("disposed")
}

/// Call in main.rs or app initialization
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up successfully");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_messages_from_common_payloads() {
        let owned: Box<dyn std::any::Any + Send> = Box::new(String::from("OwnerDisposed(3)"));
        let borrowed: Box<dyn std::any::Any + Send> = Box::new("boom");
        let other: Box<dyn std::any::Any + Send> = Box::new(7u8);

        assert_eq!(panic_message(owned.as_ref()), "OwnerDisposed(3)");
        assert_eq!(panic_message(borrowed.as_ref()), "boom");
        assert_eq!(panic_message(other.as_ref()), "Unknown panic");
    }

    #[test]
    fn recognizes_disposal_panics() {
        assert!(is_owner_disposal("called try_with_owner on OwnerDisposed"));
        assert!(is_owner_disposal("tried to access a signal that has been disposed"));
        assert!(!is_owner_disposal("index out of bounds"));
    }
}

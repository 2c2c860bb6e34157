use std::panic;
use leptos::logging::log;

/// Installs a panic hook that reports to the browser console and adds context
/// for panics caused by touching a disposed reactive owner.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        console_error_panic_hook::hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            *s
        } else {
            "Unknown panic"
        };

        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] A signal was used after its owner was disposed. This usually happens when:");
            log!("[PANIC] 1. The campsite page unmounted while the comment modal was still open");
            log!("[PANIC] 2. An add-comment callback fired after navigating away from the campsite");
        }
    }));
}

/// Call once when the client starts.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}

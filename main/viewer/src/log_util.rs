use std::any::Any;
use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;

pub type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + 'static + Sync + Send>;

/// Creates a panic hook which logs the error and additionally reports it to the user via the
/// given console function (usually something that ends up in `ShowConsoleMsg`).
pub fn create_viewer_panic_hook(
    package_name: &'static str,
    show_console_msg: impl Fn(&str) + 'static + Sync + Send,
) -> PanicHook {
    Box::new(move |panic_info| {
        let backtrace = Backtrace::force_capture();
        let message = extract_panic_message(panic_info.payload());
        log_panic(&message, &backtrace);
        show_console_msg(&format_console_msg(package_name, &message, &backtrace));
    })
}

pub fn extract_panic_message(payload: &(dyn Any + Send)) -> String {
    match payload.downcast_ref::<&str>() {
        Some(p) => (*p).to_string(),
        None => match payload.downcast_ref::<String>() {
            Some(p) => p.clone(),
            None => String::from("Unknown error"),
        },
    }
}

pub fn format_console_msg(
    package_name: &str,
    panic_message: &str,
    backtrace: &Backtrace,
) -> String {
    format!("

Sorry, an error occurred in {package_name}. Your project has not been modified by it, but the \
nudge settings shown might be out of date. Please close and reopen the viewer.

Please report this error along with the following information:

--- cut ---
Message: {panic_message}

{backtrace}
--- cut ---

"
    )
}

pub fn log_panic(panic_message: &str, backtrace: &Backtrace) {
    tracing::error!(
        %panic_message,
        backtrace = ?backtrace,
        "Nudge settings viewer panicked"
    );
}

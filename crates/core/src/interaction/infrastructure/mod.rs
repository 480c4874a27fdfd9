pub mod channel_notifier;
pub mod log_notifier;
pub mod system_clipboard;

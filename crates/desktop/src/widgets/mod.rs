pub mod primary_button;
pub mod toast;

pub mod dictation_use_case;
pub mod domain;

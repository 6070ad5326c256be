pub mod use_copy_text;

pub use use_copy_text::{use_copy_text, use_copy_text_with_platform, UseCopyText};

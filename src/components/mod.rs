// UI Components

pub mod copy_button;

pub use copy_button::CopyButton;

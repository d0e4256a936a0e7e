pub mod dropzone;
pub mod error_dialog;
pub mod mission;
pub mod wait_dialog;

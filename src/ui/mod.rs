//! User-facing output.

pub mod formatter;

pub use formatter::{
    display_error, display_release_plan, display_status, display_success, display_warning,
};

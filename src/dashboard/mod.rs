//! Dashboard rendering
//!
//! Pure presentation of the session's record or username as text.

mod render;

pub use render::{
    format_stat, render_admin_dashboard, render_driver_dashboard, render_driver_details,
};

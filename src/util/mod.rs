pub(crate) mod app_dirs;
mod error;
pub mod greek;

pub use self::error::disable_colors;
pub use self::error::error_exit;
pub use self::error::error_message;

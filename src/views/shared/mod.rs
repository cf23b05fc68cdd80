mod top_nav_bar;
mod error_banner;

pub use top_nav_bar::*;
pub use error_banner::*;

mod login_button;
mod login_page;

pub use login_button::*;
pub use login_page::*;

// Utils compartidos

pub mod constants;
pub mod encoding;
pub mod format;
pub mod wallet_ffi;

pub use constants::*;
pub use encoding::*;
pub use format::*;

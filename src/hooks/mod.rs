pub mod use_wallet;

pub use use_wallet::{use_init_wallet, use_wallet};

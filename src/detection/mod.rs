pub mod binary;
pub mod charset;

pub use binary::is_binary_data;
pub use charset::{convert_to_utf8, detect_charset, is_wide};

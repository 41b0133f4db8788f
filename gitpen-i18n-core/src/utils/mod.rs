//! 工具模块

pub mod interpolate;
pub mod key_path;

pub use interpolate::interpolate;
pub use key_path::get_nested_value;

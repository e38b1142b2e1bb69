mod browser;
mod os_info;

pub use browser::*;
pub use os_info::*;

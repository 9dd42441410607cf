mod system_time_ext;

pub use system_time_ext::SystemTimeExt;

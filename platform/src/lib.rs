#[cfg(unix)]
pub mod unix;

#[cfg(not(unix))]
pub mod unsupported;

#[cfg(unix)]
pub use unix::XattrAttributeStore as PlatformAttributeStore;

#[cfg(not(unix))]
pub use unsupported::UnsupportedAttributeStore as PlatformAttributeStore;

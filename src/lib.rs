// Library exports for integration tests and reusable components

pub mod format;
pub mod media;
pub mod page;

// Re-export the page surface at crate root for easier access
pub use media::{MediaElement, MediaError, MediaEvent, MediaState, SharedMediaElement};
pub use page::{MediaPageViewState, Navigator, PageField};

// Test support (only available with test-utils feature)
#[cfg(feature = "test-utils")]
pub mod test_support;

//! Utility modules.
//!
//! Provides:
//! - [`RingBuffer`] - Fixed-capacity circular buffer with O(1) push
//! - [`format`] - Long-listing formatting helpers

pub mod format;
mod ring_buffer;

pub use ring_buffer::RingBuffer;

//! Storage for windowed values
//!
//! This module provides the growable circular buffer that backs every
//! window aggregate. Values enter at the tail and leave from the head in
//! FIFO order.
//!
//! # Example
//!
//! ```
//! use windowstats::buffer::RingBuffer;
//!
//! let mut ring = RingBuffer::with_capacity(100);
//!
//! for value in [1.0, 2.0, 3.0] {
//!     ring.push_back(value).unwrap();
//! }
//!
//! assert_eq!(ring.pop_front(), 1.0);
//! assert_eq!(ring.to_vec(), vec![2.0, 3.0]);
//! ```

mod ring;

pub use ring::{Iter, RingBuffer, DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR};

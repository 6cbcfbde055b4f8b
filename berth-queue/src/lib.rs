//! # berth-queue
//!
//! Stack and bounded-queue adapters over interchangeable backing storage,
//! plus a self-contained fixed-capacity ring queue.
//!
//! ## Two ways to get a FIFO
//!
//! - [`Queue`] composes any [`Storage`](berth_collections::Storage)
//!   backing behind a bounded FIFO surface. Its head removal costs whatever
//!   the backing charges for `remove_at(0)`: O(1) for the default linked
//!   list, O(n) for an array.
//! - [`RingQueue`] skips the adapter entirely and drives a head index over
//!   a fixed buffer modulo its capacity: O(1) at both ends, no element ever
//!   moves, no allocation after construction.
//!
//! Both reject pushes at capacity with
//! [`Full`](berth_collections::Full), handing the value back so callers
//! can treat the overflow as an admission-control signal.
//!
//! ## Example
//!
//! ```
//! use berth_queue::RingQueue;
//!
//! let mut queue = RingQueue::with_capacity(2).unwrap();
//! queue.try_push(1).unwrap();
//! queue.try_push(2).unwrap();
//!
//! // Full: the value comes back.
//! assert_eq!(queue.try_push(3).unwrap_err().into_inner(), 3);
//!
//! assert_eq!(queue.pop_front(), Some(1));
//! assert_eq!(queue.pop_front(), Some(2));
//! assert_eq!(queue.pop_front(), None);
//! ```

#![warn(missing_docs)]

pub mod bounded;
pub mod ring;
pub mod stack;

pub use bounded::Queue;
pub use ring::RingQueue;
pub use stack::Stack;

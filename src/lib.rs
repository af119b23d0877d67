//! rs2-seq - lazy push-style sequences with pull cursors
//!
//! A [`Seq`] is a producer that pushes its elements, one by one, into a
//! yield handle until it runs dry or the consumer says stop. Operators in
//! [`ops`] wrap sequences into new sequences; consumers in [`to`] drain them;
//! bridges in [`from`] and [`to`] connect them to channels, readers and the
//! filesystem.
//!
//! Operators that need more than the current element (`take_n`, `zip`,
//! `pair_wise`, ...) turn their source inside out with a [`Pull`] cursor,
//! which hands out one element per request and is always released before
//! the operator returns.
//!
//! ```
//! use rs2_seq::{from, to};
//!
//! # async fn example() {
//! let pairs = from::iter(vec![1, 2, 3, 4]).pair_wise();
//! let result: Vec<(i32, i32)> = to::collect(pairs).await;
//! assert_eq!(result, vec![(1, 2), (2, 3), (3, 4)]);
//! # }
//! ```

pub mod chan;
pub mod configuration;
pub mod error;
pub mod from;
pub mod ops;
pub mod pipe;
pub mod pull;
pub mod seq;
mod seq_ext;
pub mod to;

pub use chan::Receiver;
pub use configuration::{Capacity, ChanConfig, WalkConfig};
pub use error::{SeqError, SeqResult};
pub use ops::Entry;
pub use pull::Pull;
pub use seq::{Co, Emit, Seq};

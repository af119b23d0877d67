//! Operators that turn sequences into other sequences.
//!
//! Every operator is lazy and order preserving. Single-pass operators
//! (`map`, `filter`, `keys`, `tap`, `flatten`, ...) forward each source
//! element as it arrives and never read ahead. Lookahead operators
//! (`take_n`, `skip_n`, `skip_until`, `pair_wise`, `zip`, `deduplicate`)
//! drive their sources through a [`Pull`](crate::Pull) cursor and release it
//! before they return.
//!
//! Naming intermediate sequences usually reads better than deep nesting:
//!
//! ```
//! use rs2_seq::{from, ops, to};
//!
//! # async fn example() {
//! let numbers = from::iter(vec![1, 2, 3, 4]);
//! let odds = ops::filter(numbers, |i| i % 2 != 0);
//! let doubled = ops::map(odds, |i| i * 2);
//! let result: Vec<i32> = to::collect(doubled).await;
//! assert_eq!(result, vec![2, 6]);
//! # }
//! ```

pub mod crop;
pub mod higher_order;
pub mod pairs;
pub mod transform;

pub use crop::{skip_n, skip_until, take_n, take_while};
pub use higher_order::{concat, flatten, flatten2, flatten_vec};
pub use pairs::{empty_values, entries, filter2, keys, map12, map2, map21, values, Entry};
pub use transform::{deduplicate, filter, map, pair_wise, tap, zip};

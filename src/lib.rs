//! 惰性求值的流式序列处理。
//!
//! [`Stream`]持有一个[`Sequence`]：要么是内存中的有序集合（[`Sequence::Eager`]），
//! 要么是单次拉取的生产者（[`Sequence::Lazy`]）。`filter`/`map`/`take`/`drop`只包装序列，
//! 直到调用`first`/`last`/`count`/`materialize`才真正拉取数据。
//!
//! ```
//! use sphream::Stream;
//!
//! let evens = Stream::range(0, 100).unwrap().filter(|x| x % 2 == 0).map(|x| x * 3).take(3).materialize();
//! assert_eq!(evens, vec![0, 6, 12]);
//! ```

mod stream;

pub use stream::Stream;
pub use stream::error::StreamErr;
pub use stream::sequence::{Collection, Producer, Sequence};
/// 阶段适配器：`stage::Filter`/`stage::Map`/`stage::Take`/`stage::Drop`。
pub use stream::stage;

/// 整数类型
pub type Integer = i64;

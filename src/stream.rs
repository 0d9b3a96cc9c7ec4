pub(crate) mod error;
pub(crate) mod sequence;
pub mod stage;

use crate::Integer;
use crate::stream::error::StreamErr;
use crate::stream::sequence::{Producer, Sequence};
use crate::stream::stage::{Drop, Filter, Map, Take};
use std::mem;

/// 流：持有一个序列的句柄。
///
/// 链式方法替换内部序列并返回同一个句柄，终端操作才真正拉取数据。
///
/// 对于[`Sequence::Lazy`]，除`first`只查看当前元素外，终端操作会消耗生产者，再次调用只会得到空结果；
/// 对于[`Sequence::Eager`]，终端操作只读取集合，可以重复调用。
///
/// 链式方法移出集合中的元素，元素类型不需要实现`Clone`；只有`first`/`last`/`materialize`
/// 需要从集合中复制元素。
///
/// `Stream`不是`Send`/`Sync`，不能在多个线程间同时修改。
#[derive(Debug)]
pub struct Stream<T> {
    seq: Sequence<T>,
}

impl<T: 'static> Stream<T> {
    /// 直接包装已有的集合，不复制。
    pub fn of(source: impl Into<Sequence<T>>) -> Stream<T> {
        Stream { seq: source.into() }
    }

    /// 直接包装已有的生产者。
    pub fn of_producer(producer: impl Iterator<Item = T> + 'static) -> Stream<T> {
        Stream { seq: Sequence::lazy(producer) }
    }

    /// 无限生产：每次拉取都调用一次`supplier`。
    ///
    /// 必须由`take`或`first`等不完全消耗的终端操作限定，否则永不结束。
    pub fn generate(supplier: impl FnMut() -> T + 'static) -> Stream<T> {
        Stream { seq: Sequence::lazy(std::iter::repeat_with(supplier)) }
    }

    pub fn is_eager(&self) -> bool {
        self.seq.is_eager()
    }

    pub fn is_lazy(&self) -> bool {
        self.seq.is_lazy()
    }

    pub fn sequence(&self) -> &Sequence<T> {
        &self.seq
    }

    pub fn filter(&mut self, predicate: impl FnMut(&T) -> bool + 'static) -> &mut Self {
        self.wrap(|producer| Box::new(Filter::new(producer, predicate)))
    }

    pub fn map(&mut self, f: impl FnMut(T) -> T + 'static) -> &mut Self {
        self.wrap(|producer| Box::new(Map::new(producer, f)))
    }

    /// 元素类型改变的映射，句柄的元素类型无法原地改变，因此消耗当前句柄并返回新句柄。
    pub fn map_into<U: 'static>(self, f: impl FnMut(T) -> U + 'static) -> Stream<U> {
        Stream { seq: Sequence::lazy(Map::new(self.seq.into_producer(), f)) }
    }

    pub fn take(&mut self, amount: Integer) -> &mut Self {
        self.wrap(|producer| Box::new(Take::new(producer, amount)))
    }

    pub fn drop(&mut self, amount: Integer) -> &mut Self {
        self.wrap(|producer| Box::new(Drop::new(producer, amount)))
    }

    /// 元素数量，集合直接返回大小，生产者拉取至耗尽，无限序列永不返回。
    pub fn count(&mut self) -> usize {
        match &mut self.seq {
            Sequence::Eager(items) => items.size(),
            Sequence::Lazy(producer) => producer.by_ref().count(),
        }
    }

    /// 取出当前序列，包装为新阶段后放回。
    fn wrap(&mut self, stage: impl FnOnce(Producer<T>) -> Producer<T>) -> &mut Self {
        let upstream = mem::take(&mut self.seq).into_producer();
        self.seq = Sequence::Lazy(stage(upstream).peekable());
        self
    }
}

impl<T: Clone + 'static> Stream<T> {
    /// 重复`value`共`count`次，`count`为负数时返回[`StreamErr::InvalidAmount`]。
    pub fn repeat(value: T, count: Integer) -> Result<Stream<T>, StreamErr> {
        let times = usize::try_from(count).map_err(|_| StreamErr::InvalidAmount(count))?;
        Ok(Stream::of_producer(std::iter::repeat_n(value, times)))
    }

    /// 第一个元素。生产者只查看当前元素，不前进，重复调用返回同一个元素。
    pub fn first(&mut self) -> Result<T, StreamErr> {
        let item = match &mut self.seq {
            Sequence::Eager(items) => items.at(0).cloned(),
            Sequence::Lazy(producer) => producer.peek().cloned(),
        };
        item.ok_or(StreamErr::Empty)
    }

    /// 最后一个元素，无限序列永不返回。
    pub fn last(&mut self) -> Result<T, StreamErr> {
        match &mut self.seq {
            Sequence::Eager(items) => match items.size() {
                0 => Err(StreamErr::Empty),
                size => items.at(size - 1).cloned().ok_or(StreamErr::Empty),
            },
            Sequence::Lazy(producer) => producer.by_ref().last().ok_or(StreamErr::Empty),
        }
    }

    /// 收集全部元素，保持顺序。
    pub fn materialize(&mut self) -> Vec<T> {
        match &mut self.seq {
            Sequence::Eager(items) => (0..items.size()).filter_map(|i| items.at(i).cloned()).collect(),
            Sequence::Lazy(producer) => producer.by_ref().collect(),
        }
    }
}

impl Stream<Integer> {
    /// 生成`[from, to)`范围内的整数，`from > to`时返回[`StreamErr::InvalidRange`]。
    pub fn range(from: Integer, to: Integer) -> Result<Stream<Integer>, StreamErr> {
        if from > to {
            return Err(StreamErr::InvalidRange { from, to });
        }
        Ok(Stream::of_producer(from..to))
    }
}

use std::collections::VecDeque;
use std::fmt::{Debug, Formatter};
use std::iter::Peekable;

/// 可随机访问的有限有序集合。
///
/// 读取不会消耗集合，因此基于集合的终端操作可以重复调用。
pub trait Collection<T> {
    /// 元素数量。
    fn size(&self) -> usize;

    /// 获取指定索引的元素，索引越界时返回`None`。
    fn at(&self, index: usize) -> Option<&T>;

    /// 移出全部元素，转换为按顺序拉取的生产者。
    fn into_producer(self: Box<Self>) -> Producer<T>;
}

/// 拉取式生产者。
pub type Producer<T> = Box<dyn Iterator<Item = T>>;

impl<T: 'static> Collection<T> for Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn into_producer(self: Box<Self>) -> Producer<T> {
        Box::new((*self).into_iter())
    }
}

impl<T: 'static> Collection<T> for VecDeque<T> {
    fn size(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn into_producer(self: Box<Self>) -> Producer<T> {
        Box::new((*self).into_iter())
    }
}

impl<T: 'static> Collection<T> for Box<[T]> {
    fn size(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn into_producer(self: Box<Self>) -> Producer<T> {
        Box::new((*self).into_vec().into_iter())
    }
}

impl<T: 'static, const N: usize> Collection<T> for [T; N] {
    fn size(&self) -> usize {
        N
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn into_producer(self: Box<Self>) -> Producer<T> {
        Box::new((*self).into_iter())
    }
}

/// 序列：内存中的集合，或单次拉取的生产者。
pub enum Sequence<T> {
    /// 有限集合，可按索引读取，读取不消耗。
    Eager(Box<dyn Collection<T>>),
    /// 拉取式生产者，只能向前，可能无限。当前元素可以只查看而不前进。
    Lazy(Peekable<Producer<T>>),
}

impl<T: 'static> Sequence<T> {
    pub fn eager(collection: impl Collection<T> + 'static) -> Sequence<T> {
        Sequence::Eager(Box::new(collection))
    }

    /// 包装生产者。生产者被`fuse`，耗尽后持续报告耗尽。
    pub fn lazy(producer: impl Iterator<Item = T> + 'static) -> Sequence<T> {
        let producer: Producer<T> = Box::new(producer.fuse());
        Sequence::Lazy(producer.peekable())
    }

    pub fn is_eager(&self) -> bool {
        matches!(self, Sequence::Eager(_))
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, Sequence::Lazy(_))
    }

    /// 转换为拉取式生产者，集合中的元素被移出，已查看的当前元素会最先返回。
    pub(crate) fn into_producer(self) -> Producer<T> {
        match self {
            Sequence::Eager(items) => items.into_producer(),
            Sequence::Lazy(producer) => Box::new(producer),
        }
    }
}

impl<T: 'static> Default for Sequence<T> {
    fn default() -> Self {
        Sequence::lazy(std::iter::empty())
    }
}

impl<T> Debug for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Sequence::Eager(items) => write!(f, "Eager(size: {})", items.size()),
            Sequence::Lazy(_) => write!(f, "Lazy"),
        }
    }
}

impl<T: 'static> From<Vec<T>> for Sequence<T> {
    fn from(value: Vec<T>) -> Self {
        Sequence::eager(value)
    }
}

impl<T: 'static> From<VecDeque<T>> for Sequence<T> {
    fn from(value: VecDeque<T>) -> Self {
        Sequence::eager(value)
    }
}

impl<T: 'static> From<Box<[T]>> for Sequence<T> {
    fn from(value: Box<[T]>) -> Self {
        Sequence::eager(value)
    }
}

impl<T: 'static, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(value: [T; N]) -> Self {
        Sequence::eager(value)
    }
}

use crate::Integer;

/// 过滤：持续拉取上游，丢弃不满足条件的元素，直到有元素满足或上游耗尽。
pub struct Filter<I, P> {
    upstream: I,
    predicate: P,
}

impl<I, P> Filter<I, P> {
    pub fn new(upstream: I, predicate: P) -> Self {
        Filter { upstream, predicate }
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        // 找到首个满足条件的元素即返回，不再向前查看
        while let Some(item) = self.upstream.next() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }
}

/// 映射：拉取一个上游元素，返回转换后的值。
pub struct Map<I, F> {
    upstream: I,
    f: F,
}

impl<I, F> Map<I, F> {
    pub fn new(upstream: I, f: F) -> Self {
        Map { upstream, f }
    }
}

impl<I, F, U> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        self.upstream.next().map(&mut self.f)
    }
}

/// 保留前N个元素。
///
/// 位置从本阶段第一次拉取开始计数，数量为负数时等同于0。
/// 达到数量后永久耗尽，不再拉取上游。
pub struct Take<I> {
    upstream: I,
    amount: Integer,
    taken: Integer,
}

impl<I> Take<I> {
    pub fn new(upstream: I, amount: Integer) -> Self {
        Take { upstream, amount, taken: 0 }
    }
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.taken < self.amount {
            let item = self.upstream.next();
            if item.is_some() {
                self.taken += 1;
            } else {
                self.taken = self.amount; // 上游已耗尽
            }
            item
        } else {
            None
        }
    }
}

/// 丢弃前N个元素，之后原样返回剩余元素。
///
/// 位置从本阶段第一次拉取开始计数，数量为负数时等同于0。
pub struct Drop<I> {
    upstream: I,
    amount: Integer,
    dropped: Integer,
}

impl<I> Drop<I> {
    pub fn new(upstream: I, amount: Integer) -> Self {
        Drop { upstream, amount, dropped: 0 }
    }
}

impl<I: Iterator> Iterator for Drop<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while self.dropped < self.amount {
            self.upstream.next()?;
            self.dropped += 1;
        }
        self.upstream.next()
    }
}

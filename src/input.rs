use crate::err::SpErr;
use cmd_help::CmdHelp;
use rand::Rng;
use sphream::{Integer, Stream};

#[derive(Debug, PartialEq, CmdHelp)]
pub(crate) enum Input {
    /// :range      生成指定范围内的整数作为输入，按升序逐个生成。
    ///             :range <from> <to>
    ///                 <from>  起始值，包含，必选。
    ///                 <to>    结束值，不包含，必选。
    ///                         起始值等于结束值时无数据生成，起始值大于结束值时报错。
    ///             例如：
    ///                 :range 0 10     生成：0 1 2 3 4 5 6 7 8 9
    ///                 :range -2 1     生成：-2 -1 0
    ///                 :range 3 3      无数据生成
    Range { from: Integer, to: Integer },
    /// :repeat     重复整数作为输入。
    ///             :repeat <value> <count>
    ///                 <value> 需要重复的值，必选。
    ///                 <count> 需要重复的次数，不能为负数，必选。
    ///             例如：
    ///                 :repeat 7 3     生成：7 7 7
    Repeat { value: Integer, count: Integer },
    /// :gen        无限生成整数作为输入，每次拉取都重新调用生成器。
    ///             需要配合`:take`或`:first`使用，否则永不结束。
    ///             :gen <value>
    ///                 <value> 固定值。
    ///             :gen count <start>[,<step>]
    ///                 <start> 起始值。
    ///                 <step>  步长，可选，未指定时取步长为1。
    ///             :gen random <min>,<max>
    ///                 <min>   随机数最小值，包含。
    ///                 <max>   随机数最大值，包含，不能小于<min>。
    ///             例如：
    ///                 :gen 1 :take 3              生成：1 1 1
    ///                 :gen count 10,5 :take 3     生成：10 15 20
    ///                 :gen random 1,6 :take 3     生成3个1到6之间的随机数
    Gen(Supplier),
    /// :of         使用直接字面值作为输入，值保存在内存中，可重复读取。
    ///             :of <value>[ <value][...]
    ///                 <value> 整数字面值，至少指定一个，多个值需要用中括号包围。
    ///             例如：
    ///                 :of 1
    ///                 :of [ 1 2 3 ]
    Of { values: Vec<Integer> },
}

/// 生成器
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum Supplier {
    Const(Integer),
    Count { start: Integer, step: Integer },
    Random { min: Integer, max: Integer },
}

impl Input {
    pub(crate) fn new_range(from: Integer, to: Integer) -> Input {
        Input::Range { from, to }
    }
    pub(crate) fn new_repeat(value: Integer, count: Integer) -> Input {
        Input::Repeat { value, count }
    }
    pub(crate) fn new_gen(supplier: Supplier) -> Input {
        Input::Gen(supplier)
    }
    pub(crate) fn new_of(values: Vec<Integer>) -> Input {
        Input::Of { values }
    }

    pub(crate) fn try_into_stream(self) -> Result<Stream<Integer>, SpErr> {
        match self {
            Input::Range { from, to } => Ok(Stream::range(from, to)?),
            Input::Repeat { value, count } => Ok(Stream::repeat(value, count)?),
            Input::Gen(supplier) => Ok(match supplier {
                Supplier::Const(value) => Stream::generate(move || value),
                Supplier::Count { start, step } => {
                    let mut next = start;
                    Stream::generate(move || {
                        let current = next;
                        next = next.wrapping_add(step);
                        current
                    })
                }
                Supplier::Random { min, max } => {
                    let mut rng = rand::rng();
                    Stream::generate(move || rng.random_range(min..=max))
                }
            }),
            Input::Of { values } => Ok(Stream::of(values)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        assert_eq!(Input::new_range(0, 4).try_into_stream().unwrap().materialize(), vec![0, 1, 2, 3]);
        assert_eq!(
            Input::new_range(4, 0).try_into_stream().unwrap_err(),
            SpErr::Stream(sphream::StreamErr::InvalidRange { from: 4, to: 0 })
        );
    }

    #[test]
    fn test_repeat() {
        assert_eq!(Input::new_repeat(7, 3).try_into_stream().unwrap().materialize(), vec![7, 7, 7]);
        assert_eq!(
            Input::new_repeat(7, -3).try_into_stream().unwrap_err(),
            SpErr::Stream(sphream::StreamErr::InvalidAmount(-3))
        );
    }

    #[test]
    fn test_gen() {
        let mut stream = Input::new_gen(Supplier::Const(1)).try_into_stream().unwrap();
        assert_eq!(stream.take(3).materialize(), vec![1, 1, 1]);
        let mut stream = Input::new_gen(Supplier::Count { start: 10, step: 5 }).try_into_stream().unwrap();
        assert_eq!(stream.take(3).materialize(), vec![10, 15, 20]);
        let mut stream = Input::new_gen(Supplier::Random { min: 1, max: 6 }).try_into_stream().unwrap();
        assert!(stream.take(100).materialize().iter().all(|x| (1..=6).contains(x)));
    }

    #[test]
    fn test_of() {
        let mut stream = Input::new_of(vec![1, 2, 3]).try_into_stream().unwrap();
        assert!(stream.is_eager());
        assert_eq!(stream.last(), Ok(3));
        assert_eq!(stream.last(), Ok(3));
    }
}

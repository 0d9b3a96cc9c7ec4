use crate::condition::Condition;
use cmd_help::CmdHelp;
use sphream::{Integer, Stream};

#[derive(Debug, PartialEq, CmdHelp)]
pub(crate) enum Op {
    /// :filter     根据指定条件选择数据保留，其他数据丢弃。
    ///             :filter <condition>
    ///                 <condition> 条件表达式，参考`-h cond`。
    ///             例如：
    ///                 :filter even
    ///                 :filter !odd
    ///                 :filter gt 10
    Filter(Condition),
    /// :map        对每个数据进行计算，整数溢出时回绕。
    ///             :map <calc>
    ///                 <calc>  计算表达式，参考`-h calc`。
    ///             例如：
    ///                 :map mul 2
    ///                 :map neg
    Map(Calc),
    /// :take       保留前N个数据，丢弃后续的其他数据，达到数量后不再读取上游。
    ///             :take <count>
    ///                 <count> 需要保留的数量，必选，负数等同于0。
    Take { count: Integer },
    /// :drop       丢弃前N个数据，保留后续的其他数据。
    ///             :drop <count>
    ///                 <count> 需要丢弃的数量，必选，负数等同于0。
    Drop { count: Integer },
}

/// 计算
#[derive(Debug, Copy, Clone, Eq, PartialEq, CmdHelp)]
pub(crate) enum Calc {
    /// add <n>     加上<n>。
    Add(Integer),
    /// sub <n>     减去<n>。
    Sub(Integer),
    /// mul <n>     乘以<n>。
    Mul(Integer),
    /// div <n>     整除<n>，<n>不能为0。
    Div(Integer),
    /// rem <n>     对<n>取余，<n>不能为0。
    Rem(Integer),
    /// pow <n>     <n>次幂，<n>必须为非负整数。
    Pow(u32),
    /// neg         取相反数。
    Neg,
    /// abs         取绝对值。
    Abs,
    /// sq          平方。
    Sq,
}

impl Calc {
    pub(crate) fn is_binary(keyword: &str) -> bool {
        ["add", "sub", "mul", "div", "rem"].iter().any(|k| k.eq_ignore_ascii_case(keyword))
    }

    /// 构造二元计算，`div`和`rem`的除数不能为0。
    pub(crate) fn new_binary(keyword: &str, operand: Integer) -> Result<Calc, &'static str> {
        match keyword.to_ascii_lowercase().as_str() {
            "add" => Ok(Calc::Add(operand)),
            "sub" => Ok(Calc::Sub(operand)),
            "mul" => Ok(Calc::Mul(operand)),
            "div" | "rem" if operand == 0 => Err("divisor cannot be zero"),
            "div" => Ok(Calc::Div(operand)),
            "rem" => Ok(Calc::Rem(operand)),
            _ => Err("unknown calc"),
        }
    }

    pub(crate) fn new_unary(keyword: &str) -> Option<Calc> {
        match keyword.to_ascii_lowercase().as_str() {
            "neg" => Some(Calc::Neg),
            "abs" => Some(Calc::Abs),
            "sq" => Some(Calc::Sq),
            _ => None,
        }
    }

    pub(crate) fn apply(&self, x: Integer) -> Integer {
        match *self {
            Calc::Add(n) => x.wrapping_add(n),
            Calc::Sub(n) => x.wrapping_sub(n),
            Calc::Mul(n) => x.wrapping_mul(n),
            Calc::Div(n) => x.wrapping_div(n),
            Calc::Rem(n) => x.wrapping_rem(n),
            Calc::Pow(n) => x.wrapping_pow(n),
            Calc::Neg => x.wrapping_neg(),
            Calc::Abs => x.wrapping_abs(),
            Calc::Sq => x.wrapping_mul(x),
        }
    }
}

impl Op {
    pub(crate) fn new_filter(cond: Condition) -> Op {
        Op::Filter(cond)
    }
    pub(crate) fn new_map(calc: Calc) -> Op {
        Op::Map(calc)
    }
    pub(crate) fn new_take(count: Integer) -> Op {
        Op::Take { count }
    }
    pub(crate) fn new_drop(count: Integer) -> Op {
        Op::Drop { count }
    }

    pub(crate) fn wrap(self, stream: &mut Stream<Integer>) -> &mut Stream<Integer> {
        match self {
            Op::Filter(cond) => stream.filter(move |item| cond.test(*item)),
            Op::Map(calc) => stream.map(move |item| calc.apply(item)),
            Op::Take { count } => stream.take(count),
            Op::Drop { count } => stream.drop(count),
        }
    }
}

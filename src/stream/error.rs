use crate::Integer;
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum StreamErr {
    /// `range`的起始值大于结束值。
    #[error("[Range] Invalid range: from `{from}` must not be greater than to `{to}`")]
    InvalidRange { from: Integer, to: Integer },

    /// `repeat`的次数为负数。
    #[error("[Repeat] Invalid amount `{0}`: amount to repeat cannot be negative")]
    InvalidAmount(Integer),

    /// `first`/`last`时序列中没有任何元素。
    #[error("[Terminal] Stream is empty")]
    Empty,
}

use cmd_help::CmdHelp;
use sphream::Integer;

/// 条件
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Condition {
    Yes(Select),
    No(Select),
}

impl Condition {
    pub(crate) fn new(select: Select, not: bool) -> Condition {
        if not { Condition::No(select) } else { Condition::Yes(select) }
    }

    pub(crate) fn test(&self, input: Integer) -> bool {
        match self {
            Condition::Yes(select) => select.select(input),
            Condition::No(select) => !select.select(input),
        }
    }
}

/// 选择
#[derive(Debug, Clone, PartialEq, CmdHelp)]
pub(crate) enum Select {
    /// [!]even
    ///     选择偶数，支持可选否定。
    /// [!]odd
    ///     选择奇数，支持可选否定。
    Parity { even: bool },
    /// [!]gt|ge|lt|le|eq|ne <value>
    ///     与给定整数比较，依次为：大于、大于等于、小于、小于等于、等于、不等于，支持可选否定。
    ///     例如：
    ///         gt 3
    ///         !le -2
    ///         ne 0
    Compare { cmp: Cmp, value: Integer },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Cmp {
    Gt,
    Ge,
    Lt,
    Le,
    Eq,
    Ne,
}

impl Cmp {
    pub(crate) fn from_keyword(keyword: &str) -> Option<Cmp> {
        match keyword.to_ascii_lowercase().as_str() {
            "gt" => Some(Cmp::Gt),
            "ge" => Some(Cmp::Ge),
            "lt" => Some(Cmp::Lt),
            "le" => Some(Cmp::Le),
            "eq" => Some(Cmp::Eq),
            "ne" => Some(Cmp::Ne),
            _ => None,
        }
    }
}

impl Select {
    pub(crate) fn new_parity(even: bool) -> Select {
        Select::Parity { even }
    }
    pub(crate) fn new_compare(cmp: Cmp, value: Integer) -> Select {
        Select::Compare { cmp, value }
    }

    pub(crate) fn select(&self, input: Integer) -> bool {
        match self {
            Select::Parity { even } => (input % 2 == 0) == *even,
            Select::Compare { cmp, value } => match cmp {
                Cmp::Gt => input > *value,
                Cmp::Ge => input >= *value,
                Cmp::Lt => input < *value,
                Cmp::Le => input <= *value,
                Cmp::Eq => input == *value,
                Cmp::Ne => input != *value,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity() {
        let even = Condition::new(Select::new_parity(true), false);
        assert!(even.test(0));
        assert!(even.test(-4));
        assert!(!even.test(3));
        let odd = Condition::new(Select::new_parity(false), false);
        assert!(odd.test(-3));
        assert!(!odd.test(2));
        let not_even = Condition::new(Select::new_parity(true), true);
        assert!(not_even.test(7));
        assert!(!not_even.test(8));
    }

    #[test]
    fn test_compare() {
        assert!(Condition::new(Select::new_compare(Cmp::Gt, 3), false).test(4));
        assert!(!Condition::new(Select::new_compare(Cmp::Gt, 3), false).test(3));
        assert!(Condition::new(Select::new_compare(Cmp::Ge, 3), false).test(3));
        assert!(Condition::new(Select::new_compare(Cmp::Lt, 0), false).test(-1));
        assert!(Condition::new(Select::new_compare(Cmp::Le, 0), false).test(0));
        assert!(Condition::new(Select::new_compare(Cmp::Eq, 5), false).test(5));
        assert!(Condition::new(Select::new_compare(Cmp::Ne, 5), false).test(6));
        assert!(Condition::new(Select::new_compare(Cmp::Le, -2), true).test(-1));
    }

    #[test]
    fn test_cmp_from_keyword() {
        assert_eq!(Cmp::from_keyword("gt"), Some(Cmp::Gt));
        assert_eq!(Cmp::from_keyword("GE"), Some(Cmp::Ge));
        assert_eq!(Cmp::from_keyword("Ne"), Some(Cmp::Ne));
        assert_eq!(Cmp::from_keyword("gte"), None);
    }
}

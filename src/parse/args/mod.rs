use crate::err::SpErr;
use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use crate::parse::args::input::parse_input;
use crate::parse::args::op::parse_ops;
use crate::parse::args::output::parse_output;
use sphream::Integer;
use std::iter::Peekable;
use std::str::FromStr;

mod config;
mod input;
mod op;
mod output;

pub(crate) use config::parse_configs;

pub(crate) fn parse(mut args: Peekable<impl Iterator<Item = String>>) -> Result<(Input, Vec<Op>, Output), SpErr> {
    let input = parse_input(&mut args)?;
    let ops = parse_ops(&mut args)?;
    let output = parse_output(&mut args)?;
    let remaining = args.collect::<Vec<_>>();
    if !remaining.is_empty() { Err(SpErr::UnknownArgs { args: remaining }) } else { Ok((input, ops, output)) }
}

fn parse_arg_or_arg1(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<Vec<String>, SpErr> {
    match args.next() {
        // 至少有一个值，直接消耗
        Some(value) => {
            if value == "[" {
                // 多值开始
                let mut values = Vec::new();
                for value in args.by_ref() {
                    if value == "]" {
                        // 多值结束
                        return if values.is_empty() { Err(SpErr::ArgNotEnough { cmd, arg }) } else { Ok(values) };
                    } else {
                        values.push(value)
                    }
                }
                Err(SpErr::UnclosingMultiArg { cmd, arg })
            } else if value == "]" {
                // 未开启的多值结束
                Err(SpErr::UnexpectedClosingBracket { cmd, arg })
            } else {
                Ok(vec![value])
            }
        }
        None => Err(SpErr::MissingArg { cmd, arg }),
    }
}

/// 消耗并解析一个必选参数。
fn parse_arg_as<T>(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<T, SpErr>
where
    T: FromStr,
    T::Err: ToString,
{
    match args.next() {
        Some(value) => parse_value_as(value, cmd, arg),
        None => Err(SpErr::MissingArg { cmd, arg }),
    }
}

fn parse_value_as<T>(value: String, cmd: &'static str, arg: &'static str) -> Result<T, SpErr>
where
    T: FromStr,
    T::Err: ToString,
{
    value.parse::<T>().map_err(|err| SpErr::ArgParseErr { cmd, arg, arg_value: value, error: err.to_string() })
}

/// 解析`<a>,<b>`形式的整数对。
fn parse_integer_pair(value: String, cmd: &'static str, arg: &'static str) -> Result<(Integer, Integer), SpErr> {
    match value.split_once(',') {
        Some((a, b)) => {
            let a = parse_value_as(a.to_string(), cmd, arg)?;
            let b = parse_value_as(b.to_string(), cmd, arg)?;
            Ok((a, b))
        }
        None => Err(SpErr::ArgParseErr { cmd, arg, arg_value: value, error: "`,` is required".to_string() }),
    }
}

fn consume_if<F>(args: &mut Peekable<impl Iterator<Item = String>>, f: F) -> Option<String>
where
    F: FnOnce(&String) -> bool,
{
    args.next_if(f)
}

fn is_cmd(value: &str, cmd: &str) -> bool {
    value.eq_ignore_ascii_case(cmd)
}

fn parse_general_file_info(args: &mut Peekable<impl Iterator<Item = String>>) -> Option<(String, bool, Option<bool>)> {
    // 文件名不能是下一个命令
    let file = consume_if(args, |value| !value.starts_with(':'))?;
    let append = consume_if(args, |value| is_cmd(value, "append")).is_some();
    let crlf = if consume_if(args, |value| is_cmd(value, "crlf")).is_some() {
        Some(true)
    } else if consume_if(args, |value| is_cmd(value, "lf")).is_some() {
        Some(false)
    } else {
        None
    };
    Some((file, append, crlf))
}

#[cfg(test)]
fn build_args(args_line: &'static str) -> Peekable<impl Iterator<Item = String>> {
    args_line.split(' ').filter(|arg| !arg.is_empty()).map(String::from).peekable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{Condition, Select};
    use crate::op::Calc;

    #[test]
    fn test_parse() {
        assert_eq!(
            parse(build_args(":range 0 10 :filter even :map mul 2 :take 3 :count")),
            Ok((
                Input::new_range(0, 10),
                vec![
                    Op::new_filter(Condition::new(Select::new_parity(true), false)),
                    Op::new_map(Calc::Mul(2)),
                    Op::new_take(3),
                ],
                Output::Count
            ))
        );
        assert_eq!(
            parse(build_args(":of [ 1 2 3 ]")),
            Ok((Input::new_of(vec![1, 2, 3]), vec![], Output::new_list_std_out()))
        );
        assert_eq!(
            parse(build_args(":range 0 10 :first extra")),
            Err(SpErr::UnknownArgs { args: vec!["extra".to_string()] })
        );
        assert_eq!(parse(build_args("")), Err(SpErr::MissingInput));
    }

    #[test]
    fn test_parse_arg_or_arg1() {
        assert_eq!(parse_arg_or_arg1(&mut build_args("1"), "cmd", "arg"), Ok(vec!["1".to_string()]));
        assert_eq!(
            parse_arg_or_arg1(&mut build_args("[ 1 2 ]"), "cmd", "arg"),
            Ok(vec!["1".to_string(), "2".to_string()])
        );
        assert_eq!(parse_arg_or_arg1(&mut build_args("[ ]"), "cmd", "arg"), Err(SpErr::ArgNotEnough { cmd: "cmd", arg: "arg" }));
        assert_eq!(
            parse_arg_or_arg1(&mut build_args("[ 1"), "cmd", "arg"),
            Err(SpErr::UnclosingMultiArg { cmd: "cmd", arg: "arg" })
        );
        assert_eq!(
            parse_arg_or_arg1(&mut build_args("]"), "cmd", "arg"),
            Err(SpErr::UnexpectedClosingBracket { cmd: "cmd", arg: "arg" })
        );
        assert_eq!(parse_arg_or_arg1(&mut build_args(""), "cmd", "arg"), Err(SpErr::MissingArg { cmd: "cmd", arg: "arg" }));
    }

    #[test]
    fn test_parse_arg_as() {
        assert_eq!(parse_arg_as::<Integer>(&mut build_args("-5"), "cmd", "arg"), Ok(-5));
        assert!(matches!(
            parse_arg_as::<Integer>(&mut build_args("x"), "cmd", "arg"),
            Err(SpErr::ArgParseErr { arg_value, .. }) if arg_value == "x"
        ));
        assert_eq!(parse_arg_as::<Integer>(&mut build_args(""), "cmd", "arg"), Err(SpErr::MissingArg { cmd: "cmd", arg: "arg" }));
    }

    #[test]
    fn test_parse_integer_pair() {
        assert_eq!(parse_integer_pair("1,6".to_string(), "cmd", "arg"), Ok((1, 6)));
        assert_eq!(parse_integer_pair("-1,-6".to_string(), "cmd", "arg"), Ok((-1, -6)));
        assert!(parse_integer_pair("1".to_string(), "cmd", "arg").is_err());
        assert!(parse_integer_pair("1,".to_string(), "cmd", "arg").is_err());
    }

    #[test]
    fn test_parse_general_file_info() {
        assert_eq!(parse_general_file_info(&mut build_args("f.txt")), Some(("f.txt".to_string(), false, None)));
        assert_eq!(
            parse_general_file_info(&mut build_args("f.txt append crlf")),
            Some(("f.txt".to_string(), true, Some(true)))
        );
        assert_eq!(parse_general_file_info(&mut build_args("f.txt LF")), Some(("f.txt".to_string(), false, Some(false))));
        assert_eq!(parse_general_file_info(&mut build_args(":first")), None);
        assert_eq!(parse_general_file_info(&mut build_args("")), None);
    }
}

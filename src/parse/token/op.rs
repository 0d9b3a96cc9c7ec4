use crate::condition::{Cmp, Condition, Select};
use crate::op::{Calc, Op};
use crate::parse::token::{ParserError, cmd, parse_integer};
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{alpha1, char, space1, u32};
use nom::combinator::{map, map_opt, map_res, opt, value};
use nom::error::context;
use nom::multi::many0;
use nom::sequence::{preceded, separated_pair, terminated};
use nom::{IResult, Parser};

pub(in crate::parse) type OpsResult<'a> = IResult<&'a str, Vec<Op>, ParserError<'a>>;
pub(in crate::parse) type OpResult<'a> = IResult<&'a str, Op, ParserError<'a>>;

pub(in crate::parse) fn parse_ops(input: &str) -> OpsResult<'_> {
    context("Op", many0(alt((parse_filter, parse_map, parse_take, parse_drop)))).parse(input)
}

fn parse_filter(input: &str) -> OpResult<'_> {
    context("Op::Filter", map(preceded(cmd(":filter"), terminated(parse_condition, space1)), Op::new_filter))
        .parse(input)
}

fn parse_condition(input: &str) -> IResult<&str, Condition, ParserError<'_>> {
    context(
        "Condition",
        map(
            (
                opt(char('!')), // 可选否定
                alt((
                    value(Select::new_parity(true), tag_no_case("even")),
                    value(Select::new_parity(false), tag_no_case("odd")),
                    map(separated_pair(parse_cmp, space1, parse_integer), |(cmp, value)| {
                        Select::new_compare(cmp, value)
                    }),
                )),
            ),
            |(not, select)| Condition::new(select, not.is_some()),
        ),
    )
    .parse(input)
}

fn parse_cmp(input: &str) -> IResult<&str, Cmp, ParserError<'_>> {
    alt((
        value(Cmp::Gt, tag_no_case("gt")),
        value(Cmp::Ge, tag_no_case("ge")),
        value(Cmp::Lt, tag_no_case("lt")),
        value(Cmp::Le, tag_no_case("le")),
        value(Cmp::Eq, tag_no_case("eq")),
        value(Cmp::Ne, tag_no_case("ne")),
    ))
    .parse(input)
}

fn parse_map(input: &str) -> OpResult<'_> {
    context("Op::Map", map(preceded(cmd(":map"), terminated(parse_calc, space1)), Op::new_map)).parse(input)
}

fn parse_calc(input: &str) -> IResult<&str, Calc, ParserError<'_>> {
    context(
        "Calc",
        alt((
            map(preceded((tag_no_case("pow"), space1), u32), Calc::Pow),
            map_res(separated_pair(alpha1, space1, parse_integer), |(keyword, operand)| {
                Calc::new_binary(keyword, operand)
            }),
            map_opt(alpha1, Calc::new_unary),
        )),
    )
    .parse(input)
}

fn parse_take(input: &str) -> OpResult<'_> {
    context("Op::Take", map(preceded(cmd(":take"), terminated(parse_integer, space1)), Op::new_take)).parse(input)
}

fn parse_drop(input: &str) -> OpResult<'_> {
    context("Op::Drop", map(preceded(cmd(":drop"), terminated(parse_integer, space1)), Op::new_drop)).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert_eq!(
            parse_filter(":filter even "),
            Ok(("", Op::new_filter(Condition::new(Select::new_parity(true), false))))
        );
        assert_eq!(
            parse_filter(":filter !odd "),
            Ok(("", Op::new_filter(Condition::new(Select::new_parity(false), true))))
        );
        assert_eq!(
            parse_filter(":filter gt -3 "),
            Ok(("", Op::new_filter(Condition::new(Select::new_compare(Cmp::Gt, -3), false))))
        );
        assert_eq!(
            parse_filter(":filter !LE 0 "),
            Ok(("", Op::new_filter(Condition::new(Select::new_compare(Cmp::Le, 0), true))))
        );
        assert!(parse_filter(":filter evens ").is_err());
        assert!(parse_filter(":filter gt ").is_err());
        assert!(parse_filter(":filter prime ").is_err());
    }

    #[test]
    fn test_parse_map() {
        assert_eq!(parse_map(":map mul 2 "), Ok(("", Op::new_map(Calc::Mul(2)))));
        assert_eq!(parse_map(":map sub -2 "), Ok(("", Op::new_map(Calc::Sub(-2)))));
        assert_eq!(parse_map(":map neg "), Ok(("", Op::new_map(Calc::Neg))));
        assert_eq!(parse_map(":map pow 3 "), Ok(("", Op::new_map(Calc::Pow(3)))));
        assert!(parse_map(":map pow -3 ").is_err());
        assert!(parse_map(":map div 0 ").is_err());
        assert!(parse_map(":map log 2 ").is_err());
        assert!(parse_map(":map ").is_err());
    }

    #[test]
    fn test_parse_ops() {
        assert_eq!(
            parse_ops(":take 3 :drop -1 :map abs :first "),
            Ok((":first ", vec![Op::new_take(3), Op::new_drop(-1), Op::new_map(Calc::Abs)]))
        );
        assert_eq!(parse_ops(""), Ok(("", vec![])));
        assert!(parse_take(":take x ").is_err());
    }
}

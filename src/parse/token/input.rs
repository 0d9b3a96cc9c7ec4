use crate::input::{Input, Supplier};
use crate::parse::token::{ParserError, cmd, parse_integer};
use sphream::Integer;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, space1};
use nom::combinator::{map, opt, verify};
use nom::error::context;
use nom::multi::many1;
use nom::sequence::{delimited, preceded, separated_pair, terminated};
use nom::{IResult, Parser};

pub(in crate::parse) type InputResult<'a> = IResult<&'a str, Input, ParserError<'a>>;

pub(in crate::parse) fn parse_input(input: &str) -> InputResult<'_> {
    context("Input", alt((parse_range, parse_repeat, parse_gen, parse_of))).parse(input)
}

fn parse_range(input: &str) -> InputResult<'_> {
    context(
        "Input::Range",
        map(
            preceded(
                cmd(":range"),                                                           // 丢弃：命令+空格
                (terminated(parse_integer, space1), terminated(parse_integer, space1)), // 保留：起始值、结束值
            ),
            |(from, to)| Input::new_range(from, to),
        ),
    )
    .parse(input)
}

fn parse_repeat(input: &str) -> InputResult<'_> {
    context(
        "Input::Repeat",
        map(
            preceded(
                cmd(":repeat"),                                                          // 丢弃：命令+空格
                (terminated(parse_integer, space1), terminated(parse_integer, space1)), // 保留：重复值、次数
            ),
            |(value, count)| Input::new_repeat(value, count),
        ),
    )
    .parse(input)
}

fn parse_gen(input: &str) -> InputResult<'_> {
    context("Input::Gen", map(preceded(cmd(":gen"), terminated(parse_supplier, space1)), Input::new_gen)).parse(input)
}

fn parse_supplier(input: &str) -> IResult<&str, Supplier, ParserError<'_>> {
    alt((
        context(
            "Supplier::Count",
            map(
                preceded((tag_no_case("count"), space1), (parse_integer, opt(preceded(char(','), parse_integer)))),
                |(start, step)| Supplier::Count { start, step: step.unwrap_or(1) },
            ),
        ),
        context(
            "Supplier::Random",
            map(
                preceded(
                    (tag_no_case("random"), space1),
                    verify(separated_pair(parse_integer, char(','), parse_integer), |(min, max): &(Integer, Integer)| {
                        min <= max
                    }),
                ),
                |(min, max)| Supplier::Random { min, max },
            ),
        ),
        context("Supplier::Const", map(parse_integer, Supplier::Const)),
    ))
    .parse(input)
}

fn parse_of(input: &str) -> InputResult<'_> {
    context(
        "Input::Of",
        map(
            preceded(
                cmd(":of"),
                alt((
                    map(terminated(parse_integer, space1), |value| vec![value]), // 单个值
                    delimited(
                        (char('['), space1),
                        many1(terminated(parse_integer, space1)),
                        (char(']'), space1),
                    ), // 多个值
                )),
            ),
            Input::new_of,
        ),
    )
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_input(":range 0 10 "), Ok(("", Input::new_range(0, 10))));
        assert_eq!(parse_input(":RANGE -3 -1 :count "), Ok((":count ", Input::new_range(-3, -1))));
        assert!(parse_input(":range 0 ").is_err());
        assert!(parse_input(":range a 1 ").is_err());
    }

    #[test]
    fn test_parse_repeat() {
        assert_eq!(parse_input(":repeat 7 3 "), Ok(("", Input::new_repeat(7, 3))));
        assert_eq!(parse_input(":repeat 7 -3 "), Ok(("", Input::new_repeat(7, -3))));
        assert!(parse_input(":repeat 7 ").is_err());
    }

    #[test]
    fn test_parse_gen() {
        assert_eq!(parse_input(":gen 1 "), Ok(("", Input::new_gen(Supplier::Const(1)))));
        assert_eq!(parse_input(":gen count 10 "), Ok(("", Input::new_gen(Supplier::Count { start: 10, step: 1 }))));
        assert_eq!(
            parse_input(":gen count 10,-2 "),
            Ok(("", Input::new_gen(Supplier::Count { start: 10, step: -2 })))
        );
        assert_eq!(parse_input(":gen random 1,6 "), Ok(("", Input::new_gen(Supplier::Random { min: 1, max: 6 }))));
        assert!(parse_input(":gen random 6,1 ").is_err());
        assert!(parse_input(":gen ").is_err());
    }

    #[test]
    fn test_parse_of() {
        assert_eq!(parse_input(":of 1 "), Ok(("", Input::new_of(vec![1]))));
        assert_eq!(parse_input(":of [ 1 -2 3 ] "), Ok(("", Input::new_of(vec![1, -2, 3]))));
        assert!(parse_input(":of [ ] ").is_err());
        assert!(parse_input(":of [ 1 2 ").is_err());
        assert!(parse_input(":of [ 1 x ] ").is_err());
    }
}

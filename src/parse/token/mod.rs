use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use crate::parse::token::input::parse_input;
use crate::parse::token::op::parse_ops;
use crate::parse::token::output::parse_output;
use sphream::Integer;
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_until, take_while1};
use nom::character::complete::{char, i64, space1};
use nom::combinator::{map, verify};
use nom::error::context;
use nom::sequence::{delimited, terminated};
use nom::{IResult, Parser};
use nom_language::error::VerboseError;

mod input;
mod op;
mod output;

pub(in crate::parse) type ParserError<'a> = VerboseError<&'a str>;

/// 解析完整的流水线，每个命令及参数都以空白结尾。
pub(crate) fn parse(input: &str) -> IResult<&str, (Input, Vec<Op>, Output), ParserError<'_>> {
    (parse_input, parse_ops, parse_output).parse(input)
}

/// 命令+空格，丢弃。
fn cmd<'a>(name: &'static str) -> impl Parser<&'a str, Output = &'a str, Error = ParserError<'a>> {
    terminated(tag_no_case(name), space1)
}

fn parse_integer(input: &str) -> IResult<&str, Integer, ParserError<'_>> {
    context("Integer", i64).parse(input)
}

/// 单个参数，支持双引号包围，不能以`:`开头。
fn arg(input: &str) -> IResult<&str, String, ParserError<'_>> {
    context(
        "Arg",
        map(
            alt((
                delimited(char('"'), take_until("\""), char('"')), // 带引号的参数
                verify(take_while1(|c: char| !c.is_whitespace()), |arg: &str| {
                    !arg.starts_with(':') && !arg.starts_with('"')
                }), // 不带引号的参数
            )),
            String::from,
        ),
    )
    .parse(input)
}

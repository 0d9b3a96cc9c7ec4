use crate::output::Output;
use crate::parse::token::{ParserError, arg, cmd};
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::space1;
use nom::combinator::{map, opt, success};
use nom::error::context;
use nom::sequence::{preceded, terminated};
use nom::{IResult, Parser};

pub(in crate::parse) type OutputResult<'a> = IResult<&'a str, Output, ParserError<'a>>;

pub(in crate::parse) fn parse_output(input: &str) -> OutputResult<'_> {
    context(
        "Output",
        alt((
            map(cmd(":first"), |_| Output::First),
            map(cmd(":last"), |_| Output::Last),
            map(cmd(":count"), |_| Output::Count),
            parse_list,
            map(success(()), |_| Output::new_list_std_out()), // 默认输出全部数据
        )),
    )
    .parse(input)
}

fn parse_list(input: &str) -> OutputResult<'_> {
    context(
        "Output::List",
        map(
            preceded(
                cmd(":list"),
                opt(terminated(
                    (
                        arg,                                                                  // 文件名
                        opt(preceded(space1, tag_no_case("append"))),                        // 可选追加
                        opt(preceded(space1, alt((tag_no_case("crlf"), tag_no_case("lf"))))), // 可选换行符
                    ),
                    space1,
                )),
            ),
            |file_info| match file_info {
                Some((file, append, ending)) => Output::new_list_file(
                    file,
                    append.is_some(),
                    ending.map(|ending: &str| ending.eq_ignore_ascii_case("crlf")),
                ),
                None => Output::new_list_std_out(),
            },
        ),
    )
    .parse(input)
}

use crate::condition::Select;
use crate::config::Config;
use crate::err::SpErr;
use crate::input::Input;
use crate::op::{Calc, Op};
use crate::output::Output;
use itertools::Itertools;
use nom_language::error::convert_error;
use std::env::Args;
use std::iter::{Peekable, Skip};

mod condition;
mod config;
mod err;
mod input;
mod op;
mod output;
mod parse;
mod print;

fn main() {
    if let Err(e) = run() {
        e.termination();
    }
}

fn run() -> Result<(), SpErr> {
    let mut args = std::env::args().skip(1).peekable();
    let configs = parse::args::parse_configs(&mut args);
    if configs.contains(&Config::Help) {
        print_help(args.next().as_deref());
        return Ok(());
    }
    if configs.contains(&Config::Version) {
        println!("sp {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let (input, ops, output) =
        if configs.contains(&Config::Eval) { parse_eval_token(&mut args)? } else { parse::args::parse(args)? };
    let verbose = configs.contains(&Config::Verbose);
    if verbose {
        println_info!("Input:");
        println_info!("    {} {:?}", input.cmd(), input);
        println_info!("Op:");
        println_info!("{}", ops.iter().map(|op| format!("    {} {:?}", op.cmd(), op)).join("\n"));
        println_info!("Output:");
        println_info!("    {} {:?}", output.cmd(), output);
    }
    let mut stream = input.try_into_stream()?;
    if verbose {
        println_info!("Source:");
        println_info!("    {:?}", stream.sequence());
    }
    for op in ops {
        op.wrap(&mut stream);
    }
    if configs.contains(&Config::DryRun) {
        println_notice!("Dry run, {} skipped.", output.cmd());
        Ok(())
    } else {
        output.handle(&mut stream)
    }
}

fn parse_eval_token(args: &mut Peekable<Skip<Args>>) -> Result<(Input, Vec<Op>, Output), SpErr> {
    let Some(mut token) = args.next() else {
        return Err(SpErr::MissingArg { cmd: "--eval", arg: "token" });
    };
    token.push(' ');
    let error = match parse::token::parse(&token) {
        Ok((remaining, res)) => {
            if !remaining.trim().is_empty() {
                return Err(SpErr::UnexpectedRemaining {
                    cmd: "--eval",
                    arg: "token",
                    remaining: remaining.trim_end().to_owned(),
                });
            }
            return Ok(res);
        }
        Err(nom::Err::Error(err) | nom::Err::Failure(err)) => convert_error(token.as_str(), err),
        Err(nom::Err::Incomplete(_)) => "incomplete token".to_string(),
    };
    Err(SpErr::ArgParseErr { cmd: "--eval", arg: "token", arg_value: token, error })
}

fn print_help(topic: Option<&str>) {
    let sections: [(&str, &[(&str, &str)]); 5] = [
        ("Input", Input::all_help()),
        ("Op", Op::all_help()),
        ("Output", Output::all_help()),
        ("cond", Select::all_help()),
        ("calc", Calc::all_help()),
    ];
    println!("Usage: sp [-h [<topic>]] [-V] [-v] [-d] [--eval <token>] <input> [<op>...] [<output>]");
    for (name, helps) in sections {
        if topic.is_some_and(|topic| !topic.eq_ignore_ascii_case(name)) {
            continue;
        }
        println_info!("{name}:");
        for (_, help) in helps {
            println!("{}", help.lines().map(|line| format!("    {line}")).join("\n"));
        }
    }
}

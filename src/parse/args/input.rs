use crate::err::SpErr;
use crate::input::{Input, Supplier};
use crate::parse::args::{consume_if, is_cmd, parse_arg_as, parse_arg_or_arg1, parse_integer_pair, parse_value_as};
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_input(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, SpErr> {
    match args.peek() {
        Some(cmd) => {
            if is_cmd(cmd, ":range") {
                parse_range(args)
            } else if is_cmd(cmd, ":repeat") {
                parse_repeat(args)
            } else if is_cmd(cmd, ":gen") {
                parse_gen(args)
            } else if is_cmd(cmd, ":of") {
                parse_of(args)
            } else {
                Err(SpErr::MissingInput)
            }
        }
        None => Err(SpErr::MissingInput),
    }
}

fn parse_range(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, SpErr> {
    args.next();
    let from = parse_arg_as(args, ":range", "from")?;
    let to = parse_arg_as(args, ":range", "to")?;
    Ok(Input::new_range(from, to))
}

fn parse_repeat(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, SpErr> {
    args.next();
    let value = parse_arg_as(args, ":repeat", "value")?;
    let count = parse_arg_as(args, ":repeat", "count")?;
    Ok(Input::new_repeat(value, count))
}

fn parse_gen(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, SpErr> {
    args.next();
    if consume_if(args, |value| is_cmd(value, "count")).is_some() {
        let start_step: String = parse_arg_as(args, ":gen count", "start")?;
        let (start, step) = match start_step.split_once(',') {
            Some(_) => parse_integer_pair(start_step, ":gen count", "start,step")?,
            None => (parse_value_as(start_step, ":gen count", "start")?, 1),
        };
        Ok(Input::new_gen(Supplier::Count { start, step }))
    } else if consume_if(args, |value| is_cmd(value, "random")).is_some() {
        let min_max = parse_arg_as(args, ":gen random", "min,max")?;
        let (min, max) = parse_integer_pair(min_max, ":gen random", "min,max")?;
        if min > max {
            return Err(SpErr::ArgParseErr {
                cmd: ":gen random",
                arg: "min,max",
                arg_value: format!("{min},{max}"),
                error: "min cannot be greater than max".to_string(),
            });
        }
        Ok(Input::new_gen(Supplier::Random { min, max }))
    } else {
        Ok(Input::new_gen(Supplier::Const(parse_arg_as(args, ":gen", "value")?)))
    }
}

fn parse_of(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, SpErr> {
    args.next();
    let values = parse_arg_or_arg1(args, ":of", "value")?
        .into_iter()
        .map(|value| parse_value_as(value, ":of", "value"))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Input::new_of(values))
}

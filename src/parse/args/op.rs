use crate::condition::{Cmp, Condition, Select};
use crate::err::SpErr;
use crate::op::{Calc, Op};
use crate::parse::args::{is_cmd, parse_arg_as};
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_ops(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Vec<Op>, SpErr> {
    let mut ops = vec![];
    while let Some(op) = parse_op(args)? {
        ops.push(op);
    }
    Ok(ops)
}

fn parse_op(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, SpErr> {
    match args.peek() {
        Some(cmd) => {
            if is_cmd(cmd, ":filter") {
                parse_filter(args)
            } else if is_cmd(cmd, ":map") {
                parse_map(args)
            } else if is_cmd(cmd, ":take") {
                args.next();
                Ok(Some(Op::new_take(parse_arg_as(args, ":take", "count")?)))
            } else if is_cmd(cmd, ":drop") {
                args.next();
                Ok(Some(Op::new_drop(parse_arg_as(args, ":drop", "count")?)))
            } else {
                Ok(None)
            }
        }
        None => Ok(None),
    }
}

fn parse_filter(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, SpErr> {
    args.next();
    let Some(cond) = args.next() else {
        return Err(SpErr::MissingArg { cmd: ":filter", arg: "condition" });
    };
    // 可选否定
    let (not, keyword) = match cond.strip_prefix('!') {
        Some(keyword) => (true, keyword),
        None => (false, cond.as_str()),
    };
    let select = if is_cmd(keyword, "even") {
        Select::new_parity(true)
    } else if is_cmd(keyword, "odd") {
        Select::new_parity(false)
    } else if let Some(cmp) = Cmp::from_keyword(keyword) {
        Select::new_compare(cmp, parse_arg_as(args, ":filter", "value")?)
    } else {
        return Err(SpErr::ArgParseErr {
            cmd: ":filter",
            arg: "condition",
            arg_value: cond.clone(),
            error: "unknown condition".to_string(),
        });
    };
    Ok(Some(Op::new_filter(Condition::new(select, not))))
}

fn parse_map(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, SpErr> {
    args.next();
    let Some(keyword) = args.next() else {
        return Err(SpErr::MissingArg { cmd: ":map", arg: "calc" });
    };
    if let Some(calc) = Calc::new_unary(&keyword) {
        return Ok(Some(Op::new_map(calc)));
    }
    if is_cmd(&keyword, "pow") {
        return Ok(Some(Op::new_map(Calc::Pow(parse_arg_as(args, ":map pow", "n")?))));
    }
    // 未知关键字不能吞掉后续参数
    if !Calc::is_binary(&keyword) {
        return Err(SpErr::ArgParseErr { cmd: ":map", arg: "calc", arg_value: keyword, error: "unknown calc".to_string() });
    }
    let operand = parse_arg_as(args, ":map", "n")?;
    Calc::new_binary(&keyword, operand).map(|calc| Some(Op::new_map(calc))).map_err(|error| SpErr::ArgParseErr {
        cmd: ":map",
        arg: "n",
        arg_value: operand.to_string(),
        error: error.to_string(),
    })
}

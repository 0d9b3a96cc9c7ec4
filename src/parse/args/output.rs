use crate::err::SpErr;
use crate::output::Output;
use crate::parse::args::{is_cmd, parse_general_file_info};
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_output(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, SpErr> {
    let output = match args.peek() {
        Some(cmd) if is_cmd(cmd, ":first") => Output::First,
        Some(cmd) if is_cmd(cmd, ":last") => Output::Last,
        Some(cmd) if is_cmd(cmd, ":count") => Output::Count,
        Some(cmd) if is_cmd(cmd, ":list") => {
            args.next(); // 消耗`:list`
            return Ok(match parse_general_file_info(args) {
                Some((file, append, crlf)) => Output::new_list_file(file, append, crlf),
                None => Output::new_list_std_out(),
            });
        }
        // 未指定终端操作时默认输出全部数据
        _ => return Ok(Output::new_list_std_out()),
    };
    args.next();
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::args::build_args;

    #[test]
    fn test_parse_output() {
        assert_eq!(parse_output(&mut build_args(":first")), Ok(Output::First));
        assert_eq!(parse_output(&mut build_args(":LAST")), Ok(Output::Last));
        assert_eq!(parse_output(&mut build_args(":count")), Ok(Output::Count));
        assert_eq!(parse_output(&mut build_args(":list")), Ok(Output::new_list_std_out()));
        assert_eq!(parse_output(&mut build_args("")), Ok(Output::new_list_std_out()));
        assert_eq!(
            parse_output(&mut build_args(":list out.txt")),
            Ok(Output::new_list_file("out.txt".to_string(), false, None))
        );
        assert_eq!(
            parse_output(&mut build_args(":list out.txt append lf")),
            Ok(Output::new_list_file("out.txt".to_string(), true, Some(false)))
        );
    }

    #[test]
    fn test_parse_output_leaves_unknown() {
        let mut args = build_args("extra");
        assert_eq!(parse_output(&mut args), Ok(Output::new_list_std_out()));
        assert_eq!(args.next(), Some("extra".to_string()));
    }
}

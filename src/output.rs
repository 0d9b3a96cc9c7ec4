use crate::err::SpErr;
use cmd_help::CmdHelp;
use sphream::{Integer, Stream};
use std::fs::OpenOptions;
use std::io::Write;

#[derive(Debug, Eq, PartialEq, CmdHelp)]
pub(crate) enum Output {
    /// :first      输出第一个数据，无数据时报错。
    First,
    /// :last       输出最后一个数据，无数据时报错，无限数据时永不结束。
    Last,
    /// :count      输出数据数量，无限数据时永不结束。
    Count,
    /// :list       按顺序输出全部数据到标准输出或文件，未指定终端操作时的默认操作。
    ///             :list[ <file>[ append][ lf|crlf]]
    ///                 <file>  文件路径，可选。
    ///                 append  追加输出而不是覆盖，可选，如果未指定则覆盖源文件。
    ///                 lf|crlf 指定换行符为'LF'或'CRLF'，可选，如果未指定则默认使用'LF'。
    ///             例如：
    ///                 :list
    ///                 :list out.txt
    ///                 :list out.txt append crlf
    List(ListTo),
}

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum ListTo {
    StdOut,
    File { file: String, append: bool, crlf: Option<bool> },
}

impl Output {
    pub(crate) fn new_list_std_out() -> Output {
        Output::List(ListTo::StdOut)
    }
    pub(crate) fn new_list_file(file: String, append: bool, crlf: Option<bool>) -> Output {
        Output::List(ListTo::File { file, append, crlf })
    }

    pub(crate) fn handle(self, stream: &mut Stream<Integer>) -> Result<(), SpErr> {
        match self {
            Output::First => println!("{}", stream.first()?),
            Output::Last => println!("{}", stream.last()?),
            Output::Count => println!("{}", stream.count()),
            Output::List(ListTo::StdOut) => {
                for item in stream.materialize() {
                    println!("{item}");
                }
            }
            Output::List(ListTo::File { file, append, crlf }) => {
                let mut writer = OpenOptions::new()
                    .write(true)
                    .truncate(!append)
                    .append(append)
                    .create(true)
                    .open(&file)
                    .map_err(|err| SpErr::OpenOutputFileErr { file: file.clone(), err: err.to_string() })?;
                let postfix = if crlf.unwrap_or(false) { "\r\n" } else { "\n" };
                for item in stream.materialize() {
                    write!(writer, "{item}{postfix}").map_err(|err| SpErr::WriteToOutputFileErr {
                        file: file.clone(),
                        item: item.to_string(),
                        err: err.to_string(),
                    })?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sphream::StreamErr;
    use std::fs;

    #[test]
    fn test_handle_empty() {
        let mut stream = Stream::range(0, 0).unwrap();
        assert_eq!(Output::First.handle(&mut stream), Err(SpErr::Stream(StreamErr::Empty)));
        assert_eq!(Output::Last.handle(&mut stream), Err(SpErr::Stream(StreamErr::Empty)));
        assert_eq!(Output::Count.handle(&mut stream), Ok(()));
        assert_eq!(Output::new_list_std_out().handle(&mut stream), Ok(()));
    }

    #[test]
    fn test_handle_list_file() {
        let path = std::env::temp_dir().join(format!("sp_output_test_{}.txt", std::process::id()));
        let file = path.to_string_lossy().to_string();

        let mut stream = Stream::range(0, 3).unwrap();
        assert_eq!(Output::new_list_file(file.clone(), false, None).handle(&mut stream), Ok(()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "0\n1\n2\n");

        let mut stream = Stream::of(vec![7, 8]);
        assert_eq!(Output::new_list_file(file.clone(), true, Some(true)).handle(&mut stream), Ok(()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "0\n1\n2\n7\r\n8\r\n");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_handle_open_file_failed() {
        let dir = std::env::temp_dir().to_string_lossy().to_string();
        let mut stream = Stream::range(0, 3).unwrap();
        let res = Output::new_list_file(dir, false, None).handle(&mut stream);
        assert!(matches!(res, Err(SpErr::OpenOutputFileErr { .. })));
    }
}

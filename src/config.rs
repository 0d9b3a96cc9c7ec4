#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Config {
    /// 帮助 `-h`
    Help,
    /// 版本 `-V`
    Version,
    /// 打印流水线信息 `-v`
    Verbose,
    /// 仅解析并构建流，不执行终端操作 `-d`
    DryRun,
    /// 以Token模式解析下一个参数 `--eval`
    Eval,
}

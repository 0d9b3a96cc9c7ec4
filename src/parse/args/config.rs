use crate::config::Config;
use std::iter::Peekable;

pub(crate) fn parse_configs(args: &mut Peekable<impl Iterator<Item = String>>) -> Vec<Config> {
    let mut configs = Vec::new();
    while let Some(config) = parse_config(args.peek()) {
        args.next();
        configs.push(config);
    }
    configs
}

fn parse_config(arg: Option<&String>) -> Option<Config> {
    match arg?.as_str() {
        "-h" | "--help" => Some(Config::Help),
        "-V" | "--version" => Some(Config::Version),
        "-v" => Some(Config::Verbose),
        "-d" => Some(Config::DryRun),
        "--eval" => Some(Config::Eval),
        _ => None, // 遇到未知参数，停止解析（由调用者处理）
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::args::build_args;

    #[test]
    fn test_parse_configs() {
        let mut args = build_args("-v -d :range 0 3");
        assert_eq!(parse_configs(&mut args), vec![Config::Verbose, Config::DryRun]);
        assert_eq!(args.next(), Some(":range".to_string()));

        assert_eq!(parse_configs(&mut build_args("--eval -h")), vec![Config::Eval, Config::Help]);
        assert_eq!(parse_configs(&mut build_args("-V")), vec![Config::Version]);
        assert!(parse_configs(&mut build_args(":of 1 -v")).is_empty());
        assert!(parse_configs(&mut build_args("")).is_empty());
    }
}

use crate::println_err;
use sphream::StreamErr;
use std::process::{ExitCode, Termination};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub(crate) enum SpErr {
    #[error("[Arg Parse Err] Unable to parse `{arg_value}` in argument `{arg}` of cmd `{cmd}`, error: {error}")]
    ArgParseErr { cmd: &'static str, arg: &'static str, arg_value: String, error: String },

    #[error("[Bad Arg] Unexpected remaining value `{remaining}` in argument `{arg}` of cmd `{cmd}`")]
    UnexpectedRemaining { cmd: &'static str, arg: &'static str, remaining: String },

    #[error("[Missing Arg] Missing argument `{arg}` of cmd `{cmd}`")]
    MissingArg { cmd: &'static str, arg: &'static str },

    #[error("[Missing Arg] At least one value for argument `{arg}` is required for cmd `{cmd}`")]
    ArgNotEnough { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Closing bracket (`]`) for argument `{arg}` is required for cmd `{cmd}`")]
    UnclosingMultiArg { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unexpected closing bracket of argument `{arg}` for cmd `{cmd}`")]
    UnexpectedClosingBracket { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unknown arguments: {args:?}")]
    UnknownArgs { args: Vec<String> },

    #[error("[Missing Input] A source such as `:range`, `:repeat`, `:gen` or `:of` is required")]
    MissingInput,

    #[error("[Stream] {0}")]
    Stream(#[from] StreamErr),

    #[error("[Output] Open output file `{file}` error: {err}")]
    OpenOutputFileErr { file: String, err: String },

    #[error("[Output] Write item `{item}` to file `{file}` error: {err}")]
    WriteToOutputFileErr { file: String, item: String, err: String },
}

impl Termination for SpErr {
    fn report(self) -> ExitCode {
        println_err!("{}", self);
        ExitCode::from(self.exit_code())
    }
}

impl SpErr {
    pub fn termination(self) -> ! {
        let exit_code = self.exit_code();
        self.report();
        std::process::exit(exit_code as i32);
    }

    fn exit_code(&self) -> u8 {
        match self {
            SpErr::ArgParseErr { .. } => 1,
            SpErr::UnexpectedRemaining { .. } => 2,
            SpErr::MissingArg { .. } => 3,
            SpErr::ArgNotEnough { .. } => 4,
            SpErr::UnclosingMultiArg { .. } => 5,
            SpErr::UnexpectedClosingBracket { .. } => 6,
            SpErr::UnknownArgs { .. } => 7,
            SpErr::MissingInput => 8,
            SpErr::Stream(StreamErr::InvalidRange { .. }) => 9,
            SpErr::Stream(StreamErr::InvalidAmount(_)) => 10,
            SpErr::Stream(StreamErr::Empty) => 11,
            SpErr::OpenOutputFileErr { .. } => 12,
            SpErr::WriteToOutputFileErr { .. } => 13,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stream_err() {
        let err: SpErr = StreamErr::InvalidRange { from: 3, to: 1 }.into();
        assert_eq!(err, SpErr::Stream(StreamErr::InvalidRange { from: 3, to: 1 }));
        assert_eq!(
            err.to_string(),
            "[Stream] [Range] Invalid range: from `3` must not be greater than to `1`"
        );
        assert_eq!(SpErr::Stream(StreamErr::Empty).to_string(), "[Stream] [Terminal] Stream is empty");
    }

    #[test]
    fn test_exit_code_distinct() {
        let errs = [
            SpErr::MissingArg { cmd: ":take", arg: "amount" },
            SpErr::UnknownArgs { args: vec!["x".to_string()] },
            SpErr::MissingInput,
            SpErr::Stream(StreamErr::InvalidAmount(-1)),
            SpErr::Stream(StreamErr::Empty),
        ];
        let codes = errs.iter().map(SpErr::exit_code).collect::<Vec<_>>();
        assert_eq!(codes, vec![3, 7, 8, 10, 11]);
        assert!(codes.iter().all(|code| *code != 0));
    }
}

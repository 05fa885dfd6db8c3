//! Go-style flag normalization.
//!
//! `-actor NAME` and `-pre-phoneme=0.2` are rewritten to their `--` forms when
//! the name is a long flag of the command, so both spellings parse the same.

use std::ffi::OsString;

use clap::{ArgAction, Command};

/// Rewrites single-dash long flags to double-dash ones.
///
/// Arguments after a bare `--`, short flags, and values such as `-0.1` are
/// left untouched. Boolean flags accept Go's `-flag=true` and `-flag=false`:
/// the first becomes `--flag`, the second is dropped.
pub fn normalize_args<I>(args: I, cmd: &Command) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;

    for (idx, arg) in args.into_iter().enumerate() {
        if idx == 0 || passthrough {
            out.push(arg);
            continue;
        }

        let rewrite = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                Rewrite::Keep
            }
            Some(s) => rewrite(s, cmd),
            None => Rewrite::Keep,
        };

        match rewrite {
            Rewrite::Keep => out.push(arg),
            Rewrite::Replace(s) => out.push(OsString::from(s)),
            Rewrite::Drop => {}
        }
    }

    out
}

enum Rewrite {
    Keep,
    Replace(String),
    Drop,
}

fn rewrite(arg: &str, cmd: &Command) -> Rewrite {
    let (dashes, rest) = match arg.strip_prefix("--") {
        Some(rest) => (2, rest),
        None => match arg.strip_prefix('-') {
            Some(rest) => (1, rest),
            None => return Rewrite::Keep,
        },
    };

    let (name, value) = match rest.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (rest, None),
    };
    if name.chars().count() < 2 {
        return Rewrite::Keep;
    }

    let Some(kind) = long_flag(name, cmd) else {
        return Rewrite::Keep;
    };

    match (kind, value.and_then(parse_go_bool)) {
        (FlagKind::Bool, Some(true)) => Rewrite::Replace(format!("--{}", name)),
        (FlagKind::Bool, Some(false)) => Rewrite::Drop,
        _ if dashes == 1 => Rewrite::Replace(format!("-{}", arg)),
        _ => Rewrite::Keep,
    }
}

#[derive(Clone, Copy)]
enum FlagKind {
    Bool,
    Other,
}

fn long_flag(name: &str, cmd: &Command) -> Option<FlagKind> {
    if name == "help" || name == "version" {
        return Some(FlagKind::Other);
    }

    cmd.get_arguments()
        .find(|a| a.get_long() == Some(name))
        .map(|a| match a.get_action() {
            ArgAction::SetTrue => FlagKind::Bool,
            _ => FlagKind::Other,
        })
}

/// Boolean spellings accepted by Go's `strconv.ParseBool`.
fn parse_go_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

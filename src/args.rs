use crate::config::DEFAULT_URI;
use clap::Parser;
use std::ffi::OsString;

/// Prints nginx VTS metrics as Zabbix sender lines
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// URI of the nginx VTS JSON status page.
    #[clap(long, value_name = "URI", default_value = DEFAULT_URI)]
    pub uri: String,
}

impl Args {
    /// Parses the process arguments, accepting the single-dash `-uri` spelling
    /// that existing agent configurations pass.
    pub fn parse_compat() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrites `-uri` and `-uri=<value>` into their `--uri` forms.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-uri") => OsString::from("--uri"),
            Some(value) if value.starts_with("-uri=") => OsString::from(format!("-{value}")),
            _ => arg,
        })
        .collect()
}

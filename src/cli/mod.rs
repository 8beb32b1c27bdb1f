mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};

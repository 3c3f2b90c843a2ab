//! Dispatch logic: extract params from `ArgMatches` and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::assemble::{AssembleArgs, OutputFormat};

/// Printed to stderr ahead of the usage text when `--in` or `--out` is missing.
pub const MISSING_PATHS: &str = "This command requires the --in and --out options to be defined!";

pub struct AssembleParams {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub force_global: bool,
    pub idl: bool,
    pub nominal: bool,
    pub json: bool,
    pub global_attrs: Vec<String>,
    pub externs: Vec<String>,
    pub reject_duplicates: bool,
    pub color: ColorChoice,
}

impl AssembleParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m.get_one::<PathBuf>("in").cloned(),
            output: m.get_one::<PathBuf>("out").cloned(),
            force_global: m.get_flag("force_global"),
            idl: m.get_flag("idl"),
            nominal: m.get_flag("nominal"),
            json: m.get_flag("json"),
            global_attrs: strings(m, "global_attr"),
            externs: strings(m, "extern"),
            reject_duplicates: m.get_flag("reject_duplicates"),
            color: parse_color(m),
        }
    }

    /// Command args, or `None` when `--in` or `--out` is missing.
    pub fn into_args(self) -> Option<AssembleArgs> {
        let format = if self.json {
            OutputFormat::Json
        } else if self.idl {
            OutputFormat::Idl
        } else {
            OutputFormat::TypeScript
        };

        Some(AssembleArgs {
            input: self.input?,
            output: self.output?,
            format,
            force_global: self.force_global,
            nominal: self.nominal,
            global_attrs: self.global_attrs,
            externs: self.externs,
            reject_duplicates: self.reject_duplicates,
            color: self.color.should_colorize(),
        })
    }
}

fn strings(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

//! Argument builders for the CLI.
//!
//! Each function returns a `clap::Arg`; `commands.rs` composes them.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Input document (-i/--in).
pub fn in_arg() -> Arg {
    Arg::new("in")
        .short('i')
        .long("in")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Bikeshed source document")
}

/// Output file (-o/--out).
pub fn out_arg() -> Arg {
    Arg::new("out")
        .short('o')
        .long("out")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("File to write; parent directories are created")
}

/// Emit everything into the global scope (-f/--forceGlobal).
pub fn force_global_arg() -> Arg {
    Arg::new("force_global")
        .short('f')
        .long("forceGlobal")
        .action(ArgAction::SetTrue)
        .help("Declare every type globally, ignoring [Exposed]")
}

/// Canonical WebIDL instead of TypeScript (-I/--idl).
pub fn idl_arg() -> Arg {
    Arg::new("idl")
        .short('I')
        .long("idl")
        .action(ArgAction::SetTrue)
        .conflicts_with("json")
        .help("Write the merged WebIDL instead of TypeScript")
}

/// Nominal branding (-n/--nominal).
pub fn nominal_arg() -> Arg {
    Arg::new("nominal")
        .short('n')
        .long("nominal")
        .action(ArgAction::SetTrue)
        .help("Brand interfaces, dictionaries and enums so equal shapes stay distinct")
}

/// Print version (-v/--version).
pub fn version_arg() -> Arg {
    Arg::new("version")
        .short('v')
        .long("version")
        .action(ArgAction::Version)
        .help("Print version")
}

/// Extra exposure attribute (--global-attr, repeatable).
pub fn global_attr_arg() -> Arg {
    Arg::new("global_attr")
        .long("global-attr")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Additional extended attribute that marks a definition as global")
}

/// Externally provided type name (--extern, repeatable).
pub fn extern_arg() -> Arg {
    Arg::new("extern")
        .long("extern")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Type name to accept without a declaration")
}

/// Fail on member collisions (--reject-duplicates).
pub fn reject_duplicates_arg() -> Arg {
    Arg::new("reject_duplicates")
        .long("reject-duplicates")
        .action(ArgAction::SetTrue)
        .help("Report members declared twice instead of keeping the last one")
}

/// Linked model as JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Write the linked model as JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

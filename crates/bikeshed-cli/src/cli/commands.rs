//! Command builder for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI.
///
/// `--in` and `--out` are optional at the clap level: when either is missing
/// the dispatcher prints usage instead of failing.
pub fn build_cli() -> Command {
    Command::new("bikeshed-to-ts")
        .about("Generate TypeScript declarations from the WebIDL in a Bikeshed document")
        .version(env!("CARGO_PKG_VERSION"))
        .disable_version_flag(true)
        .override_usage("bikeshed-to-ts --in <FILE> --out <FILE> [OPTIONS]")
        .after_help(
            r#"EXAMPLES:
  bikeshed-to-ts -i fetch.bs -o fetch.d.ts            # module + declare global
  bikeshed-to-ts -i fetch.bs -o fetch.d.ts -f         # everything global
  bikeshed-to-ts -i fetch.bs -o fetch.webidl --idl    # merged WebIDL
  bikeshed-to-ts -i dom.bs -o dom.d.ts --nominal      # branded types"#,
        )
        .arg(in_arg())
        .arg(out_arg())
        .arg(force_global_arg())
        .arg(idl_arg())
        .arg(nominal_arg())
        .arg(version_arg())
        .arg(global_attr_arg())
        .arg(extern_arg())
        .arg(reject_duplicates_arg())
        .arg(json_arg())
        .arg(color_arg())
}

use std::path::PathBuf;

use clap::error::ErrorKind;

use super::*;
use crate::commands::assemble::OutputFormat;

fn params(args: &[&str]) -> AssembleParams {
    let argv = std::iter::once("bikeshed-to-ts").chain(args.iter().copied());
    let m = build_cli()
        .try_get_matches_from(argv)
        .unwrap_or_else(|e| panic!("{e}"));
    AssembleParams::from_matches(&m)
}

#[test]
fn short_and_long_flags() {
    let p = params(&["-i", "spec.bs", "-o", "out/spec.d.ts", "-f", "-n"]);
    assert_eq!(p.input, Some(PathBuf::from("spec.bs")));
    assert_eq!(p.output, Some(PathBuf::from("out/spec.d.ts")));
    assert!(p.force_global);
    assert!(p.nominal);
    assert!(!p.idl);

    let p = params(&["--in", "a.bs", "--out", "a.webidl", "--forceGlobal", "--idl"]);
    assert!(p.force_global);
    assert!(p.idl);
}

#[test]
fn missing_paths_yield_no_args() {
    assert!(params(&[]).into_args().is_none());
    assert!(params(&["-i", "spec.bs"]).into_args().is_none());
    assert!(params(&["-o", "spec.d.ts"]).into_args().is_none());
}

#[test]
fn usage_for_missing_paths() {
    assert!(params(&["-f"]).into_args().is_none());
    insta::assert_snapshot!(MISSING_PATHS, @"This command requires the --in and --out options to be defined!");

    let help = build_cli().render_help().to_string();
    assert!(help.contains("--in <FILE>"));
    assert!(help.contains("--forceGlobal"));
}

#[test]
fn output_format_selection() {
    let format = |args: &[&str]| {
        let mut argv = vec!["-i", "a.bs", "-o", "a.out"];
        argv.extend_from_slice(args);
        params(&argv).into_args().map(|a| a.format)
    };

    assert_eq!(format(&[]), Some(OutputFormat::TypeScript));
    assert_eq!(format(&["--idl"]), Some(OutputFormat::Idl));
    assert_eq!(format(&["--json"]), Some(OutputFormat::Json));
}

#[test]
fn idl_conflicts_with_json() {
    let result = build_cli().try_get_matches_from(["bikeshed-to-ts", "--idl", "--json"]);
    let err = result.err().map(|e| e.kind());
    assert_eq!(err, Some(ErrorKind::ArgumentConflict));
}

#[test]
fn repeatable_link_options() {
    let p = params(&[
        "--global-attr",
        "Marked",
        "--global-attr",
        "Visible",
        "--extern",
        "Element",
        "--reject-duplicates",
    ]);
    assert_eq!(p.global_attrs, ["Marked", "Visible"]);
    assert_eq!(p.externs, ["Element"]);
    assert!(p.reject_duplicates);
}

#[test]
fn version_short_flag() {
    let result = build_cli().try_get_matches_from(["bikeshed-to-ts", "-v"]);
    let err = result.err().map(|e| e.kind());
    assert_eq!(err, Some(ErrorKind::DisplayVersion));
}

#[test]
fn color_choice() {
    assert_eq!(params(&[]).color, ColorChoice::Auto);
    assert_eq!(params(&["--color", "always"]).color, ColorChoice::Always);
    assert_eq!(params(&["--color", "never"]).color, ColorChoice::Never);
    assert!(ColorChoice::Always.should_colorize());
    assert!(!ColorChoice::Never.should_colorize());

    let result = build_cli().try_get_matches_from(["bikeshed-to-ts", "--color", "sometimes"]);
    assert!(result.is_err());
}

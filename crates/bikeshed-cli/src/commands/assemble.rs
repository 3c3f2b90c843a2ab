use std::fs;
use std::path::{Path, PathBuf};

use bikeshed_compiler::analyze::MemberCollision;
use bikeshed_compiler::{Assembler, LinkConfig};

/// What gets written to `--out`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    TypeScript,
    Idl,
    Json,
}

pub struct AssembleArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub force_global: bool,
    pub nominal: bool,
    pub global_attrs: Vec<String>,
    pub externs: Vec<String>,
    pub reject_duplicates: bool,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot serialize the linked model: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Assembly(#[from] bikeshed_compiler::Error),
}

pub fn run(args: AssembleArgs) {
    let doc = match read_input(&args.input) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let text = match render(&doc, &args) {
        Ok(text) => text,
        Err(CliError::Assembly(e)) => {
            let path = args.input.display().to_string();
            eprintln!("error: {}", e);
            eprint!(
                "{}",
                e.diagnostics()
                    .printer()
                    .source(&doc)
                    .path(&path)
                    .colored(args.color)
                    .render()
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = write_output(&args.output, &text) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    tracing::info!(output = %args.output.display(), bytes = text.len(), "written");
}

pub fn read_input(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Run the pipeline over `doc` and produce the requested output text.
pub fn render(doc: &str, args: &AssembleArgs) -> Result<String, CliError> {
    let assembler = Assembler::new(doc)
        .force_global(args.force_global)
        .nominal(args.nominal)
        .link_config(link_config(args));

    let text = match args.format {
        OutputFormat::TypeScript => assembler.emit_typescript()?,
        OutputFormat::Idl => assembler.emit_idl()?,
        OutputFormat::Json => {
            let model = assembler.link()?;
            let mut json = serde_json::to_string_pretty(&model)?;
            json.push('\n');
            json
        }
    };
    Ok(text)
}

fn link_config(args: &AssembleArgs) -> LinkConfig {
    let collision = if args.reject_duplicates {
        MemberCollision::Reject
    } else {
        MemberCollision::LastWins
    };
    let config = LinkConfig::new().collision(collision);
    let config = args
        .global_attrs
        .iter()
        .fold(config, |config, name| config.global_attribute(name));
    args.externs
        .iter()
        .fold(config, |config, name| config.external(name))
}

/// Write `text` to `path`, creating missing parent directories first.
///
/// A failed directory creation is reported on stderr and the write is still
/// attempted; it fails with the real problem if the directory is missing.
pub fn write_output(path: &Path, text: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && let Err(e) = fs::create_dir_all(parent)
    {
        eprintln!(
            "warning: cannot create directory '{}': {}",
            parent.display(),
            e
        );
    }

    fs::write(path, text).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

mod cmd;

#[derive(Debug, thiserror::Error)]
enum XtaskError {
    #[error("usage: xtask <command> ...")]
    Usage,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write file {path}: {source}")]
    WriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse font {path}: {reason}")]
    ParseFont { path: String, reason: String },
    #[error("font {path} has no glyph for {ch:?}")]
    MissingGlyph { path: String, ch: char },
    #[error("fonts disagree on units per em: {0}")]
    MixedUnitsPerEm(String),
}

fn print_help() {
    println!("usage: xtask <command> ...");
    println!();
    println!("Commands:");
    println!("  gen-font-metrics --fonts <dir> [--out <path>]");
}

fn main() -> Result<(), XtaskError> {
    let mut args = std::env::args().skip(1);
    let Some(cmd_name) = args.next() else {
        return Err(XtaskError::Usage);
    };

    match cmd_name.as_str() {
        "--help" | "-h" | "help" => {
            print_help();
            Ok(())
        }
        "gen-font-metrics" => cmd::gen_font_metrics(args.collect()),
        other => Err(XtaskError::UnknownCommand(other.to_string())),
    }
}

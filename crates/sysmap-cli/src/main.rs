use indexmap::IndexMap;
use std::io::Read;
use sysmap_core::{Document, ImportPolicy, export, import, seed, suggested_filename};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Graph(sysmap_core::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Graph(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<sysmap_core::Error> for CliError {
    fn from(value: sysmap_core::Error) -> Self {
        Self::Graph(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Export,
    Validate,
    Stats,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    out: Option<String>,
    enhanced: bool,
    strict: bool,
}

fn usage() -> &'static str {
    "sysmap\n\
\n\
USAGE:\n\
  sysmap export [--enhanced] [--out <path>]\n\
  sysmap validate [--strict] [<path>|-]\n\
  sysmap stats [<path>|-]\n\
\n\
NOTES:\n\
  - export writes a seed system map in the save-file format; without --out the\n\
    file lands in the current directory under the dated download name.\n\
  - validate parses a saved graph file and reports its node/edge counts;\n\
    --strict additionally rejects duplicate node ids and dangling edges.\n\
  - If <path> is '-', input is read from stdin.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut command_seen = false;

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "export" | "validate" | "stats" if !command_seen => {
                command_seen = true;
                args.command = match a.as_str() {
                    "export" => Command::Export,
                    "validate" => Command::Validate,
                    _ => Command::Stats,
                };
            }
            "--enhanced" => args.enhanced = true,
            "--strict" => args.strict = true,
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other if other.starts_with("--") => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if !command_seen {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn run_export(args: &Args) -> Result<(), CliError> {
    let (document, profile, prefix) = if args.enhanced {
        (seed::enhanced(), seed::enhanced_profile(), "enhanced-system-graph")
    } else {
        (seed::basic(), seed::basic_profile(), "system-graph")
    };

    let json = export(&document, &profile).to_json()?;
    let path = args
        .out
        .clone()
        .unwrap_or_else(|| suggested_filename(prefix));
    std::fs::write(&path, json)?;
    println!("wrote {path}");
    Ok(())
}

fn run_validate(args: &Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let policy = if args.strict {
        ImportPolicy::Strict
    } else {
        ImportPolicy::Passthrough
    };
    let imported = import(&text, policy)?;
    println!(
        "ok: {} nodes, {} edges (version {})",
        imported.document.node_count(),
        imported.document.edge_count(),
        if imported.profile.version.is_empty() {
            "unknown"
        } else {
            imported.profile.version.as_str()
        },
    );
    Ok(())
}

fn tally<'a>(keys: impl Iterator<Item = Option<&'a str>>) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for key in keys {
        *counts
            .entry(key.unwrap_or("(untyped)").to_string())
            .or_insert(0) += 1;
    }
    counts
}

fn run_stats(args: &Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let document: Document = import(&text, ImportPolicy::Passthrough)?.document;

    println!("nodes: {}", document.node_count());
    let node_types = tally(
        document
            .nodes()
            .iter()
            .map(|n| n.data.attributes.get("type").and_then(|v| v.as_str())),
    );
    for (node_type, count) in &node_types {
        println!("  {node_type}: {count}");
    }

    println!("edges: {}", document.edge_count());
    let edge_types = tally(document.edges().iter().map(|e| e.edge_type.as_deref()));
    for (edge_type, count) in &edge_types {
        println!("  {edge_type}: {count}");
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Export => run_export(&args),
        Command::Validate => run_validate(&args),
        Command::Stats => run_stats(&args),
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

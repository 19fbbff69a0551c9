use anyhow::{bail, Context, Result};
use regview::{render, report, table};
use std::{env, io, path::PathBuf, process};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) parse args ───────────────────────────────────────────────
    let opts = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("usage: regview <registry.csv> [--delimiter <char>] [--json]");
            process::exit(2);
        }
    };

    // ─── 3) load + validate table ────────────────────────────────────
    let table = table::load_table(&opts.path, opts.delimiter)?;

    // ─── 4) derive + render ──────────────────────────────────────────
    let report = report::build_report(&table);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if opts.json {
        render::render_json(&mut out, &report)?;
    } else {
        render::render_text(&mut out, &report)?;
    }
    Ok(())
}

struct Options {
    path: PathBuf,
    delimiter: u8,
    json: bool,
}

impl Options {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self> {
        let mut args = args;
        let mut path = None;
        let mut delimiter = b',';
        let mut json = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => json = true,
                "--delimiter" => {
                    let raw = args.next().context("--delimiter needs a value")?;
                    let mut bytes = raw.bytes();
                    match (bytes.next(), bytes.next()) {
                        (Some(b), None) => delimiter = b,
                        _ => bail!("delimiter must be a single character, got {raw:?}"),
                    }
                }
                _ if path.is_none() => path = Some(PathBuf::from(arg)),
                _ => bail!("unexpected argument {arg:?}"),
            }
        }

        Ok(Self {
            path: path.context("no registry file given")?,
            delimiter,
            json,
        })
    }
}

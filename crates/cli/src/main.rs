// File: crates/cli/src/main.rs
// Summary: Load chart descriptors from JSON (or one CSV column), render the matplotlib script,
//          then print it, write it to a numbered file, or run it.

use anyhow::{bail, Context, Result};
use chart_core::{load_csv_column, load_descriptors, render_script, run_script, write_script, ScriptOptions};
use log::info;
use std::path::{Path, PathBuf};

const USAGE: &str = "\
usage: chart-script [FILE | --json FILE | --csv FILE --column NAME] [options]

options:
  --count K        target points per series (default 1000; JSON `count` wins)
  --config FILE    JSON file with script options
  --out DIR        write the script to DIR/pltNNNN.py instead of stdout
  --save PNG       save the figure to PNG instead of opening a window
  --run            run the written script (defaults --out to ./plots)
  --python BIN     interpreter for --run (env CHART_SCRIPT_PYTHON)
  --no-legend      never emit plt.legend()";

enum Input {
    Json(PathBuf),
    Csv { path: PathBuf, column: String },
}

struct Args {
    input: Input,
    count: Option<usize>,
    config: Option<PathBuf>,
    out: Option<PathBuf>,
    save: Option<PathBuf>,
    run: bool,
    python: Option<String>,
    legend: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1))? {
        Some(args) => args,
        None => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    let mut opts = match &args.config {
        Some(path) => ScriptOptions::from_json_file(path)
            .with_context(|| format!("failed to load options '{}'", path.display()))?,
        None => ScriptOptions::default(),
    }
    .with_env_overrides();
    if let Some(count) = args.count {
        opts.default_count = count;
    }
    if let Some(python) = &args.python {
        opts.interpreter = python.clone();
    }
    if args.save.is_some() {
        opts.save_to = args.save.clone();
    }
    opts.legend &= args.legend;

    let descriptors = match &args.input {
        Input::Json(path) => load_descriptors(path, opts.default_count)
            .with_context(|| format!("failed to load descriptors '{}'", path.display()))?,
        Input::Csv { path, column } => vec![load_csv_column(path, column, opts.default_count)
            .with_context(|| format!("failed to load column '{column}' from '{}'", path.display()))?],
    };
    info!("loaded {} chart descriptors", descriptors.len());

    let script = render_script(&descriptors, &opts).context("failed to render script")?;

    let Some(out_dir) = output_dir(&args) else {
        print!("{script}");
        return Ok(());
    };

    let path = write_script(&out_dir, &script)?;
    println!("Wrote {}", path.display());

    if args.run {
        let output = run_script(&opts.interpreter, &path)
            .with_context(|| format!("running {}", path.display()))?;
        if !output.stdout.is_empty() {
            print!("{}", output.stdout);
        }
    }
    Ok(())
}

/// Parse command-line flags. Returns `None` when help was requested.
fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Option<Args>> {
    let mut file: Option<PathBuf> = None;
    let mut json: Option<PathBuf> = None;
    let mut csv: Option<PathBuf> = None;
    let mut column: Option<String> = None;
    let mut args = Args {
        input: Input::Json(PathBuf::new()),
        count: None,
        config: None,
        out: None,
        save: None,
        run: false,
        python: None,
        legend: true,
    };

    while let Some(arg) = it.next() {
        let mut value = |flag: &str| it.next().with_context(|| format!("{flag} needs a value"));
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--json" => json = Some(value("--json")?.into()),
            "--csv" => csv = Some(value("--csv")?.into()),
            "--column" => column = Some(value("--column")?),
            "--count" => args.count = Some(parse_count(&value("--count")?)?),
            "--config" => args.config = Some(value("--config")?.into()),
            "--out" => args.out = Some(value("--out")?.into()),
            "--save" => args.save = Some(value("--save")?.into()),
            "--python" => args.python = Some(value("--python")?),
            "--run" => args.run = true,
            "--no-legend" => args.legend = false,
            flag if flag.starts_with("--") => bail!("unknown option {flag}\n\n{USAGE}"),
            _ if file.is_none() => file = Some(PathBuf::from(&arg)),
            _ => bail!("unexpected argument {arg}\n\n{USAGE}"),
        }
    }

    // A bare FILE is dispatched on its extension.
    if let Some(path) = file {
        match extension(&path).as_str() {
            "csv" => csv = csv.or(Some(path)),
            _ => json = json.or(Some(path)),
        }
    }

    args.input = match (json, csv) {
        (Some(_), Some(_)) => bail!("give either JSON descriptors or a CSV file, not both"),
        (Some(path), None) => Input::Json(path),
        (None, Some(path)) => {
            let column = column.context("--csv needs --column NAME")?;
            Input::Csv { path, column }
        }
        (None, None) => bail!("no input given\n\n{USAGE}"),
    };
    Ok(Some(args))
}

/// Where the script file goes; `None` means print to stdout.
fn output_dir(args: &Args) -> Option<PathBuf> {
    match (&args.out, args.run) {
        (Some(dir), _) => Some(dir.clone()),
        (None, true) => Some(PathBuf::from("plots")),
        (None, false) => None,
    }
}

fn parse_count(raw: &str) -> Result<usize> {
    let count: i64 = raw.trim().parse().with_context(|| format!("--count expects an integer, got '{raw}'"))?;
    if count <= 0 {
        bail!("invalid argument: --count must be at least 1, got {count}");
    }
    Ok(count as usize)
}

fn extension(p: &Path) -> String {
    p.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Option<Args>> {
        parse_args(argv.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter())
    }

    fn args(argv: &[&str]) -> Args {
        parse(argv).expect("args parse").expect("not help")
    }

    fn error(argv: &[&str]) -> String {
        match parse(argv) {
            Ok(_) => panic!("expected {argv:?} to be rejected"),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn maps_flags_onto_args() {
        let a = args(&[
            "--json", "charts.json", "--count", "250", "--config", "opts.json", "--out", "scripts",
            "--save", "fig.png", "--python", "py3", "--run", "--no-legend",
        ]);
        assert!(matches!(&a.input, Input::Json(p) if p == Path::new("charts.json")));
        assert_eq!(a.count, Some(250));
        assert_eq!(a.config, Some(PathBuf::from("opts.json")));
        assert_eq!(a.out, Some(PathBuf::from("scripts")));
        assert_eq!(a.save, Some(PathBuf::from("fig.png")));
        assert_eq!(a.python.as_deref(), Some("py3"));
        assert!(a.run);
        assert!(!a.legend);
    }

    #[test]
    fn defaults_without_flags() {
        let a = args(&["charts.json"]);
        assert_eq!(a.count, None);
        assert!(!a.run);
        assert!(a.legend);
        assert!(output_dir(&a).is_none());
    }

    #[test]
    fn help_returns_none() {
        assert!(parse(&["--help"]).unwrap().is_none());
        assert!(parse(&["data.json", "-h"]).unwrap().is_none());
    }

    #[test]
    fn non_positive_count_is_invalid_argument() {
        for bad in ["0", "-3"] {
            let msg = error(&["data.json", "--count", bad]);
            assert!(msg.contains("invalid argument"), "{bad}: {msg}");
        }
        assert!(error(&["data.json", "--count", "many"]).contains("expects an integer"));
        assert!(error(&["data.json", "--count"]).contains("--count needs a value"));
    }

    #[test]
    fn bare_file_dispatched_on_extension() {
        let a = args(&["trace.CSV", "--column", "distance"]);
        match &a.input {
            Input::Csv { path, column } => {
                assert_eq!(path, Path::new("trace.CSV"));
                assert_eq!(column, "distance");
            }
            Input::Json(_) => panic!("csv file parsed as json"),
        }

        let a = args(&["charts.json"]);
        assert!(matches!(&a.input, Input::Json(p) if p == Path::new("charts.json")));

        // anything that is not .csv is read as descriptors
        let a = args(&["charts.txt"]);
        assert!(matches!(&a.input, Input::Json(_)));
    }

    #[test]
    fn json_and_csv_together_are_rejected() {
        let msg = error(&["--json", "a.json", "--csv", "b.csv", "--column", "v"]);
        assert!(msg.contains("not both"), "{msg}");

        let msg = error(&["a.json", "--csv", "b.csv", "--column", "v"]);
        assert!(msg.contains("not both"), "{msg}");
    }

    #[test]
    fn csv_requires_column() {
        assert!(error(&["--csv", "b.csv"]).contains("--column"));
        assert!(error(&["b.csv"]).contains("--column"));
    }

    #[test]
    fn missing_or_extra_inputs_are_rejected() {
        assert!(error(&[]).contains("no input given"));
        assert!(error(&["a.json", "b.json"]).contains("unexpected argument b.json"));
        assert!(error(&["a.json", "--verbose"]).contains("unknown option --verbose"));
    }

    #[test]
    fn run_defaults_output_dir_to_plots() {
        assert_eq!(output_dir(&args(&["a.json", "--run"])), Some(PathBuf::from("plots")));
        assert_eq!(output_dir(&args(&["a.json", "--run", "--out", "scripts"])), Some(PathBuf::from("scripts")));
        assert_eq!(output_dir(&args(&["a.json", "--out", "scripts"])), Some(PathBuf::from("scripts")));
    }
}

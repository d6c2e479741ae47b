use std::fs;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::Parser;
use rayon::prelude::*;

use cmake_lint::cli::{Cli, ColorChoice};
use cmake_lint::config::{RcConfig, RcResolver, RealFileSystem};
use cmake_lint::error::CMakeLintError;
use cmake_lint::filter::{parse_directives, Directive};
use cmake_lint::linter::{LintOptions, Linter};
use cmake_lint::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use cmake_lint::rules::Category;
use cmake_lint::scanner::{expand_paths, ExcludeFilter, ListfileScanner};
use cmake_lint::verdict::{FileReport, Verdict};
use cmake_lint::{EXIT_SUCCESS, EXIT_USAGE_ERROR};

const DEFAULT_LISTFILE: &str = "CMakeLists.txt";

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => std::process::exit(exit_for_parse_error(&e)),
    };
    std::process::exit(run(&cli));
}

fn exit_for_parse_error(error: &clap::Error) -> i32 {
    let _ = error.print();
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
        _ => EXIT_USAGE_ERROR,
    }
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_USAGE_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> cmake_lint::Result<i32> {
    // An empty --filter just lists the categories, like --help for checks.
    if cli.filter.as_deref() == Some("") {
        print_categories();
        return Ok(EXIT_SUCCESS);
    }

    // 1. Load configuration
    let rc = load_rc_config(cli)?;

    // 2. Merge CLI flags over configuration values
    let options = effective_options(cli, rc.as_ref())?;
    let quiet = cli.quiet || rc.as_ref().is_some_and(|rc| rc.quiet);
    let layers = filter_layers(cli, rc.as_ref())?;

    // 3. Expand files and directories
    let files = collect_files(cli)?;

    // 4. Lint each file (parallel with rayon); reports keep input order
    let mut linter = Linter::new(options);
    for layer in layers {
        linter = linter.with_filter_layer(layer);
    }
    let outcomes: Vec<_> = files.par_iter().map(|path| lint_file(&linter, path)).collect();

    // 5. Aggregate the verdict
    let mut verdict = Verdict::new();
    for outcome in outcomes {
        match outcome {
            Ok(report) => verdict.push_report(report),
            Err(e) => {
                eprintln!("Error: {e}");
                verdict.record_usage_error();
            }
        }
    }

    // 6. Render
    let rendered = format_reports(cli, verdict.reports())?;
    print!("{rendered}");
    let total = verdict.total_errors();
    if total > 0 || !quiet {
        eprintln!("Total Errors: {total}");
    }

    Ok(verdict.exit_code())
}

fn print_categories() {
    for category in Category::ALL {
        eprintln!("  {category}");
    }
}

fn load_rc_config(cli: &Cli) -> cmake_lint::Result<Option<RcConfig>> {
    let resolver = RcResolver::new(RealFileSystem);
    match cli.config.as_deref() {
        Some("None") => Ok(None),
        Some(path) => resolver.load(Some(Path::new(path))),
        None => resolver.load(None),
    }
}

fn effective_options(cli: &Cli, rc: Option<&RcConfig>) -> cmake_lint::Result<LintOptions> {
    let defaults = LintOptions::default();
    let spaces = cli
        .spaces
        .or(rc.and_then(|rc| rc.spaces))
        .unwrap_or(defaults.spaces);
    if spaces == 0 {
        return Err(CMakeLintError::Usage(
            "Indentation unit must be at least 1 space".to_string(),
        ));
    }
    let linelength = cli
        .linelength
        .or(rc.and_then(|rc| rc.linelength))
        .unwrap_or(defaults.linelength);
    Ok(LintOptions { spaces, linelength })
}

fn filter_layers(cli: &Cli, rc: Option<&RcConfig>) -> cmake_lint::Result<Vec<Vec<Directive>>> {
    let mut layers = Vec::new();
    if let Some(spec) = rc.and_then(|rc| rc.filter.as_deref()) {
        layers.push(parse_directives(spec).map_err(|e| CMakeLintError::Usage(e.to_string()))?);
    }
    if let Some(spec) = cli.filter.as_deref() {
        layers.push(parse_directives(spec).map_err(|e| CMakeLintError::Usage(e.to_string()))?);
    }
    Ok(layers)
}

fn collect_files(cli: &Cli) -> cmake_lint::Result<Vec<PathBuf>> {
    if cli.files.is_empty() {
        let default = PathBuf::from(DEFAULT_LISTFILE);
        if default.is_file() {
            return Ok(vec![default]);
        }
        return Err(CMakeLintError::Usage("No files were specified!".to_string()));
    }

    let filter = ExcludeFilter::new(&cli.exclude)?;
    let scanner = ListfileScanner::new(filter);
    let expanded = expand_paths(&cli.files, &scanner)?;
    for path in &expanded.skipped {
        println!("Ignoring file: {}", path.display());
    }
    Ok(expanded.files)
}

fn lint_file(linter: &Linter, path: &Path) -> cmake_lint::Result<FileReport> {
    let text = fs::read_to_string(path).map_err(|source| CMakeLintError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(linter.lint_text(path, &text))
}

fn format_reports(cli: &Cli, reports: &[FileReport]) -> cmake_lint::Result<String> {
    let color_mode = color_choice_to_mode(cli.color);
    match cli.format {
        OutputFormat::Text => TextFormatter::new(color_mode).format(reports),
        OutputFormat::Json => JsonFormatter.format(reports),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

//! tidemark CLI - render a Markdown file to an HTML fragment or page

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use simplelog::{ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger};

use tidemark::{ErrorReporter, LoadError, Page, PageOptions, ReportError};

/// Exit status when an error is raised while reporting another one.
const EXIT_NESTED_ERROR: u8 = 70;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Markdown file to render; reads stdin when absent or `-`
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Wrap the fragment in a complete HTML document
    #[arg(short, long)]
    standalone: bool,
    /// Site title shown before the page title (with --standalone)
    #[arg(long, value_name = "TITLE", default_value = "My Website")]
    site_title: String,
    /// Document language (with --standalone)
    #[arg(long, value_name = "LANG", default_value = "en")]
    lang: String,
    /// Also write the log to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn init_logger(level: log::LevelFilter, log_file: Option<&Path>) -> io::Result<()> {
    let mut loggers = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) as Box<dyn SharedLogger>];
    if let Some(path) = log_file {
        loggers.push(WriteLogger::new(level, Config::default(), File::create(path)?));
    }
    // Fails only if a logger is already installed.
    let _ = CombinedLogger::init(loggers);
    Ok(())
}

/// Render the requested page; nothing is written until this succeeds.
fn render(cli: &Cli) -> Result<String, LoadError> {
    let options = PageOptions::default()
        .with_site_title(&cli.site_title)
        .with_lang(&cli.lang);
    let mut page = Page::new(options);

    match cli.file.as_deref() {
        Some(path) if path != Path::new("-") => tidemark::load_into_page(path, &mut page)?,
        _ => {
            let stdin = Path::new("-");
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .map_err(|source| LoadError::SourceNotFound {
                    path: stdin.to_path_buf(),
                    source,
                })?;
            let rendered = tidemark::load_bytes(stdin, &buf, &mut page)?;
            page.push_content(&rendered.html);
        }
    }

    Ok(if cli.standalone {
        page.finish()
    } else {
        page.into_content()
    })
}

fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logger(cli.verbose.log_level_filter(), cli.log_file.as_deref()) {
        eprintln!("cannot open log file: {err}");
        return ExitCode::FAILURE;
    }

    let rendered = render(&cli);

    let mut out = match open_output(cli.output.as_deref()) {
        Ok(out) => out,
        Err(err) => {
            log::error!("cannot open output: {err}");
            return ExitCode::FAILURE;
        }
    };

    match rendered {
        Ok(html) => match out.write_all(html.as_bytes()).and_then(|()| out.flush()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                log::error!("cannot write output: {err}");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            let reporter = ErrorReporter::new();
            match reporter.report(&err, &mut out) {
                Ok(()) => ExitCode::FAILURE,
                Err(ReportError::Nested { .. }) => ExitCode::from(EXIT_NESTED_ERROR),
                Err(report_err) => {
                    log::error!("{report_err}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

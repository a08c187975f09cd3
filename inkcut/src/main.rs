use std::{
    fs::File,
    io::{BufWriter, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use inkcut::{
    collect_font_files, extract_files, format_grid, write_labels, write_rows, Error, Font,
    Split, Summary,
};
use inkgrid::{extract_font, Charset, FillRule, GridConfig};

#[derive(clap::Parser, Debug)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

/// Settings that affect the produced scores.
#[derive(clap::Args, Debug)]
struct GridArgs {
    /// Characters to sample, as hex code points or ranges such as
    /// U+0041-005A,61-7A (default: printable ASCII, 21-7E)
    #[arg(long)]
    unicodes: Option<String>,
    /// Size, in pixels per em, at which glyphs are rendered
    #[arg(long, default_value_t = GridConfig::DEFAULT_PPEM)]
    ppem: f32,
    /// Score of a fully covered cell
    #[arg(long, default_value_t = GridConfig::DEFAULT_SCALE)]
    scale: u32,
    /// Maximum error when flattening curves, in rendered units
    #[arg(long, default_value_t = GridConfig::DEFAULT_TOLERANCE)]
    tolerance: f64,
    /// Resolve overlapping contours with the even-odd rule instead of
    /// non-zero winding
    #[arg(long)]
    even_odd: bool,
    /// Limit scores to the range 0..=scale
    #[arg(long)]
    clamp: bool,
}

impl GridArgs {
    fn config(&self) -> Result<GridConfig, Error> {
        if !(self.ppem.is_finite() && self.ppem > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "--ppem must be positive, got {}",
                self.ppem
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "--tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        Ok(GridConfig {
            scale: self.scale,
            fill_rule: if self.even_odd {
                FillRule::EvenOdd
            } else {
                FillRule::NonZero
            },
            clamp: self.clamp,
            ppem: self.ppem,
            tolerance: self.tolerance,
        })
    }

    fn charset(&self) -> Result<Charset, Error> {
        match &self.unicodes {
            Some(unicodes) => Ok(Charset::parse(unicodes)?),
            None => Ok(Charset::printable_ascii()),
        }
    }
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Write a feature row for every supported character of a set of fonts
    Extract {
        #[command(flatten)]
        grid: GridArgs,
        /// File receiving training rows (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Send the rows of every Nth font file to the holdout file
        #[arg(long, requires = "holdout_output")]
        holdout: Option<NonZeroUsize>,
        /// File receiving holdout rows
        #[arg(long, requires = "holdout")]
        holdout_output: Option<PathBuf>,
        /// File receiving the label table, one `code_point,char` per line
        #[arg(long)]
        labels: Option<PathBuf>,
        /// Log the path of each font file as it is processed
        #[arg(long)]
        print_paths: bool,
        /// Font files, or directories containing them (may use glob syntax)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the score grid of every supported character of a font
    Show {
        #[command(flatten)]
        grid: GridArgs,
        /// Font file to inspect
        file: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    use clap::Parser as _;
    let args = Args::parse_from(wild::args());

    let result = match args.command {
        Command::Extract {
            grid,
            output,
            holdout,
            holdout_output,
            labels,
            print_paths,
            files,
        } => run_extract(
            &grid,
            &files,
            Outputs {
                train: output,
                holdout: holdout.zip(holdout_output),
                labels,
            },
            print_paths,
        ),
        Command::Show { grid, file } => run_show(&grid, &file),
    };
    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

struct Outputs {
    train: Option<PathBuf>,
    holdout: Option<(NonZeroUsize, PathBuf)>,
    labels: Option<PathBuf>,
}

fn run_extract(
    grid: &GridArgs,
    inputs: &[PathBuf],
    outputs: Outputs,
    print_paths: bool,
) -> Result<(), Error> {
    let config = grid.config()?;
    let charset = grid.charset()?;
    let files = collect_font_files(inputs)?;
    if files.is_empty() {
        return Err(Error::NoFonts);
    }

    let interval = outputs.holdout.as_ref().map(|(n, _)| *n);
    let (mut train_paths, mut holdout_paths) = (Vec::new(), Vec::new());
    for (index, path) in files.into_iter().enumerate() {
        match Split::for_file(index, interval) {
            Split::Train => train_paths.push(path),
            Split::Holdout => holdout_paths.push(path),
        }
    }

    let train = extract_files(&train_paths, &charset, &config, print_paths);
    match &outputs.train {
        Some(path) => write_to_file(path, |out| write_rows(out, &train))?,
        None => write_to_stdout(|out| write_rows(out, &train))?,
    };
    let mut summary = Summary::new(train_paths.len(), &train);

    if let Some((_, path)) = &outputs.holdout {
        let holdout = extract_files(&holdout_paths, &charset, &config, print_paths);
        write_to_file(path, |out| write_rows(out, &holdout))?;
        let holdout_summary = Summary::new(holdout_paths.len(), &holdout);
        log::info!(
            "holdout: {} rows from {} faces",
            holdout_summary.rows,
            holdout_summary.faces
        );
        summary += holdout_summary;
    }

    if let Some(path) = &outputs.labels {
        write_to_file(path, |out| write_labels(out, &charset))?;
    }

    log::info!(
        "{} rows from {} faces in {} files ({} unreadable files, {} unmapped, {} failed)",
        summary.rows,
        summary.faces,
        summary.files,
        summary.unreadable,
        summary.unsupported,
        summary.failed
    );
    Ok(())
}

fn run_show(grid: &GridArgs, path: &Path) -> Result<(), Error> {
    let config = grid.config()?;
    let charset = grid.charset()?;
    let font = Font::new(path)?;
    write_to_stdout(|out| {
        for index in 0..font.count() {
            let Some(source) = font.source(index, config.ppem, config.tolerance) else {
                continue;
            };
            let rows = extract_font(&source, &charset, &config);
            writeln!(out, "[{}]", rows.name)?;
            for row in &rows.rows {
                writeln!(out, "{}\n", format_grid(row, &charset))?;
            }
        }
        Ok(())
    })
}

fn write_to_file<T>(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<T>,
) -> Result<T, Error> {
    let io_error = |source| Error::Io {
        path: path.to_owned(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(io_error)?);
    let result = write(&mut out).map_err(io_error)?;
    out.flush().map_err(io_error)?;
    Ok(result)
}

fn write_to_stdout<T>(
    write: impl FnOnce(&mut BufWriter<std::io::StdoutLock<'static>>) -> std::io::Result<T>,
) -> Result<T, Error> {
    let io_error = |source| Error::Io {
        path: PathBuf::from("<stdout>"),
        source,
    };
    let mut out = BufWriter::new(std::io::stdout().lock());
    let result = write(&mut out).map_err(io_error)?;
    out.flush().map_err(io_error)?;
    Ok(result)
}

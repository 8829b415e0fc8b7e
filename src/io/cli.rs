//! Command-line interface for pattern generation and batch symmetry classification

use crate::algorithm::parameters::GenerationParameters;
use crate::algorithm::session::KolamSession;
use crate::algorithm::strategies::SymmetryStrategy;
use crate::analysis::remote::{SymmetryAnalysis, SymmetryAnalyzer};
use crate::analysis::{ClassifierThresholds, LocalSymmetryClassifier};
use crate::io::configuration::{
    DEFAULT_CANVAS_SIZE, DEFAULT_DEPTH, DEFAULT_GRID_SIZE, DEFAULT_LINE_THICKNESS,
    DEFAULT_MOTIF_SIZE, DEFAULT_SEED, DEFAULT_TILE_SPACING, GIF_FRAME_DELAY_MS, OUTPUT_SUFFIX,
};
use crate::io::error::{KolamError, Result, invalid_parameter};
use crate::io::image::{export_png, is_supported_image, render_settled, scaled_canvas_size};
use crate::io::progress::ProgressManager;
use crate::io::visualization::TransitionCapture;
use crate::render::{Palette, Theme};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "kolam")]
#[command(
    author,
    version,
    about = "Generate Kolam patterns and classify the symmetry of images"
)]
/// Command-line arguments
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a pattern and save it as PNG (and optionally as an animated GIF)
    Generate(GenerateArgs),
    /// Classify the symmetry of an image or of every image in a directory
    Classify(ClassifyArgs),
}

/// Arguments of `kolam generate`
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Symmetry strategy (8way, 4way, vertical, horizontal, diagonal, recursive, fractal, fibonacci)
    #[arg(short = 't', long, default_value = "8way")]
    pub strategy: SymmetryStrategy,

    /// Tiles along one side of the lattice (5-9)
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid: usize,

    /// Distance between grid points in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_SPACING)]
    pub spacing: f64,

    /// Stroke width in pixels
    #[arg(long, default_value_t = DEFAULT_LINE_THICKNESS)]
    pub thickness: f64,

    /// Depth of recursive motifs (1-5)
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    pub depth: u8,

    /// Size of fractal motifs in pixels
    #[arg(long, default_value_t = DEFAULT_MOTIF_SIZE)]
    pub pattern_size: f64,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Canvas side in pixels
    #[arg(short, long, default_value_t = DEFAULT_CANVAS_SIZE)]
    pub canvas: u32,

    /// Export scale applied to the canvas and every size parameter
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,

    /// Colour theme (light or dark)
    #[arg(long, default_value = "light")]
    pub theme: Theme,

    /// Number of patterns generated in a row; the last one is exported
    #[arg(short = 'n', long, default_value_t = 1)]
    pub generations: u32,

    /// Output PNG path [default: <strategy>_kolam.png]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the transitions as an animated GIF to this path
    #[arg(short, long, value_name = "GIF")]
    pub animate: Option<PathBuf>,
}

impl GenerateArgs {
    /// Generation parameters described by these arguments
    pub const fn parameters(&self) -> GenerationParameters {
        GenerationParameters {
            grid_size: self.grid,
            tile_spacing: self.spacing,
            strategy: self.strategy,
            line_thickness: self.thickness,
            depth: self.depth,
            motif_size: self.pattern_size,
            canvas_size: self.canvas,
        }
    }

    /// PNG path to write, named after the strategy unless `--output` was given
    ///
    /// Derived names carry the generated-output suffix so that `classify
    /// --skip-generated` can tell them apart from source images.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!("{}{OUTPUT_SUFFIX}.png", self.strategy.key()))
        })
    }
}

/// Arguments of `kolam classify`
#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Image file or directory of images (PNG or JPEG)
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// JSON file overriding classifier thresholds
    #[arg(long, value_name = "JSON")]
    pub thresholds: Option<PathBuf>,

    /// Skip files named like `generate` output (stem ending in `_kolam`)
    #[arg(long)]
    pub skip_generated: bool,
}

/// Classification result for one file
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    /// File that was classified
    pub path: PathBuf,
    /// Verdict
    pub analysis: SymmetryAnalysis,
}

impl FileReport {
    /// One-line JSON rendering of the report
    pub fn to_json(&self) -> serde_json::Value {
        let analysis = &self.analysis;
        let scores = analysis.scores.map(|s| {
            serde_json::json!({
                "horizontal": s.horizontal,
                "vertical": s.vertical,
                "diagonal1": s.diagonal_main,
                "diagonal2": s.diagonal_anti,
                "rotational4": s.rotational_4,
                "rotational8": s.rotational_8,
                "combined4WayMirror": s.combined_mirror,
            })
        });
        serde_json::json!({
            "file": self.path.display().to_string(),
            "symmetryType": analysis.label.as_str(),
            "confidence": analysis.confidence,
            "method": analysis.method.to_string(),
            "symmetryScores": scores,
        })
    }

    /// The JSON report encoded as a single line
    ///
    /// # Errors
    ///
    /// Returns `ReportEncoding` if the report cannot be serialised
    pub fn to_json_line(&self) -> Result<String> {
        serde_json::to_string(&self.to_json()).map_err(|e| KolamError::ReportEncoding {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Runs the selected command with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a processor for parsed arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = (!cli.quiet).then(ProgressManager::new);
        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the command
    ///
    /// # Errors
    ///
    /// Returns an error if parameters are invalid or any file operation fails
    pub fn process(&mut self) -> Result<()> {
        match &self.cli.command {
            Command::Generate(args) => {
                let args = args.clone();
                self.generate(&args)
            }
            Command::Classify(args) => {
                let args = args.clone();
                let reports = self.classify(&args)?;
                Self::print_reports(&reports)
            }
        }
    }

    /// Generate and export a pattern
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parameters fail validation
    /// - Rendering at the requested scale is impossible
    /// - Writing the PNG or GIF fails
    pub fn generate(&mut self, args: &GenerateArgs) -> Result<()> {
        let start_time = Instant::now();
        scaled_canvas_size(args.canvas, args.scale)?;
        let palette = Palette::for_theme(args.theme);
        let mut session = KolamSession::new(args.parameters(), palette, args.seed)?;
        let generations = args.generations.max(1);
        let mut capture = args.animate.as_ref().map(|_| TransitionCapture::new());

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(generations as usize);
        }

        for index in 0..generations as usize {
            let generation = *session.generate()?;
            let frames = session.frames_per_transition() as usize;
            let name = format!("{} #{}", generation.mode.strategy(), generation.sequence);

            if let Some(ref mut pm) = self.progress_manager {
                pm.start_task(index, &name, frames);
            }

            if let Some(capture) = capture.as_mut() {
                let side = args.canvas;
                let mut progress = self.progress_manager.as_mut();
                capture.record_transition(&mut session, side, side, |drawn| {
                    if let Some(pm) = progress.as_deref_mut() {
                        pm.update_task(index, drawn);
                    }
                })?;
            } else {
                session.finish();
            }

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_task(index, &format!("limit {:.2}", generation.limit));
            }
        }

        let image = render_settled(&session, args.scale)?;
        let output = args.output_path();
        export_png(&image, &output)?;
        tracing::info!(
            path = %output.display(),
            side = image.width(),
            "exported pattern"
        );

        if let (Some(capture), Some(path)) = (&capture, &args.animate) {
            capture.export_gif(path, GIF_FRAME_DELAY_MS)?;
            tracing::info!(
                path = %path.display(),
                frames = capture.frame_count(),
                "exported animation"
            );
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }
        tracing::debug!(elapsed_ms = start_time.elapsed().as_millis(), "generation finished");
        Ok(())
    }

    /// Classify every target image
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The target is neither a supported image nor a directory
    /// - The thresholds file cannot be loaded
    /// - A file cannot be read
    pub fn classify(&mut self, args: &ClassifyArgs) -> Result<Vec<FileReport>> {
        let thresholds = match &args.thresholds {
            Some(path) => ClassifierThresholds::from_json_file(path)?,
            None => ClassifierThresholds::default(),
        };
        let analyzer = SymmetryAnalyzer::new(LocalSymmetryClassifier::new(thresholds));
        let files = Self::collect_files(&args.target, args.skip_generated)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut reports = Vec::with_capacity(files.len());
        for (index, path) in files.iter().enumerate() {
            let name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_task(index, &name, 2);
            }

            let bytes = std::fs::read(path).map_err(|e| KolamError::FileSystem {
                path: path.clone(),
                operation: "read image",
                source: e,
            })?;
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_task(index, 1);
            }

            let analysis = analyzer.analyze(&bytes);
            tracing::debug!(file = %name, label = %analysis.label, "classified");
            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_task(index, analysis.label.as_str());
            }
            reports.push(FileReport {
                path: path.clone(),
                analysis,
            });
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }
        Ok(reports)
    }

    /// Image files named by `target`, sorted
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `target` is not a supported image or a
    /// directory, and `FileSystem` if the directory cannot be listed
    pub fn collect_files(target: &Path, skip_generated: bool) -> Result<Vec<PathBuf>> {
        if target.is_file() {
            if is_supported_image(target) {
                Ok(vec![target.to_path_buf()])
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"must be a PNG or JPEG image",
                ))
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| KolamError::FileSystem {
                path: target.to_path_buf(),
                operation: "read directory",
                source: e,
            })?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if path.is_file()
                    && is_supported_image(&path)
                    && !(skip_generated && Self::is_generated_output(&path))
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or a directory",
            ))
        }
    }

    fn is_generated_output(path: &Path) -> bool {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
    }

    // Reports are the command's output, so they go to stdout
    #[allow(clippy::print_stdout)]
    fn print_reports(reports: &[FileReport]) -> Result<()> {
        for report in reports {
            println!("{}", report.to_json_line()?);
        }
        Ok(())
    }
}

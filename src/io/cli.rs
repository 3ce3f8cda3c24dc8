//! Command-line interface for turning depth maps into autostereograms

use crate::io::configuration::{
    DEFAULT_SEED, DEFAULT_TILE_SIZE, DEMO_OUTPUT_STEM, DEMO_SIZE, OUTPUT_EXTENSION,
    OUTPUT_SUFFIX, SUPPORTED_EXTENSIONS,
};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::image::{export_canvas, load_depth_map, load_tile};
use crate::io::progress::ProgressManager;
use crate::stereogram::demo::demo_depth_map;
use crate::stereogram::depth::DepthMap;
use crate::stereogram::generator::StereogramGenerator;
use clap::Parser;
use image::RgbImage;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "autostereogram")]
#[command(
    author,
    version,
    about = "Generate single-image autostereograms from depth maps"
)]
/// Command-line arguments for the stereogram tool
pub struct Cli {
    /// Depth map image, or a directory of depth maps
    #[arg(short, long, value_name = "PATH", required_unless_present = "demo")]
    pub depth: Option<PathBuf>,

    /// Render the built-in demo depth map instead of reading one
    #[arg(long, conflicts_with = "depth")]
    pub demo: bool,

    /// Tile image repeated as the background (random circles if omitted)
    #[arg(short, long, value_name = "PATH")]
    pub tile: Option<PathBuf>,

    /// Output file (single input only)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Random seed for reproducible synthetic tiles
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Side length of the synthetic tile in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Where a depth map comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepthSource {
    /// Decode the depth map from a file
    File(PathBuf),
    /// Use the built-in demo depth map
    Demo,
}

/// One unit of work: a depth source and the file it renders to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Depth map origin
    pub source: DepthSource,
    /// Destination of the generated stereogram
    pub output: PathBuf,
}

impl Job {
    /// Path shown in progress output
    pub fn display_path(&self) -> &Path {
        match &self.source {
            DepthSource::File(path) => path.as_path(),
            DepthSource::Demo => Path::new(DEMO_OUTPUT_STEM),
        }
    }
}

/// Orchestrates batch processing of depth maps with progress tracking
pub struct FileProcessor {
    cli: Cli,
    generator: StereogramGenerator,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the synthetic tile size is zero
    pub fn new(cli: Cli) -> Result<Self> {
        let generator =
            StereogramGenerator::new(cli.seed).with_tile_size((cli.tile_size, cli.tile_size))?;
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            generator,
            progress_manager,
        })
    }

    /// Process depth maps according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, loading, generation or export fails
    pub fn process(&mut self) -> Result<()> {
        let jobs = self.collect_jobs()?;

        if jobs.is_empty() {
            return Ok(());
        }

        let tile = self.cli.tile.as_deref().map(load_tile).transpose()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(jobs.len());
        }

        for (index, job) in jobs.iter().enumerate() {
            self.process_job(job, tile.as_ref(), index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Resolve the CLI target into jobs, dropping those whose output already exists
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The depth path is neither a file nor a directory
    /// - `--out` is combined with a directory
    /// - The directory cannot be read
    pub fn collect_jobs(&self) -> Result<Vec<Job>> {
        let jobs = if self.cli.demo {
            vec![Job {
                source: DepthSource::Demo,
                output: self.cli.out.clone().unwrap_or_else(Self::get_demo_output_path),
            }]
        } else {
            let target = self.cli.depth.as_deref().ok_or_else(|| {
                invalid_parameter("depth", &"", &"Either --depth or --demo is required")
            })?;
            self.collect_file_jobs(target)?
        };

        Ok(jobs
            .into_iter()
            .filter(|job| self.should_process(job))
            .collect())
    }

    fn collect_file_jobs(&self, target: &Path) -> Result<Vec<Job>> {
        if target.is_file() {
            let output = self
                .cli
                .out
                .clone()
                .unwrap_or_else(|| Self::get_output_path(target));
            Ok(vec![Job {
                source: DepthSource::File(target.to_path_buf()),
                output,
            }])
        } else if target.is_dir() {
            if let Some(out) = &self.cli.out {
                return Err(invalid_parameter(
                    "out",
                    &out.display(),
                    &"An explicit output path cannot be combined with a directory of depth maps",
                ));
            }

            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target)? {
                let path = entry.with_path(target)?.path();
                if Self::is_depth_candidate(&path) {
                    files.push(path);
                }
            }
            files.sort();

            Ok(files
                .into_iter()
                .map(|path| Job {
                    output: Self::get_output_path(&path),
                    source: DepthSource::File(path),
                })
                .collect())
        } else {
            Err(invalid_parameter(
                "depth",
                &target.display(),
                &"Depth path must be an image file or a directory",
            ))
        }
    }

    /// Whether a directory entry should be treated as a depth map
    ///
    /// Previously generated outputs are excluded so reruns do not feed on them.
    pub fn is_depth_candidate(path: &Path) -> bool {
        let supported = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| {
                SUPPORTED_EXTENSIONS
                    .iter()
                    .any(|supported| supported.eq_ignore_ascii_case(ext))
            });
        let is_output = path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX));

        path.is_file() && supported && !is_output
    }

    fn should_process(&self, job: &Job) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if job.output.exists() {
            // Allow print for user feedback for skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!(
                    "Skipping: {} (output exists)",
                    job.display_path().display()
                );
            }
            false
        } else {
            true
        }
    }

    fn process_job(&mut self, job: &Job, tile: Option<&RgbImage>, index: usize) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, job.display_path());
        }

        let depth: DepthMap = match &job.source {
            DepthSource::File(path) => load_depth_map(path)?,
            DepthSource::Demo => demo_depth_map(DEMO_SIZE.0, DEMO_SIZE.1),
        };

        let progress_manager = &mut self.progress_manager;
        let stereogram = self.generator.generate_with_progress(&depth, tile, |stage| {
            if let Some(pm) = progress_manager.as_mut() {
                pm.update_stage(index, stage);
            }
        })?;

        export_canvas(&stereogram, &job.output)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }

    /// Default output path for a depth map: `<stem>_stereogram.png` beside it
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            OUTPUT_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }

    /// Default output path for the demo, in the working directory
    pub fn get_demo_output_path() -> PathBuf {
        PathBuf::from(format!(
            "{DEMO_OUTPUT_STEM}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}"
        ))
    }
}

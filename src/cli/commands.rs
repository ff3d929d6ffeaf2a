use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::models::BatchSummary;
use crate::processors::BatchProcessor;
use crate::readers::discover_inputs;
use crate::settings::Settings;
use crate::utils::logging::init_logging;
use crate::utils::progress::ProgressReporter;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let mut settings = Settings::load(cli.config.as_deref())?;
    debug!("Settings: {:?}", settings);

    match cli.command {
        Commands::Fetch { url, dest_dir } => {
            if let Some(url) = url {
                settings.source_url = url;
            }
            let dest_dir = dest_dir.unwrap_or_else(|| PathBuf::from(&settings.download_dir));

            let fetcher = Fetcher::from_settings(&settings, &dest_dir)?;
            let report = fetcher.run(cli.quiet).await?;

            println!("{}", report.summary());
            println!("Files saved in: {}", fetcher.dest_dir().display());
        }

        Commands::Filter {
            root,
            region,
            outprefix,
        } => {
            let region = region.unwrap_or_else(|| settings.default_region.clone());
            let (processor, summary) =
                filter_root(&root, &region, &outprefix, &settings, cli.quiet)?;

            println!("\n{}", summary.generate_summary());
            println!("Output files in: {}", processor.output_dir().display());
            println!("Summary: {}", processor.summary_path().display());
        }
    }

    Ok(())
}

/// Filter every input under `root` and write the summary report.
///
/// Fails only when the input directory is missing, holds no matching files,
/// or the summary itself cannot be written.
pub fn filter_root(
    root: &Path,
    region: &str,
    out_prefix: &str,
    settings: &Settings,
    quiet: bool,
) -> Result<(BatchProcessor, BatchSummary)> {
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    let input_dir = root.join(&settings.download_dir);
    let output_dir = root.join(&settings.output_dir);

    let inputs = discover_inputs(&input_dir)?;
    info!(
        "Filtering {} files from {} for region '{}'",
        inputs.len(),
        input_dir.display(),
        region
    );

    let processor = BatchProcessor::new(region, &output_dir).with_out_prefix(out_prefix);
    let progress = ProgressReporter::new(inputs.len() as u64, "Filtering files...", quiet);
    let summary = processor.process_all(&inputs, Some(&progress))?;

    let summary_path = processor.write_summary(&summary)?;
    info!("Summary written to {}", summary_path.display());

    Ok((processor, summary))
}

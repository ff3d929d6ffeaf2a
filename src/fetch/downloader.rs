use crate::error::Result;
use crate::fetch::links::{extract_links, file_name_for};
use crate::settings::Settings;
use crate::utils::constants::{DEFAULT_BUFFER_SIZE, USER_AGENT};
use crate::utils::progress::ProgressReporter;
use futures::StreamExt;
use reqwest::Client;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};
use url::Url;

/// Outcome of a fetch run
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    pub files: Vec<PathBuf>,
    pub total_bytes: u64,
}

impl FetchReport {
    pub fn summary(&self) -> String {
        format!(
            "Downloaded {} files ({} bytes)",
            self.files.len(),
            self.total_bytes
        )
    }
}

/// Scrapes the listing page and downloads every spreadsheet it links to.
///
/// Requests run one after another; the first failure aborts the run.
pub struct Fetcher {
    client: Client,
    listing_url: Url,
    base_url: Url,
    dest_dir: PathBuf,
}

impl Fetcher {
    pub fn new(listing_url: &str, base_url: &str, dest_dir: &Path) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            listing_url: Url::parse(listing_url)?,
            base_url: Url::parse(base_url)?,
            dest_dir: dest_dir.to_path_buf(),
        })
    }

    pub fn from_settings(settings: &Settings, dest_dir: &Path) -> Result<Self> {
        let mut builder = Client::builder().user_agent(settings.user_agent.as_str());
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            listing_url: Url::parse(&settings.source_url)?,
            base_url: Url::parse(&settings.site_base_url)?,
            dest_dir: dest_dir.to_path_buf(),
        })
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    /// GET the listing page; any non-2xx status is an error
    pub async fn fetch_listing(&self) -> Result<String> {
        debug!("GET {}", self.listing_url);
        let response = self
            .client
            .get(self.listing_url.clone())
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }

    /// Stream one resource into the destination directory.
    ///
    /// The body goes to a temporary file first and is renamed into place once
    /// complete, so a failed download never leaves a truncated file behind.
    pub async fn download(&self, url: &Url) -> Result<(PathBuf, u64)> {
        let dest = self.dest_dir.join(file_name_for(url)?);
        fs::create_dir_all(&self.dest_dir)?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;

        let mut temp = NamedTempFile::new_in(&self.dest_dir)?;
        let mut written = 0u64;
        {
            let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, temp.as_file_mut());
            let mut body = response.bytes_stream();
            while let Some(chunk) = body.next().await {
                let chunk = chunk?;
                writer.write_all(&chunk)?;
                written += chunk.len() as u64;
            }
            writer.flush()?;
        }

        // Temp files are created owner-only; downloads get regular file permissions
        #[cfg(unix)]
        {
            use crate::utils::constants::DOWNLOAD_FILE_MODE;
            use std::os::unix::fs::PermissionsExt;
            temp.as_file()
                .set_permissions(fs::Permissions::from_mode(DOWNLOAD_FILE_MODE))?;
        }

        temp.persist(&dest).map_err(|e| e.error)?;
        Ok((dest, written))
    }

    /// Download `links` in order, stopping at the first failure
    pub async fn download_all(
        &self,
        links: &[Url],
        progress: Option<&ProgressReporter>,
    ) -> Result<FetchReport> {
        let mut report = FetchReport::default();
        for url in links {
            if let Some(p) = progress {
                p.set_message(&format!("Downloading {}", url));
            }
            info!("Downloading {}", url);

            let (path, bytes) = self.download(url).await?;
            debug!("Saved {} ({} bytes)", path.display(), bytes);
            report.files.push(path);
            report.total_bytes += bytes;

            if let Some(p) = progress {
                p.increment(1);
            }
        }

        if let Some(p) = progress {
            p.finish_with_message("Download complete");
        }

        Ok(report)
    }

    /// Fetch the listing, extract its spreadsheet links and download them all
    pub async fn run(&self, silent: bool) -> Result<FetchReport> {
        info!("Fetching file listing from {}", self.listing_url);
        let spinner = ProgressReporter::new_spinner("Fetching file listing...", silent);
        let html = self.fetch_listing().await?;

        let links = extract_links(&html, &self.base_url)?;
        spinner.finish_with_message(&format!("Found {} files", links.len()));
        info!("Found {} files to download", links.len());

        let progress = ProgressReporter::new(links.len() as u64, "Downloading files...", silent);
        self.download_all(&links, Some(&progress)).await
    }
}

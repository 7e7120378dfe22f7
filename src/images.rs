/*!
 * Optional image localization collaborator.
 *
 * Embedded images reference remote URLs. When enabled, each referenced
 * image is downloaded once into the images directory and the markup is
 * rewritten to a local relative path keyed by a stable per-image
 * identifier, so re-running a publish never re-fetches or re-numbers
 * anything. Failures degrade: the remote URL stays in place.
 *
 * Localization runs before segmentation; the rewritten markup is preserved
 * verbatim by the segmenter and never reaches the translator.
 */

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use sha2::{Digest, Sha256};
use url::Url;

use crate::file_utils::FileManager;

/// Markdown image markup, alt text and URL captured
static IMAGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[([^\]]*)\]\(([^)\s]+)\)").unwrap()
});

/// Download timeout per image
const IMAGE_TIMEOUT_SECS: u64 = 60;

/// One embedded image reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// Alt text, may be empty
    pub alt: String,
    /// Remote URL
    pub url: String,
}

/// File name for a downloaded image, stable across runs.
///
/// The stem is the first 16 hex characters of the SHA-256 of the URL; the
/// extension is taken from the URL path when it has one.
fn image_file_name(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let stem: String = digest.iter().take(8).map(|byte| format!("{byte:02x}")).collect();

    let extension = Url::parse(url)
        .ok()
        .and_then(|parsed| {
            Path::new(parsed.path())
                .extension()
                .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        })
        .unwrap_or_else(|| "img".to_string());

    format!("{stem}.{extension}")
}

/// Local relative reference an image's markup is rewritten to
pub fn local_reference(descriptor: &ImageDescriptor) -> String {
    format!("/images/{}", image_file_name(&descriptor.url))
}

/// Downloads embedded images and rewrites their markup
pub struct ImageFetcher {
    /// HTTP client for downloads
    client: Client,
    /// Directory downloaded images are written to
    images_dir: PathBuf,
}

impl ImageFetcher {
    /// Create a fetcher writing into the given directory
    pub fn new(images_dir: impl Into<PathBuf>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(IMAGE_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            images_dir: images_dir.into(),
        }
    }

    /// Rewrite every image reference in `body` to its local path,
    /// downloading each image once. A failed download keeps the original
    /// remote markup and logs a warning.
    pub async fn localize(&self, body: &str) -> String {
        let mut result = String::with_capacity(body.len());
        let mut last_end = 0;

        for captures in IMAGE_REGEX.captures_iter(body) {
            let Some(whole) = captures.get(0) else { continue };
            let descriptor = ImageDescriptor {
                alt: captures[1].to_string(),
                url: captures[2].to_string(),
            };

            result.push_str(&body[last_end..whole.start()]);
            match self.fetch_once(&descriptor).await {
                Ok(local) => {
                    result.push_str(&format!("![{}]({})", descriptor.alt, local));
                }
                Err(e) => {
                    warn!("Keeping remote image {}: {e:#}", descriptor.url);
                    result.push_str(whole.as_str());
                }
            }
            last_end = whole.end();
        }

        result.push_str(&body[last_end..]);
        result
    }

    /// Download one image unless its target file already exists
    async fn fetch_once(&self, descriptor: &ImageDescriptor) -> anyhow::Result<String> {
        let local = local_reference(descriptor);
        let target = self.images_dir.join(image_file_name(&descriptor.url));

        if FileManager::file_exists(&target) {
            return Ok(local);
        }

        let response = self.client.get(&descriptor.url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        FileManager::write_bytes(&target, &bytes)?;
        Ok(local)
    }
}

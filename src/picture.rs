/// Scene image loading
///
/// Reads a dropped or picked file, sniffs its content for an image format,
/// and normalizes it to JPEG — the outbound request always declares
/// `image/jpeg`, so non-JPEG sources are re-encoded rather than mislabeled.
/// Non-image files are rejected silently: no error state, just a debug log.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use image::ImageFormat;
use tokio::task;

/// A loaded scene image: the JPEG payload for the API plus the handle the
/// renderer displays
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub jpeg: Vec<u8>,
    pub handle: Handle,
}

/// Completion of one load request
///
/// `seq` is the sequence number assigned when the load was issued; the
/// controller discards completions whose number is no longer the latest, so
/// the last issued load wins regardless of completion order. `image` is
/// `None` when the file was unreadable or not an image.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub seq: u64,
    pub image: Option<LoadedImage>,
}

/// Load a scene image from disk
pub async fn load(path: PathBuf, seq: u64) -> LoadOutcome {
    let image = read_image(&path).await;
    LoadOutcome { seq, image }
}

async fn read_image(path: &Path) -> Option<LoadedImage> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            log::debug!("ignoring unreadable file {}: {e}", path.display());
            return None;
        }
    };

    // Re-encoding is CPU-bound, keep it off the event loop
    let jpeg = task::spawn_blocking(move || to_jpeg(bytes)).await.ok()??;

    let handle = Handle::from_bytes(jpeg.clone());
    Some(LoadedImage { jpeg, handle })
}

/// Sniff the byte content and normalize it to JPEG
///
/// Returns `None` for anything that is not an image. JPEG sources pass
/// through untouched; everything else is decoded and re-encoded.
fn to_jpeg(bytes: Vec<u8>) -> Option<Vec<u8>> {
    match image::guess_format(&bytes) {
        Err(_) => {
            log::debug!("ignoring non-image file ({} bytes)", bytes.len());
            None
        }
        Ok(ImageFormat::Jpeg) => Some(bytes),
        Ok(format) => {
            let decoded = image::load_from_memory_with_format(&bytes, format).ok()?;
            // JPEG has no alpha channel, flatten first
            let rgb = image::DynamicImage::ImageRgb8(decoded.to_rgb8());

            let mut jpeg = Vec::new();
            rgb.write_to(&mut Cursor::new(&mut jpeg), ImageFormat::Jpeg)
                .ok()?;
            Some(jpeg)
        }
    }
}

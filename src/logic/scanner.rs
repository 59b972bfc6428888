use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use image::{GrayImage, ImageBuffer, Luma};
use rqrr::PreparedImage;
use rscam::{Camera, Config as CameraConfig};

/// Capture geometry used for decode attempts.
const FRAME_WIDTH: u32 = 640;
const FRAME_HEIGHT: u32 = 480;

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The scan was stopped from the UI before a code was decoded.
    #[error("scan stopped")]
    Cancelled,
    #[error("camera error: {0}")]
    Camera(String),
}

/// One-shot decode against the given V4L2 device.
///
/// Suspends until a QR code is decoded, the camera fails, or `cancel` is
/// set. The camera handle lives on the blocking task's stack, so it is
/// released on every exit path.
pub async fn decode_once(device: String, cancel: Arc<AtomicBool>) -> Result<String, ScanError> {
    tokio::task::spawn_blocking(move || decode_blocking(&device, &cancel))
        .await
        .map_err(|err| ScanError::Camera(format!("decoder task failed: {err}")))?
}

fn decode_blocking(device: &str, cancel: &AtomicBool) -> Result<String, ScanError> {
    let mut camera = Camera::new(device).map_err(|err| ScanError::Camera(err.to_string()))?;
    camera
        .start(&CameraConfig {
            interval: (1, 30),
            resolution: (FRAME_WIDTH, FRAME_HEIGHT),
            format: b"YUYV",
            ..Default::default()
        })
        .map_err(|err| ScanError::Camera(err.to_string()))?;

    loop {
        if cancel.load(Ordering::Relaxed) {
            return Err(ScanError::Cancelled);
        }
        let frame = camera
            .capture()
            .map_err(|err| ScanError::Camera(err.to_string()))?;
        if let Some(text) = decode_frame(luma_from_yuyv(&frame[..], FRAME_WIDTH, FRAME_HEIGHT)) {
            return Ok(text);
        }
    }
}

/// Extracts the Y plane from a packed YUYV frame (luma sits at the even
/// byte offsets). Short frames are zero-padded to the advertised geometry.
pub(crate) fn luma_from_yuyv(yuyv: &[u8], width: u32, height: u32) -> GrayImage {
    let mut luma: Vec<u8> = yuyv.iter().step_by(2).copied().collect();
    luma.resize((width * height) as usize, 0);
    ImageBuffer::<Luma<u8>, Vec<u8>>::from_raw(width, height, luma)
        .unwrap_or_else(|| ImageBuffer::new(width, height))
}

/// Runs one decode attempt over a grayscale frame. A grid that is detected
/// but cannot be read keeps the capture loop going.
pub(crate) fn decode_frame(gray: GrayImage) -> Option<String> {
    let mut prepared = PreparedImage::prepare(gray);
    let grids = prepared.detect_grids();
    let grid = grids.first()?;
    match grid.decode() {
        Ok((_meta, content)) => Some(content),
        Err(err) => {
            log::debug!("QR grid rejected: {err}");
            None
        }
    }
}

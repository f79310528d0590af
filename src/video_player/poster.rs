// SPDX-License-Identifier: MPL-2.0
//! FFmpeg initialization and poster frame extraction.
//!
//! A poster is the first decodable frame of a clip, shown on a card before
//! any playback session has delivered frames.

use super::decoder::extract_rgba_data;
use crate::error::{Error, Result, VideoError};
use iced::widget::image;
use std::path::Path;
use std::sync::OnceLock;

static FFMPEG_INIT: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Initializes FFmpeg once per process and silences its warnings.
///
/// Safe to call from any thread; later calls return the outcome of the first.
pub fn init_ffmpeg() -> Result<()> {
    FFMPEG_INIT
        .get_or_init(|| {
            ffmpeg_next::init().map_err(|e| e.to_string())?;

            // SAFETY: av_log_set_level is thread-safe and only affects logging
            unsafe {
                ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
            }
            Ok(())
        })
        .clone()
        .map_err(|message| Error::Video(VideoError::InitFailed(message)))
}

/// Decodes the first frame of a clip into an image handle.
///
/// Blocking; callers run it off the UI thread.
pub fn extract_poster<P: AsRef<Path>>(path: P) -> Result<image::Handle> {
    init_ffmpeg()?;

    let mut ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| VideoError::from_message(&format!("Failed to open video file: {e}")))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or(VideoError::NoVideoStream)?;
    let video_stream_index = input.index();

    let context_decoder = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| VideoError::DecodingFailed(format!("Failed to create codec context: {e}")))?;
    let mut decoder = context_decoder
        .decoder()
        .video()
        .map_err(|e| VideoError::DecodingFailed(format!("Failed to create video decoder: {e}")))?;

    let width = decoder.width();
    let height = decoder.height();
    if width == 0 || height == 0 {
        return Err(VideoError::DecodingFailed(format!(
            "Invalid video dimensions: {width}x{height}"
        ))
        .into());
    }

    let mut scaler = ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        width,
        height,
        ffmpeg_next::format::Pixel::RGBA,
        width,
        height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| VideoError::DecodingFailed(format!("Failed to create scaler: {e}")))?;

    let mut rgb_frame = ffmpeg_next::frame::Video::empty();
    for (stream, packet) in ictx.packets() {
        if stream.index() != video_stream_index {
            continue;
        }
        decoder
            .send_packet(&packet)
            .map_err(|e| VideoError::DecodingFailed(format!("Failed to send packet: {e}")))?;

        let mut decoded = ffmpeg_next::frame::Video::empty();
        if decoder.receive_frame(&mut decoded).is_ok() {
            scaler
                .run(&decoded, &mut rgb_frame)
                .map_err(|e| VideoError::DecodingFailed(format!("Failed to scale frame: {e}")))?;
            break;
        }
    }

    if rgb_frame.data(0).is_empty() {
        return Err(VideoError::DecodingFailed("Could not decode first frame".into()).into());
    }

    Ok(image::Handle::from_rgba(
        rgb_frame.width(),
        rgb_frame.height(),
        extract_rgba_data(&rgb_frame),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_ffmpeg_is_idempotent() {
        let first = init_ffmpeg();
        let second = init_ffmpeg();
        assert_eq!(first, second);
    }

    #[test]
    fn poster_of_missing_file_fails() {
        let result = extract_poster("/nonexistent/clip.mp4");
        assert!(matches!(result, Err(Error::Video(_))));
    }

    #[test]
    fn poster_of_garbage_file_fails() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("noise.mp4");
        std::fs::write(&path, [0u8; 64]).expect("failed to write file");

        assert!(extract_poster(&path).is_err());
    }
}

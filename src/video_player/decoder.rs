// SPDX-License-Identifier: MPL-2.0
//! Looping clip decoder using FFmpeg.
//!
//! Each decoder owns one clip and runs on a Tokio blocking thread, delivering
//! RGBA frames through a bounded channel. Gallery clips are muted loops, so
//! the decoder rewinds on its own when the stream ends.

use crate::error::{Error, Result, VideoError};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Represents a decoded video frame ready for display.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba_data: Arc<Vec<u8>>,

    /// Frame width in pixels.
    pub width: u32,

    /// Frame height in pixels.
    pub height: u32,

    /// Presentation timestamp in seconds.
    pub pts_secs: f64,
}

/// Commands sent to the decoder task.
#[derive(Debug, Clone, PartialEq)]
pub enum DecoderCommand {
    /// Start or resume frame delivery.
    Play,

    /// Stop sending frames, keeping the current position.
    Pause,

    /// Jump back to the first frame.
    Rewind,

    /// Change the pacing multiplier (1.0 = real time).
    SetRate(f64),

    /// Stop decoding and clean up resources.
    Stop,
}

/// Events sent from the decoder to the UI.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    /// A new frame is ready for display.
    FrameReady(DecodedFrame),

    /// An error occurred during decoding.
    Error(VideoError),
}

/// Async video decoder that runs in a Tokio blocking task.
pub struct AsyncDecoder {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,

    /// Bounded to two frames so a slow UI applies backpressure.
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl AsyncDecoder {
    /// Spawns a decoder task for the given clip.
    ///
    /// The decoder starts paused; send [`DecoderCommand::Play`] to begin.
    /// The clip is only opened on the task, so a missing or unreadable file
    /// arrives as [`DecoderEvent::Error`].
    pub fn new<P: AsRef<Path>>(video_path: P) -> Result<Self> {
        let path = video_path.as_ref().to_path_buf();

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(2);

        // FFmpeg contexts are not Send, so the whole loop lives on one blocking thread.
        tokio::task::spawn_blocking(move || {
            if let Err(e) = Self::decoder_loop_blocking(&path, command_rx, &event_tx) {
                tracing::warn!(path = %path.display(), error = %e, "decoder task failed");
                if let Error::Video(video_error) = e {
                    let _ = event_tx.blocking_send(DecoderEvent::Error(video_error));
                }
            }
        });

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    /// Sends a command to the decoder task.
    pub fn send_command(&self, command: DecoderCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| Error::Video(VideoError::Other("Decoder task is not running".into())))
    }

    /// Receives the next event from the decoder.
    ///
    /// Returns `None` once the decoder task has terminated.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }

    fn decoder_loop_blocking(
        video_path: &Path,
        mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
        event_tx: &mpsc::Sender<DecoderEvent>,
    ) -> Result<()> {
        super::poster::init_ffmpeg()?;

        let mut ictx = ffmpeg_next::format::input(&video_path)
            .map_err(|e| VideoError::from_message(&format!("Failed to open video: {e}")))?;

        let input = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or(VideoError::NoVideoStream)?;
        let video_stream_index = input.index();

        let context_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(input.parameters()).map_err(
                |e| VideoError::DecodingFailed(format!("Failed to create codec context: {e}")),
            )?;
        let mut decoder = context_decoder.decoder().video().map_err(|e| {
            VideoError::DecodingFailed(format!("Failed to create video decoder: {e}"))
        })?;

        let width = decoder.width();
        let height = decoder.height();

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

        let time_base = input.time_base();
        let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

        let mut pacing = Pacing::default();
        let mut is_playing = false;
        // Decode one frame while paused (after a rewind) so the view shows the start.
        let mut decode_single_frame = false;

        loop {
            match command_rx.try_recv() {
                Ok(DecoderCommand::Play) => {
                    is_playing = true;
                    pacing.restart();
                }
                Ok(DecoderCommand::Pause) => {
                    is_playing = false;
                    pacing.clear();
                }
                Ok(DecoderCommand::Rewind) => {
                    Self::seek_to_start(&mut ictx, &mut decoder)?;
                    pacing.restart();
                    if !is_playing {
                        decode_single_frame = true;
                    }
                }
                Ok(DecoderCommand::SetRate(rate)) => {
                    pacing.set_rate(rate);
                }
                Ok(DecoderCommand::Stop) => break,
                Err(mpsc::error::TryRecvError::Disconnected) => break,
                Err(mpsc::error::TryRecvError::Empty) => {}
            }

            if !is_playing && !decode_single_frame {
                std::thread::sleep(Duration::from_millis(10));
                continue;
            }

            let mut frame_decoded = false;
            for (stream, packet) in ictx.packets() {
                if stream.index() != video_stream_index {
                    continue;
                }

                if let Err(e) = decoder.send_packet(&packet) {
                    tracing::debug!(error = %e, "packet send failed");
                    continue;
                }

                let mut decoded_frame = ffmpeg_next::frame::Video::empty();
                if decoder.receive_frame(&mut decoded_frame).is_ok() {
                    let mut rgb_frame = ffmpeg_next::frame::Video::empty();
                    if let Err(e) = scaler.run(&decoded_frame, &mut rgb_frame) {
                        tracing::debug!(error = %e, "frame scaling failed");
                        continue;
                    }

                    let pts_secs = decoded_frame
                        .timestamp()
                        .map_or(0.0, |pts| pts as f64 * time_base_f64);

                    if is_playing {
                        if let Some(wait) = pacing.wait_for(pts_secs) {
                            std::thread::sleep(wait);
                        }
                    }

                    let decoded = DecodedFrame {
                        rgba_data: Arc::new(extract_rgba_data(&rgb_frame)),
                        width,
                        height,
                        pts_secs,
                    };

                    if event_tx
                        .blocking_send(DecoderEvent::FrameReady(decoded))
                        .is_err()
                    {
                        // Receiver gone: the subscription was dropped.
                        return Ok(());
                    }

                    frame_decoded = true;
                    decode_single_frame = false;
                    break;
                }
            }

            if !frame_decoded {
                // End of stream: clips loop.
                Self::seek_to_start(&mut ictx, &mut decoder)?;
                pacing.restart();
                decode_single_frame = false;
            }
        }

        Ok(())
    }

    fn seek_to_start(
        ictx: &mut ffmpeg_next::format::context::Input,
        decoder: &mut ffmpeg_next::decoder::Video,
    ) -> Result<()> {
        ictx.seek(0, ..0)
            .map_err(|e| VideoError::DecodingFailed(format!("Seek to start failed: {e}")))?;
        decoder.flush();
        Ok(())
    }
}

/// Wall-clock pacing of frames, scaled by the playback rate.
#[derive(Debug, Clone)]
struct Pacing {
    rate: f64,
    anchor: Option<(Instant, Option<f64>)>,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            rate: 1.0,
            anchor: None,
        }
    }
}

impl Pacing {
    fn restart(&mut self) {
        self.anchor = Some((Instant::now(), None));
    }

    fn clear(&mut self) {
        self.anchor = None;
    }

    /// Re-anchors so the new rate applies from the next frame on.
    fn set_rate(&mut self, rate: f64) {
        if rate.is_finite() && rate > 0.0 {
            self.rate = rate;
        }
        if self.anchor.is_some() {
            self.restart();
        }
    }

    /// How long to sleep before presenting the frame at `pts_secs`.
    fn wait_for(&mut self, pts_secs: f64) -> Option<Duration> {
        let (start, first_pts) = self.anchor.get_or_insert((Instant::now(), None));
        let first = *first_pts.get_or_insert(pts_secs);
        let offset = ((pts_secs - first) / self.rate).max(0.0);
        let target = *start + Duration::from_secs_f64(offset);
        target.checked_duration_since(Instant::now())
    }
}

/// Extracts RGBA data from a decoded frame, handling stride correctly.
pub(super) fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let width = frame.width();
    let height = frame.height();
    let data = frame.data(0);
    let stride = frame.stride(0);

    let mut rgba_bytes = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        let row_start = y as usize * stride;
        let row_end = row_start + (width * 4) as usize;
        rgba_bytes.extend_from_slice(&data[row_start..row_end]);
    }

    rgba_bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_reported_as_decoder_event() {
        let mut decoder =
            AsyncDecoder::new("/nonexistent/video.mp4").expect("opening is deferred to the task");
        let event = tokio::time::timeout(Duration::from_secs(5), decoder.recv_event())
            .await
            .expect("decoder should answer before timeout");
        assert!(matches!(event, Some(DecoderEvent::Error(_))));
    }

    #[tokio::test]
    async fn decoder_reports_garbage_file() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let video_path = temp_dir.path().join("broken.mp4");
        std::fs::write(&video_path, b"fake video data").expect("failed to write file");

        let mut decoder = AsyncDecoder::new(&video_path).expect("decoder starts");
        let event = tokio::time::timeout(Duration::from_secs(5), decoder.recv_event())
            .await
            .expect("decoder should answer before timeout");
        assert!(matches!(event, Some(DecoderEvent::Error(_)) | None));
    }

    #[test]
    fn pacing_scales_offsets_by_rate() {
        let mut pacing = Pacing::default();
        pacing.set_rate(2.0);
        pacing.restart();

        assert!(pacing.wait_for(10.0).is_none_or(|d| d < Duration::from_millis(5)));
        let wait = pacing.wait_for(11.0).expect("second frame is in the future");
        // One second of media at 2x is half a second of wall time.
        assert!(wait <= Duration::from_millis(500));
        assert!(wait > Duration::from_millis(400));
    }

    #[test]
    fn pacing_ignores_invalid_rates() {
        let mut pacing = Pacing::default();
        pacing.set_rate(0.0);
        pacing.set_rate(f64::NAN);
        assert_eq!(pacing.rate, 1.0);
    }
}

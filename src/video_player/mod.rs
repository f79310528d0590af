// SPDX-License-Identifier: MPL-2.0
//! Clip playback engine.
//!
//! FFmpeg decodes on Tokio blocking tasks; an iced subscription bridges the
//! decoder to the UI, and [`MediaHandle`] is what the gallery talks to.

mod decoder;
mod handle;
mod poster;
pub mod subscription;

pub use decoder::{AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent};
pub use handle::{MediaControl, MediaHandle};
pub use poster::{extract_poster, init_ffmpeg};
pub use subscription::{video_playback, DecoderCommandSender, PlaybackMessage, SessionId};

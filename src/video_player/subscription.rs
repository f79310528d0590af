// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for clip playback events.
//!
//! The subscription owns one [`AsyncDecoder`] per session and forwards UI
//! commands to it, emitting frames tagged with the session they belong to.

use super::{AsyncDecoder, DecoderCommand, DecoderEvent};
use iced::futures::SinkExt;
use iced::stream;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Identifies one playback session.
///
/// A fresh id is allocated every time a clip is mounted, so iced recreates
/// the subscription and playback starts from the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the id following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle for sending commands to the decoder from UI.
#[derive(Clone)]
pub struct DecoderCommandSender {
    tx: mpsc::UnboundedSender<DecoderCommand>,
}

impl DecoderCommandSender {
    /// Wraps a raw command channel.
    pub fn new(tx: mpsc::UnboundedSender<DecoderCommand>) -> Self {
        Self { tx }
    }

    /// Sends a command to the decoder.
    pub fn send(&self, command: DecoderCommand) -> Result<(), String> {
        self.tx
            .send(command)
            .map_err(|_| "Video decoder not running".to_string())
    }
}

impl fmt::Debug for DecoderCommandSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoderCommandSender")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

/// Messages emitted by the playback subscription.
#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    /// Decoder is up; commands can be sent through the provided sender.
    Started(DecoderCommandSender),

    /// A new frame is ready for display.
    FrameReady {
        /// RGBA pixel data.
        rgba_data: Arc<Vec<u8>>,
        /// Frame width.
        width: u32,
        /// Frame height.
        height: u32,
        /// Presentation timestamp in seconds.
        pts_secs: f64,
    },

    /// An error occurred.
    Error(String),
}

impl From<DecoderEvent> for PlaybackMessage {
    fn from(event: DecoderEvent) -> Self {
        match event {
            DecoderEvent::FrameReady(frame) => PlaybackMessage::FrameReady {
                rgba_data: frame.rgba_data,
                width: frame.width,
                height: frame.height,
                pts_secs: frame.pts_secs,
            },
            DecoderEvent::Error(error) => PlaybackMessage::Error(error.to_string()),
        }
    }
}

/// Creates a playback subscription for one session.
///
/// The decoder starts paused: the receiver of [`PlaybackMessage::Started`]
/// decides whether to play, and at which rate. Dropping the subscription
/// (by no longer returning it from `subscription()`) stops the decoder.
pub fn video_playback(
    video_path: PathBuf,
    session: SessionId,
) -> iced::Subscription<(SessionId, PlaybackMessage)> {
    iced::Subscription::run_with_id(
        session,
        stream::channel(100, move |mut output| async move {
            let mut decoder = match AsyncDecoder::new(&video_path) {
                Ok(decoder) => decoder,
                Err(e) => {
                    tracing::warn!(path = %video_path.display(), error = %e, "cannot start playback");
                    let _ = output
                        .send((session, PlaybackMessage::Error(e.to_string())))
                        .await;
                    std::future::pending::<()>().await;
                    return;
                }
            };

            let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel();
            let _ = output
                .send((
                    session,
                    PlaybackMessage::Started(DecoderCommandSender::new(cmd_tx)),
                ))
                .await;
            tracing::debug!(%session, path = %video_path.display(), "playback session started");

            loop {
                tokio::select! {
                    command = cmd_rx.recv() => {
                        let Some(command) = command else { break };
                        if let Err(e) = decoder.send_command(command) {
                            let _ = output.send((session, PlaybackMessage::Error(e.to_string()))).await;
                        }
                    }

                    event = decoder.recv_event() => {
                        let Some(event) = event else { break };
                        let _ = output.send((session, event.into())).await;
                    }
                }
            }

            let _ = decoder.send_command(DecoderCommand::Stop);
            tracing::debug!(%session, "playback session ended");

            // Keep subscription alive but idle
            std::future::pending::<()>().await;
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VideoError;

    #[test]
    fn session_ids_advance() {
        let first = SessionId::new(41);
        assert_eq!(first.next(), SessionId::new(42));
        assert_ne!(first, first.next());
    }

    #[test]
    fn command_sender_forwards_commands() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sender = DecoderCommandSender::new(tx);

        sender.send(DecoderCommand::SetRate(1.5)).expect("channel open");
        assert_eq!(rx.try_recv(), Ok(DecoderCommand::SetRate(1.5)));
    }

    #[test]
    fn command_sender_reports_closed_channel() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let sender = DecoderCommandSender::new(tx);
        assert!(sender.send(DecoderCommand::Play).is_err());
    }

    #[test]
    fn decoder_error_becomes_message() {
        let message: PlaybackMessage = DecoderEvent::Error(VideoError::NoVideoStream).into();
        assert!(matches!(message, PlaybackMessage::Error(text) if text.contains("No video stream")));
    }
}

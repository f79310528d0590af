// SPDX-License-Identifier: MPL-2.0
//! UI-side handle to a mounted clip.
//!
//! The handle is detached until its playback session reports
//! [`Started`](super::PlaybackMessage::Started), and becomes detached again
//! when the session ends. Every command sent while detached is a no-op.

use super::{DecoderCommand, DecoderCommandSender};
use iced::widget::image;

/// Playback operations the gallery issues against a clip.
pub trait MediaControl {
    fn play(&mut self);
    fn pause(&mut self);
    /// Returns to the first frame.
    fn rewind(&mut self);
    fn set_rate(&mut self, rate: f64);
}

/// Decoder connection plus the most recent frame of one clip.
#[derive(Debug, Clone, Default)]
pub struct MediaHandle {
    sender: Option<DecoderCommandSender>,
    frame: Option<image::Handle>,
    position_secs: f64,
}

impl MediaHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects the handle to a running decoder.
    pub fn attach(&mut self, sender: DecoderCommandSender) {
        self.sender = Some(sender);
    }

    /// Drops the decoder connection and the last frame.
    pub fn detach(&mut self) {
        self.sender = None;
        self.frame = None;
        self.position_secs = 0.0;
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.sender.is_some()
    }

    /// Stores a decoded frame for display.
    pub fn push_frame(&mut self, rgba_data: Vec<u8>, width: u32, height: u32, pts_secs: f64) {
        self.frame = Some(image::Handle::from_rgba(width, height, rgba_data));
        self.position_secs = pts_secs;
    }

    #[must_use]
    pub fn frame(&self) -> Option<&image::Handle> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    fn send(&self, command: DecoderCommand) {
        let Some(sender) = &self.sender else {
            return;
        };
        if let Err(e) = sender.send(command) {
            tracing::debug!(error = %e, "dropping media command");
        }
    }
}

impl MediaControl for MediaHandle {
    fn play(&mut self) {
        self.send(DecoderCommand::Play);
    }

    fn pause(&mut self) {
        self.send(DecoderCommand::Pause);
    }

    fn rewind(&mut self) {
        if self.is_mounted() {
            self.position_secs = 0.0;
        }
        self.send(DecoderCommand::Rewind);
    }

    fn set_rate(&mut self, rate: f64) {
        self.send(DecoderCommand::SetRate(rate));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn attached() -> (MediaHandle, mpsc::UnboundedReceiver<DecoderCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut handle = MediaHandle::new();
        handle.attach(DecoderCommandSender::new(tx));
        (handle, rx)
    }

    #[test]
    fn detached_handle_ignores_commands() {
        let mut handle = MediaHandle::new();
        handle.play();
        handle.pause();
        handle.rewind();
        handle.set_rate(2.0);
        assert!(!handle.is_mounted());
        assert!(handle.frame().is_none());
    }

    #[test]
    fn attached_handle_forwards_commands_in_order() {
        let (mut handle, mut rx) = attached();
        handle.play();
        handle.set_rate(0.5);
        handle.rewind();
        handle.pause();

        let received: Vec<_> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
        assert_eq!(
            received,
            vec![
                DecoderCommand::Play,
                DecoderCommand::SetRate(0.5),
                DecoderCommand::Rewind,
                DecoderCommand::Pause,
            ]
        );
    }

    #[test]
    fn closed_decoder_is_tolerated() {
        let (mut handle, rx) = attached();
        drop(rx);
        handle.play();
        assert!(handle.is_mounted());
    }

    #[test]
    fn detach_clears_frame_and_position() {
        let (mut handle, _rx) = attached();
        handle.push_frame(vec![0; 4], 1, 1, 2.5);
        assert!(handle.frame().is_some());
        assert_eq!(handle.position_secs(), 2.5);

        handle.detach();
        assert!(handle.frame().is_none());
        assert_eq!(handle.position_secs(), 0.0);
        assert!(!handle.is_mounted());
    }

    #[test]
    fn rewind_resets_position() {
        let (mut handle, _rx) = attached();
        handle.push_frame(vec![0; 4], 1, 1, 3.0);
        handle.rewind();
        assert_eq!(handle.position_secs(), 0.0);
    }
}

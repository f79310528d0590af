// SPDX-License-Identifier: MPL-2.0
//! `motion_gallery` is a desktop gallery of precomputed educational animation
//! clips built with the Iced GUI framework.
//!
//! Cards preview their clip while hovered; clicking one opens a detail view
//! with playback-rate control, a rendered formula and an explanation.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod formula;
pub mod gallery;
pub mod i18n;
pub mod icon;
pub mod ui;
pub mod video_player;

// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a single scrollable column (header, card grid, footer). The
//! detail view, when open, is stacked over the whole window.

use super::{CatalogSource, Message};
use crate::catalog::Variant;
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{column, container, scrollable, stack, text};
use iced::{Alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub source: CatalogSource,
}

/// Renders the gallery page and, above it, the detail view if one is open.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext {
        i18n,
        gallery,
        source,
    } = ctx;

    let page = scrollable(
        column![
            header(i18n, gallery, source),
            gallery.view(i18n).map(Message::Gallery),
            text(i18n.tr("gallery-footer")).size(typography::CAPTION),
        ]
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .align_x(Alignment::Center)
        .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    match gallery.modal_view(i18n) {
        Some(overlay) => stack![page, overlay.map(Message::Gallery)]
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => page.into(),
    }
}

fn header<'a>(i18n: &I18n, gallery: &Gallery, source: CatalogSource) -> Element<'a, Message> {
    let (title_key, subtitle_key) = match source {
        CatalogSource::Builtin(Variant::Classic) => {
            ("gallery-title-classic", "gallery-subtitle-classic")
        }
        CatalogSource::Builtin(Variant::AiInMotion) => ("gallery-title-ai", "gallery-subtitle-ai"),
        CatalogSource::Manifest => ("gallery-title-custom", "gallery-subtitle-custom"),
    };
    let count = gallery.catalog().len().to_string();

    container(
        column![
            text(i18n.tr(title_key)).size(typography::TITLE_LG),
            text(i18n.tr(subtitle_key)).size(typography::BODY_LG),
            text(i18n.tr_with_args("gallery-clip-count", &[("count", count.as_str())]))
                .size(typography::CAPTION),
        ]
        .spacing(spacing::XS)
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .into()
}

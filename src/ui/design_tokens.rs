// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing and size used by the gallery lives here.

## Organization

- **Palette**: Base colors and category accents
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Card, modal and glyph sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use motion_gallery::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

let gap = spacing::LG; // 24px between cards
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.34);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.78);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.9, 0.92);

    pub const PRIMARY_400: Color = Color::from_rgb(0.55, 0.5, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.45, 0.38, 0.95); // Indigo
    pub const PRIMARY_600: Color = Color::from_rgb(0.36, 0.3, 0.82);

    // Formula box accent
    pub const ACCENT_500: Color = Color::from_rgb(0.2, 0.72, 0.9);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Dimmed backdrop behind the detail panel.
    pub const BACKDROP: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;

    pub const SURFACE: f32 = 0.97;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Component Sizing
// ============================================================================

pub mod sizing {
    // Cards
    pub const CARD_WIDTH: f32 = 320.0;
    /// 16:9 preview area of a card.
    pub const CARD_MEDIA_HEIGHT: f32 = 180.0;
    pub const CARDS_PER_ROW: usize = 3;
    /// Accent line under a section heading.
    pub const SECTION_RULE_WIDTH: f32 = 96.0;

    // Detail modal
    pub const MODAL_MAX_WIDTH: f32 = 880.0;
    pub const MODAL_MEDIA_HEIGHT: f32 = 450.0;
    pub const GLYPH: f32 = 72.0;

    pub const BUTTON_HEIGHT: f32 = 32.0;
    pub const RATE_BUTTON_WIDTH: f32 = 64.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page title.
    pub const TITLE_LG: f32 = 32.0;

    /// Section headers and modal titles.
    pub const TITLE_MD: f32 = 24.0;

    /// Card titles.
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;

    /// Rendered formulas.
    pub const FORMULA: f32 = 20.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    assert!(sizing::CARD_MEDIA_HEIGHT < sizing::CARD_WIDTH);
    assert!(sizing::MODAL_MAX_WIDTH > sizing::CARD_WIDTH);
    assert!(sizing::CARDS_PER_ROW > 0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

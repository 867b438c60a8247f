// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design constants shared by the toast overlay and the demo screen.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes, including the toast capsule
- **Typography**: Font size scale
- **Border**: Stroke widths

## Examples

```
use iced_toasts::ui::design_tokens::{palette, opacity};
use iced::Color;

let shadow = Color {
    a: opacity::SHADOW,
    ..palette::BLACK
};
assert!(shadow.a < 0.1);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;

    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);

    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Drop shadow under toast capsules.
    pub const SHADOW: f32 = 0.06;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    // Icons
    pub const ICON_SM: f32 = 16.0;

    // Interactive elements
    pub const BUTTON_HEIGHT: f32 = 36.0;

    // Toast capsule
    pub const TOAST_HEIGHT: f32 = 36.0;
    pub const TOAST_MIN_WIDTH: f32 = 120.0;
    pub const TOAST_MAX_WIDTH: f32 = 360.0;

    /// Average glyph advance as a fraction of the font size, used to
    /// estimate capsule width without a text layout pass.
    pub const GLYPH_ADVANCE: f32 = 0.55;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - App name, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Most UI text, toast titles
    pub const BODY: f32 = 14.0;

    /// Caption - Hints, counters
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Medium stroke - Toast glyphs
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::MD > spacing::XS);

    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);

    assert!(sizing::TOAST_HEIGHT > sizing::ICON_SM);
    assert!(sizing::TOAST_MAX_WIDTH > sizing::TOAST_MIN_WIDTH);

    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > 0.0);
};

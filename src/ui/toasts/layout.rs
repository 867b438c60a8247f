// SPDX-License-Identifier: MPL-2.0
//! Stack geometry.
//!
//! Every toast is drawn at the same anchor (bottom-centre of the safe area)
//! and pushed back by its depth: the newest toast is at full size, the one
//! behind it is raised and shrunk a little, and everything further back
//! collapses onto a third layer so deep stacks never grow upward.

use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::{Point, Rectangle, Size};

/// Vertical lift per layer.
const LAYER_OFFSET: f32 = -10.0;
/// Scale lost per layer.
const LAYER_SHRINK: f32 = 0.1;
/// Depth at which layers stop fanning out.
const MAX_FAN_DEPTH: usize = 2;

/// Edge padding when the surface has no top inset.
pub const EDGE_PADDING: f32 = 15.0;
/// Edge padding when a top inset is present.
pub const EDGE_PADDING_INSET: f32 = 10.0;

/// Offset and scale applied to one toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackTransform {
    pub offset_y: f32,
    pub scale: f32,
}

impl StackTransform {
    pub const IDENTITY: Self = Self {
        offset_y: 0.0,
        scale: 1.0,
    };

    /// Linear interpolation towards `other`, `t` in `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            offset_y: self.offset_y + (other.offset_y - self.offset_y) * t,
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }
}

impl Default for StackTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rank of the toast at `index` counted from the frontmost one.
#[must_use]
pub fn depth_from_top(index: usize, count: usize) -> usize {
    count.saturating_sub(1).saturating_sub(index)
}

#[must_use]
pub fn offset_y(depth: usize) -> f32 {
    if depth >= MAX_FAN_DEPTH {
        LAYER_OFFSET * MAX_FAN_DEPTH as f32
    } else {
        depth as f32 * LAYER_OFFSET
    }
}

#[must_use]
pub fn scale(depth: usize) -> f32 {
    if depth >= MAX_FAN_DEPTH {
        1.0 - LAYER_SHRINK * MAX_FAN_DEPTH as f32
    } else {
        1.0 - depth as f32 * LAYER_SHRINK
    }
}

/// Transform for the toast at `index` in a stack of `count`.
#[must_use]
pub fn transform(index: usize, count: usize) -> StackTransform {
    let depth = depth_from_top(index, count);
    StackTransform {
        offset_y: offset_y(depth),
        scale: scale(depth),
    }
}

/// Padding between the stack and the surface edges.
#[must_use]
pub fn edge_padding(safe_area_top: f32) -> f32 {
    if safe_area_top <= 0.0 {
        EDGE_PADDING
    } else {
        EDGE_PADDING_INSET
    }
}

/// Unscaled capsule size for a title, clamped to the available width.
#[must_use]
pub fn capsule_size(title: &str, has_symbol: bool, available_width: f32) -> Size {
    #[allow(clippy::cast_precision_loss)]
    let text_width = title.chars().count() as f32 * typography::BODY * sizing::GLYPH_ADVANCE;
    let symbol_width = if has_symbol {
        sizing::ICON_SM + spacing::XS
    } else {
        0.0
    };
    let width = (text_width + symbol_width + spacing::MD * 2.0)
        .clamp(sizing::TOAST_MIN_WIDTH, sizing::TOAST_MAX_WIDTH)
        .min(available_width.max(0.0));

    Size::new(width, sizing::TOAST_HEIGHT)
}

/// Where a toast is drawn inside `bounds`.
///
/// `slide` is the entrance/exit/drag displacement added on top of the stack
/// offset. The scale is applied around the capsule centre.
#[must_use]
pub fn frame(
    bounds: Size,
    safe_area_top: f32,
    capsule: Size,
    transform: StackTransform,
    slide: f32,
) -> Rectangle {
    let padding = edge_padding(safe_area_top);
    let center_x = bounds.width / 2.0;
    let rest_center_y = bounds.height - padding - capsule.height / 2.0;
    let center_y = rest_center_y + transform.offset_y + slide;

    let width = capsule.width * transform.scale;
    let height = capsule.height * transform.scale;

    Rectangle::new(
        Point::new(center_x - width / 2.0, center_y - height / 2.0),
        Size::new(width, height),
    )
}

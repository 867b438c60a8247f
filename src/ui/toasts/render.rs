// SPDX-License-Identifier: MPL-2.0
//! Capsule drawing.
//!
//! Each toast is a rounded capsule on the theme background with a soft
//! double shadow, an optional vector glyph and a single line of tinted text.

use super::item::Symbol;
use super::presenter::ToastSnapshot;
use crate::ui::design_tokens::{border, opacity, palette, sizing, spacing, typography};
use iced::widget::canvas::{Frame, LineCap, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Size, Theme, Vector};

/// Shadow layers as (vertical offset, spread).
const SHADOWS: [(f32, f32); 2] = [(5.0, 5.0), (2.0, 2.0)];

/// Where the glyph and title go inside a capsule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentLayout {
    pub glyph: Option<Rectangle>,
    pub text_origin: Point,
    pub text_size: f32,
}

/// Lays out the capsule content, scaled with the capsule.
#[must_use]
pub fn content_layout(capsule: Rectangle, title: &str, has_symbol: bool) -> ContentLayout {
    let scale = capsule.height / sizing::TOAST_HEIGHT;
    let text_size = typography::BODY * scale;
    let icon = sizing::ICON_SM * scale;
    let gap = spacing::XS * scale;

    #[allow(clippy::cast_precision_loss)]
    let text_width = title.chars().count() as f32 * text_size * sizing::GLYPH_ADVANCE;
    let symbol_width = if has_symbol { icon + gap } else { 0.0 };
    let content_width = symbol_width + text_width;

    let min_x = capsule.x + spacing::MD * scale;
    let start_x = (capsule.center_x() - content_width / 2.0).max(min_x);
    let center_y = capsule.center_y();

    ContentLayout {
        glyph: has_symbol.then(|| {
            Rectangle::new(
                Point::new(start_x, center_y - icon / 2.0),
                Size::new(icon, icon),
            )
        }),
        text_origin: Point::new(start_x + symbol_width, center_y - text_size * 0.6),
        text_size,
    }
}

/// Polylines of a glyph in unit coordinates.
#[must_use]
pub fn glyph_strokes(symbol: Symbol) -> Vec<Vec<(f32, f32)>> {
    match symbol {
        Symbol::Checkmark => vec![vec![(0.15, 0.55), (0.4, 0.8), (0.85, 0.22)]],
        Symbol::Cross => vec![
            vec![(0.2, 0.2), (0.8, 0.8)],
            vec![(0.8, 0.2), (0.2, 0.8)],
        ],
        Symbol::Info => vec![vec![(0.5, 0.45), (0.5, 0.75)]],
        Symbol::Warning => vec![
            vec![(0.5, 0.08), (0.95, 0.9), (0.05, 0.9), (0.5, 0.08)],
            vec![(0.5, 0.38), (0.5, 0.62)],
        ],
        Symbol::ChevronLeft => vec![vec![(0.65, 0.15), (0.3, 0.5), (0.65, 0.85)]],
        Symbol::ChevronRight => vec![vec![(0.35, 0.15), (0.7, 0.5), (0.35, 0.85)]],
        Symbol::Bell => vec![
            vec![
                (0.15, 0.75),
                (0.25, 0.6),
                (0.25, 0.4),
                (0.35, 0.2),
                (0.5, 0.12),
                (0.65, 0.2),
                (0.75, 0.4),
                (0.75, 0.6),
                (0.85, 0.75),
                (0.15, 0.75),
            ],
            vec![(0.42, 0.88), (0.58, 0.88)],
        ],
    }
}

/// Filled dots as (x, y, radius) in unit coordinates.
fn glyph_dots(symbol: Symbol) -> &'static [(f32, f32, f32)] {
    match symbol {
        Symbol::Info => &[(0.5, 0.28, 0.07)],
        Symbol::Warning => &[(0.5, 0.76, 0.06)],
        _ => &[],
    }
}

fn glyph_outline(symbol: Symbol) -> Option<(f32, f32, f32)> {
    match symbol {
        Symbol::Info => Some((0.5, 0.5, 0.45)),
        _ => None,
    }
}

/// Draws one toast into `frame`.
pub fn toast(frame: &mut Frame, theme: &Theme, toast: &ToastSnapshot, capsule: Rectangle) {
    let radius = capsule.height / 2.0;

    for (offset_y, spread) in SHADOWS {
        let shadow = Path::rounded_rectangle(
            Point::new(capsule.x - spread / 2.0, capsule.y + offset_y - spread / 2.0),
            Size::new(capsule.width + spread, capsule.height + spread),
            (radius + spread / 2.0).into(),
        );
        frame.fill(
            &shadow,
            Color {
                a: opacity::SHADOW,
                ..palette::BLACK
            },
        );
    }

    let body = Path::rounded_rectangle(capsule.position(), capsule.size(), radius.into());
    frame.fill(&body, theme.extended_palette().background.base.color);

    let tint = toast.tint.color(theme);
    let layout = content_layout(capsule, &toast.title, toast.symbol.is_some());

    if let (Some(symbol), Some(bounds)) = (toast.symbol, layout.glyph) {
        glyph(frame, symbol, bounds, tint);
    }

    frame.fill_text(Text {
        content: toast.title.clone(),
        position: layout.text_origin,
        color: tint,
        size: layout.text_size.into(),
        ..Text::default()
    });
}

fn glyph(frame: &mut Frame, symbol: Symbol, bounds: Rectangle, color: Color) {
    let at = |(x, y): (f32, f32)| {
        bounds.position() + Vector::new(x * bounds.width, y * bounds.height)
    };
    let stroke = Stroke::default()
        .with_width(border::WIDTH_MD * bounds.width / sizing::ICON_SM)
        .with_color(color)
        .with_line_cap(LineCap::Round);

    let lines = Path::new(|builder| {
        for polyline in glyph_strokes(symbol) {
            let mut points = polyline.into_iter().map(at);
            if let Some(first) = points.next() {
                builder.move_to(first);
                for point in points {
                    builder.line_to(point);
                }
            }
        }
        if let Some((x, y, r)) = glyph_outline(symbol) {
            builder.circle(at((x, y)), r * bounds.width);
        }
    });
    frame.stroke(&lines, stroke);

    for &(x, y, r) in glyph_dots(symbol) {
        frame.fill(&Path::circle(at((x, y)), r * bounds.width), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Symbol; 7] = [
        Symbol::Checkmark,
        Symbol::Cross,
        Symbol::Info,
        Symbol::Warning,
        Symbol::ChevronLeft,
        Symbol::ChevronRight,
        Symbol::Bell,
    ];

    fn capsule(width: f32, scale: f32) -> Rectangle {
        Rectangle::new(
            Point::new(50.0, 200.0),
            Size::new(width * scale, sizing::TOAST_HEIGHT * scale),
        )
    }

    #[test]
    fn every_glyph_stays_in_unit_box() {
        for symbol in ALL {
            let strokes = glyph_strokes(symbol);
            assert!(!strokes.is_empty(), "{symbol:?} has no strokes");
            for polyline in strokes {
                assert!(polyline.len() >= 2);
                assert!(polyline
                    .iter()
                    .all(|(x, y)| (0.0..=1.0).contains(x) && (0.0..=1.0).contains(y)));
            }
        }
    }

    #[test]
    fn glyph_sits_left_of_title() {
        let rect = capsule(200.0, 1.0);
        let layout = content_layout(rect, "Copied", true);
        let glyph = layout.glyph.expect("symbol requested");

        assert!(glyph.x >= rect.x);
        assert!(glyph.x + glyph.width < layout.text_origin.x);
        assert!((glyph.center_y() - rect.center_y()).abs() < 1e-4);
    }

    #[test]
    fn text_only_has_no_glyph() {
        let layout = content_layout(capsule(200.0, 1.0), "Saved", false);
        assert!(layout.glyph.is_none());
        assert!((layout.text_size - typography::BODY).abs() < 1e-4);
    }

    #[test]
    fn content_scales_with_capsule() {
        let full = content_layout(capsule(200.0, 1.0), "Saved", true);
        let back = content_layout(capsule(200.0, 0.8), "Saved", true);

        assert!(back.text_size < full.text_size);
        let full_icon = full.glyph.map(|g| g.width).unwrap_or_default();
        let back_icon = back.glyph.map(|g| g.width).unwrap_or_default();
        assert!((back_icon - full_icon * 0.8).abs() < 1e-4);
    }

    #[test]
    fn long_titles_start_at_padding() {
        let rect = capsule(120.0, 1.0);
        let layout = content_layout(rect, &"w".repeat(80), false);
        assert!((layout.text_origin.x - (rect.x + spacing::MD)).abs() < 1e-4);
    }
}

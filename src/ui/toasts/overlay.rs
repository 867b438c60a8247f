// SPDX-License-Identifier: MPL-2.0
//! Passthrough overlay hosting the toast stack.
//!
//! The overlay is a full-size canvas stacked above the application's root
//! content. It only captures input that lands on a rendered toast, where
//! the press starts a swipe; everything else reaches the content underneath
//! untouched. Interactive toasts additionally dismiss on a tap.

use super::item::ToastId;
use super::layout;
use super::presenter::{Message, Presenter, ToastSnapshot};
use super::render;
use crate::error::{Result, ToastError};
use iced::widget::canvas::{self, Canvas, Frame, Geometry};
use iced::widget::{Action, Stack};
use iced::{mouse, touch, window, Element, Length, Point, Rectangle, Renderer, Size, Theme};

/// Travel below which a release counts as a tap.
const TAP_SLOP: f32 = 4.0;

/// The window surface the overlay is attached to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub window: window::Id,
    pub viewport: Size,
}

/// Install state of the overlay. Installed at most once.
#[derive(Debug, Default)]
pub struct OverlayHost {
    surface: Option<Surface>,
}

impl OverlayHost {
    /// Attaches the overlay to `window`.
    ///
    /// Returns `Ok(false)` when already installed; the existing surface is
    /// kept and only its viewport refreshed if the window matches.
    pub fn install(&mut self, window: window::Id, viewport: Size) -> Result<bool> {
        if self.surface.is_some() {
            self.resize(window, viewport);
            return Ok(false);
        }
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return Err(ToastError::InstallFailed(format!(
                "window reported an empty viewport ({}x{})",
                viewport.width, viewport.height
            ))
            .into());
        }
        self.surface = Some(Surface { window, viewport });
        Ok(true)
    }

    /// Tracks size changes of the hosting window. Other windows are ignored.
    pub fn resize(&mut self, window: window::Id, viewport: Size) {
        if let Some(surface) = self.surface.as_mut() {
            if surface.window == window {
                surface.viewport = viewport;
            }
        }
    }

    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.surface.is_some()
    }

    #[must_use]
    pub fn surface(&self) -> Option<Surface> {
        self.surface
    }
}

/// Where a press goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occlusion {
    /// Deliver to the content beneath the overlay.
    Forward,
    /// Captured by the toast with this id.
    Consume(ToastId),
}

/// A toast positioned inside the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Placed {
    pub snapshot: ToastSnapshot,
    pub frame: Rectangle,
}

/// Lays out `toasts` (back to front) inside `bounds`.
#[must_use]
pub fn place(toasts: &[ToastSnapshot], bounds: Size, safe_area_top: f32) -> Vec<Placed> {
    let available = bounds.width - 2.0 * layout::edge_padding(safe_area_top);
    toasts
        .iter()
        .map(|snapshot| {
            let capsule =
                layout::capsule_size(&snapshot.title, snapshot.symbol.is_some(), available);
            Placed {
                frame: layout::frame(
                    bounds,
                    safe_area_top,
                    capsule,
                    snapshot.transform,
                    snapshot.displacement,
                ),
                snapshot: snapshot.clone(),
            }
        })
        .collect()
}

/// Frontmost toast under `point`.
#[must_use]
pub fn hit(placed: &[Placed], point: Point) -> Option<&Placed> {
    placed.iter().rev().find(|toast| toast.frame.contains(point))
}

/// Hit test: presses on a toast surface are consumed, the rest forwarded.
#[must_use]
pub fn occlusion(placed: &[Placed], point: Point) -> Occlusion {
    hit(placed, point).map_or(Occlusion::Forward, |toast| {
        Occlusion::Consume(toast.snapshot.id)
    })
}

/// A press held on a toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Press {
    pub id: ToastId,
    pub origin: Point,
    pub interactive: bool,
}

impl Press {
    /// Message for releasing the press at `position`.
    #[must_use]
    pub fn release(self, position: Point) -> Message {
        if self.interactive && self.origin.distance(position) <= TAP_SLOP {
            Message::Dismiss(self.id)
        } else {
            Message::DragEnded(position)
        }
    }
}

/// Canvas program drawing the stack and routing presses.
#[derive(Debug)]
pub struct StackCanvas {
    toasts: Vec<ToastSnapshot>,
    safe_area_top: f32,
}

impl StackCanvas {
    #[must_use]
    pub fn new(toasts: Vec<ToastSnapshot>, safe_area_top: f32) -> Self {
        Self {
            toasts,
            safe_area_top,
        }
    }

    fn place(&self, bounds: Rectangle) -> Vec<Placed> {
        place(&self.toasts, bounds.size(), self.safe_area_top)
    }

    fn press(
        &self,
        state: &mut Option<Press>,
        bounds: Rectangle,
        position: Point,
    ) -> Option<Action<Message>> {
        let placed = self.place(bounds);
        let toast = hit(&placed, position)?;
        let id = toast.snapshot.id;
        *state = Some(Press {
            id,
            origin: position,
            interactive: toast.snapshot.interactive,
        });
        Some(Action::publish(Message::DragStarted { id, position }).and_capture())
    }
}

impl canvas::Program<Message> for StackCanvas {
    /// The toast being pressed, if any.
    type State = Option<Press>;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                self.press(state, bounds, position)
            }
            iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                let position = relative(*position, bounds);
                self.press(state, bounds, position)
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position })
            | iced::Event::Touch(touch::Event::FingerMoved { position, .. })
                if state.is_some() =>
            {
                let position = relative(*position, bounds);
                Some(Action::publish(Message::DragMoved(position)).and_capture())
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let press = state.take()?;
                let position = cursor
                    .position()
                    .map_or(press.origin, |position| relative(position, bounds));
                Some(Action::publish(press.release(position)).and_capture())
            }
            iced::Event::Touch(
                touch::Event::FingerLifted { position, .. }
                | touch::Event::FingerLost { position, .. },
            ) => {
                let press = state.take()?;
                let position = relative(*position, bounds);
                Some(Action::publish(press.release(position)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        for toast in self.place(bounds) {
            render::toast(&mut frame, theme, &toast.snapshot, toast.frame);
        }
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.is_some() {
            return mouse::Interaction::Grabbing;
        }
        let Some(position) = cursor.position_in(bounds) else {
            return mouse::Interaction::None;
        };
        match hit(&self.place(bounds), position) {
            Some(toast) if toast.snapshot.interactive => mouse::Interaction::Pointer,
            Some(_) => mouse::Interaction::Grab,
            None => mouse::Interaction::None,
        }
    }
}

fn relative(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

/// Wraps the application's root content with the toast overlay.
///
/// Until the overlay is installed the content is returned as is and
/// presented toasts wait in the store.
pub fn host<'a, M: 'a>(
    content: impl Into<Element<'a, M>>,
    presenter: &Presenter,
    on_message: impl Fn(Message) -> M + 'a,
) -> Element<'a, M> {
    let content = content.into();
    if !presenter.overlay().is_installed() {
        return content;
    }

    let program = StackCanvas::new(presenter.snapshots(), presenter.settings().safe_area_top);
    let layer: Element<'a, Message> = Canvas::new(program)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    Stack::new()
        .push(content)
        .push(layer.map(on_message))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toasts::item::Tint;
    use crate::ui::toasts::layout::StackTransform;
    use crate::ui::toasts::{ToastRequest, ToastTime};

    fn snapshot(title: &str, interactive: bool, index: usize, count: usize) -> ToastSnapshot {
        let item = ToastRequest::new(title)
            .interactive(interactive)
            .into_item(ToastTime::Medium);
        ToastSnapshot {
            id: item.id(),
            title: title.to_string(),
            symbol: None,
            tint: Tint::Primary,
            interactive,
            transform: layout::transform(index, count),
            displacement: 0.0,
        }
    }

    const VIEWPORT: Size = Size {
        width: 400.0,
        height: 300.0,
    };

    #[test]
    fn install_happens_once() {
        let mut host = OverlayHost::default();
        let window = window::Id::unique();

        assert!(!host.is_installed());
        assert_eq!(host.install(window, VIEWPORT), Ok(true));
        assert_eq!(host.install(window, Size::new(800.0, 600.0)), Ok(false));
        assert!(host.is_installed());
        assert_eq!(
            host.surface().map(|surface| surface.viewport),
            Some(Size::new(800.0, 600.0))
        );
    }

    #[test]
    fn empty_viewport_fails_install() {
        let mut host = OverlayHost::default();
        let result = host.install(window::Id::unique(), Size::ZERO);

        assert!(matches!(
            result,
            Err(crate::error::Error::Toast(ToastError::InstallFailed(_)))
        ));
        assert!(!host.is_installed());
    }

    #[test]
    fn resize_ignores_other_windows() {
        let mut host = OverlayHost::default();
        let main = window::Id::unique();
        host.install(main, VIEWPORT).expect("installs");

        host.resize(window::Id::unique(), Size::new(10.0, 10.0));
        assert_eq!(host.surface().map(|s| s.viewport), Some(VIEWPORT));

        host.resize(main, Size::new(500.0, 500.0));
        assert_eq!(
            host.surface().map(|s| s.viewport),
            Some(Size::new(500.0, 500.0))
        );
    }

    #[test]
    fn empty_space_is_forwarded() {
        let placed = place(&[snapshot("hi", true, 0, 1)], VIEWPORT, 0.0);
        assert_eq!(occlusion(&placed, Point::new(5.0, 5.0)), Occlusion::Forward);
    }

    #[test]
    fn interactive_toast_consumes_press() {
        let toast = snapshot("tap", true, 0, 1);
        let id = toast.id;
        let placed = place(&[toast], VIEWPORT, 0.0);
        let center = placed[0].frame.center();

        assert_eq!(occlusion(&placed, center), Occlusion::Consume(id));
    }

    #[test]
    fn default_toast_consumes_press_for_swipe() {
        let toast = snapshot("Saved", false, 0, 1);
        let id = toast.id;
        let placed = place(&[toast], VIEWPORT, 0.0);
        let center = placed[0].frame.center();

        assert_eq!(occlusion(&placed, center), Occlusion::Consume(id));
    }

    #[test]
    fn frontmost_toast_wins_overlap() {
        let back = snapshot("same width", true, 0, 2);
        let front = snapshot("same width", false, 1, 2);
        let front_id = front.id;
        let placed = place(&[back, front], VIEWPORT, 0.0);
        let center = placed[1].frame.center();

        assert!(placed[0].frame.contains(center));
        assert_eq!(occlusion(&placed, center), Occlusion::Consume(front_id));
    }

    #[test]
    fn tap_on_interactive_toast_dismisses() {
        let toast = snapshot("tap", true, 0, 1);
        let press = Press {
            id: toast.id,
            origin: Point::new(100.0, 100.0),
            interactive: true,
        };

        assert!(matches!(
            press.release(Point::new(101.0, 102.0)),
            Message::Dismiss(id) if id == toast.id
        ));
        assert!(matches!(
            press.release(Point::new(100.0, 160.0)),
            Message::DragEnded(_)
        ));
    }

    #[test]
    fn tap_on_default_toast_only_ends_drag() {
        let toast = snapshot("Saved", false, 0, 1);
        let press = Press {
            id: toast.id,
            origin: Point::new(100.0, 100.0),
            interactive: false,
        };

        assert!(matches!(
            press.release(Point::new(100.0, 100.0)),
            Message::DragEnded(_)
        ));
    }

    #[test]
    fn placement_applies_stack_transform() {
        let placed = place(
            &[snapshot("back", true, 0, 2), snapshot("back", true, 1, 2)],
            VIEWPORT,
            0.0,
        );
        assert!(placed[0].frame.width < placed[1].frame.width);
        assert!(placed[0].frame.center().y < placed[1].frame.center().y);
        assert_eq!(placed[1].snapshot.transform, StackTransform::IDENTITY);
    }
}

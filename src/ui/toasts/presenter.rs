// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Presenter` is owned by the application state and is the only writer
//! of the toast store. Code running outside the update loop submits
//! requests through a [`ToastHandle`]; they are picked up on the next tick.

use super::cell::{Cell, CellEvent, Motion, Phase};
use super::gesture::SwipeTracker;
use super::item::{Symbol, Tint, ToastId, ToastItem, ToastRequest, ToastTime};
use super::layout::{self, StackTransform};
use super::overlay::OverlayHost;
use super::store::Store;
use crate::config::{ToastConfig, FRAME_INTERVAL_MS, POLL_INTERVAL_MS};
use crate::error::{Result, ToastError};
use iced::{window, Point, Size};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Frame or polling tick.
    Tick(Instant),
    /// Dismiss a specific toast by ID (tap on an interactive toast).
    Dismiss(ToastId),
    /// A press landed on a toast.
    DragStarted { id: ToastId, position: Point },
    DragMoved(Point),
    DragEnded(Point),
}

/// Tuning values resolved from [`ToastConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub default_timing: ToastTime,
    pub max_queue: Option<usize>,
    pub dismiss_threshold: f32,
    pub motion: Motion,
    pub safe_area_top: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&ToastConfig::default())
    }
}

impl From<&ToastConfig> for Settings {
    fn from(config: &ToastConfig) -> Self {
        Self {
            default_timing: config.default_timing.unwrap_or_default(),
            max_queue: config.max_queue(),
            dismiss_threshold: config.dismiss_threshold(),
            motion: Motion {
                slide_distance: config.slide_distance(),
                duration: config.animation(),
            },
            safe_area_top: config.safe_area_top(),
        }
    }
}

/// Cloneable sender for presenting toasts from outside the update loop.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    sender: mpsc::UnboundedSender<ToastRequest>,
}

impl ToastHandle {
    /// Queues a request for the next tick.
    ///
    /// Returns `false` when the presenter no longer exists.
    pub fn present(&self, request: ToastRequest) -> bool {
        self.sender.send(request).is_ok()
    }
}

/// Render model for one toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastSnapshot {
    pub id: ToastId,
    pub title: String,
    pub symbol: Option<Symbol>,
    pub tint: Tint,
    pub interactive: bool,
    pub transform: StackTransform,
    /// Entrance/exit/drag displacement below the stacked position.
    pub displacement: f32,
}

/// Owns the active toasts and drives their cells.
#[derive(Debug)]
pub struct Presenter {
    store: Store,
    cells: HashMap<ToastId, Cell>,
    settings: Settings,
    overlay: OverlayHost,
    drag: Option<(ToastId, SwipeTracker)>,
    sender: mpsc::UnboundedSender<ToastRequest>,
    receiver: mpsc::UnboundedReceiver<ToastRequest>,
    clock: Instant,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Presenter {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            store: Store::new(),
            cells: HashMap::new(),
            settings,
            overlay: OverlayHost::default(),
            drag: None,
            sender,
            receiver,
            clock: Instant::now(),
        }
    }

    /// Returns a handle that can present toasts from async tasks.
    #[must_use]
    pub fn handle(&self) -> ToastHandle {
        ToastHandle {
            sender: self.sender.clone(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn overlay(&self) -> &OverlayHost {
        &self.overlay
    }

    /// Active toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[ToastItem] {
        self.store.toasts()
    }

    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.store.is_empty()
    }

    #[must_use]
    pub fn phase(&self, id: ToastId) -> Option<Phase> {
        self.cells.get(&id).map(Cell::phase)
    }

    /// Presents a toast. Failures are logged and swallowed.
    pub fn present(&mut self, request: ToastRequest) -> Option<ToastId> {
        match self.try_present(request) {
            Ok(id) => Some(id),
            Err(err) => {
                tracing::warn!(%err, "dropping toast");
                None
            }
        }
    }

    /// Presents a toast, reporting a full queue.
    pub fn try_present(&mut self, request: ToastRequest) -> Result<ToastId> {
        if let Some(limit) = self.settings.max_queue {
            if self.store.len() >= limit {
                return Err(ToastError::QueueOverflow { limit }.into());
            }
        }

        let now = Instant::now().max(self.clock);
        let id = self.store.present(request, self.settings.default_timing);
        let timing = self
            .store
            .get(id)
            .map_or(self.settings.default_timing, ToastItem::timing);

        self.cells.insert(
            id,
            Cell::new(
                timing.duration(),
                StackTransform::IDENTITY,
                self.settings.motion,
                now,
            ),
        );
        self.restack(now);

        if !self.overlay.is_installed() {
            tracing::debug!(%id, "toast queued before overlay install");
        }
        tracing::debug!(%id, ?timing, active = self.store.len(), "presented toast");
        Ok(id)
    }

    /// Starts the exit of a toast. Returns `false` if it is already leaving
    /// or unknown.
    pub fn dismiss(&mut self, id: ToastId, now: Instant) -> bool {
        if self.drag.as_ref().is_some_and(|(dragged, _)| *dragged == id) {
            self.drag = None;
        }
        let Some(cell) = self.cells.get_mut(&id) else {
            return false;
        };
        let started = cell.request_dismiss(now, self.settings.motion);
        if started {
            tracing::debug!(%id, "dismissing toast");
        }
        started
    }

    /// Sends every toast through the normal exit path.
    pub fn dismiss_all(&mut self, now: Instant) -> usize {
        let ids: Vec<ToastId> = self.store.toasts().iter().map(ToastItem::id).collect();
        ids.into_iter().filter(|id| self.dismiss(*id, now)).count()
    }

    /// Advances every cell to `now` and removes toasts whose exit finished.
    ///
    /// Until the overlay is installed nothing is on screen, so pending
    /// toasts hold their entrance (and their timer) back.
    pub fn tick(&mut self, now: Instant) -> Vec<(ToastId, CellEvent)> {
        self.clock = now;
        self.drain_handle();

        let installed = self.overlay.is_installed();
        let mut events = Vec::new();
        for item in self.store.toasts() {
            if let Some(cell) = self.cells.get_mut(&item.id()) {
                if !installed && cell.phase() == Phase::Pending {
                    continue;
                }
                if let Some(event) = cell.tick(now, self.settings.motion) {
                    tracing::trace!(id = %item.id(), ?event, "toast transition");
                    events.push((item.id(), event));
                }
            }
        }

        let finished: Vec<ToastId> = events
            .iter()
            .filter(|(_, event)| *event == CellEvent::ExitFinished)
            .map(|(id, _)| *id)
            .collect();
        for id in finished {
            self.remove(id, now);
        }

        events
    }

    /// Begins tracking a swipe. Toasts that are leaving cannot be grabbed.
    pub fn begin_drag(&mut self, id: ToastId, position: Point, now: Instant) -> bool {
        let draggable = self
            .cells
            .get(&id)
            .is_some_and(|cell| matches!(cell.phase(), Phase::Entering | Phase::Visible));
        if !draggable {
            return false;
        }

        let mut tracker = SwipeTracker::default();
        tracker.start(position, now);
        self.drag = Some((id, tracker));
        true
    }

    pub fn drag_to(&mut self, position: Point, now: Instant) {
        let Some((id, tracker)) = self.drag.as_mut() else {
            return;
        };
        tracker.update(position, now);
        let translation = tracker.translation_y().unwrap_or(0.0);
        if let Some(cell) = self.cells.get_mut(id) {
            cell.set_drag_offset(translation);
        }
    }

    /// Evaluates the release. Returns `true` if the toast was dismissed.
    pub fn end_drag(&mut self, position: Point, now: Instant) -> bool {
        let Some((id, mut tracker)) = self.drag.take() else {
            return false;
        };
        let Some(release) = tracker.release(position, now) else {
            return false;
        };

        if release.should_dismiss(self.settings.dismiss_threshold) {
            tracing::debug!(%id, ?release, "swipe dismissed toast");
            return self.dismiss(id, now);
        }

        if let Some(cell) = self.cells.get_mut(&id) {
            cell.snap_back(now, self.settings.motion);
        }
        false
    }

    /// Attaches the overlay to `window`. Only the first call installs.
    pub fn install(&mut self, window: window::Id, viewport: Size) -> Result<bool> {
        let installed = self.overlay.install(window, viewport)?;
        if installed {
            tracing::info!(
                ?window,
                ?viewport,
                queued = self.store.len(),
                "toast overlay installed"
            );
        }
        Ok(installed)
    }

    pub fn resize(&mut self, window: window::Id, viewport: Size) {
        self.overlay.resize(window, viewport);
    }

    /// Handles a toast message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick(now) => {
                self.tick(now);
            }
            Message::Dismiss(id) => {
                self.dismiss(id, Instant::now());
            }
            Message::DragStarted { id, position } => {
                self.begin_drag(id, position, Instant::now());
            }
            Message::DragMoved(position) => self.drag_to(position, Instant::now()),
            Message::DragEnded(position) => {
                self.end_drag(position, Instant::now());
            }
        }
    }

    /// Whether anything is moving as of the last tick.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.drag.is_some() || self.cells.values().any(|cell| cell.is_animating(self.clock))
    }

    /// How often the application should tick the presenter.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        if self.is_animating() {
            Duration::from_millis(FRAME_INTERVAL_MS)
        } else {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }

    /// Render model as of the last tick, back to front.
    #[must_use]
    pub fn snapshots(&self) -> Vec<ToastSnapshot> {
        self.store
            .toasts()
            .iter()
            .filter_map(|item| {
                let cell = self.cells.get(&item.id())?;
                Some(ToastSnapshot {
                    id: item.id(),
                    title: item.title().to_string(),
                    symbol: item.symbol(),
                    tint: item.tint(),
                    interactive: item.is_interactive(),
                    transform: cell.transform(self.clock),
                    displacement: cell.displacement(self.clock),
                })
            })
            .collect()
    }

    fn remove(&mut self, id: ToastId, now: Instant) {
        if self.store.remove(id) {
            tracing::debug!(%id, remaining = self.store.len(), "removed toast");
        }
        self.cells.remove(&id);
        if self.drag.as_ref().is_some_and(|(dragged, _)| *dragged == id) {
            self.drag = None;
        }
        self.restack(now);
    }

    fn restack(&mut self, now: Instant) {
        let count = self.store.len();
        for (index, item) in self.store.toasts().iter().enumerate() {
            if let Some(cell) = self.cells.get_mut(&item.id()) {
                cell.restack(
                    layout::transform(index, count),
                    now,
                    self.settings.motion.duration,
                );
            }
        }
    }

    fn drain_handle(&mut self) {
        while let Ok(request) = self.receiver.try_recv() {
            self.present(request);
        }
    }
}

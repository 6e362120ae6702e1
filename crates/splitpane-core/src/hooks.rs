//! Host notification hooks.

use std::fmt;

use crate::engine::SplitNotification;

type ResizeHook<M> = Box<dyn Fn(f64) -> Option<M>>;

/// Maps engine notifications to host messages.
///
/// A missing hook (or a resize hook returning `None`) suppresses that
/// notification, so a host can listen to live resizes and ignore the
/// start/end signals, or the reverse.
pub struct SplitHooks<M> {
    on_resize: Option<ResizeHook<M>>,
    on_resize_started: Option<M>,
    on_resize_ended: Option<M>,
}

impl<M> Default for SplitHooks<M> {
    fn default() -> Self {
        Self {
            on_resize: None,
            on_resize_started: None,
            on_resize_ended: None,
        }
    }
}

impl<M> SplitHooks<M> {
    /// Hooks that suppress every notification.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the new ratio on every applied resize.
    #[must_use]
    pub fn on_resize(mut self, hook: impl Fn(f64) -> Option<M> + 'static) -> Self {
        self.on_resize = Some(Box::new(hook));
        self
    }

    /// Message emitted when a drag starts.
    #[must_use]
    pub fn on_resize_started(mut self, message: M) -> Self {
        self.on_resize_started = Some(message);
        self
    }

    /// Message emitted when a drag ends or is cancelled.
    #[must_use]
    pub fn on_resize_ended(mut self, message: M) -> Self {
        self.on_resize_ended = Some(message);
        self
    }
}

impl<M: Clone> SplitHooks<M> {
    /// Translate one notification into a host message, if the host asked for it.
    pub fn dispatch(&self, notification: SplitNotification) -> Option<M> {
        match notification {
            SplitNotification::ResizeStarted => self.on_resize_started.clone(),
            SplitNotification::Resized { ratio } => {
                self.on_resize.as_ref().and_then(|hook| hook(ratio))
            }
            SplitNotification::ResizeEnded => self.on_resize_ended.clone(),
        }
    }
}

impl<M: fmt::Debug> fmt::Debug for SplitHooks<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitHooks")
            .field("on_resize", &self.on_resize.is_some())
            .field("on_resize_started", &self.on_resize_started)
            .field("on_resize_ended", &self.on_resize_ended)
            .finish()
    }
}

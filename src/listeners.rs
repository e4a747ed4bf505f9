use leptos::prelude::WindowListenerHandle;

/// Something that can be unregistered exactly once.
pub trait Detach {
    fn detach(self);
}

impl Detach for WindowListenerHandle {
    fn detach(self) {
        self.remove();
    }
}

/// The scroll and pointer-move listeners, acquired together and released together.
///
/// Dropping the pair detaches whatever is still attached.
#[derive(Debug)]
pub struct ListenerPair<H: Detach> {
    scroll: Option<H>,
    pointer: Option<H>,
}

impl<H: Detach> ListenerPair<H> {
    pub fn new(scroll: H, pointer: H) -> Self {
        Self {
            scroll: Some(scroll),
            pointer: Some(pointer),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.scroll.is_some() || self.pointer.is_some()
    }

    pub fn detach(&mut self) {
        if let Some(h) = self.scroll.take() {
            h.detach();
        }
        if let Some(h) = self.pointer.take() {
            h.detach();
        }
    }
}

impl<H: Detach> Drop for ListenerPair<H> {
    fn drop(&mut self) {
        self.detach();
    }
}

pub type ViewportListeners = ListenerPair<WindowListenerHandle>;

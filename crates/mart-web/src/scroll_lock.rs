//! # Scroll Lock
//!
//! Page-level scroll locking owned by the application shell.
//!
//! Overlays take a [`ScrollLockGuard`] from [`ScrollLock::acquire`] while
//! they are visible. The page is locked when the first guard is taken and
//! unlocked when the last one is released or dropped, so an overlay that is
//! torn down while open cannot leave the page frozen.
//!
//! Only one side menu is expected to hold the lock at a time.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::error::PlatformError;
use crate::services::browser;

/// Applies and clears the page lock styles.
pub trait BodyStyle {
    /// Stops the page behind the overlay from scrolling.
    fn apply_lock(&self) -> Result<(), PlatformError>;

    /// Restores normal page scrolling.
    fn clear_lock(&self) -> Result<(), PlatformError>;
}

/// Locks scrolling through `document.body.style`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomBodyStyle;

/// Properties written to `<body>` while locked.
const LOCK_PROPERTIES: [(&str, &str); 3] = [
    ("overflow", "hidden"),
    ("position", "fixed"),
    ("width", "100%"),
];

impl BodyStyle for DomBodyStyle {
    fn apply_lock(&self) -> Result<(), PlatformError> {
        let style = browser::body()?.style();
        for (property, value) in LOCK_PROPERTIES {
            style
                .set_property(property, value)
                .map_err(PlatformError::js)?;
        }
        Ok(())
    }

    fn clear_lock(&self) -> Result<(), PlatformError> {
        let style = browser::body()?.style();
        for (property, _) in LOCK_PROPERTIES {
            style.remove_property(property).map_err(PlatformError::js)?;
        }
        Ok(())
    }
}

struct Inner {
    holders: Cell<usize>,
    backend: Box<dyn BodyStyle>,
}

/// Shared handle to the page scroll lock.
///
/// Cloning shares the same lock.
#[derive(Clone)]
pub struct ScrollLock {
    inner: Rc<Inner>,
}

impl ScrollLock {
    /// Creates a lock driving `backend`.
    pub fn new(backend: impl BodyStyle + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                holders: Cell::new(0),
                backend: Box::new(backend),
            }),
        }
    }

    /// Creates a lock over the document body.
    #[must_use]
    pub fn for_document() -> Self {
        Self::new(DomBodyStyle)
    }

    /// Takes the lock. The page stays locked until the guard is released.
    #[must_use = "dropping the guard releases the lock immediately"]
    pub fn acquire(&self) -> ScrollLockGuard {
        let already_locked = self.is_locked();
        let holders = self.inner.holders.get() + 1;
        self.inner.holders.set(holders);
        if already_locked {
            tracing::warn!(holders, "Scroll lock taken by more than one overlay");
        } else {
            tracing::debug!("Locking page scroll");
            if let Err(e) = self.inner.backend.apply_lock() {
                tracing::warn!(error = %e, "Failed to lock page scroll");
            }
        }
        ScrollLockGuard {
            lock: Some(self.clone()),
        }
    }

    /// Whether any guard is currently held.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.inner.holders.get() > 0
    }

    fn release_one(&self) {
        let holders = self.inner.holders.get().saturating_sub(1);
        self.inner.holders.set(holders);
        if holders == 0 {
            tracing::debug!("Unlocking page scroll");
            if let Err(e) = self.inner.backend.clear_lock() {
                tracing::warn!(error = %e, "Failed to unlock page scroll");
            }
        }
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.inner.holders.get())
            .finish()
    }
}

/// Proof of holding the scroll lock. Releases on drop.
#[derive(Debug)]
pub struct ScrollLockGuard {
    lock: Option<ScrollLock>,
}

impl ScrollLockGuard {
    /// Releases the lock now.
    pub fn release(mut self) {
        self.release_inner();
    }

    fn release_inner(&mut self) {
        if let Some(lock) = self.lock.take() {
            lock.release_one();
        }
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.release_inner();
    }
}

/// Holds `lock` for as long as `active` is true.
///
/// Takes the lock on a false→true change of `active`, releases it on a
/// true→false change, and releases it when the calling component unmounts.
pub fn use_scroll_lock(active: bool, lock: &ScrollLock) {
    let slot = use_hook(|| Rc::new(RefCell::new(None::<ScrollLockGuard>)));

    let lock = lock.clone();
    let held = slot.clone();
    use_effect(use_reactive!(|active| {
        let mut held = held.borrow_mut();
        if active {
            if held.is_none() {
                *held = Some(lock.acquire());
            }
        } else if let Some(guard) = held.take() {
            guard.release();
        }
    }));

    use_drop(move || {
        if let Some(guard) = slot.borrow_mut().take() {
            guard.release();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::{NoOpMutations, ScopeId, VirtualDom};
    use std::time::Duration;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Lock,
        Unlock,
    }

    #[derive(Clone, Default)]
    struct RecordingBody {
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl BodyStyle for RecordingBody {
        fn apply_lock(&self) -> Result<(), PlatformError> {
            self.calls.borrow_mut().push(Call::Lock);
            Ok(())
        }

        fn clear_lock(&self) -> Result<(), PlatformError> {
            self.calls.borrow_mut().push(Call::Unlock);
            Ok(())
        }
    }

    struct FailingBody;

    impl BodyStyle for FailingBody {
        fn apply_lock(&self) -> Result<(), PlatformError> {
            Err(PlatformError::NoBody)
        }

        fn clear_lock(&self) -> Result<(), PlatformError> {
            Err(PlatformError::NoBody)
        }
    }

    fn recording_lock() -> (ScrollLock, Rc<RefCell<Vec<Call>>>) {
        let body = RecordingBody::default();
        let calls = body.calls.clone();
        (ScrollLock::new(body), calls)
    }

    #[test]
    fn test_acquire_and_release() {
        let (lock, calls) = recording_lock();

        let guard = lock.acquire();
        assert!(lock.is_locked());
        assert_eq!(*calls.borrow(), vec![Call::Lock]);

        guard.release();
        assert!(!lock.is_locked());
        assert_eq!(*calls.borrow(), vec![Call::Lock, Call::Unlock]);
    }

    #[test]
    fn test_drop_releases() {
        let (lock, calls) = recording_lock();

        {
            let _guard = lock.acquire();
        }

        assert!(!lock.is_locked());
        assert_eq!(*calls.borrow(), vec![Call::Lock, Call::Unlock]);
    }

    #[test]
    fn test_owner_teardown_releases() {
        struct Owner {
            _guard: Option<ScrollLockGuard>,
        }

        let (lock, calls) = recording_lock();
        let owner = Owner {
            _guard: Some(lock.acquire()),
        };
        drop(owner);

        assert!(!lock.is_locked());
        assert_eq!(calls.borrow().last(), Some(&Call::Unlock));
    }

    #[test]
    fn test_nested_holders_unlock_once() {
        let (lock, calls) = recording_lock();

        let first = lock.acquire();
        let second = lock.acquire();
        first.release();
        assert!(lock.is_locked());

        second.release();
        assert!(!lock.is_locked());
        assert_eq!(*calls.borrow(), vec![Call::Lock, Call::Unlock]);
    }

    #[test]
    fn test_repeated_cycles() {
        let (lock, calls) = recording_lock();

        for _ in 0..3 {
            lock.acquire().release();
        }

        assert_eq!(calls.borrow().len(), 6);
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_backend_failure_still_tracks_holders() {
        let lock = ScrollLock::new(FailingBody);

        let guard = lock.acquire();
        assert!(lock.is_locked());
        drop(guard);
        assert!(!lock.is_locked());
    }

    #[derive(Clone)]
    struct OpenState(Rc<Cell<bool>>);

    #[component]
    fn LockHolder(active: bool) -> Element {
        let lock = use_context::<ScrollLock>();
        use_scroll_lock(active, &lock);
        rsx! { div {} }
    }

    #[component]
    fn Shell() -> Element {
        let open = use_context::<OpenState>();
        rsx! { LockHolder { active: open.0.get() } }
    }

    fn mount(lock: &ScrollLock, open: bool) -> (VirtualDom, Rc<Cell<bool>>) {
        let state = Rc::new(Cell::new(open));
        let mut dom = VirtualDom::new(Shell)
            .with_root_context(lock.clone())
            .with_root_context(OpenState(state.clone()));
        dom.rebuild_in_place();
        (dom, state)
    }

    async fn flush(dom: &mut VirtualDom) {
        // Effects run once the dom is polled; an idle dom never resolves.
        let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        dom.render_immediate(&mut NoOpMutations);
    }

    async fn set_open(dom: &mut VirtualDom, state: &Rc<Cell<bool>>, open: bool) {
        state.set(open);
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);
        flush(dom).await;
    }

    #[tokio::test]
    async fn test_hook_unmount_while_open_releases() {
        let (lock, calls) = recording_lock();
        let (mut dom, _state) = mount(&lock, true);
        flush(&mut dom).await;

        assert!(lock.is_locked());
        assert_eq!(*calls.borrow(), vec![Call::Lock]);

        drop(dom);

        assert!(!lock.is_locked());
        assert_eq!(*calls.borrow(), vec![Call::Lock, Call::Unlock]);
    }

    #[tokio::test]
    async fn test_hook_follows_open_transitions() {
        let (lock, calls) = recording_lock();
        let (mut dom, state) = mount(&lock, false);
        flush(&mut dom).await;
        assert!(!lock.is_locked());
        assert!(calls.borrow().is_empty());

        set_open(&mut dom, &state, true).await;
        assert!(lock.is_locked());

        set_open(&mut dom, &state, false).await;
        assert!(!lock.is_locked());
        assert_eq!(*calls.borrow(), vec![Call::Lock, Call::Unlock]);

        set_open(&mut dom, &state, true).await;
        drop(dom);
        assert!(!lock.is_locked());
        assert_eq!(
            *calls.borrow(),
            vec![Call::Lock, Call::Unlock, Call::Lock, Call::Unlock]
        );
    }
}

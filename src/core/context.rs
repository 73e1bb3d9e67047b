// Composition-root state: theme, mode and the glass configuration.
//
// One `AppContext` is created at startup and shared (via `Rc`) with every
// component that needs it. Everything runs on the browser's single thread,
// so interior mutability is `Cell`/`RefCell`; writers always publish whole
// records.

use super::glass::{GlassConfig, GlassSlot};
use super::palette::ColorTriple;
use super::theme::{ThemeMode, ThemeName, ThemeSelection};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Follow-up rounds a single change may trigger when listeners write back.
pub const MAX_NOTIFY_ROUNDS: u32 = 8;

// Returns false once the listener has nothing left to serve.
type Listener = Rc<dyn Fn() -> bool>;

/// Handle returned by `subscribe`; pass it to `unsubscribe` to stop listening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

#[derive(Default)]
pub struct AppContext {
    theme: Cell<ThemeName>,
    mode: Cell<ThemeMode>,
    glass: RefCell<GlassSlot>,
    listeners: RefCell<Vec<(Subscription, Listener)>>,
    next_subscription: Cell<u64>,
    notifying: Cell<bool>,
    pending: Cell<bool>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("theme", &self.theme.get())
            .field("mode", &self.mode.get())
            .field("glass_revision", &self.glass_revision())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl AppContext {
    pub fn new(theme: ThemeName, mode: ThemeMode, glass: GlassConfig) -> Self {
        Self {
            theme: Cell::new(theme),
            mode: Cell::new(mode),
            glass: RefCell::new(GlassSlot::new(glass)),
            ..Self::default()
        }
    }

    /// Register a callback run after every theme, mode or config change.
    ///
    /// A listener may write to the context. The write is not delivered
    /// re-entrantly: once the current round finishes every listener runs
    /// again, up to `MAX_NOTIFY_ROUNDS` rounds per outside change.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        self.register(Rc::new(move || {
            listener();
            true
        }))
    }

    /// Run `on_change` with `target` while it is alive. The listener is
    /// dropped on the first change after the last strong `target` goes away.
    pub fn follow<T: 'static>(
        &self,
        target: &Rc<T>,
        on_change: impl Fn(&T) + 'static,
    ) -> Subscription {
        let weak: Weak<T> = Rc::downgrade(target);
        self.register(Rc::new(move || match weak.upgrade() {
            Some(t) => {
                on_change(&t);
                true
            }
            None => false,
        }))
    }

    /// Returns false when the subscription was already gone.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != subscription);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn register(&self, listener: Listener) -> Subscription {
        let id = Subscription(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn notify(&self) {
        if self.notifying.get() {
            self.pending.set(true);
            return;
        }
        self.notifying.set(true);
        let mut rounds = 0;
        loop {
            self.pending.set(false);
            self.notify_round();
            rounds += 1;
            if !self.pending.get() {
                break;
            }
            if rounds >= MAX_NOTIFY_ROUNDS {
                log::warn!(
                    "[context] listeners still writing after {} rounds; dropping the rest",
                    rounds
                );
                self.pending.set(false);
                break;
            }
        }
        self.notifying.set(false);
    }

    fn notify_round(&self) {
        // Snapshot so listeners may subscribe or unsubscribe without a borrow clash.
        let listeners: Vec<(Subscription, Listener)> = self.listeners.borrow().clone();
        let mut expired = Vec::new();
        for (id, listener) in listeners {
            if !listener() {
                expired.push(id);
            }
        }
        if !expired.is_empty() {
            log::debug!("[context] pruning {} expired listeners", expired.len());
            self.listeners
                .borrow_mut()
                .retain(|(id, _)| !expired.contains(id));
        }
    }

    pub fn theme(&self) -> ThemeName {
        self.theme.get()
    }

    pub fn set_theme(&self, theme: ThemeName) {
        self.theme.set(theme);
        self.notify();
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        self.notify();
    }

    pub fn selection(&self) -> ThemeSelection {
        ThemeSelection {
            theme: self.theme(),
            mode: self.mode(),
        }
    }

    pub fn colors(&self) -> ColorTriple {
        self.selection().colors()
    }

    pub fn glass(&self) -> Rc<GlassConfig> {
        self.glass.borrow().get()
    }

    pub fn set_glass(&self, next: GlassConfig) {
        log::debug!("[glass] replace config: {:?}", next);
        self.glass.borrow_mut().set(next);
        self.notify();
    }

    /// Build the next record from a copy of the current one and publish it.
    pub fn replace_glass(&self, edit: impl FnOnce(&mut GlassConfig)) {
        let mut next = (*self.glass()).clone();
        edit(&mut next);
        self.set_glass(next);
    }

    pub fn reset_glass(&self) {
        self.set_glass(GlassConfig::default());
    }

    pub fn glass_revision(&self) -> u64 {
        self.glass.borrow().revision()
    }
}

pub type SharedContext = Rc<AppContext>;

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Tracks whether the page that started an async task is still mounted.
///
/// Pages create one on mount and call [`Liveness::dispose`] from their cleanup
/// hook; continuations check [`Liveness::is_alive`] before touching page state.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn dispose(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

use std::cell::Cell;

thread_local! {
    static GENERATION: Cell<u32> = const { Cell::new(0) };
}

/// Taken when a mount starts. It goes stale once the viewer is unmounted,
/// so a mount still awaiting setup can tell it should give up.
#[derive(Clone, Copy, Debug)]
pub struct MountToken(u32);

impl MountToken {
    pub fn begin() -> Self {
        Self(GENERATION.with(Cell::get))
    }

    pub fn is_current(self) -> bool {
        GENERATION.with(Cell::get) == self.0
    }
}

/// Mark every outstanding token stale.
pub fn invalidate() {
    GENERATION.with(|g| g.set(g.get().wrapping_add(1)));
}

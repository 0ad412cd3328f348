//! The slice of the emulator that per-game settings are allowed to touch.

pub mod mock;

/// Hardware switches exposed by a running console.
///
/// The emulator core owns the console; this crate only flips switches on it.
/// Implementations are driven through `&mut self`, so one configuration pass
/// at a time per console.
pub trait Console {
    /// Exchange the left and right controller ports.
    ///
    /// Calling this twice restores the original wiring.
    fn toggle_swap_ports(&mut self);

    /// Current port wiring; `true` when the ports are exchanged.
    fn ports_swapped(&self) -> bool;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn toggle_swap_ports(&mut self) {
        (**self).toggle_swap_ports();
    }

    fn ports_swapped(&self) -> bool {
        (**self).ports_swapped()
    }
}

impl<C: Console + ?Sized> Console for Box<C> {
    fn toggle_swap_ports(&mut self) {
        (**self).toggle_swap_ports();
    }

    fn ports_swapped(&self) -> bool {
        (**self).ports_swapped()
    }
}

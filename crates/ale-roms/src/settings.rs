use std::{any::Any, fmt::Debug};

use dyn_clone::DynClone;

/// Per-game behaviour consumed by the learning harness.
///
/// One prototype per supported title lives in the [`Registry`](crate::Registry);
/// callers never touch it directly and instead receive an owned copy from
/// [`Registry::resolve`](crate::Registry::resolve). Cloning a
/// `Box<dyn RomSettings>` produces an independent instance with no state shared
/// with the prototype.
pub trait RomSettings: Any + DynClone + Debug + Send + Sync {
    /// Canonical title identifier, e.g. `"pong"`.
    ///
    /// Matched byte-for-byte against the bare file name of a cartridge image.
    fn rom(&self) -> &str;

    /// Whether the title expects the two controller ports exchanged.
    fn swap_ports(&self) -> bool {
        false
    }
}

dyn_clone::clone_trait_object!(RomSettings);

/// Recover the concrete settings type behind a trait object.
pub fn settings_downcast_ref<'a, T: RomSettings>(
    settings: &'a (dyn RomSettings + 'static),
) -> Option<&'a T> {
    (settings as &dyn Any).downcast_ref::<T>()
}

/// Mutable counterpart of [`settings_downcast_ref`], for tweaking an owned
/// copy returned by [`Registry::resolve`](crate::Registry::resolve).
pub fn settings_downcast_mut<'a, T: RomSettings>(
    settings: &'a mut (dyn RomSettings + 'static),
) -> Option<&'a mut T> {
    (settings as &mut dyn Any).downcast_mut::<T>()
}

/// Table row for a title whose only visible configuration is its name and
/// port wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TitleSettings {
    rom: &'static str,
    swap_ports: bool,
}

impl TitleSettings {
    pub const fn new(rom: &'static str) -> Self {
        Self {
            rom,
            swap_ports: false,
        }
    }

    /// Same title, but with controller ports exchanged on the console.
    pub const fn with_swapped_ports(mut self) -> Self {
        self.swap_ports = true;
        self
    }
}

impl RomSettings for TitleSettings {
    fn rom(&self) -> &str {
        self.rom
    }

    fn swap_ports(&self) -> bool {
        self.swap_ports
    }
}

use crate::{console::Console, settings::RomSettings};

/// Apply the hardware side effects a title needs to a freshly loaded console.
///
/// Call exactly once per configuration cycle: a second call on the same
/// console undoes the port swap.
pub fn apply_rom_settings<C>(settings: &dyn RomSettings, console: &mut C)
where
    C: Console + ?Sized,
{
    if settings.swap_ports() {
        console.toggle_swap_ports();
        tracing::debug!(
            rom = settings.rom(),
            swapped = console.ports_swapped(),
            "toggled controller ports"
        );
    }
}

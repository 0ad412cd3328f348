use crate::console::Console;

/// Console double that counts port toggles.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MockConsole {
    swapped: bool,
    toggles: usize,
}

impl MockConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times [`Console::toggle_swap_ports`] has been called.
    pub fn toggles(&self) -> usize {
        self.toggles
    }
}

impl Console for MockConsole {
    fn toggle_swap_ports(&mut self) {
        self.swapped = !self.swapped;
        self.toggles += 1;
    }

    fn ports_swapped(&self) -> bool {
        self.swapped
    }
}

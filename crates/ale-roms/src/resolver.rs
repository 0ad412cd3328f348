use crate::{registry::Registry, settings::RomSettings};

/// Reduce a cartridge path to its bare title.
///
/// Everything up to the last `/` or `\` is dropped, then everything from the
/// first `.` on. No case folding or trimming takes place.
///
/// ```
/// use ale_roms::rom_title;
///
/// assert_eq!(rom_title("roms/pong.bin"), "pong");
/// assert_eq!(rom_title(r"C:\roms\surround.a26"), "surround");
/// assert_eq!(rom_title("archive.tar.gz"), "archive");
/// ```
pub fn rom_title(path: &str) -> &str {
    let file_name = match path.rfind(['/', '\\']) {
        Some(sep) => &path[sep + 1..],
        None => path,
    };
    match file_name.find('.') {
        Some(dot) => &file_name[..dot],
        None => file_name,
    }
}

impl Registry {
    /// Look up the settings for the cartridge at `path`.
    ///
    /// Returns an owned copy of the matching prototype, or `None` when the
    /// title is not supported. A miss is not an error; the caller decides what
    /// to do with an unknown cartridge.
    pub fn resolve(&self, path: &str) -> Option<Box<dyn RomSettings>> {
        let title = rom_title(path);
        match self.get(title) {
            Some(prototype) => {
                tracing::debug!(path, title, "resolved rom settings");
                Some(dyn_clone::clone_box(prototype))
            }
            None => {
                tracing::warn!(path, title, "no rom settings registered for title");
                None
            }
        }
    }
}

//! ROM title registry for Atari 2600 learning environments.
//!
//! Given a cartridge path, [`Registry::resolve`] finds the per-game settings
//! that know how to read that title's score, lives and terminal state, and
//! hands back an owned copy. [`apply_rom_settings`] then applies whatever
//! console wiring the title expects before play starts.
//!
//! ```
//! use ale_roms::{Registry, TitleSettings, apply_rom_settings, console::mock::MockConsole};
//!
//! let registry = Registry::builder()
//!     .register(TitleSettings::new("pong"))
//!     .register(TitleSettings::new("surround").with_swapped_ports())
//!     .build()?;
//! let settings = registry.resolve("roms/surround.bin").expect("supported title");
//!
//! let mut console = MockConsole::new();
//! apply_rom_settings(settings.as_ref(), &mut console);
//! assert_eq!(console.toggles(), 1);
//! # Ok::<(), ale_roms::Error>(())
//! ```

pub mod configure;
pub mod console;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod settings;

pub use configure::apply_rom_settings;
pub use console::Console;
pub use error::Error;
pub use registry::{Registry, RegistryBuilder};
pub use resolver::rom_title;
pub use settings::{RomSettings, TitleSettings, settings_downcast_mut, settings_downcast_ref};

#[cfg(feature = "supported-games")]
pub use registry::SUPPORTED_ROMS;

//! Ordered, immutable table of per-game settings prototypes.
//!
//! A [`Registry`] is assembled once through [`RegistryBuilder`] and never
//! changes afterwards. Shared references can be handed to any number of
//! threads; lookups only read.

use crate::{error::Error, settings::RomSettings};

#[cfg(feature = "supported-games")]
mod supported;

#[cfg(feature = "supported-games")]
pub use supported::SUPPORTED_ROMS;

#[derive(Debug)]
pub struct Registry {
    prototypes: Box<[Box<dyn RomSettings>]>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// Prototypes in registration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &(dyn RomSettings + 'static)> + '_ {
        self.prototypes.iter().map(|settings| settings.as_ref())
    }

    /// Title identifiers in registration order.
    pub fn roms(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.iter().map(|settings| settings.rom())
    }

    /// Borrow the prototype registered under exactly `rom`.
    ///
    /// Linear scan; the table is small and fixed.
    pub fn get(&self, rom: &str) -> Option<&(dyn RomSettings + 'static)> {
        self.iter().find(|settings| settings.rom() == rom)
    }

    pub fn contains(&self, rom: &str) -> bool {
        self.get(rom).is_some()
    }
}

/// Collects prototypes in order and validates them on [`build`](Self::build).
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    prototypes: Vec<Box<dyn RomSettings>>,
}

impl RegistryBuilder {
    pub fn register<S>(mut self, settings: S) -> Self
    where
        S: RomSettings + 'static,
    {
        self.prototypes.push(Box::new(settings));
        self
    }

    pub fn register_boxed(mut self, settings: Box<dyn RomSettings>) -> Self {
        self.prototypes.push(settings);
        self
    }

    /// Freeze the collected prototypes.
    ///
    /// Rejects empty identifiers and duplicate identifiers; nothing is
    /// returned on failure.
    pub fn build(self) -> Result<Registry, Error> {
        for (index, settings) in self.prototypes.iter().enumerate() {
            let rom = settings.rom();
            if rom.is_empty() {
                return Err(Error::EmptyIdentifier { index });
            }
            if let Some(first) = self.prototypes[..index]
                .iter()
                .position(|earlier| earlier.rom() == rom)
            {
                return Err(Error::DuplicateIdentifier {
                    rom: rom.to_owned(),
                    first,
                    second: index,
                });
            }
        }

        tracing::debug!(titles = self.prototypes.len(), "rom registry built");

        Ok(Registry {
            prototypes: self.prototypes.into_boxed_slice(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::TitleSettings;

    fn small() -> Registry {
        Registry::builder()
            .register(TitleSettings::new("pong"))
            .register(TitleSettings::new("surround").with_swapped_ports())
            .register(TitleSettings::new("breakout"))
            .build()
            .expect("valid registry")
    }

    #[test]
    fn keeps_registration_order() {
        let registry = small();
        let roms: Vec<_> = registry.roms().collect();
        assert_eq!(roms, ["pong", "surround", "breakout"]);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn get_is_exact_and_case_sensitive() {
        let registry = small();
        assert!(registry.get("surround").is_some_and(|s| s.swap_ports()));
        assert!(registry.get("Pong").is_none());
        assert!(registry.get("pong ").is_none());
        assert!(!registry.contains(""));
    }

    #[test]
    fn rejects_duplicate_identifiers() {
        let err = Registry::builder()
            .register(TitleSettings::new("pong"))
            .register(TitleSettings::new("tennis"))
            .register(TitleSettings::new("pong").with_swapped_ports())
            .build()
            .expect_err("duplicate must fail");

        assert_eq!(
            err,
            Error::DuplicateIdentifier {
                rom: "pong".to_owned(),
                first: 0,
                second: 2,
            }
        );
    }

    #[test]
    fn rejects_empty_identifier() {
        let err = Registry::builder()
            .register(TitleSettings::new("pong"))
            .register(TitleSettings::new(""))
            .build()
            .expect_err("empty identifier must fail");

        assert_eq!(err, Error::EmptyIdentifier { index: 1 });
    }

    #[test]
    fn empty_builder_yields_empty_registry() {
        let registry = Registry::builder().build().expect("empty is valid");
        assert!(registry.is_empty());
        assert!(registry.get("pong").is_none());
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }
}

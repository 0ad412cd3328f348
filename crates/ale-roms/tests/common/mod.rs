#![allow(dead_code)]

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(Level::DEBUG)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

#[cfg(feature = "supported-games")]
pub fn supported() -> anyhow::Result<ale_roms::Registry> {
    Ok(ale_roms::Registry::supported()?)
}

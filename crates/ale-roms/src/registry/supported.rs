use crate::{error::Error, settings::TitleSettings};

use super::Registry;

/// Identifiers of every compiled-in title, in registration order.
pub const SUPPORTED_ROMS: &[&str] = &[
    "air_raid",
    "alien",
    "amidar",
    "assault",
    "asterix",
    "asteroids",
    "atlantis",
    "bank_heist",
    "battle_zone",
    "beam_rider",
    "berzerk",
    "bowling",
    "boxing",
    "breakout",
    "breakout_2player",
    "carnival",
    "centipede",
    "chopper_command",
    "crazy_climber",
    "defender",
    "demon_attack",
    "double_dunk",
    "elevator_action",
    "enduro",
    "fishing_derby",
    "freeway",
    "frostbite",
    "gopher",
    "gravitar",
    "hero",
    "ice_hockey",
    "jamesbond",
    "journey_escape",
    "kangaroo",
    "krull",
    "kung_fu_master",
    "montezuma_revenge",
    "ms_pacman",
    "name_this_game",
    "pacman",
    "phoenix",
    "pitfall",
    "pong",
    "pong_2player",
    "pooyan",
    "private_eye",
    "qbert",
    "riverraid",
    "road_runner",
    "robotank",
    "seaquest",
    "skiing",
    "solaris",
    "space_invaders",
    "star_gunner",
    "surround",
    "tennis",
    "time_pilot",
    "tutankham",
    "up_n_down",
    "venture",
    "video_chess",
    "video_pinball",
    "wizard_of_wor",
    "wizard_of_wor_2player",
    "yars_revenge",
    "zaxxon",
];

/// Titles whose player one sits on the right-hand controller port.
const SWAPPED_PORT_ROMS: &[&str] = &["surround"];

impl Registry {
    /// Build the registry of every compiled-in title.
    pub fn supported() -> Result<Self, Error> {
        SUPPORTED_ROMS
            .iter()
            .map(|&rom| {
                let settings = TitleSettings::new(rom);
                if SWAPPED_PORT_ROMS.contains(&rom) {
                    settings.with_swapped_ports()
                } else {
                    settings
                }
            })
            .fold(Registry::builder(), |builder, settings| {
                builder.register(settings)
            })
            .build()
    }
}

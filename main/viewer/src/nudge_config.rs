use crate::{NudgeHost, REAPER_CONFIG_SECTION};
use reaper_nudge_codec::{NudgePreset, SlotIndex};
use std::str::FromStr;
use tracing::{debug, warn};

/// Reads and decodes the nudge settings of the given slot from REAPER's configuration.
///
/// Missing keys are treated as 0, which is what REAPER does, too.
pub fn read_nudge_preset(host: &impl NudgeHost, slot: SlotIndex) -> NudgePreset {
    let config_word: u32 = read_config_number(host, &slot.config_key());
    let amount: f64 = read_config_number(host, &slot.amount_config_key());
    debug!(%slot, config_word, amount, "Read nudge settings");
    NudgePreset::decode(slot, config_word, amount)
}

fn read_config_number<T: FromStr + Default>(host: &impl NudgeHost, key: &str) -> T {
    let Some(value) = host.get_config_value(REAPER_CONFIG_SECTION, key) else {
        return T::default();
    };
    match value.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            warn!(key, value = %value, "Configuration value is not a number, using 0");
            T::default()
        }
    }
}

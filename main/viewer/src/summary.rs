use reaper_nudge_codec::{NudgeAmount, NudgeMode, NudgePreset, NudgeUnit};

/// Shown for the last used slot. REAPER doesn't always write the last used nudge settings to its
/// configuration when they change, so what's displayed can lag behind.
pub const LAST_SLOT_CAVEAT: &str = "REAPER doesn't always save the last used nudge settings \
     right away, so they may be out of date.";

/// One label/value line of the preset display.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

impl SummaryRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Returns the lines to be displayed for the given preset.
pub fn summary_rows(preset: &NudgePreset) -> Vec<SummaryRow> {
    let mut rows = vec![
        SummaryRow::new("Mode", preset.mode().label()),
        SummaryRow::new("Target", preset.target().label()),
        SummaryRow::new("Unit", preset.unit().label()),
    ];
    if let Some(note_value) = preset.unit().note_value() {
        rows.push(SummaryRow::new("Note", note_value.label()));
    }
    rows.push(SummaryRow::new("Amount", preset.amount().to_string()));
    rows.push(SummaryRow::new("Snap to grid", yes_no(preset.snap_to_grid())));
    if preset.relative_is_applicable() {
        rows.push(SummaryRow::new("Relative", yes_no(preset.relative())));
    }
    rows
}

/// Describes the preset in one sentence.
pub fn describe(preset: &NudgePreset) -> String {
    let mut sentence = match (preset.mode(), preset.amount()) {
        (NudgeMode::Nudge, amount) => {
            format!(
                "Nudge {} by {}",
                preset.target(),
                amount_with_unit(amount, preset.unit())
            )
        }
        (NudgeMode::Set, _) => {
            let relative = if preset.relative_is_applicable() && preset.relative() {
                " relatively"
            } else {
                ""
            };
            format!(
                "Set {}{} in {}",
                preset.target(),
                relative,
                preset.unit()
            )
        }
    };
    if preset.snap_to_grid() {
        sentence.push_str(", snapping to grid");
    }
    sentence
}

fn amount_with_unit(amount: NudgeAmount, unit: NudgeUnit) -> String {
    match unit.note_value() {
        Some(note_value) => format!("{} × {} notes", amount, note_value),
        None => format!("{} {}", amount, unit),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

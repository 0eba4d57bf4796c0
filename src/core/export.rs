use anyhow::Result;

use crate::core::store::CycleStore;
use crate::db::Storage;
use crate::models::ProfileState;

/// Export the whole profile as pretty JSON, in the same shape as the stored blob.
pub fn to_json(state: &ProfileState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Export logged days as CSV, one row per day, oldest first.
pub fn to_csv(state: &ProfileState) -> String {
    let mut out = String::from("date,flow,symptoms,mood\n");
    for (date, day) in &state.days {
        let flow = day
            .period
            .as_ref()
            .map(|p| p.flow.to_string())
            .unwrap_or_default();
        let symptoms = day
            .period
            .as_ref()
            .map(|p| {
                p.symptoms
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .unwrap_or_default();
        let mood = day.mood.map(|m| m.to_string()).unwrap_or_default();
        out.push_str(&format!("{},{},{},{}\n", date, flow, symptoms, mood));
    }
    out
}

/// Merge the `days` of an exported profile into the store. Imported days
/// replace same-date days; profile fields are left alone. Returns the number
/// of days imported.
pub fn import_json<S: Storage>(store: &mut CycleStore<S>, json_str: &str) -> Result<usize> {
    let imported: ProfileState = serde_json::from_str(json_str)?;
    let count = imported.days.len();

    let mut state = store.state().clone();
    state.days.extend(imported.days);
    store.replace_state(state)?;

    tracing::info!(count, "days imported");
    Ok(count)
}

//! Helpers for the comma separated text fields (`Writer`, `Genre`, `Web`, ...).
//! The persisted value stays a single string, these only split and join it.

/// Splits on commas, trimming each entry and dropping empty ones.
pub fn split(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Joins entries with `", "`, skipping blank ones.
pub fn join<I, S>(entries: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|entry| {
            let entry = entry.as_ref().trim();
            (!entry.is_empty()).then(|| entry.to_owned())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

use parks::FacilityType;

/// One checkbox in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxItem {
    pub name: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FilterEntry {
    facility: FacilityType,
    checked: bool,
}

/// Checked/unchecked state per facility type.
///
/// Ordering contract:
/// - Entries keep the order the facility list was seeded with; `active()` and
///   `checkboxes()` follow it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    entries: Vec<FilterEntry>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all entries with one unchecked entry per name.
    ///
    /// Repeated names keep their first position.
    pub fn seed<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.clear();
        for name in names {
            let name = name.into();
            if self.position(&name).is_some() {
                continue;
            }
            self.entries.push(FilterEntry {
                facility: FacilityType::from(name),
                checked: false,
            });
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flips `name`, returning its new value.
    pub fn toggle(&mut self, name: &str) -> Option<bool> {
        let idx = self.position(name)?;
        let entry = &mut self.entries[idx];
        entry.checked = !entry.checked;
        Some(entry.checked)
    }

    /// Sets `name` to `checked`. Returns `false` for unknown names.
    pub fn set(&mut self, name: &str, checked: bool) -> bool {
        let Some(idx) = self.position(name) else {
            return false;
        };
        self.entries[idx].checked = checked;
        true
    }

    /// Names of the checked facilities.
    pub fn active(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.checked)
            .map(|e| e.facility.name().to_string())
            .collect()
    }

    pub fn checkboxes(&self) -> Vec<CheckboxItem> {
        self.entries
            .iter()
            .map(|e| CheckboxItem {
                name: e.facility.name().to_string(),
                checked: e.checked,
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.facility.name() == name)
    }
}

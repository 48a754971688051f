use serde::{Deserialize, Serialize};

/// An ordered multi-select over a vocabulary catalog that also accepts free
/// text. `custom` and `text` are projections of `selected`, rebuilt by
/// [`TermSelection::recompute`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermSelection {
    selected: Vec<String>,
    custom: Vec<String>,
    text: String,
}

fn contains_ignore_case<S: AsRef<str>>(items: &[S], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    items.iter().any(|item| item.as_ref().to_lowercase() == needle)
}

impl TermSelection {
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Selected items that are not in the active catalog.
    pub fn custom(&self) -> &[String] {
        &self.custom
    }

    /// `selected` joined with `", "`.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.selected.iter().any(|item| item == value)
    }

    /// Adds `value` if absent, removes it if present. Returns true when it
    /// ends up selected.
    pub fn toggle(&mut self, value: &str, catalog: &[&str]) -> bool {
        let added = match self.selected.iter().position(|item| item == value) {
            Some(pos) => {
                self.selected.remove(pos);
                false
            }
            None => {
                self.selected.push(value.to_string());
                true
            }
        };
        self.recompute(catalog);
        added
    }

    /// Appends trimmed free text. Blank input and case-insensitive
    /// duplicates of an already selected item are ignored.
    pub fn add_custom(&mut self, raw: &str, catalog: &[&str]) -> bool {
        let value = raw.trim();
        if value.is_empty() || contains_ignore_case(&self.selected, value) {
            return false;
        }
        self.selected.push(value.to_string());
        self.recompute(catalog);
        true
    }

    /// Rebuild `custom` and `text` against `catalog`.
    pub fn recompute(&mut self, catalog: &[&str]) {
        self.custom = self
            .selected
            .iter()
            .filter(|item| !contains_ignore_case(catalog, item))
            .cloned()
            .collect();
        self.text = self.selected.join(", ");
    }
}

/// Ordered set backing a multi-select field.
///
/// Values keep their insertion order so checkbox lists render predictably,
/// and a value can never be present twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    values: Vec<String>,
}

impl Selection {
    pub fn new() -> Selection {
        Selection { values: Vec::new() }
    }

    /// Removes `value` when present, appends it otherwise. Returns whether
    /// the value is selected afterwards.
    pub fn toggle(&mut self, value: &str) -> bool {
        match self.values.iter().position(|v| v == value) {
            Some(index) => {
                self.values.remove(index);
                false
            }
            None => {
                self.values.push(value.to_string());
                true
            }
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.values.clone()
    }
}

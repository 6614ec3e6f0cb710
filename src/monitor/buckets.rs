use std::collections::HashMap;

/// Label to count map that remembers insertion order.
///
/// Ties for min/max are broken by that order, so it matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketCounts {
    order: Vec<String>,
    counts: HashMap<String, u64>,
}

impl BucketCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a zeroed bucket for every label.
    #[must_use]
    pub fn zeroed<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        labels.into_iter().map(|label| (label, 0)).collect()
    }

    /// Adds one to `label`. Returns `false` when the label was missing and had
    /// to be inserted.
    pub fn increment(&mut self, label: &str) -> bool {
        if let Some(count) = self.counts.get_mut(label) {
            *count = count.saturating_add(1);
            return true;
        }
        self.insert(label.to_owned(), 1);
        false
    }

    pub fn insert(&mut self, label: String, count: u64) {
        if self.counts.insert(label.clone(), count).is_none() {
            self.order.push(label);
        }
    }

    pub fn remove(&mut self, label: &str) -> Option<u64> {
        let count = self.counts.remove(label)?;
        self.order.retain(|existing| existing != label);
        Some(count)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Buckets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.order.iter().map(move |label| {
            let count = self.counts.get(label).copied().unwrap_or(0);
            (label.as_str(), count)
        })
    }
}

impl FromIterator<(String, u64)> for BucketCounts {
    fn from_iter<T: IntoIterator<Item = (String, u64)>>(iter: T) -> Self {
        let mut buckets = BucketCounts::new();
        for (label, count) in iter {
            buckets.insert(label, count);
        }
        buckets
    }
}

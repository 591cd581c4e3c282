use crate::models::PropertyRecord;

/// Properties the user saved, oldest first
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    saved: Vec<PropertyRecord>,
}

impl Favorites {
    pub fn new(saved: Vec<PropertyRecord>) -> Self {
        Self { saved }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.saved.iter().any(|p| p.id == id)
    }

    /// Save or unsave. Returns true if the property is saved afterwards.
    pub fn toggle(&mut self, record: &PropertyRecord) -> bool {
        if self.remove(&record.id) {
            false
        } else {
            self.saved.push(record.clone());
            true
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.saved.len();
        self.saved.retain(|p| p.id != id);
        self.saved.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyRecord> {
        self.saved.iter()
    }

    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample::sample_properties;

    #[test]
    fn toggle_saves_then_unsaves() {
        let records = sample_properties();
        let mut favorites = Favorites::default();

        assert!(favorites.toggle(&records[1]));
        assert!(favorites.contains("2"));
        assert!(!favorites.toggle(&records[1]));
        assert!(favorites.is_empty());
    }

    #[test]
    fn remove_only_touches_one() {
        let mut favorites = Favorites::new(sample_properties());
        assert!(favorites.remove("3"));
        assert!(!favorites.remove("3"));
        assert_eq!(favorites.len(), 5);
        assert!(favorites.iter().all(|p| p.id != "3"));
    }
}

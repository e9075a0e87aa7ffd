//! DOM practice widget: a list of colored items that can be added, removed
//! one by one, or cleared. Purely local.

use rand::Rng;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeItem {
    pub uid: u32,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PracticeList {
    items: Vec<PracticeItem>,
    counter: u32,
}

/// `#` followed by six uniformly drawn uppercase hex digits.
pub fn random_color<R: Rng>(rng: &mut R) -> String {
    let mut color = String::with_capacity(7);
    color.push('#');
    for _ in 0..6 {
        color.push(HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())] as char);
    }
    color
}

impl PracticeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[PracticeItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(&mut self) -> u32 {
        self.add_with(&mut rand::thread_rng())
    }

    pub fn add_with<R: Rng>(&mut self, rng: &mut R) -> u32 {
        self.counter += 1;
        self.items.push(PracticeItem {
            uid: self.counter,
            color: random_color(rng),
        });
        self.counter
    }

    /// Empties the list and restarts numbering at 1.
    pub fn clear(&mut self) {
        self.items.clear();
        self.counter = 0;
    }

    pub fn remove(&mut self, uid: u32) {
        self.items.retain(|item| item.uid != uid);
    }

    /// Display text of the item at `index` (0-based).
    pub fn label(index: usize) -> String {
        format!("Elemento {} 👍", index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use regex::Regex;

    #[test]
    fn test_uids_increase_and_count_tracks_operations() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut list = PracticeList::new();
        let uids: Vec<u32> = (0..5).map(|_| list.add_with(&mut rng)).collect();
        assert_eq!(uids, vec![1, 2, 3, 4, 5]);

        list.remove(2);
        list.remove(4);
        list.remove(42);
        assert_eq!(list.len(), 3);
        assert_eq!(
            list.items().iter().map(|i| i.uid).collect::<Vec<_>>(),
            vec![1, 3, 5]
        );

        // Removing does not reuse numbers.
        assert_eq!(list.add_with(&mut rng), 6);
    }

    #[test]
    fn test_clear_restarts_numbering() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut list = PracticeList::new();
        list.add_with(&mut rng);
        list.add_with(&mut rng);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.add_with(&mut rng), 1);
    }

    #[test]
    fn test_colors_are_uppercase_hex() {
        let pattern = Regex::new(r"^#[0-9A-F]{6}$").unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..200 {
            let color = random_color(&mut rng);
            assert!(pattern.is_match(&color), "{color}");
        }
        let mut list = PracticeList::new();
        list.add();
        assert!(pattern.is_match(&list.items()[0].color));
    }

    #[test]
    fn test_labels_are_one_based() {
        assert_eq!(PracticeList::label(0), "Elemento 1 👍");
        assert_eq!(PracticeList::label(9), "Elemento 10 👍");
    }
}

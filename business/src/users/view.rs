//! Sort-then-filter projection of the loaded page.

use std::any::Any;
use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use log::error;
use userdeck_states::{State, state_assign_impl};

use super::UserRecord;

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Email,
    Username,
}

impl SortKey {
    /// Columns in table order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Username];

    /// Column header text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Username => "Username",
        }
    }
}

/// Search text and the selected sort column. Written by user input only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilterState {
    pub search_text: String,
    sort_key: Option<SortKey>,
}

impl ViewFilterState {
    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    /// Header click. Always ascending: re-selecting the active column changes nothing.
    pub fn select_sort_key(&mut self, key: SortKey) {
        self.sort_key = Some(key);
    }

    /// The rows to render this frame. Recomputed every call, never cached.
    pub fn visible_users<'a>(&self, records: &'a [UserRecord]) -> Vec<&'a UserRecord> {
        view_transform(records, &self.search_text, self.sort_key)
    }
}

impl State for ViewFilterState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// Sort (stable, ascending) by `sort_key` if set, then keep records whose name or
/// email contains `search_text` case-insensitively. Username is never searched.
///
/// Ordering uses root-locale Unicode collation: accents sort next to their base
/// letter, lowercase precedes uppercase on otherwise equal strings, and
/// punctuation sorts before digits and letters.
pub fn view_transform<'a>(
    records: &'a [UserRecord],
    search_text: &str,
    sort_key: Option<SortKey>,
) -> Vec<&'a UserRecord> {
    let mut rows: Vec<&UserRecord> = records.iter().collect();

    if let Some(key) = sort_key {
        let order = LocaleOrder::root();
        rows.sort_by(|a, b| order.compare(a.field(key), b.field(key)));
    }

    let needle = search_text.to_lowercase();
    rows.retain(|user| matches_search(user, &needle));
    rows
}

fn matches_search(user: &UserRecord, needle: &str) -> bool {
    needle.is_empty()
        || user.name.to_lowercase().contains(needle)
        || user.email.to_lowercase().contains(needle)
}

/// Root-locale string ordering backed by the ICU collator.
pub struct LocaleOrder {
    collator: Option<Collator>,
}

impl LocaleOrder {
    /// Collator for the root locale with default (tertiary, non-ignorable) options.
    pub fn root() -> Self {
        let collator = match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(err) => {
                error!("Root collator unavailable, sorting by code point: {err}");
                None
            }
        };
        Self { collator }
    }

    /// Collation order of `a` and `b`. Identical strings compare equal.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, name: &str, email: &str, username: &str) -> UserRecord {
        UserRecord::new(id, name, email, username)
    }

    fn ids(rows: &[&UserRecord]) -> Vec<u64> {
        rows.iter().map(|u| u.id).collect()
    }

    fn sample() -> Vec<UserRecord> {
        vec![
            user(1, "charlie", "c@mail.com", "zed"),
            user(2, "Alice", "x@y.com", "mike"),
            user(3, "bob", "a@z.com", "Anna"),
        ]
    }

    #[test]
    fn unsorted_keeps_load_order() {
        let records = sample();
        assert_eq!(ids(&view_transform(&records, "", None)), vec![1, 2, 3]);
    }

    #[test]
    fn sorts_by_each_column_ignoring_case() {
        let records = sample();
        assert_eq!(
            ids(&view_transform(&records, "", Some(SortKey::Name))),
            vec![2, 3, 1]
        );
        assert_eq!(
            ids(&view_transform(&records, "", Some(SortKey::Email))),
            vec![3, 1, 2]
        );
        assert_eq!(
            ids(&view_transform(&records, "", Some(SortKey::Username))),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let records = vec![
            user(1, "Sam", "s1@x.com", "a"),
            user(2, "Adam", "a@x.com", "b"),
            user(3, "Sam", "s2@x.com", "c"),
            user(4, "Sam", "s3@x.com", "d"),
        ];
        assert_eq!(
            ids(&view_transform(&records, "", Some(SortKey::Name))),
            vec![2, 1, 3, 4]
        );
    }

    fn names(rows: &[&UserRecord]) -> Vec<String> {
        rows.iter().map(|u| u.name.clone()).collect()
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let records = vec![
            user(1, "Zoe", "z@x", "u1"),
            user(2, "Émile", "e@x", "u2"),
            user(3, "Adam", "a@x", "u3"),
        ];
        assert_eq!(
            names(&view_transform(&records, "", Some(SortKey::Name))),
            vec!["Adam", "Émile", "Zoe"]
        );
    }

    #[test]
    fn punctuation_sorts_before_digits_and_letters() {
        let order = LocaleOrder::root();
        assert_eq!(order.compare("a_b", "a1b"), Ordering::Less);
        assert_eq!(order.compare("a.b", "ab"), Ordering::Less);

        let records = vec![
            user(1, "A", "a@x", "Leopoldo_Corkery"),
            user(2, "B", "b@x", "Leopoldo1"),
            user(3, "C", "c@x", "Elwyn.Skiles"),
            user(4, "D", "d@x", "elwyn"),
        ];
        let rows = view_transform(&records, "", Some(SortKey::Username));
        assert_eq!(ids(&rows), vec![4, 3, 1, 2]);
    }

    #[test]
    fn lowercase_sorts_before_uppercase_on_ties() {
        let order = LocaleOrder::root();
        assert_eq!(order.compare("adam", "Adam"), Ordering::Less);
        assert_eq!(order.compare("Adam", "adam"), Ordering::Greater);
        assert_eq!(order.compare("adam", "adam"), Ordering::Equal);
        assert_eq!(order.compare("Bob", "alice"), Ordering::Greater);

        let records = vec![
            user(1, "Adam", "a1@x", "u1"),
            user(2, "bob", "b@x", "u2"),
            user(3, "adam", "a2@x", "u3"),
        ];
        assert_eq!(
            names(&view_transform(&records, "", Some(SortKey::Name))),
            vec!["adam", "Adam", "bob"]
        );
    }

    #[test]
    fn search_matches_name_or_email() {
        let records = vec![
            user(1, "Alice", "x@y.com", "u1"),
            user(2, "Bob", "a@z.com", "u2"),
        ];
        assert_eq!(ids(&view_transform(&records, "a", None)), vec![1, 2]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let records = sample();
        assert_eq!(ids(&view_transform(&records, "ALI", None)), vec![2]);
        assert_eq!(ids(&view_transform(&records, "C@MAIL", None)), vec![1]);
    }

    #[test]
    fn search_never_matches_username() {
        let records = sample();
        assert!(view_transform(&records, "zed", None).is_empty());
        assert!(view_transform(&records, "anna", None).is_empty());
    }

    #[test]
    fn filter_applies_after_sort() {
        let records = sample();
        let rows = view_transform(&records, "b", Some(SortKey::Name));
        assert_eq!(ids(&rows), vec![3]);

        let rows = view_transform(&records, "com", Some(SortKey::Name));
        assert_eq!(ids(&rows), vec![2, 3, 1]);
    }

    #[test]
    fn reselecting_column_keeps_ascending_order() {
        let records = sample();
        let mut filter = ViewFilterState::default();
        filter.select_sort_key(SortKey::Name);
        let first = ids(&filter.visible_users(&records));
        filter.select_sort_key(SortKey::Name);
        assert_eq!(ids(&filter.visible_users(&records)), first);
        assert_eq!(filter.sort_key(), Some(SortKey::Name));
    }
}

//! Ordering entities by follower magnitude.
//!
//! Sorting parses each entity's follower count exactly once, then orders the
//! parsed keys. Equal magnitudes keep their original relative order in both
//! directions, so a descending ranking is the reverse of the ascending one
//! except within runs of ties.

use std::{cmp::Ordering, rc::Rc, sync::Arc};

use crate::magnitude::{Magnitude, parse_magnitude};

/// A record that can be ranked by its follower count.
///
/// Implementors expose the raw `followers` text. Everything else about the
/// record is opaque payload carried through sorting and pagination untouched.
///
/// ```
/// use follower_rank::ranking::{Ranked, SortOrder, sort_by_magnitude};
///
/// struct Lead {
///     name: &'static str,
///     followers: Option<String>,
/// }
///
/// impl Ranked for Lead {
///     fn followers(&self) -> Option<&str> {
///         self.followers.as_deref()
///     }
/// }
///
/// let leads = [
///     Lead { name: "Alex", followers: Some("980K".into()) },
///     Lead { name: "Sarah", followers: Some("2.4M".into()) },
///     Lead { name: "Unknown", followers: None },
/// ];
///
/// let names: Vec<_> = sort_by_magnitude(&leads, SortOrder::Descending)
///     .into_iter()
///     .map(|lead| lead.name)
///     .collect();
/// assert_eq!(names, ["Sarah", "Alex", "Unknown"]);
/// ```
pub trait Ranked {
    /// Raw follower count text, or `None` if the record has none.
    fn followers(&self) -> Option<&str>;

    /// Parsed follower magnitude; zero for missing or malformed counts.
    fn magnitude(&self) -> Magnitude {
        parse_magnitude(self.followers())
    }
}

impl<T: Ranked + ?Sized> Ranked for &T {
    fn followers(&self) -> Option<&str> {
        (**self).followers()
    }
}

impl<T: Ranked + ?Sized> Ranked for Box<T> {
    fn followers(&self) -> Option<&str> {
        (**self).followers()
    }
}

impl<T: Ranked + ?Sized> Ranked for Rc<T> {
    fn followers(&self) -> Option<&str> {
        (**self).followers()
    }
}

impl<T: Ranked + ?Sized> Ranked for Arc<T> {
    fn followers(&self) -> Option<&str> {
        (**self).followers()
    }
}

/// Direction of a magnitude ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortOrder {
    /// Smallest follower count first.
    Ascending,
    /// Largest follower count first.
    #[default]
    Descending,
}

impl SortOrder {
    /// Compares two magnitudes in this direction.
    ///
    /// Ascending orders by `a - b`, descending by `b - a`.
    #[must_use]
    pub fn compare(self, a: Magnitude, b: Magnitude) -> Ordering {
        match self {
            Self::Ascending => a.total_cmp(&b),
            Self::Descending => b.total_cmp(&a),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Returns the positions of `entities` in ranked order.
///
/// Ties are broken by original position, so the result does not depend on
/// the stability of the underlying sort.
#[must_use]
pub fn ranked_indices<T: Ranked>(entities: &[T], order: SortOrder) -> Vec<usize> {
    let mut keyed: Vec<(Magnitude, usize)> = entities
        .iter()
        .enumerate()
        .map(|(index, entity)| (entity.magnitude(), index))
        .collect();

    keyed.sort_unstable_by(|(a, i), (b, j)| order.compare(*a, *b).then(i.cmp(j)));

    keyed.into_iter().map(|(_, index)| index).collect()
}

/// Ranks entities by follower magnitude without touching the input.
///
/// The result borrows from `entities`, so each element is the same object
/// that was passed in.
#[must_use]
pub fn sort_by_magnitude<T: Ranked>(entities: &[T], order: SortOrder) -> Vec<&T> {
    ranked_indices(entities, order)
        .into_iter()
        .map(|index| &entities[index])
        .collect()
}

/// Ranks entities by follower magnitude into an owned sequence.
///
/// Use shared handles (`Rc<T>`, `Arc<T>`) as the element type to avoid
/// copying payloads.
#[must_use]
pub fn sort_by_magnitude_cloned<T: Ranked + Clone>(entities: &[T], order: SortOrder) -> Vec<T> {
    ranked_indices(entities, order)
        .into_iter()
        .map(|index| entities[index].clone())
        .collect()
}

/// A ranked view over a shared entity list.
///
/// Holds the list and the permutation that orders it, so entities are never
/// copied and cloning a `Ranking` only bumps two reference counts.
#[derive(Debug)]
pub struct Ranking<T> {
    source: Arc<[T]>,
    order: SortOrder,
    indices: Arc<[usize]>,
}

impl<T: Ranked> Ranking<T> {
    /// Ranks `source` in `order`.
    #[must_use]
    pub fn new(source: Arc<[T]>, order: SortOrder) -> Self {
        let indices = ranked_indices(&source, order).into();
        Self {
            source,
            order,
            indices,
        }
    }
}

impl<T> Ranking<T> {
    /// The unsorted list this ranking orders.
    #[must_use]
    pub fn source(&self) -> &Arc<[T]> {
        &self.source
    }

    /// The order the ranking was computed in.
    #[must_use]
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Positions into [`source`](Self::source), best-ranked first.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The entity at 0-based `rank`.
    #[must_use]
    pub fn get(&self, rank: usize) -> Option<&T> {
        self.indices.get(rank).map(|&index| &self.source[index])
    }

    /// Entities in ranked order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> {
        self.indices.iter().map(|&index| &self.source[index])
    }

    /// Returns `true` if both handles share one computed permutation.
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.indices, &other.indices)
    }
}

impl<T> Clone for Ranking<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            order: self.order,
            indices: Arc::clone(&self.indices),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use proptest::prelude::*;

    use super::test_support::{Influencer, influencer, names, sample};

    #[test]
    fn sample_descending() {
        let leads = sample();
        let sorted = sort_by_magnitude(&leads, SortOrder::Descending);
        assert_eq!(
            names(sorted),
            ["Lisa", "Emma", "Sarah", "Mike", "Alex", "John"]
        );
    }

    #[test]
    fn sample_ascending() {
        let leads = sample();
        let sorted = sort_by_magnitude(&leads, SortOrder::Ascending);
        assert_eq!(
            names(sorted),
            ["John", "Alex", "Mike", "Sarah", "Emma", "Lisa"]
        );
    }

    #[test]
    fn ties_keep_original_order_in_both_directions() {
        let leads = vec![
            influencer("a", "1K"),
            influencer("b", "5K"),
            influencer("c", "1,000"),
            influencer("d", "bogus"),
            influencer("e", "5000"),
            Influencer {
                name: "f",
                followers: None,
            },
        ];

        let desc = sort_by_magnitude(&leads, SortOrder::Descending);
        assert_eq!(names(desc), ["b", "e", "a", "c", "d", "f"]);

        let asc = sort_by_magnitude(&leads, SortOrder::Ascending);
        assert_eq!(names(asc), ["d", "f", "a", "c", "b", "e"]);
    }

    #[test]
    fn input_is_left_untouched_and_elements_are_shared() {
        let leads = sample();
        let before = leads.clone();

        let sorted = sort_by_magnitude(&leads, SortOrder::Descending);

        assert_eq!(leads, before);
        assert!(std::ptr::eq(sorted[0], &leads[5]));
        assert!(sorted.iter().all(|s| leads.iter().any(|l| std::ptr::eq(*s, l))));
    }

    #[test]
    fn parses_each_entity_once() {
        struct Counting<'a> {
            followers: &'static str,
            calls: &'a Cell<usize>,
        }

        impl Ranked for Counting<'_> {
            fn followers(&self) -> Option<&str> {
                self.calls.set(self.calls.get() + 1);
                Some(self.followers)
            }
        }

        let calls = Cell::new(0);
        let entities: Vec<_> = ["1K", "3M", "2B", "7", "12,300", "4.5K", "9T", "1M"]
            .into_iter()
            .map(|followers| Counting {
                followers,
                calls: &calls,
            })
            .collect();

        let _ = sort_by_magnitude(&entities, SortOrder::Ascending);
        assert_eq!(calls.get(), entities.len());
    }

    #[test]
    fn empty_input() {
        let leads: Vec<Influencer> = Vec::new();
        assert!(sort_by_magnitude(&leads, SortOrder::Descending).is_empty());
    }

    #[test]
    fn shared_handles_rank_without_cloning_payloads() {
        let leads: Vec<Arc<Influencer>> = sample().into_iter().map(Arc::new).collect();
        let sorted = sort_by_magnitude_cloned(&leads, SortOrder::Descending);

        assert!(Arc::ptr_eq(&sorted[0], &leads[5]));
        assert_eq!(Arc::strong_count(&leads[5]), 2);
    }

    #[test]
    fn ranking_points_into_the_shared_list() {
        let leads: Arc<[Influencer]> = sample().into();
        let ranking = Ranking::new(Arc::clone(&leads), SortOrder::Descending);

        assert_eq!(ranking.indices(), [5, 3, 0, 1, 2, 4]);
        assert_eq!(
            names(ranking.iter()),
            ["Lisa", "Emma", "Sarah", "Mike", "Alex", "John"]
        );
        assert!(std::ptr::eq(ranking.get(0).unwrap(), &leads[5]));
        assert_eq!(ranking.get(6), None);

        let copy = ranking.clone();
        assert!(Ranking::ptr_eq(&ranking, &copy));
        assert!(Arc::ptr_eq(copy.source(), &leads));
    }

    #[test]
    fn toggled_flips_direction() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::default().toggled(), SortOrder::Ascending);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn sort_order_uses_snake_case_names() {
        let order: SortOrder = serde_json::from_str("\"ascending\"").unwrap();
        assert_eq!(order, SortOrder::Ascending);
        assert_eq!(
            serde_json::to_string(&SortOrder::Descending).unwrap(),
            "\"descending\""
        );
    }

    fn follower_text() -> impl Strategy<Value = String> {
        prop_oneof![
            (0_u32..5000).prop_map(|n| n.to_string()),
            (0_u32..1000, prop::sample::select(vec!["K", "M", "B", "T"]))
                .prop_map(|(n, suffix)| format!("{n}{suffix}")),
            (0_u32..100, 0_u32..10, prop::sample::select(vec!["k", "m"]))
                .prop_map(|(n, frac, suffix)| format!("{n}.{frac}{suffix}")),
            Just("n/a".to_string()),
        ]
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: usize,
        followers: String,
    }

    impl Ranked for Row {
        fn followers(&self) -> Option<&str> {
            Some(&self.followers)
        }
    }

    fn rows() -> impl Strategy<Value = Vec<Row>> {
        prop::collection::vec(follower_text(), 0..40).prop_map(|texts| {
            texts
                .into_iter()
                .enumerate()
                .map(|(id, followers)| Row { id, followers })
                .collect()
        })
    }

    /// Groups a ranking into runs of equal magnitude, keeping ids in order.
    fn tie_runs(ranked: &[&Row]) -> Vec<(f64, Vec<usize>)> {
        let mut runs: Vec<(f64, Vec<usize>)> = Vec::new();
        for row in ranked {
            let magnitude = row.magnitude().value();
            match runs.last_mut() {
                Some((value, ids)) if *value == magnitude => ids.push(row.id),
                _ => runs.push((magnitude, vec![row.id])),
            }
        }
        runs
    }

    proptest! {
        #[test]
        fn descending_reverses_ascending_up_to_ties(rows in rows()) {
            let asc = tie_runs(&sort_by_magnitude(&rows, SortOrder::Ascending));
            let mut desc = tie_runs(&sort_by_magnitude(&rows, SortOrder::Descending));
            desc.reverse();
            prop_assert_eq!(asc, desc);
        }

        #[test]
        fn sorting_is_idempotent(rows in rows(), ascending in any::<bool>()) {
            let order = if ascending { SortOrder::Ascending } else { SortOrder::Descending };
            let once = sort_by_magnitude_cloned(&rows, order);
            let twice = sort_by_magnitude_cloned(&once, order);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn sorting_never_mutates_input(rows in rows()) {
            let before = rows.clone();
            let _ = sort_by_magnitude(&rows, SortOrder::Descending);
            let _ = sort_by_magnitude(&rows, SortOrder::Ascending);
            prop_assert_eq!(rows, before);
        }

        #[test]
        fn ranking_is_ordered_permutation(rows in rows()) {
            let ranked = sort_by_magnitude(&rows, SortOrder::Descending);
            prop_assert_eq!(ranked.len(), rows.len());
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].magnitude().value() >= pair[1].magnitude().value());
            }
            let mut ids: Vec<_> = ranked.iter().map(|row| row.id).collect();
            ids.sort_unstable();
            prop_assert_eq!(ids, (0..rows.len()).collect::<Vec<_>>());
        }
    }
}

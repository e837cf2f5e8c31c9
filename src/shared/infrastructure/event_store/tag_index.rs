// Secondary index from tag to the ascending positions of the events carrying it.
//
// Responsibilities
// - Record the tags of every appended event against its position.
// - Answer "first position in [from, until) matching these criteria" from postings alone,
//   so criteria evaluation never walks the whole log.

use crate::shared::core::primitives::{Criteria, Criterion, Tag};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Default)]
pub(crate) struct TagIndex {
    postings: HashMap<Tag, Vec<u64>>,
}

impl TagIndex {
    /// Positions must be recorded in ascending order.
    pub(crate) fn record(&mut self, position: u64, tags: &BTreeSet<Tag>) {
        for tag in tags {
            let postings = self.postings.entry(tag.clone()).or_default();
            debug_assert!(postings.last().is_none_or(|last| *last < position));
            postings.push(position);
        }
    }

    fn postings(&self, tag: &Tag) -> &[u64] {
        self.postings.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    fn is_tagged(&self, tag: &Tag, position: u64) -> bool {
        self.postings(tag).binary_search(&position).is_ok()
    }

    fn narrowest(&self, criterion: &Criterion) -> &[u64] {
        criterion
            .tags()
            .iter()
            .map(|tag| self.postings(tag))
            .min_by_key(|postings| postings.len())
            .unwrap_or(&[])
    }

    fn positions_for<'a>(
        &'a self,
        criterion: &'a Criterion,
        from: u64,
        until: u64,
    ) -> impl Iterator<Item = u64> + 'a {
        let postings = self.narrowest(criterion);
        let start = postings.partition_point(|position| *position < from);
        postings[start..]
            .iter()
            .copied()
            .take_while(move |position| *position < until)
            .filter(move |position| {
                criterion
                    .tags()
                    .iter()
                    .all(|tag| self.is_tagged(tag, *position))
            })
    }

    /// Lowest position in `[from, until)` whose tags satisfy `criteria`.
    pub(crate) fn next_match(&self, criteria: &Criteria, from: u64, until: u64) -> Option<u64> {
        criteria
            .iter()
            .filter_map(|criterion| self.positions_for(criterion, from, until).next())
            .min()
    }

    /// Every position in `[from, until)` whose tags satisfy `criteria`, ascending and unique.
    pub(crate) fn matching(&self, criteria: &Criteria, from: u64, until: u64) -> Vec<u64> {
        let positions: BTreeSet<u64> = criteria
            .iter()
            .flat_map(|criterion| self.positions_for(criterion, from, until))
            .collect();
        positions.into_iter().collect()
    }
}

//! Merge-style counting of sorted variants into sorted gene intervals.
//!
//! Both inputs have to be sorted by chromosome, then by position (variants)
//! or start (intervals), using the same chromosome order. Neither is checked:
//! unsorted input gives wrong counts, not errors.
//!
//! The pass keeps one cursor into the variants that only ever moves forward,
//! so each variant is looked at once and the whole pass is
//! `O(variants + intervals)`. For every interval, in order:
//!
//! - variants that lie before the interval are passed over. With sorted input
//!   no later interval can contain them either.
//! - variants inside `[start, end)` are counted and passed over.
//! - the first variant after the interval stops the scan and stays under the
//!   cursor, to be tested against the next interval.
//!
//! A variant consumed by one interval is never counted again, so with
//! overlapping intervals it goes to the first interval that contains it.

use fxhash::FxHashMap as HashMap;

use sctoo_core::models::{BinRecord, GeneInterval, VariantPosition};

///
/// Rank of each chromosome, in the order chromosomes first appear among the
/// intervals. Any chromosome naming order works (lexicographic, natural
/// `chr1, chr2, ..., chr10`, ...) as long as the variants follow the same one.
///
#[derive(Debug, Clone, Default)]
pub struct ChromosomeOrder {
    ranks: HashMap<String, usize>,
}

impl ChromosomeOrder {
    pub fn from_intervals(intervals: &[GeneInterval]) -> Self {
        let mut ranks: HashMap<String, usize> = HashMap::default();
        for interval in intervals {
            if !ranks.contains_key(interval.chr()) {
                let rank = ranks.len();
                ranks.insert(interval.chr().to_string(), rank);
            }
        }
        ChromosomeOrder { ranks }
    }

    pub fn rank(&self, chr: &str) -> Option<usize> {
        self.ranks.get(chr).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Where a variant lies relative to the interval being counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Before,
    Inside,
    After,
}

///
/// The stateful half of the pass: holds the variants and the cursor into
/// them. Feed it intervals in sorted order with [IntervalCounter::count_interval].
///
#[derive(Debug, Clone)]
pub struct IntervalCounter<'a> {
    variants: &'a [VariantPosition],
    order: ChromosomeOrder,
    cursor: usize,
    skipped: usize,
}

impl<'a> IntervalCounter<'a> {
    ///
    /// # Arguments
    /// - variants: sorted variants to count
    /// - intervals: the sorted intervals that will be counted; they define the
    ///   chromosome order
    pub fn new(variants: &'a [VariantPosition], intervals: &[GeneInterval]) -> Self {
        IntervalCounter {
            variants,
            order: ChromosomeOrder::from_intervals(intervals),
            cursor: 0,
            skipped: 0,
        }
    }

    fn place(
        &self,
        variant: &VariantPosition,
        interval: &GeneInterval,
        interval_rank: Option<usize>,
    ) -> Placement {
        if variant.chr() == interval.chr() {
            return if variant.pos() < interval.start() {
                Placement::Before
            } else if variant.pos() < interval.end() {
                Placement::Inside
            } else {
                Placement::After
            };
        }

        match (self.order.rank(variant.chr()), interval_rank) {
            // no interval on this chromosome, it can never be counted
            (None, _) => Placement::Before,
            (Some(variant_rank), Some(interval_rank)) if variant_rank < interval_rank => {
                Placement::Before
            }
            _ => Placement::After,
        }
    }

    ///
    /// Count the variants under the cursor that fall into `interval` and move
    /// the cursor past them.
    ///
    pub fn count_interval(&mut self, interval: &GeneInterval) -> BinRecord {
        let variants = self.variants;
        let interval_rank = self.order.rank(interval.chr());
        let mut bin = BinRecord::from(interval);

        while let Some(variant) = variants.get(self.cursor) {
            match self.place(variant, interval, interval_rank) {
                Placement::Before => self.skipped += 1,
                Placement::Inside => bin.increment(),
                Placement::After => break,
            }
            self.cursor += 1;
        }

        bin
    }

    /// Index of the next variant to be looked at.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of variants passed over without landing in a bin.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Variants not looked at yet.
    pub fn remaining(&self) -> &'a [VariantPosition] {
        &self.variants[self.cursor..]
    }
}

///
/// Lazy iterator over the bins of a counting pass, one per interval, in
/// interval order.
///
pub struct Bins<'a> {
    counter: IntervalCounter<'a>,
    intervals: std::slice::Iter<'a, GeneInterval>,
}

impl<'a> Bins<'a> {
    pub fn new(variants: &'a [VariantPosition], intervals: &'a [GeneInterval]) -> Self {
        Bins {
            counter: IntervalCounter::new(variants, intervals),
            intervals: intervals.iter(),
        }
    }

    pub fn counter(&self) -> &IntervalCounter<'a> {
        &self.counter
    }
}

impl Iterator for Bins<'_> {
    type Item = BinRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let interval = self.intervals.next()?;
        Some(self.counter.count_interval(interval))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.intervals.size_hint()
    }
}

impl ExactSizeIterator for Bins<'_> {}

///
/// Count how many variants fall into each interval.
///
/// Returns exactly one [BinRecord] per interval, in the order of `intervals`,
/// including intervals with a count of zero. Variants outside every interval
/// are dropped.
///
/// # Arguments
/// - variants: variants sorted by chromosome and position
/// - intervals: intervals sorted by chromosome and start, same chromosome order
pub fn count_variants(variants: &[VariantPosition], intervals: &[GeneInterval]) -> Vec<BinRecord> {
    let mut bins = Bins::new(variants, intervals);
    let result: Vec<BinRecord> = bins.by_ref().collect();

    let counter = bins.counter();
    log::debug!(
        "Binned {} of {} variants into {} intervals ({} between or outside intervals, {} after the last one)",
        counter.cursor() - counter.skipped(),
        variants.len(),
        result.len(),
        counter.skipped(),
        counter.remaining().len()
    );

    result
}

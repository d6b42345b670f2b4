use fxhash::FxHashMap as HashMap;
use rayon::prelude::*;

use sctoo_core::models::{BinRecord, GeneInterval, VariantPosition};

use crate::counter::count_variants;

///
/// Split a sorted slice into its runs of equal chromosome.
///
fn chromosome_blocks<'a, T, F>(items: &'a [T], chr: F) -> Vec<&'a [T]>
where
    F: Fn(&T) -> &str,
{
    items.chunk_by(|a, b| chr(a) == chr(b)).collect()
}

///
/// Same result as [count_variants] for sorted input, but every chromosome is
/// counted on its own on the rayon thread pool.
///
/// Chromosomes are independent in a sorted pass: a variant can only land in
/// an interval on its own chromosome, so each block of intervals is counted
/// against the block of variants sharing its chromosome and the per-block
/// results are concatenated in interval order.
///
/// # Arguments
/// - variants: variants sorted by chromosome and position
/// - intervals: intervals sorted by chromosome and start, same chromosome order
pub fn count_variants_parallel(
    variants: &[VariantPosition],
    intervals: &[GeneInterval],
) -> Vec<BinRecord> {
    let mut variant_blocks: HashMap<&str, &[VariantPosition]> = HashMap::default();
    for block in chromosome_blocks(variants, |v| v.chr()) {
        // first run wins; sorted input has exactly one per chromosome
        variant_blocks.entry(block[0].chr()).or_insert(block);
    }

    let interval_blocks = chromosome_blocks(intervals, |iv| iv.chr());
    log::debug!(
        "Counting {} chromosome blocks in parallel",
        interval_blocks.len()
    );

    interval_blocks
        .par_iter()
        .map(|block| {
            let variants = variant_blocks
                .get(block[0].chr())
                .copied()
                .unwrap_or_default();
            count_variants(variants, block)
        })
        .collect::<Vec<Vec<BinRecord>>>()
        .concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn intervals() -> Vec<GeneInterval> {
        let mut result = Vec::new();
        for chr in ["chr1", "chr2", "chr10", "chrX"] {
            for k in 0..50u32 {
                result.push(GeneInterval::new(
                    &format!("{}_{}", chr, k),
                    chr,
                    k * 1000,
                    k * 1000 + 250 + (k % 4) * 100,
                ));
            }
        }
        result
    }

    #[fixture]
    fn variants() -> Vec<VariantPosition> {
        let mut result = Vec::new();
        for chr in ["chr1", "chr2", "chr3", "chr10"] {
            for pos in (0..52_000u32).step_by(37) {
                result.push(VariantPosition::new(chr, pos));
            }
        }
        result
    }

    #[rstest]
    fn test_parallel_matches_sequential(variants: Vec<VariantPosition>, intervals: Vec<GeneInterval>) {
        let sequential = count_variants(&variants, &intervals);
        let parallel = count_variants_parallel(&variants, &intervals);

        assert_eq!(parallel, sequential);
    }

    #[rstest]
    fn test_parallel_keeps_interval_order(variants: Vec<VariantPosition>, intervals: Vec<GeneInterval>) {
        let bins = count_variants_parallel(&variants, &intervals);

        let names: Vec<&str> = bins.iter().map(|b| b.name.as_str()).collect();
        let expected: Vec<&str> = intervals.iter().map(|iv| iv.name.as_str()).collect();
        assert_eq!(names, expected);
    }

    #[rstest]
    fn test_parallel_chromosome_without_variants(intervals: Vec<GeneInterval>) {
        let variants = vec![VariantPosition::new("chr1", 10)];
        let bins = count_variants_parallel(&variants, &intervals);

        assert_eq!(bins.len(), intervals.len());
        assert_eq!(bins.iter().map(|b| b.count).sum::<u32>(), 1);
        assert!(bins.iter().filter(|b| b.region.chr == "chrX").all(|b| b.count == 0));
    }

    #[rstest]
    fn test_parallel_empty_inputs() {
        assert!(count_variants_parallel(&[], &[]).is_empty());
        assert_eq!(
            count_variants_parallel(&[], &[GeneInterval::new("g1", "chr1", 0, 10)]),
            vec![BinRecord::new("g1", "chr1", 0, 10, 0)]
        );
    }

    #[rstest]
    fn test_chromosome_blocks() {
        let variants = vec![
            VariantPosition::new("chr1", 1),
            VariantPosition::new("chr1", 2),
            VariantPosition::new("chr2", 1),
        ];
        let blocks = chromosome_blocks(&variants, |v| v.chr());

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].len(), 2);
        assert_eq!(blocks[1][0].chr(), "chr2");
    }
}

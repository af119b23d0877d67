use quickcheck::{quickcheck, TestResult};
use rs2_seq::{from, to};
use tokio_test::block_on;

quickcheck! {
    fn prop_take_n_keeps_prefix(items: Vec<i32>, n: usize) -> bool {
        let n = n % 64;
        let got: Vec<i32> = block_on(to::collect(from::iter(items.clone()).take_n(n)));
        got == items.iter().copied().take(n).collect::<Vec<_>>()
    }

    fn prop_skip_then_take_partitions(items: Vec<u8>, n: usize) -> bool {
        let n = n % 64;
        let head: Vec<u8> = block_on(to::collect(from::iter(items.clone()).take_n(n)));
        let tail: Vec<u8> = block_on(to::collect(from::iter(items.clone()).skip_n(n)));
        [head, tail].concat() == items
    }

    fn prop_pair_wise_matches_windows(items: Vec<i16>) -> bool {
        let got: Vec<(i16, i16)> = block_on(to::collect(from::iter(items.clone()).pair_wise()));
        let want: Vec<(i16, i16)> = items.windows(2).map(|w| (w[0], w[1])).collect();
        got == want
    }

    fn prop_zip_stops_at_shorter(left: Vec<u8>, right: Vec<char>) -> bool {
        let got: Vec<(u8, char)> =
            block_on(to::collect(from::iter(left.clone()).zip(from::iter(right.clone()))));
        let want: Vec<(u8, char)> = left.into_iter().zip(right).collect();
        got == want
    }

    fn prop_deduplicate_is_idempotent(items: Vec<u8>) -> bool {
        let once: Vec<u8> = block_on(to::collect(from::iter(items).deduplicate()));
        let twice: Vec<u8> = block_on(to::collect(from::iter(once.clone()).deduplicate()));
        once == twice && once.windows(2).all(|w| w[0] != w[1])
    }

    fn prop_reduce_matches_fold(items: Vec<i64>) -> bool {
        let got = block_on(to::reduce(from::iter(items.clone()), 0i64, |acc, x| {
            (acc.wrapping_add(x), true)
        }));
        got == items.iter().fold(0i64, |acc, x| acc.wrapping_add(*x))
    }

    fn prop_min_max_agree_with_iter(items: Vec<i32>) -> bool {
        let min = block_on(to::min(from::iter(items.clone())));
        let max = block_on(to::max(from::iter(items.clone())));
        min == items.iter().copied().min() && max == items.iter().copied().max()
    }

    fn prop_filter_then_len(items: Vec<u16>) -> TestResult {
        if items.is_empty() {
            return TestResult::discard();
        }
        let evens = block_on(to::len(from::iter(items.clone()).filter(|x| x % 2 == 0)));
        TestResult::from_bool(evens == items.iter().filter(|x| *x % 2 == 0).count())
    }
}

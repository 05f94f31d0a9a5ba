//! Classic branchy quicksort with a leading-element pivot, plus the pattern
//! generators and generic test battery used to exercise it.

pub mod patterns;
pub mod quicksort;

pub use quicksort::{sort, sort_by, sort_range, sort_range_by};

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

#[doc(hidden)]
pub use paste::paste;

/// Generates one `#[test]` per function of the generic battery in
/// [`tests`], each running against the given [`Sort`] implementation.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!(
            @gen $sort_impl,
            basic,
            fixed_demo_pattern,
            random,
            random_dups_uniform,
            random_dups_zipf,
            ascending,
            descending,
            all_equal,
            already_sorted_idempotent,
            sort_by_reversed_comparator,
            comparator_call_accounting,
        );
    };
    (@gen $sort_impl:ty, $($test_fn:ident),+ $(,)?) => {
        $(
            $crate::paste! {
                #[test]
                fn [<test_ $test_fn>]() {
                    $crate::tests::$test_fn::<$sort_impl>();
                }
            }
        )+
    };
}

//! Unit tests for pagination resolution

use core_kernel::paging::{total_pages, PageInfo, PageRequest, PageSlice, PagingError};
use proptest::prelude::*;

mod slice_resolution {
    use super::*;

    #[test]
    fn missing_request_uses_defaults() {
        let slice = PageSlice::resolve(None);
        assert_eq!(slice.limit, 20);
        assert_eq!(slice.offset, 0);
    }

    #[test]
    fn second_page_of_ten_offsets_by_ten() {
        let slice = PageSlice::resolve(Some(&PageRequest { page: 2, limit: 10 }));
        assert_eq!(slice.limit, 10);
        assert_eq!(slice.offset, 10);
    }

    #[test]
    fn non_positive_fields_fall_back_to_defaults() {
        let slice = PageSlice::resolve(Some(&PageRequest { page: 0, limit: 0 }));
        assert_eq!(slice.limit, 20);
        assert_eq!(slice.offset, 0);

        let slice = PageSlice::resolve(Some(&PageRequest { page: -3, limit: -1 }));
        assert_eq!(slice.limit, 20);
        assert_eq!(slice.offset, 0);
    }

    #[test]
    fn huge_page_number_saturates_the_offset() {
        let slice = PageSlice::resolve(Some(&PageRequest {
            page: i32::MAX,
            limit: 20,
        }));
        assert_eq!(slice.limit, 20);
        // past the end of any data set, never wrapped negative
        assert_eq!(slice.offset, i32::MAX);
    }
}

mod page_counts {
    use super::*;

    #[test]
    fn exact_multiple_has_no_partial_page() {
        assert_eq!(total_pages(40, 20), Ok(2));
    }

    #[test]
    fn remainder_adds_a_page() {
        assert_eq!(total_pages(45, 20), Ok(3));
    }

    #[test]
    fn zero_items_means_zero_pages() {
        assert_eq!(total_pages(0, 20), Ok(0));
    }

    #[test]
    fn non_positive_limit_is_rejected() {
        assert_eq!(total_pages(45, 0), Err(PagingError::InvalidLimit(0)));
        assert_eq!(total_pages(45, -5), Err(PagingError::InvalidLimit(-5)));
    }

    #[test]
    fn count_beyond_the_wire_field_is_an_overflow_error() {
        let total = i64::from(i32::MAX) + 5;
        assert_eq!(
            total_pages(total, 1),
            Err(PagingError::PageCountOverflow(total))
        );
        // the largest representable count still fits
        assert_eq!(total_pages(i64::from(i32::MAX), 1), Ok(i32::MAX));
    }
}

mod page_info {
    use super::*;

    #[test]
    fn empty_info_is_all_zero_counts() {
        let request = PageRequest { page: 3, limit: 10 };
        let info = PageInfo::empty(Some(&request));
        assert_eq!(info.current_page, 3);
        assert_eq!(info.limit, 10);
        assert_eq!(info.total_items, 0);
        assert_eq!(info.total_pages, 0);
    }

    #[test]
    fn for_count_carries_the_ceiling() {
        let request = PageRequest { page: 1, limit: 20 };
        let info = PageInfo::for_count(Some(&request), 45).unwrap();
        assert_eq!(info.total_items, 45);
        assert_eq!(info.total_pages, 3);
    }
}

proptest! {
    #[test]
    fn offset_is_page_minus_one_times_limit(page in 1i32..10_000, limit in 1i32..1_000) {
        let slice = PageSlice::resolve(Some(&PageRequest { page, limit }));
        prop_assert_eq!(slice.offset, (page - 1) * limit);
    }

    #[test]
    fn page_count_covers_all_items(total in 0i64..1_000_000, limit in 1i32..1_000) {
        let pages = total_pages(total, limit).unwrap();
        let capacity = i64::from(pages) * i64::from(limit);
        prop_assert!(capacity >= total);
        prop_assert!(capacity - total < i64::from(limit));
    }
}

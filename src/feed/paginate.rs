use super::FeedRecord;

/// A contiguous slice of the feed. `page_number` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedPage<'a> {
    pub records: &'a [FeedRecord],
    pub page_number: usize,
    pub total_pages: usize,
    pub total_records: usize,
}

impl FeedPage<'_> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn total_pages(total_records: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_records.div_ceil(page_size)
}

/// Records in `[(page_number-1)*page_size, page_number*page_size)`, clipped to
/// the feed. No clamping: a page past the end is empty.
pub fn paginate(records: &[FeedRecord], page_size: usize, page_number: usize) -> FeedPage<'_> {
    let total_records = records.len();
    let slice = match page_number.checked_sub(1) {
        Some(zero_based) if page_size > 0 => {
            let start = zero_based.saturating_mul(page_size).min(total_records);
            let end = start.saturating_add(page_size).min(total_records);
            &records[start..end]
        }
        _ => &records[0..0],
    };

    FeedPage {
        records: slice,
        page_number,
        total_pages: total_pages(total_records, page_size),
        total_records,
    }
}

/// Numbered page buttons around `current`: up to four, starting one before it.
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    if total == 0 {
        return Vec::new();
    }
    let start = current.saturating_sub(1).max(1);
    let end = total.min(start + 3);
    (start..=end).collect()
}

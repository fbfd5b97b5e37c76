//! Record Sorter: orders collection records by `id`, descending.

use std::cmp::Reverse;

use tracing::debug;

use crate::records::record::Record;

/// Identifier assumed for records without an integer `id`.
pub const DEFAULT_ID: i64 = 0;

/// Sorts records by `id` descending; records lacking an id sort as `DEFAULT_ID`.
///
/// The sort is stable, so equal ids keep their load order.
pub fn sort_by_id_desc(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_by_key(|record| Reverse(record.id().unwrap_or(DEFAULT_ID)));
    debug!(
        "Sorted ids: {:?}",
        records.iter().map(Record::id).collect::<Vec<_>>()
    );
    records
}

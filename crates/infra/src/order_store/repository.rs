use std::io::BufRead;

use tracing::{debug, warn};

use tillbook_orders::Order;

use super::OrderStoreError;
use super::record::OrderRecord;
use super::source::RecordSource;

/// Read-side repository over a flat-file order dataset.
///
/// Construct one per source; there is no shared global dataset handle, so
/// tests can point separate repositories at separate fixtures. Calls do not
/// cache: every `all`/`find` re-reads the source.
pub struct OrderRepository<S: RecordSource> {
    source: S,
}

impl<S: RecordSource> OrderRepository<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Every order in the dataset, in file order.
    pub fn all(&self) -> Result<Vec<Order>, OrderStoreError> {
        let reader = self.source.open()?;

        let mut orders = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let record = parse_record(idx + 1, &line)?;
            orders.push(record.into_order());
        }

        debug!(records = orders.len(), "loaded order dataset");
        Ok(orders)
    }

    /// Look up one order by the literal id token stored in the dataset.
    ///
    /// Matching is string equality on the first field of each record: no
    /// numeric normalization, no partial matches, no case folding. Only the
    /// matching record is parsed in full.
    pub fn find(&self, id: &str) -> Result<Order, OrderStoreError> {
        let reader = self.source.open()?;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let raw = line.trim_end_matches('\r');
            if raw.split(',').next() != Some(id) {
                continue;
            }

            let record = parse_record(idx + 1, raw)?;
            return Ok(record.into_order());
        }

        Err(OrderStoreError::NotFound(id.to_string()))
    }
}

fn parse_record(line_no: usize, raw: &str) -> Result<OrderRecord, OrderStoreError> {
    OrderRecord::parse(raw.trim_end_matches('\r')).map_err(|err| {
        warn!(line = line_no, %err, "malformed order record");
        OrderStoreError::Parse {
            line: line_no,
            reason: err.to_string(),
        }
    })
}

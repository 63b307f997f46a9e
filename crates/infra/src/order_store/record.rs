use std::collections::BTreeMap;

use tillbook_core::{DomainError, DomainResult, OrderId};
use tillbook_orders::Order;

/// One dataset record, validated but not yet an `Order`.
///
/// The dataset presents each order as a flat token list. Parsing tags those
/// tokens exactly once, here; downstream code only ever sees an id plus
/// `(name, price)` pairs, never raw fields.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub id: OrderId,
    pub pairs: Vec<(String, f64)>,
}

impl OrderRecord {
    /// Parse one dataset line into a tagged record.
    ///
    /// The first field is the id token, kept verbatim. The remaining fields
    /// are consumed in `(name, price)` pairs; a bare id is a valid record
    /// with no products. A dangling name without a price, an empty name, or
    /// a price that is not a finite non-negative number fails the parse.
    pub fn parse(line: &str) -> DomainResult<Self> {
        let mut fields = line.split(',');
        let id: OrderId = fields.next().unwrap_or("").parse()?;

        let rest: Vec<&str> = fields.collect();
        if rest.len() % 2 != 0 {
            return Err(DomainError::validation(format!(
                "dangling field {:?} without a price",
                rest.last().unwrap_or(&"")
            )));
        }

        let mut pairs = Vec::with_capacity(rest.len() / 2);
        for chunk in rest.chunks_exact(2) {
            let (name, raw_price) = (chunk[0], chunk[1]);
            if name.is_empty() {
                return Err(DomainError::validation("empty product name"));
            }

            let price: f64 = raw_price.trim().parse().map_err(|_| {
                DomainError::validation(format!("invalid price {raw_price:?} for {name:?}"))
            })?;
            if !price.is_finite() || price < 0.0 {
                return Err(DomainError::validation(format!(
                    "price {price} out of range for {name:?}"
                )));
            }

            pairs.push((name.to_string(), price));
        }

        Ok(Self { id, pairs })
    }

    /// Build the domain entity from this record.
    ///
    /// Duplicate names within one record resolve last-wins, matching the
    /// hash semantics the dataset originated from.
    pub fn into_order(self) -> Order {
        let products: BTreeMap<String, f64> = self.pairs.into_iter().collect();
        Order::new(self.id, products)
    }
}

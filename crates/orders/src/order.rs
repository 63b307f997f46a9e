use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};

use tillbook_core::{Entity, OrderId};

/// Sales tax applied on top of the product subtotal.
pub const TAX_RATE: f64 = 0.075;

/// Round to whole cents, half away from zero.
fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Entity: a grocery order.
///
/// Holds an identifier plus the products bought on the order, keyed by
/// product name with one unit price per name. Mutation goes through
/// `add_product`/`remove_product` only; neither writes back to any store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    products: BTreeMap<String, f64>,
}

impl Order {
    /// Create an order with the given id and initial product mapping.
    pub fn new(id: OrderId, products: BTreeMap<String, f64>) -> Self {
        Self { id, products }
    }

    /// Order with no products yet.
    pub fn empty(id: OrderId) -> Self {
        Self::new(id, BTreeMap::new())
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn products(&self) -> &BTreeMap<String, f64> {
        &self.products
    }

    /// Subtotal plus sales tax.
    ///
    /// The tax component is rounded to cents before it is added; the grand
    /// total itself is not rounded again. That order of operations matches
    /// the totals the dataset was priced against, so it is load-bearing.
    pub fn total(&self) -> f64 {
        let subtotal: f64 = self.products.values().sum();
        subtotal + round_to_cents(subtotal * TAX_RATE)
    }

    /// Add a product line.
    ///
    /// Returns `false` (and changes nothing) when a product of that name is
    /// already on the order, `true` when the line was inserted.
    pub fn add_product(&mut self, name: impl Into<String>, price: f64) -> bool {
        match self.products.entry(name.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(price);
                true
            }
        }
    }

    /// Drop a product line by name. An absent name is a no-op.
    ///
    /// Returns the mapping as it stands after the removal.
    pub fn remove_product(&mut self, name: &str) -> &BTreeMap<String, f64> {
        self.products.remove(name);
        &self.products
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &OrderId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn banana_cracker() -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("banana".to_string(), 1.99),
            ("cracker".to_string(), 3.00),
        ])
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn new_order_keeps_id_and_products() {
        let order = Order::new(OrderId::from(1337), BTreeMap::new());
        assert_eq!(order.id().as_str(), "1337");
        assert_eq!(order.products().len(), 0);
    }

    #[test]
    fn total_is_zero_without_products() {
        let order = Order::empty(OrderId::from(1337));
        assert_eq!(order.total(), 0.0);
    }

    #[test]
    fn total_adds_tax_rounded_to_cents() {
        let order = Order::new(OrderId::from(1337), banana_cracker());
        // 4.99 subtotal, 0.37425 tax rounds to 0.37
        assert_close(order.total(), 5.36);
    }

    #[test]
    fn add_product_grows_the_mapping_by_one() {
        let mut order = Order::new(OrderId::from(1337), banana_cracker());

        let added = order.add_product("salad", 4.25);

        assert!(added);
        assert_eq!(order.products().len(), 3);
        assert_eq!(order.products().get("salad"), Some(&4.25));
    }

    #[test]
    fn add_product_rejects_an_existing_name() {
        let mut order = Order::new(OrderId::from(1337), banana_cracker());
        let before_total = order.total();

        let added = order.add_product("banana", 4.25);

        assert!(!added);
        assert_eq!(order.products().get("banana"), Some(&1.99));
        assert_eq!(order.total(), before_total);
    }

    #[test]
    fn add_product_is_idempotent_on_an_existing_name() {
        let mut order = Order::new(OrderId::from(1337), banana_cracker());

        assert!(order.add_product("salad", 4.25));
        let after_first = order.clone();

        assert!(!order.add_product("salad", 9.99));
        assert_eq!(order, after_first);
    }

    #[test]
    fn remove_product_drops_the_named_line() {
        let mut order = Order::new(OrderId::from(1337), banana_cracker());

        let remaining = order.remove_product("banana");

        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining.get("cracker"), Some(&3.00));
        assert!(!remaining.contains_key("banana"));
    }

    #[test]
    fn remove_product_on_an_absent_name_is_a_noop() {
        let mut order = Order::new(OrderId::from(1337), banana_cracker());

        let remaining = order.remove_product("caviar");

        assert_eq!(remaining, &banana_cracker());
    }

    #[test]
    fn products_serialize_as_an_object_keyed_by_name() {
        let order = Order::new(OrderId::from(1337), banana_cracker());
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["id"], "1337");
        assert_eq!(json["products"]["banana"], 1.99);
        assert_eq!(json["products"]["cracker"], 3.00);
    }

    proptest! {
        #[test]
        fn total_is_subtotal_plus_rounded_tax(
            products in proptest::collection::btree_map("[a-z]{1,12}", 0.0f64..500.0, 0..8)
        ) {
            let order = Order::new(OrderId::from(1), products.clone());

            let subtotal: f64 = products.values().sum();
            let expected = subtotal + (subtotal * TAX_RATE * 100.0).round() / 100.0;

            prop_assert_eq!(order.total(), expected);
        }

        #[test]
        fn adding_twice_equals_adding_once(
            products in proptest::collection::btree_map("[a-z]{1,12}", 0.0f64..500.0, 0..8),
            name in "[a-z]{1,12}",
            price in 0.0f64..500.0,
        ) {
            let mut once = Order::new(OrderId::from(1), products.clone());
            once.add_product(name.clone(), price);

            let mut twice = Order::new(OrderId::from(1), products);
            twice.add_product(name.clone(), price);
            let second = twice.add_product(name, price);

            prop_assert!(!second);
            prop_assert_eq!(once, twice);
        }
    }
}

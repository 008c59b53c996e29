//! The enriched-orders join resolver.
//!
//! A single-pass, stateless transformation: each order's `customer_id` and
//! `product_ids` are looked up in already-fetched maps and the matches are
//! embedded in the output. There is no state machine and no recovery
//! logic; the function is deterministic and total over typed input, and
//! safe to call concurrently from any number of tasks.

use crate::shop::{Customer, EnrichedOrder, Order, Product};
use paperbase_core::DocId;
use std::collections::HashMap;

/// Index products by id for resolution.
#[must_use]
pub fn index_products(products: Vec<Product>) -> HashMap<DocId, Product> {
    products.into_iter().map(|p| (p.id.clone(), p)).collect()
}

/// Index customers by id for resolution.
#[must_use]
pub fn index_customers(customers: Vec<Customer>) -> HashMap<DocId, Customer> {
    customers.into_iter().map(|c| (c.id.clone(), c)).collect()
}

/// Resolve each order's foreign keys into embedded records.
///
/// Guarantees:
///
/// - the output has exactly one entry per input order, in input order
/// - a `customer_id` absent from `customers` yields `customer: None`
/// - a product id absent from `products` is omitted from `products`;
///   the ids that do resolve keep their `product_ids` order
/// - an order whose references all dangle is still emitted, with
///   `customer: None` and `products: []`
///
/// The lookups may be partial; resolution misses are absence, never
/// errors. The inputs are not mutated and the outputs own their data.
#[must_use]
pub fn resolve(
    orders: Vec<Order>,
    products: &HashMap<DocId, Product>,
    customers: &HashMap<DocId, Customer>,
) -> Vec<EnrichedOrder> {
    orders
        .into_iter()
        .map(|order| {
            let customer = customers.get(&order.customer_id).cloned();
            let resolved: Vec<Product> = order
                .product_ids
                .iter()
                .filter_map(|id| products.get(id).cloned())
                .collect();

            if customer.is_none() || resolved.len() < order.product_ids.len() {
                tracing::debug!(
                    order = %order.id,
                    customer_found = customer.is_some(),
                    products_found = resolved.len(),
                    products_referenced = order.product_ids.len(),
                    "order has dangling references"
                );
            }

            EnrichedOrder {
                id: order.id,
                amount: order.amount,
                customer_id: order.customer_id,
                product_ids: order.product_ids,
                customer,
                products: resolved,
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn id(hex: &str) -> DocId {
        DocId::parse(hex).unwrap()
    }

    fn selvakumar() -> Customer {
        Customer {
            id: id("67c3395ead7e2ec403b79447"),
            name: "Selvakumar".to_string(),
            email: "vselva1@gmail.com".to_string(),
        }
    }

    fn laptop() -> Product {
        Product {
            id: id("67c339f8ad7e2ec403b7944a"),
            name: "Laptop".to_string(),
            price: 1200,
        }
    }

    fn phone() -> Product {
        Product {
            id: id("67c339d5ad7e2ec403b79449"),
            name: "Phone".to_string(),
            price: 800,
        }
    }

    fn order(amount: i64, customer: &str, products: &[&str]) -> Order {
        Order {
            id: DocId::generate(),
            amount,
            customer_id: id(customer),
            product_ids: products.iter().map(|p| id(p)).collect(),
        }
    }

    #[test]
    fn resolves_customer_and_products() {
        let orders = vec![order(
            2000,
            "67c3395ead7e2ec403b79447",
            &["67c339f8ad7e2ec403b7944a", "67c339d5ad7e2ec403b79449"],
        )];
        let enriched = resolve(
            orders,
            &index_products(vec![laptop(), phone()]),
            &index_customers(vec![selvakumar()]),
        );

        assert_eq!(enriched.len(), 1);
        let first = &enriched[0];
        assert_eq!(first.amount, 2000);
        assert_eq!(first.customer.as_ref().unwrap().name, "Selvakumar");
        let names: Vec<&str> = first.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Laptop", "Phone"]);
    }

    #[test]
    fn dangling_product_is_omitted_others_resolve() {
        let orders = vec![order(
            2000,
            "67c3395ead7e2ec403b79447",
            &["67c339f8ad7e2ec403b7944a", "67c339d5ad7e2ec403b79449"],
        )];
        // Phone is missing from the lookup
        let enriched = resolve(
            orders,
            &index_products(vec![laptop()]),
            &index_customers(vec![selvakumar()]),
        );

        let names: Vec<&str> = enriched[0].products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Laptop"]);
        // The raw reference list is untouched
        assert_eq!(enriched[0].product_ids.len(), 2);
    }

    #[test]
    fn dangling_customer_is_none_not_an_error() {
        let orders = vec![order(
            950,
            "aaaaaaaaaaaaaaaaaaaaaaaa", // not in the lookup
            &["67c339f8ad7e2ec403b7944a"],
        )];
        let enriched = resolve(
            orders,
            &index_products(vec![laptop()]),
            &index_customers(vec![selvakumar()]),
        );

        assert_eq!(enriched.len(), 1);
        assert!(enriched[0].customer.is_none());
        assert_eq!(enriched[0].amount, 950);
        assert_eq!(enriched[0].products.len(), 1);
    }

    #[test]
    fn empty_input_is_empty_output() {
        let enriched = resolve(
            vec![],
            &index_products(vec![laptop()]),
            &index_customers(vec![selvakumar()]),
        );
        assert!(enriched.is_empty());
    }

    #[test]
    fn all_references_dangling_still_emits_the_order() {
        let orders = vec![order(
            100,
            "aaaaaaaaaaaaaaaaaaaaaaaa",
            &["bbbbbbbbbbbbbbbbbbbbbbbb"],
        )];
        let enriched = resolve(orders, &HashMap::new(), &HashMap::new());
        assert_eq!(enriched.len(), 1);
        assert!(enriched[0].customer.is_none());
        assert!(enriched[0].products.is_empty());
    }

    #[test]
    fn shared_product_is_independently_owned() {
        let orders = vec![
            order(2000, "67c3395ead7e2ec403b79447", &["67c339d5ad7e2ec403b79449"]),
            order(950, "67c3395ead7e2ec403b79447", &["67c339d5ad7e2ec403b79449"]),
        ];
        let mut enriched = resolve(
            orders,
            &index_products(vec![phone()]),
            &index_customers(vec![selvakumar()]),
        );

        // Mutating one output's product must not leak into the other
        enriched[0].products[0].name = "Tampered".to_string();
        assert_eq!(enriched[1].products[0].name, "Phone");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// Ids drawn from a small pool so orders, lookups, and dangling
        /// references overlap in interesting ways.
        fn arb_id() -> impl Strategy<Value = DocId> {
            (0u8..16).prop_map(|n| {
                #[allow(clippy::unwrap_used)]
                DocId::parse(&format!("{n:024x}")).unwrap()
            })
        }

        fn arb_order() -> impl Strategy<Value = Order> {
            (arb_id(), 0i64..100_000, arb_id(), prop::collection::vec(arb_id(), 0..5)).prop_map(
                |(id, amount, customer_id, product_ids)| Order {
                    id,
                    amount,
                    customer_id,
                    product_ids,
                },
            )
        }

        fn arb_orders() -> impl Strategy<Value = Vec<Order>> {
            prop::collection::vec(arb_order(), 0..10)
        }

        fn arb_products() -> impl Strategy<Value = HashMap<DocId, Product>> {
            prop::collection::vec((arb_id(), 0i64..5000), 0..8).prop_map(|entries| {
                entries
                    .into_iter()
                    .map(|(id, price)| {
                        let product = Product {
                            id: id.clone(),
                            name: format!("product-{id}"),
                            price,
                        };
                        (id, product)
                    })
                    .collect()
            })
        }

        fn arb_customers() -> impl Strategy<Value = HashMap<DocId, Customer>> {
            prop::collection::vec(arb_id(), 0..8).prop_map(|ids| {
                ids.into_iter()
                    .map(|id| {
                        let customer = Customer {
                            id: id.clone(),
                            name: format!("customer-{id}"),
                            email: format!("{id}@example.com"),
                        };
                        (id, customer)
                    })
                    .collect()
            })
        }

        proptest! {
            /// Cardinality: one output per input order.
            #[test]
            fn output_len_equals_input_len(
                orders in arb_orders(),
                products in arb_products(),
                customers in arb_customers(),
            ) {
                let enriched = resolve(orders.clone(), &products, &customers);
                prop_assert_eq!(enriched.len(), orders.len());
            }

            /// Order preservation: the i-th output is the i-th input.
            #[test]
            fn input_order_is_preserved(
                orders in arb_orders(),
                products in arb_products(),
                customers in arb_customers(),
            ) {
                let enriched = resolve(orders.clone(), &products, &customers);
                for (input, output) in orders.iter().zip(&enriched) {
                    prop_assert_eq!(&input.id, &output.id);
                    prop_assert_eq!(input.amount, output.amount);
                    prop_assert_eq!(&input.customer_id, &output.customer_id);
                    prop_assert_eq!(&input.product_ids, &output.product_ids);
                }
            }

            /// Purity: identical inputs give identical outputs.
            #[test]
            fn resolution_is_pure(
                orders in arb_orders(),
                products in arb_products(),
                customers in arb_customers(),
            ) {
                let first = resolve(orders.clone(), &products, &customers);
                let second = resolve(orders, &products, &customers);
                prop_assert_eq!(first, second);
            }

            /// Resolved products are exactly the non-dangling references,
            /// in reference order.
            #[test]
            fn products_are_the_resolvable_subset(
                orders in arb_orders(),
                products in arb_products(),
                customers in arb_customers(),
            ) {
                let enriched = resolve(orders, &products, &customers);
                for output in &enriched {
                    let expected: Vec<&DocId> = output
                        .product_ids
                        .iter()
                        .filter(|id| products.contains_key(*id))
                        .collect();
                    let actual: Vec<&DocId> =
                        output.products.iter().map(|p| &p.id).collect();
                    prop_assert_eq!(actual, expected);
                }
            }
        }
    }
}

//! Basic usage example for veritree

use serde_json::json;
use veritree::prelude::*;

fn main() {
    let rules = RuleTree::new()
        .field("name", rules![required(), min_length(2)])
        .field("email", rules![required(), email_address()])
        .field(
            "address",
            RuleTree::new().field("city", rules![required()]),
        )
        .field(
            "order_items",
            ArrayRules::new()
                .collection(rules![
                    array_min_len(1).with_message("Please add at least one order item.")
                ])
                .element(RuleTree::new().field("qty", rules![min_number(1.0)])),
        );

    let order = json!({
        "name": "A",
        "email": "not-an-email",
        "address": {"city": ""},
        "order_items": [{"qty": 0}, {"qty": 3}],
    });

    match validate(&order, &order, &rules) {
        Ok(None) => println!("✓ order is valid"),
        Ok(Some(errors)) => {
            println!("✗ order is invalid:");
            for flat in errors.flatten() {
                println!("  [{}] {}", flat.path, flat.violation.message);
            }
        }
        Err(e) => println!("rule tree is misused: {e}"),
    }
}

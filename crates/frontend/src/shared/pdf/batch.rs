//! Сопоставление записей для пакетного экспорта
//!
//! Left records without a matching right record are skipped without an
//! error; whether that should be surfaced is an open product question.

use std::collections::HashMap;
use std::hash::Hash;

/// Inner join of `left` to `right` on a key, in `left` order.
pub fn join_by_key<'a, L, R, K, FL, FR>(
    left: &'a [L],
    right: &'a [R],
    left_key: FL,
    right_key: FR,
) -> Vec<(&'a L, &'a R)>
where
    K: Eq + Hash,
    FL: Fn(&L) -> K,
    FR: Fn(&R) -> K,
{
    let index: HashMap<K, &R> = right.iter().map(|r| (right_key(r), r)).collect();
    left.iter()
        .filter_map(|l| index.get(&left_key(l)).map(|r| (l, *r)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Invoice {
        number: &'static str,
        owner: u32,
    }

    struct Owner {
        id: u32,
        name: &'static str,
    }

    #[test]
    fn test_unmatched_left_records_are_dropped() {
        let invoices = [
            Invoice { number: "B-1", owner: 1 },
            Invoice { number: "B-2", owner: 9 },
            Invoice { number: "B-3", owner: 2 },
        ];
        let owners = [Owner { id: 1, name: "Ada" }, Owner { id: 2, name: "Lin" }];

        let joined = join_by_key(&invoices, &owners, |i| i.owner, |o| o.id);
        let pairs: Vec<(&str, &str)> = joined.iter().map(|(i, o)| (i.number, o.name)).collect();
        assert_eq!(pairs, vec![("B-1", "Ada"), ("B-3", "Lin")]);
    }

    #[test]
    fn test_empty_inputs() {
        let owners = [Owner { id: 1, name: "Ada" }];
        let none: [Invoice; 0] = [];
        assert!(join_by_key(&none, &owners, |i| i.owner, |o| o.id).is_empty());
    }
}

//! Argument packs: concatenation and head/tail access.

use super::value::Value;

pub fn concat(lhs: &[Value], rhs: &[Value]) -> Value {
    Value::Pack(lhs.iter().chain(rhs).cloned().collect())
}

/// First element, or `None` for an empty pack.
pub fn first(pack: &[Value]) -> Value {
    pack.first().cloned().unwrap_or_default()
}

/// Last element, or `None` for an empty pack.
pub fn last(pack: &[Value]) -> Value {
    pack.last().cloned().unwrap_or_default()
}

/// Everything after the first element. The tail of an empty pack is empty.
pub fn tail(pack: &[Value]) -> Value {
    Value::Pack(pack.iter().skip(1).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(ns: &[u64]) -> Vec<Value> {
        ns.iter().copied().map(Value::from).collect()
    }

    #[test]
    fn concat_preserves_order() {
        let joined = concat(&numbers(&[1, 2]), &numbers(&[3]));
        assert_eq!(joined, Value::pack([1u64, 2, 3]));
    }

    #[test]
    fn first_and_last_of_empty_pack_are_none() {
        assert_eq!(first(&[]), Value::None);
        assert_eq!(last(&[]), Value::None);
    }

    #[test]
    fn first_and_last_pick_the_ends() {
        let pack = numbers(&[4, 5, 6]);
        assert_eq!(first(&pack), Value::from(4u64));
        assert_eq!(last(&pack), Value::from(6u64));
    }

    #[test]
    fn tail_drops_the_head() {
        assert_eq!(tail(&numbers(&[1, 2, 3])), Value::pack([2u64, 3]));
        assert_eq!(tail(&numbers(&[1])), Value::Pack(vec![]));
        assert_eq!(tail(&[]), Value::Pack(vec![]));
    }
}

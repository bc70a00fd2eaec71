use crate::value::Value;
use std::cmp::Ordering;

/// Stable canonical rank used for cross-variant ordering.
///
/// Rank order is part of deterministic set/map normalization and must
/// remain fixed.
#[must_use]
const fn canonical_rank(value: &Value) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Number(_) => 1,
        Value::BigInt(_) => 2,
        Value::Date(_) => 3,
        Value::Text(_) => 4,
        Value::List(_) => 5,
        Value::Set(_) => 6,
        Value::Map(_) => 7,
        Value::Record(_) => 8,
        Value::Null => 9,
    }
}

/// Total canonical comparator.
///
/// Ordering rules:
/// 1. Canonical variant rank
/// 2. Variant-specific comparison for same-ranked values
///
/// Mixed-variant comparisons are rank-only and must remain deterministic.
#[must_use]
pub(crate) fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = canonical_rank(left).cmp(&canonical_rank(right));
    if rank != Ordering::Equal {
        return rank;
    }

    canonical_cmp_same_rank(left, right)
}

/// Lexicographic elementwise comparison, then length.
#[must_use]
pub(crate) fn canonical_cmp_list(left: &[Value], right: &[Value]) -> Ordering {
    for (l, r) in left.iter().zip(right.iter()) {
        let cmp = canonical_cmp(l, r);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }

    left.len().cmp(&right.len())
}

fn canonical_cmp_same_rank(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        // total_cmp keeps NaN sortable; equality semantics stay IEEE
        // at the predicate layer.
        (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
        (Value::BigInt(a), Value::BigInt(b)) => a.cmp(b),
        (Value::Date(a), Value::Date(b)) => a.cmp(b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        (Value::List(a), Value::List(b)) => canonical_cmp_list(a, b),
        (Value::Set(a), Value::Set(b)) => canonical_cmp_list(a.as_slice(), b.as_slice()),
        (Value::Map(a), Value::Map(b)) => {
            for ((lk, lv), (rk, rv)) in a.entries().iter().zip(b.entries().iter()) {
                let key_cmp = canonical_cmp(lk, rk);
                if key_cmp != Ordering::Equal {
                    return key_cmp;
                }
                let value_cmp = canonical_cmp(lv, rv);
                if value_cmp != Ordering::Equal {
                    return value_cmp;
                }
            }
            a.len().cmp(&b.len())
        }
        (Value::Record(a), Value::Record(b)) => {
            let type_cmp = a.type_name().cmp(&b.type_name());
            if type_cmp != Ordering::Equal {
                return type_cmp;
            }
            for ((lk, lv), (rk, rv)) in a.entries().iter().zip(b.entries().iter()) {
                let key_cmp = lk.cmp(rk);
                if key_cmp != Ordering::Equal {
                    return key_cmp;
                }
                let value_cmp = canonical_cmp(lv, rv);
                if value_cmp != Ordering::Equal {
                    return value_cmp;
                }
            }
            a.len().cmp(&b.len())
        }

        // Same rank implies same variant; nothing else reaches here.
        _ => Ordering::Equal,
    }
}

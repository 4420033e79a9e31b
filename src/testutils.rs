use crate::base::*;
use crate::nodes::Concrete;

/// Builds `value_of(values[0]).cons(values[1])...` as a raw node; the resulting sequence runs in
/// reverse of `values`.
pub(crate) fn chain(values: &[i64]) -> NodeRef {
    let (first, rest) = values.split_first().expect("chain needs at least one value");
    let mut node = Concrete::new(Value::from(*first), None);
    for value in rest {
        node = node.cons(*value);
    }
    node
}

#[track_caller]
pub(crate) fn numbers(node: &NodeRef) -> Vec<i64> {
    node.values()
        .map(|value| value.unwrap().as_num().unwrap().to_i64().unwrap())
        .collect()
}

pub(crate) fn leq(limit: i64) -> impl Fn(&Value) -> Result<bool, BaseError> {
    move |value| Ok(value.as_num()? <= &Number::from(limit))
}

pub(crate) fn plus(step: i64) -> impl Fn(&Value) -> Result<Value, BaseError> {
    move |value| Ok(Value::Number(value.as_num()? + step))
}

pub(crate) fn add(acc: Value, value: &Value) -> Result<Value, BaseError> {
    Ok(Value::Number(acc.as_num()? + value.as_num()?))
}

pub(crate) fn mul(acc: Value, value: &Value) -> Result<Value, BaseError> {
    Ok(Value::Number(acc.as_num()? * value.as_num()?))
}

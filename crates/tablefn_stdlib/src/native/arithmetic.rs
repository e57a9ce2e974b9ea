//! Dynamic variadic arithmetic.
//!
//! Integers stay integers (with checked overflow); any float operand
//! promotes the running result to float. Promotion happens at the step where
//! the first float appears, so earlier integer steps keep integer semantics:
//! `div(7, 2, 0.5)` is `(7 / 2) / 0.5`, which is `6.0`.

use tablefn_foundation::{Arity, Error, Result, Type, Value};

/// Checks that there is at least one argument and that every argument is a
/// number, returning the seed and the remaining operands.
fn numeric_operands(args: &[Value]) -> Result<(&Value, &[Value])> {
    let (first, rest) = args
        .split_first()
        .ok_or_else(|| Error::arity_mismatch(Arity::Variadic(1), 0))?;
    if let Some(position) = args
        .iter()
        .position(|arg| !matches!(arg, Value::Int(_) | Value::Float(_)))
    {
        return Err(Error::invalid_argument(
            position,
            Type::Number,
            args[position].value_type(),
        ));
    }
    Ok((first, rest))
}

fn reduce(args: &[Value], op: fn(&Value, &Value) -> Result<Value>) -> Result<Value> {
    let (first, rest) = numeric_operands(args)?;
    rest.iter().try_fold(first.clone(), |acc, x| op(&acc, x))
}

#[allow(clippy::cast_precision_loss)]
fn add_values(a: &Value, b: &Value) -> Result<Value> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x
            .checked_add(*y)
            .map(Value::Int)
            .ok_or_else(|| Error::overflow("add")),
        (Value::Float(x), Value::Float(y)) => Ok(Value::Float(x + y)),
        (Value::Int(x), Value::Float(y)) => Ok(Value::Float(*x as f64 + y)),
        (Value::Float(x), Value::Int(y)) => Ok(Value::Float(x + *y as f64)),
        _ => Err(Error::invalid_argument(0, Type::Number, a.value_type())),
    }
}

#[allow(clippy::cast_precision_loss)]
fn sub_values(a: &Value, b: &Value) -> Result<Value> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x
            .checked_sub(*y)
            .map(Value::Int)
            .ok_or_else(|| Error::overflow("sub")),
        (Value::Float(x), Value::Float(y)) => Ok(Value::Float(x - y)),
        (Value::Int(x), Value::Float(y)) => Ok(Value::Float(*x as f64 - y)),
        (Value::Float(x), Value::Int(y)) => Ok(Value::Float(x - *y as f64)),
        _ => Err(Error::invalid_argument(0, Type::Number, a.value_type())),
    }
}

#[allow(clippy::cast_precision_loss)]
fn mul_values(a: &Value, b: &Value) -> Result<Value> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x
            .checked_mul(*y)
            .map(Value::Int)
            .ok_or_else(|| Error::overflow("mul")),
        (Value::Float(x), Value::Float(y)) => Ok(Value::Float(x * y)),
        (Value::Int(x), Value::Float(y)) => Ok(Value::Float(*x as f64 * y)),
        (Value::Float(x), Value::Int(y)) => Ok(Value::Float(x * *y as f64)),
        _ => Err(Error::invalid_argument(0, Type::Number, a.value_type())),
    }
}

/// Zero divisors are rejected up front by `native_div`.
#[allow(clippy::cast_precision_loss)]
fn div_values(a: &Value, b: &Value) -> Result<Value> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x
            .checked_div(*y)
            .map(Value::Int)
            .ok_or_else(|| Error::overflow("div")),
        (Value::Float(x), Value::Float(y)) => Ok(Value::Float(x / y)),
        (Value::Int(x), Value::Float(y)) => Ok(Value::Float(*x as f64 / y)),
        (Value::Float(x), Value::Int(y)) => Ok(Value::Float(x / *y as f64)),
        _ => Err(Error::invalid_argument(0, Type::Number, a.value_type())),
    }
}

/// Arithmetic: add - (add 1 2 3) -> 6
pub fn native_add(args: &[Value]) -> Result<Value> {
    reduce(args, add_values)
}

/// Arithmetic: sub - (sub 1 2 3) -> -4
pub fn native_sub(args: &[Value]) -> Result<Value> {
    reduce(args, sub_values)
}

/// Arithmetic: mul - (mul 1 2 3) -> 6
pub fn native_mul(args: &[Value]) -> Result<Value> {
    reduce(args, mul_values)
}

/// Arithmetic: div - (div 12 2 3) -> 2
///
/// Fails on a zero divisor anywhere after the first argument.
pub fn native_div(args: &[Value]) -> Result<Value> {
    let (_, divisors) = numeric_operands(args)?;
    if let Some(index) = divisors.iter().position(Value::is_zero) {
        return Err(Error::division_by_zero(index + 1));
    }
    reduce(args, div_values)
}

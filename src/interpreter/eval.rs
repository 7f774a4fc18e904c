use super::*;
use crate::ast::{BinOp, Expr, Literal};

impl<'io> Interpreter<'io> {
    pub fn eval_expr(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(lit) => Ok(eval_literal(lit)),
            Expr::Ident(name) => self.lookup(name),
            Expr::BinOp(op, left, right) => {
                // Both sides evaluate eagerly, `&&`/`||` included.
                let lv = self.eval_expr(left)?;
                let rv = self.eval_expr(right)?;
                eval_binop(*op, lv, rv)
            }
            Expr::Call { name, args } => self.call_function(name, args),
            Expr::Input => Ok(Value::Str(self.read_line().unwrap_or_default())),
        }
    }
}

fn eval_literal(lit: &Literal) -> Value {
    match lit {
        Literal::Number(n) => Value::Number(*n),
        Literal::Str(s) => Value::Str(s.clone()),
        Literal::Bool(b) => Value::Bool(*b),
    }
}

fn eval_binop(op: BinOp, left: Value, right: Value) -> Result<Value, RuntimeError> {
    match op {
        BinOp::Add => Ok(op_add(left, right)),
        BinOp::Sub => Ok(Value::Number(to_float(&left) - to_float(&right))),
        BinOp::Mul => Ok(Value::Number(to_float(&left) * to_float(&right))),
        BinOp::Div => {
            let rv = to_float(&right);
            if rv == 0.0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Number(to_float(&left) / rv))
            }
        }
        BinOp::Mod => {
            // Truncated 64-bit integer remainder.
            let rv = to_float(&right) as i64;
            if rv == 0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Number((to_float(&left) as i64 % rv) as f64))
            }
        }
        BinOp::Eq => Ok(Value::Bool(values_equal(&left, &right))),
        BinOp::Lt => Ok(Value::Bool(to_float(&left) < to_float(&right))),
        BinOp::Gt => Ok(Value::Bool(to_float(&left) > to_float(&right))),
        BinOp::Lte => Ok(Value::Bool(to_float(&left) <= to_float(&right))),
        BinOp::Gte => Ok(Value::Bool(to_float(&left) >= to_float(&right))),
        BinOp::And => Ok(Value::Bool(to_bool(&left) && to_bool(&right))),
        BinOp::Or => Ok(Value::Bool(to_bool(&left) || to_bool(&right))),
    }
}

/// `+` concatenates when either side is a string, coercing the other side
/// through `to_str`; otherwise it is numeric addition.
fn op_add(left: Value, right: Value) -> Value {
    if let Value::Str(l) = &left {
        return Value::Str(format!("{}{}", l, to_str(&right)));
    }
    if let Value::Str(r) = &right {
        return Value::Str(format!("{}{}", to_str(&left), r));
    }
    Value::Number(to_float(&left) + to_float(&right))
}

/// A string on the left only ever equals another string. Every other pair,
/// string-on-the-right included, compares number-coerced.
fn values_equal(left: &Value, right: &Value) -> bool {
    if let Value::Str(l) = left {
        return match right {
            Value::Str(r) => l == r,
            _ => false,
        };
    }
    to_float(left) == to_float(right)
}

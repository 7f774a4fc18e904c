use super::*;
use crate::ast::Expr;

impl<'io> Interpreter<'io> {
    /// Shared entry point for `name(args)` expressions and `beta` call
    /// statements. The built-in names win over user functions of the same
    /// name.
    pub(crate) fn call_function(
        &mut self,
        name: &str,
        args: &[Expr],
    ) -> Result<Value, RuntimeError> {
        match name {
            "len" => self.builtin_len(args),
            "abs" => self.builtin_abs(args),
            "str" => self.builtin_str(args),
            _ => self.call_user_function(name, args),
        }
    }

    fn call_user_function(&mut self, name: &str, args: &[Expr]) -> Result<Value, RuntimeError> {
        let func = self
            .functions
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedFunction(name.to_string()))?;

        if func.params.len() != args.len() {
            return Err(RuntimeError::ArityMismatch {
                name: name.to_string(),
                expected: func.params.len(),
                got: args.len(),
            });
        }

        // Actuals evaluate left-to-right in the caller's environment, before
        // the new activation exists.
        let mut vals = Vec::with_capacity(args.len());
        for arg in args {
            vals.push(self.eval_expr(arg)?);
        }

        let mut frame = Frame::activation();
        for (param, val) in func.params.iter().zip(vals) {
            frame.vars.insert(param.clone(), val);
        }

        self.frames.push(frame);
        let result = self.exec_stmts(&func.body);
        let return_value = self
            .frames
            .pop()
            .map(|f| f.return_value)
            .unwrap_or(Value::Unit);
        result?;
        Ok(return_value)
    }

    fn builtin_len(&mut self, args: &[Expr]) -> Result<Value, RuntimeError> {
        let arg = self.single_arg("len", args)?;
        match arg {
            Value::Str(s) => Ok(Value::Number(s.len() as f64)),
            _ => Err(RuntimeError::Message(
                "len expects a string argument".to_string(),
            )),
        }
    }

    fn builtin_abs(&mut self, args: &[Expr]) -> Result<Value, RuntimeError> {
        let arg = self.single_arg("abs", args)?;
        Ok(Value::Number(to_float(&arg).abs()))
    }

    fn builtin_str(&mut self, args: &[Expr]) -> Result<Value, RuntimeError> {
        let arg = self.single_arg("str", args)?;
        Ok(Value::Str(to_str(&arg)))
    }

    fn single_arg(&mut self, name: &str, args: &[Expr]) -> Result<Value, RuntimeError> {
        let [arg] = args else {
            return Err(RuntimeError::Message(format!("{} expects 1 argument", name)));
        };
        self.eval_expr(arg)
    }
}

use super::*;
use crate::ast::{Expr, Program, Stmt};

impl<'io> Interpreter<'io> {
    /// Run top-level statements in order against the global frame. One error
    /// aborts the rest of the program.
    pub fn execute(&mut self, program: &Program) -> Result<(), RuntimeError> {
        for stmt in &program.statements {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    pub fn exec_stmt(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::VarDecl { name, value } => {
                let val = self.eval_expr(value)?;
                self.declare(name.clone(), val);
                Ok(())
            }
            Stmt::Assign { name, value } => {
                let val = self.eval_expr(value)?;
                self.assign(name, val);
                Ok(())
            }
            Stmt::Print(expr) => {
                let val = self.eval_expr(expr)?;
                let text = to_str(&val);
                let _ = writeln!(self.out(), "{}", text);
                Ok(())
            }
            Stmt::If {
                condition,
                then_block,
                else_block,
            } => {
                let cond = self.eval_expr(condition)?;
                if to_bool(&cond) {
                    self.exec_block(then_block)
                } else if let Some(block) = else_block {
                    self.exec_block(block)
                } else {
                    Ok(())
                }
            }
            Stmt::While { condition, body } => {
                loop {
                    let cond = self.eval_expr(condition)?;
                    if !to_bool(&cond) {
                        break;
                    }
                    self.exec_block(body)?;
                    if self.returned() {
                        break;
                    }
                }
                Ok(())
            }
            Stmt::For {
                init,
                condition,
                post,
                body,
            } => {
                // One scope wraps init/condition/post so the init variable is
                // visible for the whole loop and gone afterwards.
                self.push_scope();
                let result = self.exec_for(init.as_deref(), condition, post.as_deref(), body);
                self.pop_scope();
                result
            }
            Stmt::FnDef(fd) => {
                // Redefinition replaces the earlier body.
                self.functions.insert(fd.name.clone(), Rc::new(fd.clone()));
                Ok(())
            }
            Stmt::Call { name, args } => {
                self.call_function(name, args)?;
                Ok(())
            }
            Stmt::Return(expr) => {
                let val = self.eval_expr(expr)?;
                let frame = self.function_frame_mut();
                frame.return_value = val;
                frame.returned = true;
                Ok(())
            }
        }
    }

    fn exec_for(
        &mut self,
        init: Option<&Stmt>,
        condition: &Expr,
        post: Option<&Stmt>,
        body: &[Stmt],
    ) -> Result<(), RuntimeError> {
        if let Some(init) = init {
            self.exec_stmt(init)?;
        }
        loop {
            let cond = self.eval_expr(condition)?;
            if !to_bool(&cond) {
                break;
            }
            self.exec_block(body)?;
            if self.returned() {
                break;
            }
            if let Some(post) = post {
                self.exec_stmt(post)?;
            }
        }
        Ok(())
    }

    /// Run a block in a fresh scope. The scope pops on every exit path, error
    /// included, so a failed statement cannot leak frames.
    fn exec_block(&mut self, stmts: &[Stmt]) -> Result<(), RuntimeError> {
        self.push_scope();
        let result = self.exec_stmts(stmts);
        self.pop_scope();
        result
    }

    /// Run statements in the current scope, stopping after a statement that
    /// set the activation's returned flag.
    pub(super) fn exec_stmts(&mut self, stmts: &[Stmt]) -> Result<(), RuntimeError> {
        for stmt in stmts {
            self.exec_stmt(stmt)?;
            if self.returned() {
                break;
            }
        }
        Ok(())
    }
}

use super::error::{EngineError, ErrorCode};
use super::lexer::{Lexeme, Token};
use super::program::Expr;
use super::Resolver;
use crate::registry::{Arity, Assoc, Fixity, FunctionDescriptor, Mapping, Registry};
use crate::vars::VarId;

pub const MAX_DEPTH: usize = 256;

// Identifiers are resolved as they are reached, so names before an error
// point are still created.
pub struct Compiler<'a> {
    registry: &'a Registry,
    resolver: &'a mut dyn Resolver,
    lexemes: Vec<Lexeme>,
    cursor: usize,
    end: usize,
    depth: usize,
}

impl<'a> Compiler<'a> {
    pub fn new(registry: &'a Registry, resolver: &'a mut dyn Resolver, lexemes: Vec<Lexeme>) -> Self {
        let end = lexemes.last().map(Lexeme::end).unwrap_or(0);
        Self {
            registry,
            resolver,
            lexemes,
            cursor: 0,
            end,
            depth: 0,
        }
    }

    pub fn compile_line(mut self) -> Result<Vec<Expr>, EngineError> {
        let mut exprs = vec![self.assignment()?];
        loop {
            match self.next() {
                None => return Ok(exprs),
                Some(l) if l.is(",") => exprs.push(self.assignment()?),
                Some(l) => return Err(self.unexpected(&l)),
            }
        }
    }

    fn peek(&self) -> Option<&Lexeme> {
        self.lexemes.get(self.cursor)
    }

    fn next(&mut self) -> Option<Lexeme> {
        let lexeme = self.lexemes.get(self.cursor).cloned();
        if lexeme.is_some() {
            self.cursor += 1;
        }
        lexeme
    }

    fn eat(&mut self, symbol: &str) -> bool {
        match self.peek() {
            Some(l) if l.is(symbol) => {
                self.cursor += 1;
                true
            }
            _ => false,
        }
    }

    // Every level of the tree passes through here, so the recursion in
    // `Expr::fold` and `Expr::eval` stays bounded too.
    fn enter(&mut self) -> Result<(), EngineError> {
        self.depth += 1;
        if self.depth <= MAX_DEPTH {
            return Ok(());
        }
        Err(match self.peek() {
            Some(l) => EngineError::new(ErrorCode::TooDeep, l.text.clone(), l.pos),
            None => self.at_end(ErrorCode::TooDeep),
        })
    }

    fn at_end(&self, code: ErrorCode) -> EngineError {
        EngineError::new(code, "", self.end)
    }

    fn unexpected(&self, lexeme: &Lexeme) -> EngineError {
        let code = match &lexeme.token {
            Token::Number(_) => ErrorCode::UnexpectedValue,
            Token::Ident(name) if self.registry.lookup_function(name).is_some() => {
                ErrorCode::UnexpectedFunction
            }
            Token::Ident(name) if self.registry.lookup_constant(name).is_some() => {
                ErrorCode::UnexpectedValue
            }
            Token::Ident(_) => ErrorCode::UnexpectedVariable,
            Token::Symbol("(") | Token::Symbol(")") => ErrorCode::UnexpectedParens,
            Token::Symbol(",") => ErrorCode::UnexpectedArgSep,
            Token::Symbol("?") => ErrorCode::UnexpectedConditional,
            Token::Symbol(":") => ErrorCode::MisplacedColon,
            Token::Symbol(_) => ErrorCode::UnexpectedOperator,
            Token::Unknown(_) => ErrorCode::UnassignableToken,
        };
        EngineError::new(code, lexeme.text.clone(), lexeme.pos)
    }

    fn assignment(&mut self) -> Result<Expr, EngineError> {
        self.enter()?;
        let expr = self.assignment_inner()?;
        self.depth -= 1;
        Ok(expr)
    }

    fn assignment_inner(&mut self) -> Result<Expr, EngineError> {
        let is_assignment = match (self.lexemes.get(self.cursor), self.lexemes.get(self.cursor + 1)) {
            (Some(target), Some(op)) => matches!(target.token, Token::Ident(_)) && op.is("="),
            _ => false,
        };
        if !is_assignment {
            return self.ternary();
        }

        let target = self.lexemes[self.cursor].clone();
        self.cursor += 2;
        let id = self.assign_target(&target)?;
        let value = self.assignment()?;
        Ok(Expr::Assign(id, Box::new(value)))
    }

    fn assign_target(&mut self, target: &Lexeme) -> Result<VarId, EngineError> {
        let name = target.text.as_str();
        if self.registry.lookup_function(name).is_some()
            || self.registry.lookup_constant(name).is_some()
        {
            return Err(EngineError::new(ErrorCode::NotAssignable, name, target.pos));
        }
        if self.resolver.is_reserved(name) {
            return Err(EngineError::new(ErrorCode::ReservedName, name, target.pos));
        }
        Ok(self.resolver.resolve(name))
    }

    fn ternary(&mut self) -> Result<Expr, EngineError> {
        let cond = self.binary(1)?;
        if !self.eat("?") {
            return Ok(cond);
        }

        let then = self.assignment()?;
        match self.next() {
            Some(l) if l.is(":") => (),
            Some(l) => return Err(EngineError::new(ErrorCode::MissingElseClause, l.text, l.pos)),
            None => return Err(self.at_end(ErrorCode::MissingElseClause)),
        }
        let else_ = self.assignment()?;

        Ok(Expr::Ternary(Box::new(cond), Box::new(then), Box::new(else_)))
    }

    fn peek_operator(&self, fixity: Fixity) -> Option<(u8, Assoc, Mapping)> {
        match self.peek().map(|l| &l.token) {
            Some(Token::Symbol(s)) => self
                .registry
                .lookup_operator(s, fixity)
                .map(|op| (op.precedence, op.assoc, op.mapping)),
            _ => None,
        }
    }

    fn binary(&mut self, min_prec: u8) -> Result<Expr, EngineError> {
        let mut lhs = self.prefix()?;
        let mut chain = 0;
        loop {
            let (prec, assoc, f) = match self.peek_operator(Fixity::Infix) {
                Some((prec, assoc, Mapping::Binary(f))) if prec >= min_prec => (prec, assoc, f),
                _ => break,
            };
            self.cursor += 1;
            self.enter()?;
            chain += 1;

            let next_min = match assoc {
                Assoc::Left => prec + 1,
                Assoc::Right => prec,
            };
            let rhs = self.binary(next_min)?;
            lhs = Expr::Binary(f, Box::new(lhs), Box::new(rhs));
        }
        self.depth -= chain;
        Ok(lhs)
    }

    fn prefix(&mut self) -> Result<Expr, EngineError> {
        match self.peek_operator(Fixity::Prefix) {
            Some((prec, _, Mapping::Unary(f))) => {
                self.cursor += 1;
                self.enter()?;
                // binds looser than `^`: -2^2 is -(2^2)
                let operand = self.binary(prec + 1)?;
                self.depth -= 1;
                Ok(Expr::Unary(f, Box::new(operand)))
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Expr, EngineError> {
        let lexeme = match self.next() {
            Some(l) => l,
            None => return Err(self.at_end(ErrorCode::UnexpectedEof)),
        };

        match &lexeme.token {
            Token::Number(x) => Ok(Expr::Value(*x)),
            Token::Ident(name) => self.identifier(&lexeme, name),
            Token::Symbol("(") => {
                let inner = self.assignment()?;
                self.close_paren()?;
                Ok(inner)
            }
            _ => Err(self.unexpected(&lexeme)),
        }
    }

    fn close_paren(&mut self) -> Result<(), EngineError> {
        match self.next() {
            Some(l) if l.is(")") => Ok(()),
            Some(l) => Err(self.unexpected(&l)),
            None => Err(self.at_end(ErrorCode::MissingParens)),
        }
    }

    fn identifier(&mut self, lexeme: &Lexeme, name: &str) -> Result<Expr, EngineError> {
        let registry = self.registry;
        if let Some(func) = registry.lookup_function(name) {
            return self.call(lexeme, func);
        }
        if let Some(value) = registry.lookup_constant(name) {
            return Ok(Expr::Value(value));
        }
        Ok(Expr::Var(self.resolver.resolve(name)))
    }

    fn call(&mut self, lexeme: &Lexeme, func: &FunctionDescriptor) -> Result<Expr, EngineError> {
        if !self.eat("(") {
            return Err(EngineError::new(
                ErrorCode::UnexpectedFunction,
                lexeme.text.clone(),
                lexeme.pos,
            ));
        }

        let mut args = Vec::new();
        if !self.eat(")") {
            loop {
                args.push(self.assignment()?);
                match self.next() {
                    Some(l) if l.is(",") => continue,
                    Some(l) if l.is(")") => break,
                    Some(l) => return Err(self.unexpected(&l)),
                    None => return Err(self.at_end(ErrorCode::MissingParens)),
                }
            }
        }

        if !func.arity.accepts(args.len()) {
            let code = match func.arity {
                Arity::Fixed(n) if args.len() > n => ErrorCode::TooManyParams,
                _ => ErrorCode::TooFewParams,
            };
            return Err(EngineError::new(code, lexeme.text.clone(), lexeme.pos));
        }

        Ok(Expr::Call(*func, args))
    }
}

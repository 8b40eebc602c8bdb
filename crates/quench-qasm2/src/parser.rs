//! Parser for `OpenQASM` 2.0.
//!
//! Covers the subset the benchmark suite files use: register
//! declarations, standard-library gate applications with constant
//! parameter expressions, measurements, barriers and resets. Custom
//! `gate` definitions, `opaque` declarations and `if` statements are
//! rejected as unsupported rather than silently skipped.

use rustc_hash::FxHashMap;

use quench_ir::{Circuit, ClbitId, Gate, Instruction, QubitId};

use crate::ast::{Argument, Program, Statement};
use crate::error::{ParseError, ParseResult};
use crate::lexer::{SpannedToken, Token, tokenize};

/// Parse a QASM 2.0 source string into a [`Circuit`].
pub fn parse(source: &str) -> ParseResult<Circuit> {
    let program = parse_ast(source)?;
    lower_to_circuit(&program)
}

/// Parse a QASM 2.0 source string into an AST [`Program`].
pub fn parse_ast(source: &str) -> ParseResult<Program> {
    let mut parser = Parser::new(source)?;
    parser.parse_program()
}

/// Parser state.
struct Parser<'a> {
    source: &'a str,
    tokens: Vec<SpannedToken>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> ParseResult<Self> {
        let tokens = tokenize(source).map_err(|span| ParseError::Lexer {
            line: line_of(source, span.start),
            slice: source[span].to_string(),
        })?;
        Ok(Self {
            source,
            tokens,
            pos: 0,
        })
    }

    /// 1-based line of the current token, for error reporting.
    fn line(&self) -> usize {
        let offset = self
            .tokens
            .get(self.pos.min(self.tokens.len().saturating_sub(1)))
            .map_or(self.source.len(), |t| t.span.start);
        line_of(self.source, offset)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|t| t.token.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: &Token) -> ParseResult<Token> {
        let line = self.line();
        let found = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof(format!("expected {expected}")))?;
        if std::mem::discriminant(&found) != std::mem::discriminant(expected) {
            return Err(ParseError::UnexpectedToken {
                line,
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
        Ok(found)
    }

    fn expect_identifier(&mut self) -> ParseResult<String> {
        match self.expect(&Token::Identifier(String::new()))? {
            Token::Identifier(name) => Ok(name),
            _ => unreachable!("expect() checked the discriminant"),
        }
    }

    fn expect_int(&mut self) -> ParseResult<u64> {
        match self.expect(&Token::IntLiteral(0))? {
            Token::IntLiteral(value) => Ok(value),
            _ => unreachable!("expect() checked the discriminant"),
        }
    }

    // =========================================================================
    // Grammar
    // =========================================================================

    fn parse_program(&mut self) -> ParseResult<Program> {
        self.expect(&Token::OpenQasm)?;
        let version = match self.advance() {
            Some(Token::FloatLiteral(v)) => format!("{v:.1}"),
            Some(Token::IntLiteral(v)) => v.to_string(),
            other => {
                return Err(ParseError::UnsupportedVersion(
                    other.map_or_else(|| "<eof>".to_string(), |t| t.to_string()),
                ));
            }
        };
        if !version.starts_with('2') {
            return Err(ParseError::UnsupportedVersion(version));
        }
        self.expect(&Token::Semicolon)?;

        let mut includes = vec![];
        while matches!(self.peek(), Some(Token::Include)) {
            self.advance();
            match self.expect(&Token::StringLiteral(String::new()))? {
                Token::StringLiteral(file) => includes.push(file),
                _ => unreachable!("expect() checked the discriminant"),
            }
            self.expect(&Token::Semicolon)?;
        }

        let mut statements = vec![];
        while self.peek().is_some() {
            statements.push(self.parse_statement()?);
        }

        Ok(Program {
            version,
            includes,
            statements,
        })
    }

    fn parse_statement(&mut self) -> ParseResult<Statement> {
        let line = self.line();
        match self.peek() {
            Some(Token::Qreg) => {
                self.advance();
                let (name, size) = self.parse_register_decl()?;
                Ok(Statement::QregDecl { name, size })
            }
            Some(Token::Creg) => {
                self.advance();
                let (name, size) = self.parse_register_decl()?;
                Ok(Statement::CregDecl { name, size })
            }
            Some(Token::Measure) => {
                self.advance();
                let qubit = self.parse_argument()?;
                self.expect(&Token::Arrow)?;
                let clbit = self.parse_argument()?;
                self.expect(&Token::Semicolon)?;
                Ok(Statement::Measure { qubit, clbit })
            }
            Some(Token::Barrier) => {
                self.advance();
                let args = self.parse_argument_list()?;
                self.expect(&Token::Semicolon)?;
                Ok(Statement::Barrier { args })
            }
            Some(Token::Reset) => {
                self.advance();
                let arg = self.parse_argument()?;
                self.expect(&Token::Semicolon)?;
                Ok(Statement::Reset { arg })
            }
            Some(Token::Gate) => Err(ParseError::Unsupported(
                "custom gate definitions".to_string(),
            )),
            Some(Token::Opaque) => Err(ParseError::Unsupported("opaque gates".to_string())),
            Some(Token::If) => Err(ParseError::Unsupported(
                "classically conditioned statements".to_string(),
            )),
            Some(Token::Identifier(_)) => {
                let name = self.expect_identifier()?;
                let params = if matches!(self.peek(), Some(Token::LParen)) {
                    self.parse_params()?
                } else {
                    vec![]
                };
                let args = self.parse_argument_list()?;
                self.expect(&Token::Semicolon)?;
                Ok(Statement::Gate { name, params, args })
            }
            Some(other) => Err(ParseError::UnexpectedToken {
                line,
                expected: "statement".to_string(),
                found: other.to_string(),
            }),
            None => Err(ParseError::UnexpectedEof("expected statement".to_string())),
        }
    }

    fn parse_register_decl(&mut self) -> ParseResult<(String, u32)> {
        let name = self.expect_identifier()?;
        self.expect(&Token::LBracket)?;
        let size = self.expect_int()? as u32;
        self.expect(&Token::RBracket)?;
        self.expect(&Token::Semicolon)?;
        Ok((name, size))
    }

    fn parse_argument(&mut self) -> ParseResult<Argument> {
        let register = self.expect_identifier()?;
        if matches!(self.peek(), Some(Token::LBracket)) {
            self.advance();
            let index = self.expect_int()? as u32;
            self.expect(&Token::RBracket)?;
            Ok(Argument::indexed(register, index))
        } else {
            Ok(Argument::whole(register))
        }
    }

    fn parse_argument_list(&mut self) -> ParseResult<Vec<Argument>> {
        let mut args = vec![self.parse_argument()?];
        while matches!(self.peek(), Some(Token::Comma)) {
            self.advance();
            args.push(self.parse_argument()?);
        }
        Ok(args)
    }

    fn parse_params(&mut self) -> ParseResult<Vec<f64>> {
        self.expect(&Token::LParen)?;
        let mut params = vec![self.parse_expr()?];
        while matches!(self.peek(), Some(Token::Comma)) {
            self.advance();
            params.push(self.parse_expr()?);
        }
        self.expect(&Token::RParen)?;
        Ok(params)
    }

    // Constant expression grammar, folded at parse time:
    //   expr   := term (('+' | '-') term)*
    //   term   := factor (('*' | '/') factor)*
    //   factor := '-'* primary ('^' factor)?
    //   primary := int | float | pi | '(' expr ')'

    fn parse_expr(&mut self) -> ParseResult<f64> {
        let mut value = self.parse_term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.advance();
                    value += self.parse_term()?;
                }
                Some(Token::Minus) => {
                    self.advance();
                    value -= self.parse_term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn parse_term(&mut self) -> ParseResult<f64> {
        let mut value = self.parse_factor()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.advance();
                    value *= self.parse_factor()?;
                }
                Some(Token::Slash) => {
                    self.advance();
                    value /= self.parse_factor()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn parse_factor(&mut self) -> ParseResult<f64> {
        if matches!(self.peek(), Some(Token::Minus)) {
            self.advance();
            return Ok(-self.parse_factor()?);
        }
        let base = self.parse_primary()?;
        if matches!(self.peek(), Some(Token::Caret)) {
            self.advance();
            let exponent = self.parse_factor()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn parse_primary(&mut self) -> ParseResult<f64> {
        let line = self.line();
        match self.advance() {
            Some(Token::IntLiteral(v)) => Ok(v as f64),
            Some(Token::FloatLiteral(v)) => Ok(v),
            Some(Token::Pi) => Ok(std::f64::consts::PI),
            Some(Token::LParen) => {
                let value = self.parse_expr()?;
                self.expect(&Token::RParen)?;
                Ok(value)
            }
            Some(other) => Err(ParseError::UnexpectedToken {
                line,
                expected: "expression".to_string(),
                found: other.to_string(),
            }),
            None => Err(ParseError::UnexpectedEof("expected expression".to_string())),
        }
    }
}

/// 1-based line number of a byte offset.
fn line_of(source: &str, offset: usize) -> usize {
    source[..offset.min(source.len())]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
        + 1
}

// =============================================================================
// Lowering
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct Register {
    offset: u32,
    size: u32,
}

/// Lower a parsed program to a flat-indexed circuit.
///
/// Register elements map to flat wire indices in declaration order.
fn lower_to_circuit(program: &Program) -> ParseResult<Circuit> {
    let mut qregs: FxHashMap<&str, Register> = FxHashMap::default();
    let mut cregs: FxHashMap<&str, Register> = FxHashMap::default();
    let mut num_qubits = 0u32;
    let mut num_clbits = 0u32;

    for statement in &program.statements {
        match statement {
            Statement::QregDecl { name, size } => {
                if qregs.contains_key(name.as_str()) {
                    return Err(ParseError::DuplicateRegister(name.clone()));
                }
                qregs.insert(
                    name,
                    Register {
                        offset: num_qubits,
                        size: *size,
                    },
                );
                num_qubits += size;
            }
            Statement::CregDecl { name, size } => {
                if cregs.contains_key(name.as_str()) {
                    return Err(ParseError::DuplicateRegister(name.clone()));
                }
                cregs.insert(
                    name,
                    Register {
                        offset: num_clbits,
                        size: *size,
                    },
                );
                num_clbits += size;
            }
            _ => {}
        }
    }

    let mut circuit = Circuit::new("main", num_qubits, num_clbits);

    for statement in &program.statements {
        match statement {
            Statement::QregDecl { .. } | Statement::CregDecl { .. } => {}
            Statement::Gate { name, params, args } => {
                let gate = Gate::from_name(name, params)
                    .ok_or_else(|| ParseError::UnknownGate(name.clone()))?;
                let resolved = resolve_all(args, &qregs)?;
                for qubits in broadcast(&resolved, "gate")? {
                    circuit.push(Instruction::gate(
                        gate,
                        qubits.into_iter().map(QubitId),
                    ))?;
                }
            }
            Statement::Measure { qubit, clbit } => {
                let q = resolve(qubit, &qregs)?;
                let c = resolve(clbit, &cregs)?;
                for pair in broadcast(&[q, c], "measure")? {
                    circuit.measure(QubitId(pair[0]), ClbitId(pair[1]))?;
                }
            }
            Statement::Barrier { args } => {
                let mut qubits = vec![];
                for arg in args {
                    let resolved = resolve(arg, &qregs)?;
                    match resolved {
                        Resolved::Single(q) => qubits.push(QubitId(q)),
                        Resolved::Whole { offset, size } => {
                            qubits.extend((offset..offset + size).map(QubitId));
                        }
                    }
                }
                circuit.barrier(qubits)?;
            }
            Statement::Reset { arg } => {
                let resolved = resolve(arg, &qregs)?;
                match resolved {
                    Resolved::Single(q) => {
                        circuit.reset(QubitId(q))?;
                    }
                    Resolved::Whole { offset, size } => {
                        for q in offset..offset + size {
                            circuit.reset(QubitId(q))?;
                        }
                    }
                }
            }
        }
    }

    Ok(circuit)
}

/// A register argument resolved to flat indices.
#[derive(Debug, Clone, Copy)]
enum Resolved {
    /// A single wire.
    Single(u32),
    /// A whole register starting at `offset`.
    Whole { offset: u32, size: u32 },
}

fn resolve(arg: &Argument, regs: &FxHashMap<&str, Register>) -> ParseResult<Resolved> {
    let reg = regs
        .get(arg.register.as_str())
        .ok_or_else(|| ParseError::UndeclaredRegister(arg.register.clone()))?;
    match arg.index {
        Some(index) => {
            if index >= reg.size {
                return Err(ParseError::IndexOutOfBounds {
                    register: arg.register.clone(),
                    index,
                    size: reg.size,
                });
            }
            Ok(Resolved::Single(reg.offset + index))
        }
        None => Ok(Resolved::Whole {
            offset: reg.offset,
            size: reg.size,
        }),
    }
}

fn resolve_all(args: &[Argument], regs: &FxHashMap<&str, Register>) -> ParseResult<Vec<Resolved>> {
    args.iter().map(|arg| resolve(arg, regs)).collect()
}

/// Expand QASM register broadcast: whole-register arguments of equal size
/// repeat the operation element-wise, indexed arguments stay fixed.
fn broadcast(args: &[Resolved], statement: &str) -> ParseResult<Vec<Vec<u32>>> {
    let mut reps = None;
    for arg in args {
        if let Resolved::Whole { size, .. } = arg {
            match reps {
                None => reps = Some(*size),
                Some(existing) if existing == *size => {}
                Some(_) => {
                    return Err(ParseError::BroadcastMismatch {
                        statement: statement.to_string(),
                    });
                }
            }
        }
    }

    let reps = reps.unwrap_or(1);
    Ok((0..reps)
        .map(|k| {
            args.iter()
                .map(|arg| match arg {
                    Resolved::Single(wire) => *wire,
                    Resolved::Whole { offset, .. } => offset + k,
                })
                .collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bell() {
        let circuit = parse(
            r#"
            OPENQASM 2.0;
            include "qelib1.inc";
            qreg q[2];
            creg c[2];
            h q[0];
            cx q[0], q[1];
            measure q[0] -> c[0];
            measure q[1] -> c[1];
            "#,
        )
        .unwrap();

        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_clbits(), 2);
        assert_eq!(circuit.depth(), 3);
        let counts = circuit.count_ops();
        assert_eq!(counts.get("h").copied(), Some(1));
        assert_eq!(counts.get("cx").copied(), Some(1));
        assert_eq!(counts.get("measure").copied(), Some(2));
    }

    #[test]
    fn test_parse_parameterized() {
        let circuit = parse(
            "OPENQASM 2.0;\nqreg q[2];\ncp(pi/4) q[1], q[0];\nrz(-pi/2) q[0];\nu3(0.1,0.2,0.3) q[1];\n",
        )
        .unwrap();

        assert_eq!(circuit.size(), 3);
        let cp = circuit.instructions()[0].as_gate().unwrap();
        assert_eq!(cp.params(), vec![std::f64::consts::PI / 4.0]);
        let rz = circuit.instructions()[1].as_gate().unwrap();
        assert_eq!(rz.params(), vec![-std::f64::consts::PI / 2.0]);
    }

    #[test]
    fn test_expression_precedence() {
        let circuit = parse("OPENQASM 2.0;\nqreg q[1];\nrz(1+2*3) q[0];\nrz(2^3^2) q[0];\n").unwrap();
        let first = circuit.instructions()[0].as_gate().unwrap();
        assert_eq!(first.params(), vec![7.0]);
        // '^' is right-associative: 2^(3^2) = 512
        let second = circuit.instructions()[1].as_gate().unwrap();
        assert_eq!(second.params(), vec![512.0]);
    }

    #[test]
    fn test_register_broadcast() {
        let circuit = parse(
            "OPENQASM 2.0;\nqreg q[3];\ncreg c[3];\nh q;\nmeasure q -> c;\n",
        )
        .unwrap();

        let counts = circuit.count_ops();
        assert_eq!(counts.get("h").copied(), Some(3));
        assert_eq!(counts.get("measure").copied(), Some(3));
    }

    #[test]
    fn test_two_qreg_offsets() {
        let circuit = parse(
            "OPENQASM 2.0;\nqreg a[2];\nqreg b[2];\ncx a[1], b[0];\n",
        )
        .unwrap();

        assert_eq!(circuit.num_qubits(), 4);
        // b[0] is flat index 2
        assert_eq!(
            circuit.instructions()[0].qubits,
            vec![QubitId(1), QubitId(2)]
        );
    }

    #[test]
    fn test_barrier_whole_register() {
        let circuit = parse("OPENQASM 2.0;\nqreg q[4];\nbarrier q;\n").unwrap();
        assert_eq!(circuit.instructions()[0].qubits.len(), 4);
        assert_eq!(circuit.depth(), 0);
    }

    #[test]
    fn test_unknown_gate() {
        let err = parse("OPENQASM 2.0;\nqreg q[1];\nwiggle q[0];\n").unwrap_err();
        assert!(matches!(err, ParseError::UnknownGate(name) if name == "wiggle"));
    }

    #[test]
    fn test_undeclared_register() {
        let err = parse("OPENQASM 2.0;\nqreg q[1];\nh r[0];\n").unwrap_err();
        assert!(matches!(err, ParseError::UndeclaredRegister(name) if name == "r"));
    }

    #[test]
    fn test_index_out_of_bounds() {
        let err = parse("OPENQASM 2.0;\nqreg q[2];\nh q[5];\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::IndexOutOfBounds { index: 5, size: 2, .. }
        ));
    }

    #[test]
    fn test_wrong_version() {
        let err = parse("OPENQASM 3.0;\nqreg q[1];\n").unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedVersion(_)));
    }

    #[test]
    fn test_gate_definition_rejected() {
        let err = parse("OPENQASM 2.0;\ngate foo a { h a; }\n").unwrap_err();
        assert!(matches!(err, ParseError::Unsupported(_)));
    }

    #[test]
    fn test_broadcast_mismatch() {
        let err = parse(
            "OPENQASM 2.0;\nqreg a[2];\nqreg b[3];\ncx a, b;\n",
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::BroadcastMismatch { .. }));
    }
}

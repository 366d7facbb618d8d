//! Parser for the netlist format.

use std::collections::{HashMap, HashSet};

use super::ast::*;
use super::lexer::{Lexer, Token, TokenKind};
use crate::circuit::NodeId;
use crate::error::{NodalError, Result};
use crate::value::parse_value;

/// Parser for netlists.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire netlist.
    pub fn parse(&mut self) -> Result<CircuitAst> {
        let mut ast = CircuitAst::new();

        while self.current.kind != TokenKind::Eof {
            match self.current.kind {
                TokenKind::Newline => {}
                TokenKind::Directive => {
                    if self.parse_directive(&mut ast)? {
                        break;
                    }
                }
                TokenKind::Identifier => {
                    let component = self.parse_component()?;
                    ast.components.push(component);
                }
                TokenKind::Number | TokenKind::Eof => {
                    return Err(NodalError::parse(
                        self.current.line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }

            self.expect_line_end()?;
        }

        name_bare_components(&mut ast.components);
        Ok(ast)
    }

    fn advance(&mut self) -> Result<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            self.advance()
        } else {
            Err(NodalError::parse(
                self.current.line,
                format!("expected {:?}, got {:?}", kind, self.current.kind),
            ))
        }
    }

    fn expect_line_end(&mut self) -> Result<()> {
        match self.current.kind {
            TokenKind::Newline => {
                self.advance()?;
                Ok(())
            }
            TokenKind::Eof => Ok(()),
            _ => Err(NodalError::parse(
                self.current.line,
                format!("unexpected trailing token: {:?}", self.current.text),
            )),
        }
    }

    /// Parse a directive line. Returns `true` when parsing should stop (`.end`).
    fn parse_directive(&mut self, ast: &mut CircuitAst) -> Result<bool> {
        let directive = self.advance()?;
        let line = directive.line;

        match directive.text.to_lowercase().as_str() {
            ".sweep" => {
                let source = self.expect(TokenKind::Identifier)?.text;
                let start = self.parse_number()?;
                let stop = self.parse_number()?;
                let step = self.parse_number()?;
                ast.sweeps.push(SweepDirective {
                    source,
                    start,
                    stop,
                    step,
                    line,
                });
                Ok(false)
            }
            ".end" => Ok(true),
            _ => Err(NodalError::parse(
                line,
                format!("unknown directive: {}", directive.text),
            )),
        }
    }

    fn parse_component(&mut self) -> Result<ComponentDef> {
        let first_token = self.advance()?;
        let line = first_token.line;

        let first_char = first_token.text.chars().next().unwrap_or('?');
        let component_type = ComponentType::from_prefix(first_char).ok_or_else(|| {
            NodalError::UnknownComponentKind {
                kind: first_token.text.clone(),
                line,
            }
        })?;

        // Bare `R` / `V` lines are named once the whole netlist is read
        let name = if first_token.text.chars().count() == 1 {
            String::new()
        } else {
            first_token.text.clone()
        };

        let nodes = [self.parse_node()?, self.parse_node()?];

        // Optional source type keyword
        if component_type == ComponentType::VoltageSource
            && self.current.kind == TokenKind::Identifier
            && self.current.text.eq_ignore_ascii_case("DC")
        {
            self.advance()?;
        }

        let value = match self.current.kind {
            TokenKind::Number | TokenKind::Identifier => {
                let text = self.advance()?.text;
                parse_value(&text)?
            }
            _ => {
                return Err(NodalError::parse(
                    line,
                    format!("component '{}' requires a value", first_token.text),
                ));
            }
        };

        Ok(ComponentDef {
            component_type,
            name,
            nodes,
            value,
            line,
        })
    }

    fn parse_node(&mut self) -> Result<NodeId> {
        let line = self.current.line;
        match self.current.kind {
            TokenKind::Number => {
                let text = self.advance()?.text;
                text.parse::<usize>()
                    .map(NodeId)
                    .map_err(|_| NodalError::parse(line, format!("invalid node '{}'", text)))
            }
            TokenKind::Identifier if self.current.text.eq_ignore_ascii_case("GND") => {
                self.advance()?;
                Ok(NodeId::GROUND)
            }
            _ => Err(NodalError::parse(
                line,
                format!("expected node number, got {:?}", self.current.text),
            )),
        }
    }

    fn parse_number(&mut self) -> Result<f64> {
        let tok = self.expect(TokenKind::Number)?;
        parse_value(&tok.text)
    }
}

/// Name unnamed components `R1`, `R2`, ... by kind, skipping names that
/// appear explicitly anywhere in the netlist.
fn name_bare_components(components: &mut [ComponentDef]) {
    let taken: HashSet<String> = components
        .iter()
        .filter(|c| !c.name.is_empty())
        .map(|c| c.name.clone())
        .collect();
    let mut counters: HashMap<char, usize> = HashMap::new();

    for comp in components.iter_mut().filter(|c| c.name.is_empty()) {
        let prefix = comp.component_type.prefix();
        let counter = counters.entry(prefix).or_insert(0);
        comp.name = loop {
            *counter += 1;
            let candidate = format!("{}{}", prefix, counter);
            if !taken.contains(&candidate) {
                break candidate;
            }
        };
    }
}

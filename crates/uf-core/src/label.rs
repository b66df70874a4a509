//! Composed unit names.
//!
//! A name is read as a product of `factor^exponent` terms so that repeated
//! factors collapse when units are combined: `m*m/m` renders as `m` and
//! `(km/h)^2` as `km^2/h^2`. Names that do not parse stay a single opaque
//! factor.

use crate::dimension::{Exponent, checked_mul, checked_sum};
use crate::unit::DIMENSIONLESS_NAME;

const OPERATORS: [char; 5] = ['*', '/', '^', '(', ')'];

/// Ordered `(factor, exponent)` terms; zero exponents are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Factors(Vec<(String, Exponent)>);

impl Factors {
    pub(crate) fn parse(label: &str) -> Self {
        let mut parser = Parser { src: label, pos: 0 };
        match parser.expr() {
            Some(factors) if parser.pos == label.len() => factors,
            _ => Self::single(label),
        }
    }

    /// Merge `other^k` into these terms. `None` on exponent overflow.
    pub(crate) fn combine(mut self, other: &Factors, k: Exponent) -> Option<Self> {
        for (name, e) in &other.0 {
            let e = checked_mul(*e, k)?;
            self.accumulate(name, e)?;
        }
        Some(self)
    }

    pub(crate) fn powered(&self, k: Exponent) -> Option<Self> {
        Self::default().combine(self, k)
    }

    pub(crate) fn render(&self) -> String {
        let numer: Vec<String> = self
            .0
            .iter()
            .filter(|(_, e)| *e > Exponent::from_integer(0))
            .map(|(name, e)| term(name, *e))
            .collect();
        let denom: Vec<String> = self
            .0
            .iter()
            .filter(|(_, e)| *e < Exponent::from_integer(0))
            .map(|(name, e)| term(name, -*e))
            .collect();

        let head = if numer.is_empty() {
            "1".to_string()
        } else {
            numer.join("*")
        };
        match denom.len() {
            0 => head,
            1 => format!("{head}/{}", denom[0]),
            _ => format!("{head}/({})", denom.join("*")),
        }
    }

    fn single(name: &str) -> Self {
        if name == "1" || name == DIMENSIONLESS_NAME {
            return Self::default();
        }
        Self(vec![(name.to_string(), Exponent::from_integer(1))])
    }

    fn accumulate(&mut self, name: &str, e: Exponent) -> Option<()> {
        match self.0.iter().position(|(n, _)| n == name) {
            Some(i) => {
                let sum = checked_sum(self.0[i].1, e)?;
                if sum == Exponent::from_integer(0) {
                    self.0.remove(i);
                } else {
                    self.0[i].1 = sum;
                }
            }
            None if e != Exponent::from_integer(0) => self.0.push((name.to_string(), e)),
            None => {}
        }
        Some(())
    }
}

fn term(name: &str, e: Exponent) -> String {
    let base = if name.contains(OPERATORS) {
        format!("({name})")
    } else {
        name.to_string()
    };
    if e == Exponent::from_integer(1) {
        base
    } else if e.is_integer() {
        format!("{base}^{e}")
    } else {
        format!("{base}^({e})")
    }
}

// expr    := term (('*' | '/') term)*
// term    := primary ('^' exponent)?
// primary := '(' expr ')' | name
struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn expr(&mut self) -> Option<Factors> {
        let mut out = self.term()?;
        loop {
            let sign = if self.eat('*') {
                1
            } else if self.eat('/') {
                -1
            } else {
                return Some(out);
            };
            let rhs = self.term()?;
            out = out.combine(&rhs, Exponent::from_integer(sign))?;
        }
    }

    fn term(&mut self) -> Option<Factors> {
        let base = self.primary()?;
        if self.eat('^') {
            let e = self.exponent()?;
            return base.powered(e);
        }
        Some(base)
    }

    fn primary(&mut self) -> Option<Factors> {
        if self.eat('(') {
            let inner = self.expr()?;
            return self.eat(')').then_some(inner);
        }
        let start = self.pos;
        while let Some(c) = self.peek() {
            if OPERATORS.contains(&c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        let name = &self.src[start..self.pos];
        if name.is_empty() {
            return None;
        }
        Some(Factors::single(name))
    }

    fn exponent(&mut self) -> Option<Exponent> {
        if self.eat('(') {
            let numer = self.integer()?;
            let denom = if self.eat('/') { self.integer()? } else { 1 };
            if denom <= 0 || !self.eat(')') {
                return None;
            }
            return Some(Exponent::new(numer, denom));
        }
        self.integer().map(Exponent::from_integer)
    }

    fn integer(&mut self) -> Option<i32> {
        let start = self.pos;
        self.eat('-');
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
        self.src[start..self.pos]
            .parse()
            .ok()
            .filter(|n: &i32| *n != i32::MIN)
    }
}

use std::fmt;

use crate::ast::{escape_identifier, ArithmeticOp, ComparatorOp, ConstantValue, Type};

/// Byte offsets of a node in the original query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Field(Field),
    Constant(Constant),
    Call(Call),
    Compare(CompareOperation),
    And(Vec<Expr>),
    Or(Vec<Expr>),
    Not(Box<Expr>),
    Arithmetic(ArithmeticOperation),
    Alias(Alias),
    Tuple(Vec<Expr>),
}

/// A column or property reference, e.g. `events.properties.$browser`.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub chain: Vec<String>,
    pub ty: Option<Type>,
    pub span: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub value: ConstantValue,
    pub span: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name: String,
    pub args: Vec<Expr>,
    pub span: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompareOperation {
    pub left: Box<Expr>,
    pub op: ComparatorOp,
    pub right: Box<Expr>,
    pub span: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArithmeticOperation {
    pub left: Box<Expr>,
    pub op: ArithmeticOp,
    pub right: Box<Expr>,
    pub span: Option<Span>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alias {
    pub alias: String,
    pub expr: Box<Expr>,
    pub span: Option<Span>,
}

impl Field {
    pub fn new(chain: &[&str], ty: Type) -> Self {
        Self {
            chain: chain.iter().map(|part| part.to_string()).collect(),
            ty: Some(ty),
            span: None,
        }
    }

    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.span = Some(Span::new(start, end));
        self
    }

    pub fn last(&self) -> Option<&str> {
        self.chain.last().map(String::as_str)
    }
}

impl Expr {
    pub fn constant(value: ConstantValue) -> Expr {
        Expr::Constant(Constant { value, span: None })
    }

    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Expr {
        Expr::Call(Call { name: name.into(), args, span: None })
    }

    pub fn compare(left: Expr, op: ComparatorOp, right: Expr) -> Expr {
        Expr::Compare(CompareOperation {
            left: Box::new(left),
            op,
            right: Box::new(right),
            span: None,
        })
    }

    pub fn arithmetic(left: Expr, op: ArithmeticOp, right: Expr) -> Expr {
        Expr::Arithmetic(ArithmeticOperation {
            left: Box::new(left),
            op,
            right: Box::new(right),
            span: None,
        })
    }

    pub fn alias(alias: impl Into<String>, expr: Expr) -> Expr {
        Expr::Alias(Alias { alias: alias.into(), expr: Box::new(expr), span: None })
    }

    pub fn as_constant(&self) -> Option<&ConstantValue> {
        match self {
            Expr::Constant(constant) => Some(&constant.value),
            _ => None,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Expr::Field(node) => node.span,
            Expr::Constant(node) => node.span,
            Expr::Call(node) => node.span,
            Expr::Compare(node) => node.span,
            Expr::Arithmetic(node) => node.span,
            Expr::Alias(node) => node.span,
            Expr::And(_) | Expr::Or(_) | Expr::Not(_) | Expr::Tuple(_) => None,
        }
    }
}

impl From<Field> for Expr {
    fn from(field: Field) -> Self {
        Expr::Field(field)
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Expr], separator: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", separator)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Field(field) => {
                let chain =
                    field.chain.iter().map(|part| escape_identifier(part)).collect::<Vec<_>>();
                write!(f, "{}", chain.join("."))
            }
            Expr::Constant(constant) => write!(f, "{}", constant.value),
            Expr::Call(call) => {
                write!(f, "{}(", call.name)?;
                write_joined(f, &call.args, ", ")?;
                write!(f, ")")
            }
            Expr::Compare(cmp) => write!(f, "{} {} {}", cmp.left, cmp.op, cmp.right),
            Expr::Arithmetic(op) => write!(f, "({} {} {})", op.left, op.op, op.right),
            Expr::And(items) => {
                write!(f, "(")?;
                write_joined(f, items, " AND ")?;
                write!(f, ")")
            }
            Expr::Or(items) => {
                write!(f, "(")?;
                write_joined(f, items, " OR ")?;
                write!(f, ")")
            }
            Expr::Not(inner) => write!(f, "NOT {}", inner),
            Expr::Alias(alias) => {
                write!(f, "{} AS {}", alias.expr, escape_identifier(&alias.alias))
            }
            Expr::Tuple(items) => {
                write!(f, "(")?;
                write_joined(f, items, ", ")?;
                write!(f, ")")
            }
        }
    }
}

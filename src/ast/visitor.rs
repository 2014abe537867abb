//! Traversal helpers for expression trees.
//!
//! [`Visitor`] walks a tree read-only, [`CloningVisitor`] builds a fresh copy
//! of it. Both recurse into every child by default; implementors override
//! only the hooks they care about and call the matching `walk_*` /
//! `clone_*` function to keep the default recursion.

use crate::ast::{
    Alias, ArithmeticOperation, Call, CompareOperation, Expr, Field, FieldType, PropertyType, Type,
};

pub trait Visitor {
    fn visit(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    fn visit_field(&mut self, field: &Field) {
        walk_field(self, field);
    }

    fn visit_type(&mut self, ty: &Type) {
        walk_type(self, ty);
    }

    fn visit_field_type(&mut self, _field_type: &FieldType) {}

    fn visit_property_type(&mut self, property_type: &PropertyType) {
        self.visit_field_type(&property_type.field_type);
    }
}

pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expr) {
    match expr {
        Expr::Field(field) => visitor.visit_field(field),
        Expr::Constant(_) => {}
        Expr::Call(call) => call.args.iter().for_each(|arg| visitor.visit(arg)),
        Expr::Compare(CompareOperation { left, right, .. })
        | Expr::Arithmetic(ArithmeticOperation { left, right, .. }) => {
            visitor.visit(left);
            visitor.visit(right);
        }
        Expr::And(items) | Expr::Or(items) | Expr::Tuple(items) => {
            items.iter().for_each(|item| visitor.visit(item))
        }
        Expr::Not(inner) => visitor.visit(inner),
        Expr::Alias(alias) => visitor.visit(&alias.expr),
    }
}

pub fn walk_field<V: Visitor + ?Sized>(visitor: &mut V, field: &Field) {
    if let Some(ty) = &field.ty {
        visitor.visit_type(ty);
    }
}

pub fn walk_type<V: Visitor + ?Sized>(visitor: &mut V, ty: &Type) {
    match ty {
        Type::Field(field_type) => visitor.visit_field_type(field_type),
        Type::Property(property_type) => visitor.visit_property_type(property_type),
    }
}

/// Rebuilds a tree node by node. Bindings and spans are carried over as-is.
pub trait CloningVisitor {
    fn visit(&mut self, expr: &Expr) -> Expr {
        clone_expr(self, expr)
    }

    fn visit_field(&mut self, field: &Field) -> Expr {
        clone_field(self, field)
    }

    fn visit_property_field(&mut self, field: &Field, _property_type: &PropertyType) -> Expr {
        Expr::Field(field.clone())
    }
}

pub fn clone_expr<V: CloningVisitor + ?Sized>(visitor: &mut V, expr: &Expr) -> Expr {
    match expr {
        Expr::Field(field) => visitor.visit_field(field),
        Expr::Constant(constant) => Expr::Constant(constant.clone()),
        Expr::Call(call) => Expr::Call(Call {
            name: call.name.clone(),
            args: call.args.iter().map(|arg| visitor.visit(arg)).collect(),
            span: call.span,
        }),
        Expr::Compare(cmp) => Expr::Compare(CompareOperation {
            left: Box::new(visitor.visit(&cmp.left)),
            op: cmp.op,
            right: Box::new(visitor.visit(&cmp.right)),
            span: cmp.span,
        }),
        Expr::Arithmetic(op) => Expr::Arithmetic(ArithmeticOperation {
            left: Box::new(visitor.visit(&op.left)),
            op: op.op,
            right: Box::new(visitor.visit(&op.right)),
            span: op.span,
        }),
        Expr::And(items) => Expr::And(items.iter().map(|item| visitor.visit(item)).collect()),
        Expr::Or(items) => Expr::Or(items.iter().map(|item| visitor.visit(item)).collect()),
        Expr::Tuple(items) => Expr::Tuple(items.iter().map(|item| visitor.visit(item)).collect()),
        Expr::Not(inner) => Expr::Not(Box::new(visitor.visit(inner))),
        Expr::Alias(alias) => Expr::Alias(Alias {
            alias: alias.alias.clone(),
            expr: Box::new(visitor.visit(&alias.expr)),
            span: alias.span,
        }),
    }
}

pub fn clone_field<V: CloningVisitor + ?Sized>(visitor: &mut V, field: &Field) -> Expr {
    match &field.ty {
        Some(Type::Property(property_type)) => visitor.visit_property_field(field, property_type),
        _ => Expr::Field(field.clone()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        ast::{ComparatorOp, ConstantValue, TableType},
        database::{DatabaseField, Table},
    };

    fn events() -> TableType {
        TableType::base(Arc::new(
            Table::new("events")
                .with_field("event", DatabaseField::String)
                .with_field("properties", DatabaseField::StringJson),
        ))
    }

    fn tree() -> Expr {
        let event = Field::new(&["event"], Type::Field(FieldType::new("event", events())));
        let plan = PropertyType::new(vec!["plan".into()], FieldType::new("properties", events()));
        let prop = Field::new(&["properties", "plan"], Type::Property(plan));
        Expr::Or(vec![
            Expr::compare(
                event.into(),
                ComparatorOp::Eq,
                Expr::constant(ConstantValue::string("signup")),
            ),
            Expr::alias("p", Expr::call("lower", vec![prop.into()])),
        ])
    }

    #[derive(Default)]
    struct Counter {
        fields: usize,
        field_types: Vec<String>,
        properties: usize,
    }

    impl Visitor for Counter {
        fn visit_field(&mut self, field: &Field) {
            self.fields += 1;
            walk_field(self, field);
        }

        fn visit_field_type(&mut self, field_type: &FieldType) {
            self.field_types.push(field_type.name.clone());
        }

        fn visit_property_type(&mut self, property_type: &PropertyType) {
            self.properties += 1;
            self.visit_field_type(&property_type.field_type);
        }
    }

    #[test]
    fn visitor_reaches_every_field_and_binding() {
        let mut counter = Counter::default();
        counter.visit(&tree());
        assert_eq!(counter.fields, 2);
        assert_eq!(counter.properties, 1);
        assert_eq!(counter.field_types, vec!["event".to_string(), "properties".to_string()]);
    }

    struct Identity;
    impl CloningVisitor for Identity {}

    #[test]
    fn default_cloning_visitor_rebuilds_an_equal_tree() {
        let input = tree();
        assert_eq!(Identity.visit(&input), input);
    }

    struct Upper;
    impl CloningVisitor for Upper {
        fn visit_property_field(&mut self, field: &Field, _property_type: &PropertyType) -> Expr {
            Expr::call("upper", vec![Expr::Field(field.clone())])
        }
    }

    #[test]
    fn property_hook_only_sees_property_fields() {
        let output = Upper.visit(&tree());
        assert_eq!(output.to_string(), "(event = 'signup' OR lower(upper(properties.plan)) AS p)");
    }
}

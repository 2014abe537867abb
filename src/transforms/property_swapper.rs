use tracing::{debug, trace};

use crate::{
    ast::{
        clone_expr, clone_field, escape_identifier, CloningVisitor, ComparatorOp, ConstantValue,
        Expr, Field, PropertyType, Type,
    },
    catalog::PropertyKind,
    context::{Notice, Notices},
    transforms::{PropertyScope, PropertyTypeMaps},
};

pub const TO_TIMEZONE: &str = "toTimeZone";
pub const TO_DATETIME: &str = "toDateTime";
pub const TO_FLOAT: &str = "toFloat";
pub const BOOLEAN_TRUE: &str = "true";

/// Rebuilds a tree with property coercions and timezone conversions applied.
pub struct PropertySwapper<'a> {
    timezone: String,
    types: &'a PropertyTypeMaps,
    notices: Option<&'a mut Notices>,
    dropped_notices: usize,
}

impl<'a> PropertySwapper<'a> {
    pub fn new(
        timezone: impl Into<String>,
        types: &'a PropertyTypeMaps,
        notices: Option<&'a mut Notices>,
    ) -> Self {
        Self { timezone: timezone.into(), types, notices, dropped_notices: 0 }
    }

    /// Rewrite `node`, returning the new tree.
    pub fn swap(mut self, node: &Expr) -> Expr {
        let swapped = self.visit(node);
        if self.dropped_notices > 0 {
            debug!(
                dropped = self.dropped_notices,
                "no notice sink available, property notices dropped"
            );
        }
        swapped
    }

    fn add_notice(&mut self, field: &Field, name: &str, message: String) {
        let Some(notices) = self.notices.as_deref_mut() else {
            self.dropped_notices += 1;
            return;
        };

        // only highlight the property name at the end of the chain
        let (start, end) = match field.span {
            Some(span) => {
                let last = field.last().unwrap_or(name);
                let width = escape_identifier(last).len();
                (Some(span.start.max(span.end.saturating_sub(width))), Some(span.end))
            }
            None => (None, None),
        };
        notices.push(Notice::new(start, end, message));
    }

    fn add_type_to_field(&mut self, field: &Field, name: &str, kind: PropertyKind) -> Expr {
        let label = field.last().unwrap_or(name).to_string();
        let message = format!("Property '{}' is of type '{}'", label, kind.display_name());
        self.add_notice(field, name, message);
        trace!(property = %label, ?kind, "coercing property");

        let node = Expr::Field(field.clone());
        match kind {
            PropertyKind::DateTime => Expr::call(TO_DATETIME, vec![node]),
            PropertyKind::Numeric => Expr::call(TO_FLOAT, vec![node]),
            PropertyKind::Boolean => Expr::compare(
                node,
                ComparatorOp::Eq,
                Expr::constant(ConstantValue::string(BOOLEAN_TRUE)),
            ),
            PropertyKind::String | PropertyKind::Unknown => node,
        }
    }

    /// Cataloged kind of a single-segment property read, if any.
    fn property_kind(&self, expr: &Expr) -> Option<PropertyKind> {
        let Expr::Field(Field { ty: Some(Type::Property(property_type)), .. }) = expr else {
            return None;
        };
        let (scope, name) = PropertyScope::of(property_type)?;
        self.types.get(scope, name)
    }

    fn is_datetime_field(expr: &Expr) -> bool {
        matches!(
            expr,
            Expr::Field(Field { ty: Some(Type::Field(field_type)), .. }) if field_type.is_datetime()
        )
    }

    /// True when `expr` is exactly what this swapper would emit for its inner
    /// field. Such nodes are kept as-is so a second run never stacks another
    /// conversion; any other wrapper is rewritten like the rest of the tree.
    fn is_coerced(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Call(call) => match (call.name.as_str(), call.args.as_slice()) {
                (TO_FLOAT, [arg]) => self.property_kind(arg) == Some(PropertyKind::Numeric),
                (TO_DATETIME, [arg]) => self.property_kind(arg) == Some(PropertyKind::DateTime),
                (TO_TIMEZONE, [arg, timezone]) => {
                    Self::is_datetime_field(arg)
                        && timezone.as_constant().and_then(ConstantValue::as_str)
                            == Some(self.timezone.as_str())
                }
                _ => false,
            },
            Expr::Compare(cmp) => {
                cmp.op == ComparatorOp::Eq
                    && self.property_kind(&cmp.left) == Some(PropertyKind::Boolean)
                    && cmp.right.as_constant().and_then(ConstantValue::as_str) == Some(BOOLEAN_TRUE)
            }
            _ => false,
        }
    }
}

impl CloningVisitor for PropertySwapper<'_> {
    fn visit(&mut self, expr: &Expr) -> Expr {
        if self.is_coerced(expr) {
            return expr.clone();
        }
        clone_expr(self, expr)
    }

    fn visit_field(&mut self, field: &Field) -> Expr {
        if let Some(Type::Field(field_type)) = &field.ty {
            if field_type.is_datetime() {
                trace!(field = %field_type.name, timezone = %self.timezone, "converting timezone");
                let timezone = Expr::constant(ConstantValue::string(self.timezone.clone()));
                return Expr::call(TO_TIMEZONE, vec![Expr::Field(field.clone()), timezone]);
            }
        }
        clone_field(self, field)
    }

    fn visit_property_field(&mut self, field: &Field, property_type: &PropertyType) -> Expr {
        if let Some((scope, name)) = PropertyScope::of(property_type) {
            if let Some(kind) = self.types.get(scope, name) {
                return self.add_type_to_field(field, name, kind);
            }
        }
        Expr::Field(field.clone())
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::{ast::Span, transforms::fixtures::Fixtures};

    fn to_map(items: &[(&str, PropertyKind)]) -> IndexMap<String, PropertyKind> {
        items.iter().map(|(name, kind)| (name.to_string(), *kind)).collect()
    }

    fn maps(person: &[(&str, PropertyKind)], event: &[(&str, PropertyKind)]) -> PropertyTypeMaps {
        PropertyTypeMaps { person_properties: to_map(person), event_properties: to_map(event) }
    }

    #[test]
    fn coerces_each_kind() {
        let fx = Fixtures::new();
        let types = maps(
            &[("age", PropertyKind::Numeric), ("is_active", PropertyKind::Boolean)],
            &[
                ("sent_at", PropertyKind::DateTime),
                ("plan", PropertyKind::String),
                ("odd", PropertyKind::Unknown),
            ],
        );
        let mut notices = Notices::new();

        let tree = Expr::Tuple(vec![
            fx.person_property("age").into(),
            fx.person_property("is_active").into(),
            fx.event_property("sent_at").into(),
            fx.event_property("plan").into(),
            fx.event_property("odd").into(),
        ]);
        let output = PropertySwapper::new("UTC", &types, Some(&mut notices)).swap(&tree);

        assert_eq!(
            output.to_string(),
            concat!(
                "(toFloat(properties.age), properties.is_active = 'true', ",
                "toDateTime(properties.sent_at), properties.plan, properties.odd)"
            )
        );
        let messages = notices.iter().map(|n| n.message.as_str()).collect::<Vec<_>>();
        assert_eq!(
            messages,
            vec![
                "Property 'age' is of type 'Float'",
                "Property 'is_active' is of type 'Boolean'",
                "Property 'sent_at' is of type 'DateTime'",
                "Property 'plan' is of type 'String'",
                "Property 'odd' is of type 'String'",
            ]
        );
    }

    #[test]
    fn boolean_becomes_a_comparison_not_a_call() {
        let fx = Fixtures::new();
        let types = maps(&[("is_active", PropertyKind::Boolean)], &[]);
        let output =
            PropertySwapper::new("UTC", &types, None).swap(&fx.person_property("is_active").into());

        match output {
            Expr::Compare(cmp) => {
                assert_eq!(cmp.op, ComparatorOp::Eq);
                assert_eq!(*cmp.left, Expr::Field(fx.person_property("is_active")));
                assert_eq!(cmp.right.as_constant(), Some(&ConstantValue::string("true")));
            }
            other => panic!("expected comparison, got {other:?}"),
        }
    }

    #[test]
    fn wraps_timestamps_in_the_given_timezone() {
        let fx = Fixtures::new();
        let types = PropertyTypeMaps::default();
        let output =
            PropertySwapper::new("Europe/Lisbon", &types, None).swap(&fx.timestamp().into());
        assert_eq!(output.to_string(), "toTimeZone(timestamp, 'Europe/Lisbon')");
    }

    #[test]
    fn routes_lookups_by_scope() {
        let fx = Fixtures::new();
        // same name, different type per scope
        let types =
            maps(&[("email", PropertyKind::Boolean)], &[("email", PropertyKind::Numeric)]);
        let tree = Expr::Tuple(vec![
            fx.poe_property("email").into(),
            fx.event_property("email").into(),
            fx.raw_person_property("email").into(),
            fx.events_person_property("email").into(),
        ]);

        let output = PropertySwapper::new("UTC", &types, None).swap(&tree);
        assert_eq!(
            output.to_string(),
            concat!(
                "(events.person.properties.email = 'true', toFloat(properties.email), ",
                "properties.email = 'true', person_properties.email = 'true')"
            )
        );
    }

    #[test]
    fn multi_segment_paths_are_left_alone() {
        let fx = Fixtures::new();
        let types = maps(&[], &[("a", PropertyKind::Numeric)]);
        let mut notices = Notices::new();
        let tree: Expr = fx.event_property_path(&["a", "b"]).into();

        let output = PropertySwapper::new("UTC", &types, Some(&mut notices)).swap(&tree);
        assert_eq!(output, tree);
        assert!(notices.is_empty());
    }

    #[test]
    fn notice_span_covers_only_the_property_name() {
        let fx = Fixtures::new();
        let types = maps(
            &[],
            &[("country", PropertyKind::String), ("first name", PropertyKind::String)],
        );
        let mut notices = Notices::new();
        // "properties.country" at 10..28, "properties.`first name`" at 40..63
        let tree = Expr::Tuple(vec![
            fx.event_property("country").with_span(10, 28).into(),
            fx.event_property("first name").with_span(40, 63).into(),
            fx.event_property("country").into(),
        ]);

        PropertySwapper::new("UTC", &types, Some(&mut notices)).swap(&tree);

        let spans = notices.iter().map(|n| (n.start, n.end)).collect::<Vec<_>>();
        assert_eq!(spans, vec![(Some(21), Some(28)), (Some(51), Some(63)), (None, None)]);
    }

    #[test]
    fn notice_span_never_starts_before_the_node() {
        let fx = Fixtures::new();
        let types = maps(&[], &[("country", PropertyKind::String)]);
        let mut notices = Notices::new();
        let mut field = fx.event_property("country");
        field.span = Some(Span::new(2, 5));

        PropertySwapper::new("UTC", &types, Some(&mut notices)).swap(&field.into());
        assert_eq!(notices.as_slice()[0].start, Some(2));
        assert_eq!(notices.as_slice()[0].end, Some(5));
    }

    #[test]
    fn previously_coerced_nodes_are_not_wrapped_again() {
        let fx = Fixtures::new();
        let types =
            maps(&[("age", PropertyKind::Numeric), ("is_active", PropertyKind::Boolean)], &[]);
        let tree = Expr::Tuple(vec![
            fx.person_property("age").into(),
            fx.person_property("is_active").into(),
            fx.timestamp().into(),
        ]);

        let once = PropertySwapper::new("UTC", &types, None).swap(&tree);
        let mut notices = Notices::new();
        let twice = PropertySwapper::new("UTC", &types, Some(&mut notices)).swap(&once);

        assert_eq!(twice, once);
        assert!(notices.is_empty());
    }

    #[test]
    fn user_written_casts_of_the_wrong_kind_are_still_rewritten() {
        let fx = Fixtures::new();
        let types =
            maps(&[("age", PropertyKind::Numeric)], &[("flag", PropertyKind::Boolean)]);
        let mut notices = Notices::new();
        let tree = Expr::Tuple(vec![
            Expr::call(TO_DATETIME, vec![fx.person_property("age").into()]),
            Expr::call(TO_FLOAT, vec![fx.event_property("flag").into()]),
        ]);

        let output = PropertySwapper::new("UTC", &types, Some(&mut notices)).swap(&tree);

        assert_eq!(
            output.to_string(),
            "(toDateTime(toFloat(properties.age)), toFloat(properties.flag = 'true'))"
        );
        assert_eq!(notices.len(), 2);
    }

    #[test]
    fn casts_of_untyped_properties_are_not_mistaken_for_coercions() {
        let fx = Fixtures::new();
        let types = maps(&[], &[("plan", PropertyKind::String)]);
        let mut notices = Notices::new();
        // the outer call matches a coerced shape, but "plan" is not numeric
        let tree = Expr::call(TO_FLOAT, vec![fx.event_property("plan").into()]);

        let output = PropertySwapper::new("UTC", &types, Some(&mut notices)).swap(&tree);

        assert_eq!(output, tree);
        assert_eq!(notices.len(), 1);
    }

    #[test]
    fn timezone_conversions_to_another_zone_are_converted_again() {
        let fx = Fixtures::new();
        let types = PropertyTypeMaps::default();
        let tree = Expr::call(
            TO_TIMEZONE,
            vec![fx.timestamp().into(), Expr::constant(ConstantValue::string("UTC"))],
        );

        let same = PropertySwapper::new("UTC", &types, None).swap(&tree);
        assert_eq!(same, tree);

        let other = PropertySwapper::new("Asia/Tokyo", &types, None).swap(&tree);
        assert_eq!(
            other.to_string(),
            "toTimeZone(toTimeZone(timestamp, 'Asia/Tokyo'), 'UTC')"
        );
    }
}

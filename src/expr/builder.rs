//! Predicate-builder API
//!
//! ```ignore
//! let ids = json!([1, 2, 3]);
//! let filter = Expr::field("Name")
//!     .like_or_null(query.name.clone())
//!     .and(Expr::value(ids).contains_or_null(Expr::field("Id")));
//! ```

use serde_json::Value;

use super::{BinaryOperator, Expr, Method};
use crate::ast::ValueKind;
use crate::translate::TranslateResult;

impl Expr {
    /// The model instance being filtered
    pub fn subject() -> Self {
        Expr::Subject
    }

    /// A constant; its kind is inferred when translated
    pub fn value(value: impl Into<Value>) -> Self {
        Expr::Constant {
            value: value.into(),
            kind: ValueKind::Any,
        }
    }

    /// A constant with a declared kind, e.g. a `null` id set
    pub fn typed_value(value: impl Into<Value>, kind: ValueKind) -> Self {
        Expr::Constant {
            value: value.into(),
            kind,
        }
    }

    /// A captured caller value. Members read from it fold into constants.
    pub fn captured(value: impl Into<Value>) -> Self {
        Self::value(value)
    }

    /// Member chain on the subject, e.g. `"SubModel.Name"`
    pub fn field(path: &str) -> Self {
        path.split('.')
            .fold(Expr::Subject, |receiver, name| receiver.get(name))
    }

    /// Member of this expression
    pub fn get(self, name: impl Into<String>) -> Self {
        Expr::Member {
            receiver: Box::new(self),
            name: name.into(),
            kind: ValueKind::Any,
        }
    }

    /// Declares the kind of a member or constant; other shapes are unchanged
    pub fn typed(self, declared: ValueKind) -> Self {
        match self {
            Expr::Member { receiver, name, .. } => Expr::Member {
                receiver,
                name,
                kind: declared,
            },
            Expr::Constant { value, .. } => Expr::Constant {
                value,
                kind: declared,
            },
            other => other,
        }
    }

    pub fn lambda(body: Expr) -> Self {
        Expr::Lambda {
            body: Box::new(body),
        }
    }

    /// Wraps this expression in a no-op coercion
    pub fn convert(self) -> Self {
        Expr::Convert {
            operand: Box::new(self),
        }
    }

    pub fn binary(op: BinaryOperator, left: Expr, right: impl Into<Expr>) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right.into()),
        }
    }

    pub fn equals(self, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinaryOperator::Equal, self, rhs)
    }

    pub fn not_equals(self, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinaryOperator::NotEqual, self, rhs)
    }

    pub fn gt(self, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinaryOperator::GreaterThan, self, rhs)
    }

    pub fn ge(self, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinaryOperator::GreaterThanOrEqual, self, rhs)
    }

    pub fn lt(self, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinaryOperator::LessThan, self, rhs)
    }

    pub fn le(self, rhs: impl Into<Expr>) -> Self {
        Self::binary(BinaryOperator::LessThanOrEqual, self, rhs)
    }

    pub fn and(self, rhs: Expr) -> Self {
        Self::binary(BinaryOperator::AndAlso, self, rhs)
    }

    pub fn or(self, rhs: Expr) -> Self {
        Self::binary(BinaryOperator::OrElse, self, rhs)
    }

    fn method(method: Method, receiver: Option<Expr>, args: Vec<Expr>) -> Self {
        Expr::Call {
            method,
            receiver: receiver.map(Box::new),
            args,
        }
    }

    /// `member LIKE @p + '%'`
    pub fn starts_with(self, arg: impl Into<Expr>) -> Self {
        Self::method(Method::StartsWith, Some(self), vec![arg.into()])
    }

    /// Substring match on a member, or membership when called on a collection
    pub fn contains(self, arg: impl Into<Expr>) -> Self {
        Self::method(Method::Contains, Some(self), vec![arg.into()])
    }

    /// `member LIKE '%' + @p`
    pub fn ends_with(self, arg: impl Into<Expr>) -> Self {
        Self::method(Method::EndsWith, Some(self), vec![arg.into()])
    }

    /// Two-operand collection membership: `member IN @collection`
    pub fn in_collection(collection: impl Into<Expr>, member: Expr) -> Self {
        Self::method(Method::Contains, None, vec![collection.into(), member])
    }

    pub fn like_or_null(self, arg: impl Into<Expr>) -> Self {
        Self::method(Method::LikeOrNull, None, vec![self, arg.into()])
    }

    pub fn equals_or_null(self, arg: impl Into<Expr>) -> Self {
        Self::method(Method::EqualsOrNull, None, vec![self, arg.into()])
    }

    /// Collection receiver with member argument, or member receiver with text
    pub fn contains_or_null(self, arg: impl Into<Expr>) -> Self {
        Self::method(Method::ContainsOrNull, None, vec![self, arg.into()])
    }

    /// Call by method name, for front-ends that only know the name
    pub fn call(name: &str, receiver: Option<Expr>, args: Vec<Expr>) -> TranslateResult<Self> {
        let method = Method::from_name(name, args.len())?;
        Ok(Self::method(method, receiver, args))
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::value(value)
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::value(value)
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Expr::value(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::value(value)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::value(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Expr::value(value)
    }
}

//! Type definitions of the SQL AST representation.
//!
//! One recursive [`Expression`] type carries every scalar construct; the
//! clause and statement shapes around it stay structured so the qualifier
//! pass can rewrite column references without parsing text.

use quill_schema::value::Value;

/// A scalar expression.
///
/// Rendering produces dialect-agnostic text with `?` placeholders plus the
/// ordered parameters; composition concatenates both in the same relative
/// order.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Renders to nothing; used to detect and suppress degenerate clauses.
    Empty,
    /// Literal SQL text with no parameters.
    Text(String),
    /// A template whose `?` placeholders bind the parameters in order.
    Parametrized {
        template: String,
        parameters: Vec<Value>,
    },
    /// Ordered subexpressions rendered as `start`, the subexpressions
    /// interspersed with `separator`, then `end`. An empty sequence renders
    /// as [`Expression::Empty`].
    Compound(Compound),
    /// A column reference, the one node the qualifier pass rewrites.
    Column(ColumnReference),
    /// An aggregate (set function) application.
    SetFunction(SetFunction),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Compound {
    pub expressions: Vec<Expression>,
    pub start: String,
    pub separator: String,
    pub end: String,
}

/// A reference to a column, optionally qualified by a table alias or name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnReference {
    pub name: String,
    pub qualifier: Option<String>,
}

/// An aggregate function applied to one column, e.g. `count(age)` or
/// `group_concat(name, ', ')`.
#[derive(Debug, Clone, PartialEq)]
pub struct SetFunction {
    pub function: String,
    pub argument: ColumnReference,
    /// A literal list separator for string-aggregation shapes.
    pub separator: Option<String>,
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub quantifier: SetQuantifier,
    pub select_list: SelectList,
    pub from: From,
    pub where_: Where,
    pub group_by: GroupBy,
    pub order_by: OrderBy,
}

/// ALL vs DISTINCT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetQuantifier {
    #[default]
    All,
    Distinct,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectList {
    pub columns: Vec<DerivedColumn>,
}

/// One projected item, optionally renamed with an AS clause.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedColumn {
    pub value: Expression,
    pub alias: Option<String>,
}

/// A FROM clause.
#[derive(Debug, Clone, PartialEq)]
pub enum From {
    Table(TablePrimary),
    Join(QualifiedJoin),
}

/// A table reference with an optional alias.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePrimary {
    pub table: TableName,
    pub alias: Option<String>,
}

/// A table name, optionally qualified by a schema or catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName {
    pub name: String,
    pub qualifier: Option<String>,
}

/// An explicit join between two table primaries. The qualifier pass leaves
/// joins untouched; their aliasing is caller intent.
#[derive(Debug, Clone, PartialEq)]
pub struct QualifiedJoin {
    pub left: TablePrimary,
    pub join_type: JoinType,
    pub right: TablePrimary,
    pub on: Expression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    LeftOuter,
}

/// A WHERE clause; an empty expression means no clause at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Where(pub Expression);

#[derive(Debug, Clone, PartialEq)]
pub struct GroupBy {
    pub columns: Vec<ColumnReference>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub elements: Vec<OrderByElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByElement {
    pub target: Expression,
    pub direction: OrderByDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderByDirection {
    Asc,
    Desc,
}

//! Convert the SQL AST to the low-level parameterized string.

use super::ast::*;
use super::string::Sql;

impl Expression {
    pub fn to_sql(&self, sql: &mut Sql) {
        match self {
            Expression::Empty => {}
            Expression::Text(text) => sql.append_syntax(text),
            Expression::Parametrized {
                template,
                parameters,
            } => {
                let mut parameters = parameters.iter();
                for c in template.chars() {
                    if c == '?' {
                        match parameters.next() {
                            Some(parameter) => sql.append_param(parameter.clone()),
                            None => sql.append_syntax("?"),
                        }
                    } else {
                        sql.append_syntax(&c.to_string());
                    }
                }
            }
            Expression::Compound(compound) => compound.to_sql(sql),
            Expression::Column(column) => column.to_sql(sql),
            Expression::SetFunction(function) => function.to_sql(sql),
        }
    }

    pub fn sql(&self) -> Sql {
        let mut sql = Sql::new();
        self.to_sql(&mut sql);
        sql
    }

    pub fn text(&self) -> String {
        self.sql().text
    }

    pub fn parameters(&self) -> Vec<quill_schema::value::Value> {
        self.sql().params
    }

    /// Textual emptiness, the test used to suppress degenerate clauses.
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

impl Compound {
    pub fn to_sql(&self, sql: &mut Sql) {
        if self.expressions.is_empty() {
            return;
        }
        sql.append_syntax(&self.start);
        for (index, expression) in self.expressions.iter().enumerate() {
            expression.to_sql(sql);
            if index < self.expressions.len() - 1 {
                sql.append_syntax(&self.separator);
            }
        }
        sql.append_syntax(&self.end);
    }
}

impl ColumnReference {
    pub fn to_sql(&self, sql: &mut Sql) {
        if let Some(qualifier) = &self.qualifier {
            sql.append_identifier(qualifier);
            sql.append_syntax(".");
        }
        sql.append_identifier(&self.name);
    }
}

impl SetFunction {
    pub fn to_sql(&self, sql: &mut Sql) {
        sql.append_syntax(&self.function);
        sql.append_syntax("(");
        self.argument.to_sql(sql);
        if let Some(separator) = &self.separator {
            sql.append_syntax(", '");
            sql.append_syntax(&separator.replace('\'', "''"));
            sql.append_syntax("'");
        }
        sql.append_syntax(")");
    }
}

impl Select {
    pub fn to_sql(&self, sql: &mut Sql) {
        sql.append_syntax("SELECT ");
        self.quantifier.to_sql(sql);
        self.select_list.to_sql(sql);
        sql.append_syntax(" FROM ");
        self.from.to_sql(sql);
        self.where_.to_sql(sql);
        self.group_by.to_sql(sql);
        self.order_by.to_sql(sql);
    }

    pub fn sql(&self) -> Sql {
        let mut sql = Sql::new();
        self.to_sql(&mut sql);
        sql
    }

    /// The whole statement as one expression, for embedding as a derived
    /// table or correlated sub-select.
    pub fn to_expression(&self) -> Expression {
        let sql = self.sql();
        if sql.params.is_empty() {
            Expression::Text(sql.text)
        } else {
            Expression::Parametrized {
                template: sql.text,
                parameters: sql.params,
            }
        }
    }
}

impl SetQuantifier {
    pub fn to_sql(&self, sql: &mut Sql) {
        match self {
            SetQuantifier::All => {}
            SetQuantifier::Distinct => sql.append_syntax("DISTINCT "),
        }
    }
}

impl SelectList {
    pub fn to_sql(&self, sql: &mut Sql) {
        // An empty projection selects every column.
        if self.columns.is_empty() {
            sql.append_syntax("*");
            return;
        }
        for (index, column) in self.columns.iter().enumerate() {
            column.to_sql(sql);
            if index < self.columns.len() - 1 {
                sql.append_syntax(", ");
            }
        }
    }
}

impl DerivedColumn {
    pub fn to_sql(&self, sql: &mut Sql) {
        self.value.to_sql(sql);
        if let Some(alias) = &self.alias {
            sql.append_syntax(" AS ");
            sql.append_identifier(alias);
        }
    }
}

impl From {
    pub fn to_sql(&self, sql: &mut Sql) {
        match self {
            From::Table(primary) => primary.to_sql(sql),
            From::Join(join) => join.to_sql(sql),
        }
    }
}

impl TablePrimary {
    pub fn to_sql(&self, sql: &mut Sql) {
        self.table.to_sql(sql);
        if let Some(alias) = &self.alias {
            sql.append_syntax(" AS ");
            sql.append_identifier(alias);
        }
    }
}

impl TableName {
    pub fn to_sql(&self, sql: &mut Sql) {
        if let Some(qualifier) = &self.qualifier {
            sql.append_identifier(qualifier);
            sql.append_syntax(".");
        }
        sql.append_identifier(&self.name);
    }
}

impl QualifiedJoin {
    pub fn to_sql(&self, sql: &mut Sql) {
        self.left.to_sql(sql);
        match self.join_type {
            JoinType::Inner => sql.append_syntax(" INNER JOIN "),
            JoinType::LeftOuter => sql.append_syntax(" LEFT OUTER JOIN "),
        }
        self.right.to_sql(sql);
        sql.append_syntax(" ON ");
        self.on.to_sql(sql);
    }
}

impl Where {
    pub fn to_sql(&self, sql: &mut Sql) {
        let Where(expression) = self;
        if !expression.is_empty() {
            sql.append_syntax(" WHERE ");
            expression.to_sql(sql);
        }
    }
}

impl GroupBy {
    pub fn to_sql(&self, sql: &mut Sql) {
        if !self.columns.is_empty() {
            sql.append_syntax(" GROUP BY ");
            for (index, column) in self.columns.iter().enumerate() {
                column.to_sql(sql);
                if index < self.columns.len() - 1 {
                    sql.append_syntax(", ");
                }
            }
        }
    }
}

impl OrderBy {
    pub fn to_sql(&self, sql: &mut Sql) {
        if !self.elements.is_empty() {
            sql.append_syntax(" ORDER BY ");
            for (index, element) in self.elements.iter().enumerate() {
                element.to_sql(sql);
                if index < self.elements.len() - 1 {
                    sql.append_syntax(", ");
                }
            }
        }
    }
}

impl OrderByElement {
    pub fn to_sql(&self, sql: &mut Sql) {
        self.target.to_sql(sql);
        self.direction.to_sql(sql);
    }
}

impl OrderByDirection {
    pub fn to_sql(&self, sql: &mut Sql) {
        match self {
            OrderByDirection::Asc => sql.append_syntax(" ASC"),
            OrderByDirection::Desc => sql.append_syntax(" DESC"),
        }
    }
}

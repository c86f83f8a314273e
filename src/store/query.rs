//! Declarative read requests and their PostgREST query-string encoding.

/// How many rows a read expects back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Any number of rows.
    Many,
    /// Zero or one row; more than one is an error.
    MaybeSingle,
}

/// Sort column and direction. The column may name a relation's column,
/// e.g. `player(last_name)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

/// One read against a store table.
///
/// ```rust
/// use dynasty_ffl::store::Select;
///
/// let select = Select::from("regular_season_standings")
///     .columns("*, team:teams(*)")
///     .eq("season_id", "s1")
///     .order("rank", true);
///
/// assert_eq!(
///     select.to_query_params(),
///     vec![
///         ("select".to_string(), "*,team:teams(*)".to_string()),
///         ("season_id".to_string(), "eq.s1".to_string()),
///         ("order".to_string(), "rank.asc".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub table: String,
    pub columns: String,
    pub filters: Vec<(String, String)>,
    pub order: Option<Order>,
    pub cardinality: Cardinality,
}

impl Select {
    /// Select every column of `table`.
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: "*".to_string(),
            filters: Vec::new(),
            order: None,
            cardinality: Cardinality::Many,
        }
    }

    /// Set the select expression. Whitespace is dropped outside double
    /// quotes, so multi-line relation selections can be written readably.
    pub fn columns(mut self, expr: &str) -> Self {
        self.columns = compact_select(expr);
        self
    }

    /// Add an equality filter.
    pub fn eq(mut self, column: impl Into<String>, value: impl ToString) -> Self {
        self.filters
            .push((column.into(), format!("eq.{}", value.to_string())));
        self
    }

    pub fn order(mut self, column: impl Into<String>, ascending: bool) -> Self {
        self.order = Some(Order {
            column: column.into(),
            ascending,
        });
        self
    }

    pub fn maybe_single(mut self) -> Self {
        self.cardinality = Cardinality::MaybeSingle;
        self
    }

    /// Query-string parameters in the order PostgREST clients send them.
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(self.filters.len() + 2);
        params.push(("select".to_string(), self.columns.clone()));
        params.extend(self.filters.iter().cloned());
        if let Some(order) = &self.order {
            let direction = if order.ascending { "asc" } else { "desc" };
            params.push((
                "order".to_string(),
                format!("{}.{}", order.column, direction),
            ));
        }
        params
    }
}

fn compact_select(expr: &str) -> String {
    let mut quoted = false;
    expr.chars()
        .filter(|c| {
            if *c == '"' {
                quoted = !quoted;
            }
            quoted || !c.is_whitespace()
        })
        .collect()
}

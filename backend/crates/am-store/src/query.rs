//! Table-scoped read query: projection, equality filters, ordering and limit.

use std::cmp::Ordering;

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    columns: Option<String>,
    filters: Vec<(String, Value)>,
    order: Option<Order>,
    limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Comma-separated column list; `*` when never set
    pub fn select(mut self, columns: &str) -> Self {
        self.columns = Some(columns.to_string());
        self
    }

    /// Require `column == value`
    pub fn eq<V: Into<Value>>(mut self, column: &str, value: V) -> Self {
        self.filters.push((column.to_string(), value.into()));
        self
    }

    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some(Order {
            column: column.to_string(),
            ascending: false,
        });
        self
    }

    pub fn order_asc(mut self, column: &str) -> Self {
        self.order = Some(Order {
            column: column.to_string(),
            ascending: true,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Shorthand for the usual "newest first" listing
    pub fn newest_first() -> Self {
        Self::new().order_desc("created_at")
    }

    pub fn columns(&self) -> &str {
        self.columns.as_deref().unwrap_or("*")
    }

    pub fn filters(&self) -> &[(String, Value)] {
        &self.filters
    }

    pub fn ordering(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn max_rows(&self) -> Option<usize> {
        self.limit
    }

    /// PostgREST query-string pairs, e.g. `email=eq.a@b.c&order=created_at.desc`
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![(String::from("select"), self.columns().to_string())];

        for (column, value) in &self.filters {
            let operand = match value {
                Value::Null => String::from("is.null"),
                Value::String(s) => format!("eq.{s}"),
                other => format!("eq.{other}"),
            };
            params.push((column.clone(), operand));
        }

        if let Some(order) = &self.order {
            let direction = if order.ascending { "asc" } else { "desc" };
            params.push((
                String::from("order"),
                format!("{}.{}", order.column, direction),
            ));
        }

        if let Some(limit) = self.limit {
            params.push((String::from("limit"), limit.to_string()));
        }

        params
    }

    /// Whether a row satisfies every equality filter
    pub fn matches(&self, row: &Value) -> bool {
        self.filters.iter().all(|(column, expected)| {
            let actual = row.get(column).unwrap_or(&Value::Null);
            values_equal(actual, expected)
        })
    }

    /// Apply ordering, limit and projection to already filtered rows
    pub fn shape(&self, mut rows: Vec<Value>) -> Vec<Value> {
        if let Some(order) = &self.order {
            rows.sort_by(|a, b| {
                let a = a.get(&order.column).unwrap_or(&Value::Null);
                let b = b.get(&order.column).unwrap_or(&Value::Null);
                let ordering = compare_values(a, b);
                if order.ascending {
                    ordering
                } else {
                    ordering.reverse()
                }
            });
        }

        if let Some(limit) = self.limit {
            rows.truncate(limit);
        }

        let columns = self.columns();
        if columns.trim() == "*" {
            return rows;
        }

        let wanted: Vec<&str> = columns.split(',').map(str::trim).collect();
        rows.into_iter()
            .map(|row| match row {
                Value::Object(map) => Value::Object(
                    map.into_iter()
                        .filter(|(k, _)| wanted.contains(&k.as_str()))
                        .collect(),
                ),
                other => other,
            })
            .collect()
    }
}

fn values_equal(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => actual == expected,
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        // Nulls sort after everything, like Postgres in ascending order
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

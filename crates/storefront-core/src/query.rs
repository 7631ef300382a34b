//! Translation of shop filter parameters into a content-store predicate.
//!
//! [`compile`] is total: absent, empty, or unparsable parameters drop their
//! condition instead of failing. Conditions are emitted in a fixed order
//! (status, search, category, minimum price, maximum price, in-stock) so the
//! encoded query is stable across calls.

use serde::Serialize;
use serde_json::{json, Map, Value};

pub const STATUS_FIELD: &str = "_status";
pub const PUBLISHED: &str = "published";
pub const TITLE_FIELD: &str = "title";
pub const DESCRIPTION_FIELD: &str = "description";
pub const CATEGORIES_FIELD: &str = "categories";
pub const PRICE_FIELD: &str = "priceInUSD";
pub const INVENTORY_FIELD: &str = "inventory";
pub const DEFAULT_SORT: &str = "title";

/// Comparison operators understood by the content store's `where` syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equals,
    Like,
    Contains,
    GreaterThan,
    GreaterThanEqual,
    LessThanEqual,
}

impl Operator {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::Like => "like",
            Operator::Contains => "contains",
            Operator::GreaterThan => "greater_than",
            Operator::GreaterThanEqual => "greater_than_equal",
            Operator::LessThanEqual => "less_than_equal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Operand {
    Text(String),
    Number(f64),
    Integer(i64),
}

impl Operand {
    fn to_json(&self) -> Value {
        match self {
            Operand::Text(s) => Value::String(s.clone()),
            // Non-finite values never reach here; compile() filters them.
            Operand::Number(n) => json!(n),
            Operand::Integer(n) => json!(n),
        }
    }
}

/// A single `field operator operand` comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    pub operand: Operand,
}

/// Boolean filter tree handed to the content store.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
    Condition(Condition),
}

impl Predicate {
    #[must_use]
    pub fn condition(field: &str, operator: Operator, operand: Operand) -> Self {
        Predicate::Condition(Condition {
            field: field.to_string(),
            operator,
            operand,
        })
    }

    /// Direct children of an `And`/`Or` node; empty for a leaf.
    #[must_use]
    pub fn children(&self) -> &[Predicate] {
        match self {
            Predicate::And(children) | Predicate::Or(children) => children,
            Predicate::Condition(_) => &[],
        }
    }

    /// Renders the predicate in the store's `where` JSON shape, e.g.
    /// `{"and": [{"_status": {"equals": "published"}}]}`.
    #[must_use]
    pub fn to_where(&self) -> Value {
        match self {
            Predicate::And(children) => {
                json!({ "and": children.iter().map(Predicate::to_where).collect::<Vec<_>>() })
            }
            Predicate::Or(children) => {
                json!({ "or": children.iter().map(Predicate::to_where).collect::<Vec<_>>() })
            }
            Predicate::Condition(c) => {
                let mut comparison = Map::new();
                comparison.insert(c.operator.as_str().to_string(), c.operand.to_json());
                let mut field = Map::new();
                field.insert(c.field.clone(), Value::Object(comparison));
                Value::Object(field)
            }
        }
    }
}

/// Raw shop URL parameters (`q`, `sort`, `category`, `minPrice`, `maxPrice`,
/// `inStock`), first occurrence of each key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub in_stock: Option<String>,
}

impl SearchParams {
    /// Collects the shop parameters from decoded query pairs. Unknown keys are
    /// ignored; for repeated keys the first value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "q" => &mut params.q,
                "sort" => &mut params.sort,
                "category" => &mut params.category,
                "minPrice" => &mut params.min_price,
                "maxPrice" => &mut params.max_price,
                "inStock" => &mut params.in_stock,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }
}

/// Shop filter inputs. Empty strings are normalised to `None` on conversion
/// from [`SearchParams`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterParams {
    pub search_text: Option<String>,
    pub category_id: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub in_stock_only: bool,
    pub sort_key: Option<String>,
}

impl From<SearchParams> for FilterParams {
    fn from(params: SearchParams) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
        Self {
            search_text: non_empty(params.q),
            category_id: non_empty(params.category),
            min_price: non_empty(params.min_price),
            max_price: non_empty(params.max_price),
            in_stock_only: params.in_stock.as_deref() == Some("true"),
            sort_key: non_empty(params.sort),
        }
    }
}

/// Output of [`compile`]: the `where` predicate and the sort key.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub predicate: Predicate,
    pub sort: String,
}

/// Compiles shop filters into a predicate and sort directive.
///
/// The search text and category ID are forwarded verbatim; pattern semantics
/// of `like` belong to the store. Price bounds that do not parse as finite
/// numbers are dropped. The sort key is not validated.
#[must_use]
pub fn compile(params: &FilterParams) -> CompiledQuery {
    let mut conditions = vec![Predicate::condition(
        STATUS_FIELD,
        Operator::Equals,
        Operand::Text(PUBLISHED.to_string()),
    )];

    if let Some(text) = params.search_text.as_deref().filter(|s| !s.is_empty()) {
        conditions.push(Predicate::Or(vec![
            Predicate::condition(TITLE_FIELD, Operator::Like, Operand::Text(text.to_string())),
            Predicate::condition(
                DESCRIPTION_FIELD,
                Operator::Like,
                Operand::Text(text.to_string()),
            ),
        ]));
    }

    if let Some(category) = params.category_id.as_deref().filter(|s| !s.is_empty()) {
        conditions.push(Predicate::condition(
            CATEGORIES_FIELD,
            Operator::Contains,
            Operand::Text(category.to_string()),
        ));
    }

    if let Some(min) = parse_price(params.min_price.as_deref()) {
        conditions.push(Predicate::condition(
            PRICE_FIELD,
            Operator::GreaterThanEqual,
            Operand::Number(min),
        ));
    }

    if let Some(max) = parse_price(params.max_price.as_deref()) {
        conditions.push(Predicate::condition(
            PRICE_FIELD,
            Operator::LessThanEqual,
            Operand::Number(max),
        ));
    }

    if params.in_stock_only {
        conditions.push(Predicate::condition(
            INVENTORY_FIELD,
            Operator::GreaterThan,
            Operand::Integer(0),
        ));
    }

    let sort = params
        .sort_key
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SORT)
        .to_string();

    CompiledQuery {
        predicate: Predicate::And(conditions),
        sort,
    }
}

/// Reads the leading decimal number of `raw`, ignoring trailing text
/// (`"10 AUD"` is 10, `"1e"` is 1, `"5.5.5"` is 5.5). Input without a leading
/// number, or one that overflows to infinity, yields `None`.
fn parse_price(raw: Option<&str>) -> Option<f64> {
    let s = raw?.trim_start();
    let prefix = &s[..numeric_prefix_len(s.as_bytes())];
    prefix.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Length of the longest `[+-]digits[.digits][(e|E)[+-]digits]` prefix, or 0
/// when it holds no digit before the exponent.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }
    end
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;

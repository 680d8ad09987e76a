use super::dto::SalesRecordDto;
use serde_json::Value;

/// One page of sales as held by the list view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesPage {
    pub content: Vec<SalesRecordDto>,
    pub total_pages: u32,
    pub total_elements: u64,
}

impl SalesPage {
    /// Normalizes any accepted response body into a page.
    ///
    /// Accepted shapes:
    /// - `{ "content": [...], "totalPages": n, "totalElements": n }`, optionally
    ///   with a `page` field, which is ignored;
    /// - a bare array, taken as a single complete page.
    ///
    /// Any other JSON yields an empty page. An error is returned only when a
    /// row itself cannot be read as a record.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Array(items) => {
                let content = parse_rows(items)?;
                Ok(Self {
                    total_elements: content.len() as u64,
                    total_pages: 1,
                    content,
                })
            }
            Value::Object(mut map) => match map.remove("content") {
                Some(Value::Array(items)) => Ok(Self {
                    content: parse_rows(items)?,
                    total_pages: map.get("totalPages").and_then(as_count).unwrap_or(0) as u32,
                    total_elements: map.get("totalElements").and_then(as_count).unwrap_or(0),
                }),
                _ => Ok(Self::default()),
            },
            _ => Ok(Self::default()),
        }
    }

    pub fn totals(&self) -> PageTotals {
        PageTotals::from_rows(&self.content)
    }
}

fn parse_rows(items: Vec<Value>) -> Result<Vec<SalesRecordDto>, serde_json::Error> {
    items.into_iter().map(serde_json::from_value).collect()
}

fn as_count(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
}

/// Summary figures for the rows currently on screen.
///
/// Computed over the loaded page only, not the whole result set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageTotals {
    pub total_units: i64,
    pub total_amount: f64,
    pub total_discount: f64,
}

impl PageTotals {
    pub fn from_rows(rows: &[SalesRecordDto]) -> Self {
        rows.iter().fold(Self::default(), |acc, row| Self {
            total_units: acc.total_units + row.quantity.unwrap_or(0),
            total_amount: acc.total_amount + row.total_amount.unwrap_or(0.0),
            total_discount: acc.total_discount + row.discount(),
        })
    }
}

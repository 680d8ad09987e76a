use super::filter::{MultiField, SalesFilter};

/// Rows per page requested from the API.
pub const PAGE_SIZE: u32 = 10;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Date,
    Quantity,
    CustomerName,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::Quantity => "quantity",
            SortField::CustomerName => "customerName",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "date" => Some(SortField::Date),
            "quantity" => Some(SortField::Quantity),
            "customerName" => Some(SortField::CustomerName),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// Active ordering. Defaults to newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// `field:direction`, the value used by the sort `<select>`.
    pub fn option_value(&self) -> String {
        format!("{}:{}", self.field.as_str(), self.direction.as_str())
    }

    pub fn from_option_value(value: &str) -> Option<Self> {
        let (field, direction) = value.split_once(':')?;
        Some(Self::new(
            SortField::parse(field)?,
            SortDirection::parse(direction)?,
        ))
    }
}

/// Choices offered by the sort selector.
pub const SORT_OPTIONS: [(SortSpec, &str); 3] = [
    (
        SortSpec {
            field: SortField::Date,
            direction: SortDirection::Desc,
        },
        "Date (Newest)",
    ),
    (
        SortSpec {
            field: SortField::Quantity,
            direction: SortDirection::Desc,
        },
        "Quantity",
    ),
    (
        SortSpec {
            field: SortField::CustomerName,
            direction: SortDirection::Asc,
        },
        "Customer Name (A-Z)",
    ),
];

/// A fully resolved request for one page of sales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesQuery {
    pub query: String,
    pub filters: SalesFilter,
    pub sort: SortSpec,
    pub page: u32,
    pub page_size: u32,
}

impl Default for SalesQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            filters: SalesFilter::default(),
            sort: SortSpec::default(),
            page: 0,
            page_size: PAGE_SIZE,
        }
    }
}

impl SalesQuery {
    /// Query parameters in wire order.
    ///
    /// Empty text and empty sets produce no parameter; each set member becomes
    /// its own `key=value` pair. Sort and paging are always present.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        let q = self.query.trim();
        if !q.is_empty() {
            pairs.push(("q", q.to_string()));
        }

        for field in MultiField::ALL {
            for value in self.filters.values(field) {
                if !value.trim().is_empty() {
                    pairs.push((field.wire_key(), value.clone()));
                }
            }
        }

        // Presence check only: 0 is a legitimate bound
        if let Some(min) = self.filters.min_age {
            pairs.push(("minAge", min.to_string()));
        }
        if let Some(max) = self.filters.max_age {
            pairs.push(("maxAge", max.to_string()));
        }

        let (start, end) = self.filters.date_range();
        if let Some(start) = start {
            pairs.push(("startDate", start.format(DATE_FORMAT).to_string()));
        }
        if let Some(end) = end {
            pairs.push(("endDate", end.format(DATE_FORMAT).to_string()));
        }

        pairs.push(("sortBy", self.sort.field.as_str().to_string()));
        pairs.push(("direction", self.sort.direction.as_str().to_string()));
        pairs.push(("page", self.page.to_string()));
        pairs.push(("size", self.page_size.to_string()));

        pairs
    }
}

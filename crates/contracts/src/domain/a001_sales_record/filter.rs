use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Lowest customer age the API accepts.
pub const AGE_MIN: u32 = 18;
/// Highest customer age the API accepts.
pub const AGE_MAX: u32 = 100;

/// Filters that hold a set of values and go on the wire as repeated keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MultiField {
    CustomerRegion,
    Gender,
    ProductCategory,
    Tags,
    PaymentMethod,
}

impl MultiField {
    /// Wire order of the repeated parameters.
    pub const ALL: [MultiField; 5] = [
        MultiField::CustomerRegion,
        MultiField::Gender,
        MultiField::ProductCategory,
        MultiField::Tags,
        MultiField::PaymentMethod,
    ];

    /// Query parameter name. `Tags` is sent in singular form.
    pub fn wire_key(self) -> &'static str {
        match self {
            MultiField::CustomerRegion => "customerRegion",
            MultiField::Gender => "gender",
            MultiField::ProductCategory => "productCategory",
            MultiField::Tags => "tag",
            MultiField::PaymentMethod => "paymentMethod",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MultiField::CustomerRegion => "Customer Region",
            MultiField::Gender => "Gender",
            MultiField::ProductCategory => "Product Category",
            MultiField::Tags => "Tags",
            MultiField::PaymentMethod => "Payment Method",
        }
    }

    /// Placeholder shown on a dropdown toggle with nothing selected.
    pub fn placeholder(self) -> &'static str {
        match self {
            MultiField::CustomerRegion => "Select Region",
            MultiField::Gender => "Select Gender",
            MultiField::ProductCategory => "Select Category",
            MultiField::Tags => "comma separated",
            MultiField::PaymentMethod => "Select Payment",
        }
    }

    /// Fixed choices offered by the dropdown. Tags are free text, so none.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            MultiField::CustomerRegion => &["North", "South", "East", "West", "Central"],
            MultiField::Gender => &["Male", "Female", "Other"],
            MultiField::ProductCategory => &["Clothing", "Beauty", "Electronic", "Grocery"],
            MultiField::Tags => &[],
            MultiField::PaymentMethod => &["Cash", "UPI", "Debit Card", "Credit Card"],
        }
    }
}

/// The filter bag. Free-text search lives beside it in the controller since it
/// is debounced on its own schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesFilter {
    pub customer_region: BTreeSet<String>,
    pub gender: BTreeSet<String>,
    pub product_category: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub payment_method: BTreeSet<String>,

    pub min_age: Option<u32>,
    pub max_age: Option<u32>,

    /// Single-day shortcut, expands to `start_date == end_date` on the wire
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl SalesFilter {
    pub fn values(&self, field: MultiField) -> &BTreeSet<String> {
        match field {
            MultiField::CustomerRegion => &self.customer_region,
            MultiField::Gender => &self.gender,
            MultiField::ProductCategory => &self.product_category,
            MultiField::Tags => &self.tags,
            MultiField::PaymentMethod => &self.payment_method,
        }
    }

    pub fn values_mut(&mut self, field: MultiField) -> &mut BTreeSet<String> {
        match field {
            MultiField::CustomerRegion => &mut self.customer_region,
            MultiField::Gender => &mut self.gender,
            MultiField::ProductCategory => &mut self.product_category,
            MultiField::Tags => &mut self.tags,
            MultiField::PaymentMethod => &mut self.payment_method,
        }
    }

    /// Adds `value` to the set, or removes it if already present.
    pub fn toggle(&mut self, field: MultiField, value: &str) {
        let set = self.values_mut(field);
        if !set.remove(value) {
            set.insert(value.to_string());
        }
    }

    /// Sets the lower age bound. The value is clamped into the accepted range
    /// and never raised above the current upper bound.
    pub fn set_min_age(&mut self, value: Option<u32>) {
        self.min_age = value.map(|v| {
            let v = clamp_age(v);
            match self.max_age {
                Some(max) => v.min(max),
                None => v,
            }
        });
    }

    /// Sets the upper age bound, never below the current lower bound.
    pub fn set_max_age(&mut self, value: Option<u32>) {
        self.max_age = value.map(|v| {
            let v = clamp_age(v);
            match self.min_age {
                Some(min) => v.max(min),
                None => v,
            }
        });
    }

    /// Sets both bounds at once, swapping them if given in reverse.
    pub fn set_age_range(&mut self, min: Option<u32>, max: Option<u32>) {
        let (min, max) = match (min.map(clamp_age), max.map(clamp_age)) {
            (Some(a), Some(b)) => (Some(a.min(b)), Some(a.max(b))),
            other => other,
        };
        self.min_age = min;
        self.max_age = max;
    }

    /// Effective `(startDate, endDate)`. Explicit bounds take precedence over
    /// the single-day `date`, bound by bound.
    pub fn date_range(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (self.start_date.or(self.date), self.end_date.or(self.date))
    }

    /// Number of filters with a value, for the panel badge.
    pub fn active_count(&self) -> usize {
        let sets = MultiField::ALL
            .iter()
            .filter(|f| !self.values(**f).is_empty())
            .count();
        let age = usize::from(self.min_age.is_some() || self.max_age.is_some());
        let (start, end) = self.date_range();
        let dates = usize::from(start.is_some() || end.is_some());
        sets + age + dates
    }
}

pub fn clamp_age(value: u32) -> u32 {
    value.clamp(AGE_MIN, AGE_MAX)
}

/// Parses the `min-max` age input. Whitespace is ignored and a half that is
/// not a number is treated as absent.
pub fn parse_age_range(input: &str) -> (Option<u32>, Option<u32>) {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut parts = compact.splitn(2, '-');
    let min = parts.next().and_then(|s| s.parse::<u32>().ok());
    let max = parts.next().and_then(|s| s.parse::<u32>().ok());
    (min, max)
}

/// Formats age bounds back into the `min-max` input form.
pub fn format_age_range(min: Option<u32>, max: Option<u32>) -> String {
    match (min, max) {
        (None, None) => String::new(),
        (min, max) => format!(
            "{}-{}",
            min.map(|v| v.to_string()).unwrap_or_default(),
            max.map(|v| v.to_string()).unwrap_or_default()
        ),
    }
}

/// Splits the comma separated tags input into a set, dropping blanks.
pub fn parse_tags(input: &str) -> BTreeSet<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

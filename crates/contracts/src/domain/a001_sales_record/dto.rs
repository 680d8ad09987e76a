use serde::{Deserialize, Serialize};

/// One sales transaction as returned by `/api/sales`.
///
/// Every column is optional on the wire: a missing key and an explicit `null`
/// both deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalesRecordDto {
    pub id: Option<i64>,
    pub transaction_id: Option<String>,
    /// ISO date, `YYYY-MM-DD`
    pub date: Option<String>,

    // Customer
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub customer_region: Option<String>,
    pub customer_type: Option<String>,

    // Product
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub brand: Option<String>,
    pub product_category: Option<String>,
    /// Comma separated
    pub tags: Option<String>,

    // Amounts
    pub quantity: Option<i64>,
    pub price_per_unit: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub total_amount: Option<f64>,
    pub final_amount: Option<f64>,

    // Order
    pub payment_method: Option<String>,
    pub order_status: Option<String>,
    pub delivery_type: Option<String>,
    pub store_id: Option<String>,
    pub store_location: Option<String>,
    pub salesperson_id: Option<String>,
    pub employee_name: Option<String>,
}

impl SalesRecordDto {
    /// Discount granted on this line: `totalAmount - finalAmount`, missing amounts count as 0.
    pub fn discount(&self) -> f64 {
        self.total_amount.unwrap_or(0.0) - self.final_amount.unwrap_or(0.0)
    }

    /// Stable key for keyed list rendering.
    pub fn row_key(&self) -> String {
        match (&self.id, &self.transaction_id) {
            (Some(id), _) => id.to_string(),
            (None, Some(tx)) => tx.clone(),
            (None, None) => String::new(),
        }
    }
}

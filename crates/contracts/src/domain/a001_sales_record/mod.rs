//! Sales transaction records: wire DTOs, filter bag, request mapping and
//! page normalization for the `/api/sales` endpoint.

pub mod dto;
pub mod filter;
pub mod page;
pub mod query;

pub use dto::SalesRecordDto;
pub use filter::{MultiField, SalesFilter};
pub use page::{PageTotals, SalesPage};
pub use query::{SalesQuery, SortDirection, SortField, SortSpec, PAGE_SIZE};

pub mod date_input;
pub mod filter_panel;
pub mod multi_select;
pub mod pagination_controls;
pub mod stat_card;

pub mod candidate_modal;
pub mod candidate_table;
pub mod filter_panel;
pub mod pagination_controls;
pub mod results_header;

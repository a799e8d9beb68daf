pub mod record_table;
pub mod remote_list_view;
pub mod status_pill;
pub mod summary_cards;

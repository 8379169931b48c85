pub mod config_panel;
pub mod month_picker;
pub mod report_table;
pub mod status_bar;

pub mod select_option;

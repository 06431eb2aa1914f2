pub mod action_bar;
pub mod details_list;
pub mod error_list;
pub mod explorer_link;
pub mod game_details;
pub mod modal;
pub mod move_table;
pub mod not_found;
pub mod page_title;
pub mod step_modal;
pub mod toasts;
pub mod wallet_prompt;

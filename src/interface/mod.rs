pub mod commands;
pub mod forms;
pub mod prompts;
pub mod render;

pub use commands::{apply, run_batch, BatchCommand, BatchSummary};
pub use forms::{parse_entry_form, parse_limit, EntryForm};
pub use prompts::{
    prompt_entry_form, prompt_filter_text, prompt_limit, prompt_menu, prompt_remove,
    prompt_yes_no, MenuAction,
};
pub use render::{
    format_dashboard, format_dashboard_json, format_entry_list, progress_bar, render,
    DisplayStyle, OutputFormat, TerminalRenderer,
};

pub mod chat;
pub mod timesheet_form;

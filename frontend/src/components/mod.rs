pub mod admin;
pub mod balance_history_modal;
pub mod employee_card;
pub mod employee_layout;
pub mod header;
pub mod income_chart;
pub mod ledger_table;
pub mod login_form;
pub mod wallet_summary;

pub use admin::AdminDashboard;
pub use employee_layout::EmployeeLayout;
pub use login_form::LoginForm;

pub mod use_admin;
pub mod use_balance_history;
pub mod use_employee_card;
pub mod use_payments;
pub mod use_session;
pub mod use_shared_state;

pub use use_admin::use_admin;
pub use use_balance_history::use_balance_history;
pub use use_employee_card::use_employee_card;
pub use use_payments::use_payments;
pub use use_session::use_session;

//! Target-independent core of the wallet client.
//!
//! Wire types, formatters and the view-state machines used by the Yew
//! frontend. Nothing in this crate touches the DOM or the network.

pub mod admin_form;
pub mod config;
pub mod employee_card;
pub mod formatting;
pub mod income_chart;
pub mod models;
pub mod payments;
pub mod session;
pub mod single_flight;
pub mod wallet;

pub use admin_form::{AdminEditor, AdminForm, EditorTarget, FormError, FormField, HoursDetail, PenaltySummary};
pub use employee_card::{CardControls, CardEditor, CardError, CardField, CardMode, CardView, HistoryRow};
pub use income_chart::{ChartBar, IncomeChartView, IncomeSelector, MonthOption, MonthPopup, MonthSelection};
pub use models::*;
pub use payments::{LedgerMutation, LedgerView, PaymentDraft, PaymentError, PaymentRow, Refresh};
pub use session::{Credentials, LoginError, Role, Session, StoredUser};
pub use single_flight::{AlreadyInFlight, KeyedSingleFlight, SingleFlight};
pub use wallet::WalletView;

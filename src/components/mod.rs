//! UI Components
//!
//! Leptos components for the auth screen and the role dashboards.

mod admin_overview;
mod appointment_modal;
mod appointments_panel;
mod auth_panel;
mod dashboard;
mod delete_confirm_button;
mod load_status;
mod modal;
mod service_modal;
mod services_panel;
mod speciality_panel;

pub use admin_overview::AdminOverview;
pub use appointment_modal::AppointmentModal;
pub use appointments_panel::AppointmentsPanel;
pub use auth_panel::AuthPanel;
pub use dashboard::DashboardView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use load_status::{EmptyState, ErrorPanel, LoadingPlaceholder, StatusLine};
pub use modal::Modal;
pub use service_modal::ServiceModal;
pub use services_panel::ServicesPanel;
pub use speciality_panel::SpecialityPanel;

//! UI Components
//!
//! One component per view, plus the shared banner, navigation and
//! confirm button.

mod bill_preview;
mod dashboard;
mod delete_confirm_button;
mod login;
mod nav_bar;
mod notification_banner;
mod registration;
mod settings;
mod upload_panel;

pub use bill_preview::BillPreview;
pub use dashboard::DashboardView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use login::LoginView;
pub use nav_bar::NavBar;
pub use notification_banner::NotificationBanner;
pub use registration::RegistrationView;
pub use settings::SettingsView;
pub use upload_panel::UploadPanel;

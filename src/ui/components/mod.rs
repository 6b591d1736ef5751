pub mod cta_panel;
pub mod kpi_card;
pub mod progress_bar;
pub mod toast;

pub use cta_panel::CtaPanel;
pub use kpi_card::KpiCard;
pub use progress_bar::ProgressBar;
pub use toast::Toast;

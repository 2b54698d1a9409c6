pub mod metric_card;
pub mod popup;

pub use metric_card::render_metric_card;
pub use popup::centered_box;

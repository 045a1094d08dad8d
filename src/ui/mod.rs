pub mod popup;
pub mod search_box;

pub use popup::DetailPopup;
pub use search_box::{ControlPosition, ControlSlot, SearchBox};

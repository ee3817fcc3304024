mod card;
mod state;
mod widget;

pub use card::PostCard;
pub use state::{FeedSelection, SelectionIntent};
pub use widget::{card_height, FeedListWidget};

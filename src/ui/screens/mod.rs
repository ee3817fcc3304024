mod feed;
mod not_found;

pub use feed::render_feed;
pub use not_found::render_not_found;

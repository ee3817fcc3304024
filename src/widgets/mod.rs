pub mod detail_overlay;
pub mod doc_embed;
pub mod feed_list;
pub mod page_viewer;
pub mod pagination;

// README content parsing.
// Splits YAML front matter from the markdown body and pulls out demo links, images, and summaries.

mod extract;
mod front_matter;

pub use extract::{extract_demo_url, extract_images, extract_links, first_paragraph};
pub use front_matter::parse_front_matter;

mod parse_ref;
mod state;

pub use parse_ref::parse_uri_ref;
pub use state::State;

pub mod http;
mod mock_impl;

pub use mock_impl::{Mock, mock};

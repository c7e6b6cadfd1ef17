#![doc(html_root_url = "https://docs.rs/mount-dom/0.0.1")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod element;
pub mod error;
pub mod host;
pub mod load;
pub mod memory;
pub mod render;
pub mod web;

pub use element::{Children, ElementDescription};
pub use error::RenderError;
pub use host::{Host, HostError, HostRead};
pub use render::{render, ElementRenderer, RenderOptions};

//! HTTP service handlers

mod redirect;
mod shorten;

pub use redirect::{RedirectService, redirect_routes};
pub use shorten::{ErrorResponse, ShortenRequest, ShortenResponse, ShortenService, api_routes};

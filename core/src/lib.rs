//! Client core for the item REST API.
//!
//! # Overview
//! `ItemClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `ItemPresenter`
//! layers the form's behaviour on top: it executes requests through a
//! `Transport`, pushes formatted entries into an `ItemView`, and refreshes the
//! whole list after every successful mutation.
//!
//! # Design
//! - `ItemClient` is stateless; it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and the FFI crate can expose it 1:1.
//! - Rendering and HTTP execution are traits (`ItemView`, `Transport`) owned
//!   by the hosting shell.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod presenter;
pub mod types;
pub mod view;

pub use client::{format_entry, ItemClient, DEFAULT_BASE_URL};
pub use error::{ActionError, ApiError, FormError, ListFailure};
pub use form::ItemForm;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use presenter::ItemPresenter;
pub use types::{Item, NewItem};
pub use view::{ItemView, Notice};

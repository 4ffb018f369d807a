//! C-ABI wrapper around `item-core`.
//!
//! # Overview
//! Lets a native windowing toolkit host the item form: it builds HTTP requests
//! and parses responses through `extern "C"` functions, executes the I/O with
//! its own HTTP stack, and shows the `notice` text each parse returns.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Per-operation `build_*` / `parse_*` mirrors the core API 1:1.
//! - A single `FfiItemResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly.
//! - The host is expected to run `item_build_list_items` again after any
//!   mutation whose result has `error_code == Ok`.
//! - The C caller owns all returned pointers and must call the matching
//!   `item_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use item_core::error::ApiError;
use item_core::http::HttpResponse;
use item_core::{Item, NewItem, Notice};

use types::*;

/// Which form action a result belongs to; selects the notice text.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiOperation {
    List = 0,
    Create = 1,
    Update = 2,
    Delete = 3,
}

impl FfiOperation {
    fn failure_notice(self, err: &ApiError) -> Notice {
        match self {
            FfiOperation::List => Notice::ListFailed {
                kind: err.list_failure(),
                detail: err.to_string(),
            },
            FfiOperation::Create => Notice::AddFailed,
            FfiOperation::Update => Notice::UpdateFailed,
            FfiOperation::Delete => Notice::DeleteFailed,
        }
    }
}

/// Read a borrowed C string; null and invalid UTF-8 read as empty.
fn read_str(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .unwrap_or("")
        .to_string()
}

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `ItemClient` bound to `base_url`.
///
/// Returns null if `base_url` is null or if an internal panic occurs.
/// The caller must free the returned pointer with `item_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn item_client_new(base_url: *const c_char) -> *mut FfiItemClient {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let client = item_core::ItemClient::new(&read_str(base_url));
        Box::into_raw(Box::new(FfiItemClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free an `ItemClient` created by `item_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn item_client_free(client: *mut FfiItemClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build an HTTP request for listing all items.
///
/// Returns null if `client` is null.
/// The caller must free the returned pointer with `item_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn item_build_list_items(client: *const FfiItemClient) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        FfiHttpRequest::from_core(client.inner.build_list_items())
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for creating an item.
///
/// `description` may be null (sent as empty). Returns null if `client` or
/// `name` is null, or if serialization fails.
#[unsafe(no_mangle)]
pub extern "C" fn item_build_create_item(
    client: *const FfiItemClient,
    name: *const c_char,
    description: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || name.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let input = NewItem {
            name: read_str(name),
            description: read_str(description),
        };
        match client.inner.build_create_item(&input) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request replacing item `id` with the given fields.
///
/// `description` may be null (sent as empty). Returns null if `client` or
/// `name` is null.
#[unsafe(no_mangle)]
pub extern "C" fn item_build_update_item(
    client: *const FfiItemClient,
    id: i64,
    name: *const c_char,
    description: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || name.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let item = Item {
            id,
            name: read_str(name),
            description: read_str(description),
        };
        match client.inner.build_update_item(id, &item) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for deleting item `id`.
///
/// Returns null if `client` is null.
#[unsafe(no_mangle)]
pub extern "C" fn item_build_delete_item(
    client: *const FfiItemClient,
    id: i64,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        FfiHttpRequest::from_core(client.inner.build_delete_item(id))
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Parse response functions
// ---------------------------------------------------------------------------

/// Convert an `FfiHttpResponse` to a core `HttpResponse`.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    HttpResponse {
        status: resp.status,
        headers: Vec::new(),
        body: read_str(resp.body),
    }
}

/// Shared null checks and panic guard for the parse functions.
fn parse_with(
    client: *const FfiItemClient,
    response: *const FfiHttpResponse,
    name: &str,
    parse: impl FnOnce(&item_core::ItemClient, HttpResponse) -> *mut FfiItemResult
        + std::panic::UnwindSafe,
) -> *mut FfiItemResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiItemResult::null_arg("client");
        }
        if response.is_null() {
            return FfiItemResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        parse(&client.inner, ffi_response_to_core(resp))
    })
    .unwrap_or_else(|_| FfiItemResult::panic(&format!("panic in {name}")))
}

fn mutation_result(
    op: FfiOperation,
    done: Notice,
    outcome: Result<(), ApiError>,
) -> *mut FfiItemResult {
    match outcome {
        Ok(()) => FfiItemResult::ok_notice(done),
        Err(e) => {
            let notice = op.failure_notice(&e);
            FfiItemResult::from_error(e, notice)
        }
    }
}

/// Parse an HTTP response from a list-items request.
///
/// Returns a result with `data_tag = ItemList` on success. On failure the
/// `notice` names the failure category (request, JSON, unexpected).
#[unsafe(no_mangle)]
pub extern "C" fn item_parse_list_items(
    client: *const FfiItemClient,
    response: *const FfiHttpResponse,
) -> *mut FfiItemResult {
    parse_with(client, response, "item_parse_list_items", |c, resp| {
        match c.parse_list_items(resp) {
            Ok(items) => FfiItemResult::ok_item_list(items),
            Err(e) => {
                let notice = FfiOperation::List.failure_notice(&e);
                FfiItemResult::from_error(e, notice)
            }
        }
    })
}

/// Parse an HTTP response from a create-item request.
#[unsafe(no_mangle)]
pub extern "C" fn item_parse_create_item(
    client: *const FfiItemClient,
    response: *const FfiHttpResponse,
) -> *mut FfiItemResult {
    parse_with(client, response, "item_parse_create_item", |c, resp| {
        mutation_result(FfiOperation::Create, Notice::Added, c.parse_create_item(resp))
    })
}

/// Parse an HTTP response from an update-item request.
#[unsafe(no_mangle)]
pub extern "C" fn item_parse_update_item(
    client: *const FfiItemClient,
    response: *const FfiHttpResponse,
) -> *mut FfiItemResult {
    parse_with(client, response, "item_parse_update_item", |c, resp| {
        mutation_result(FfiOperation::Update, Notice::Updated, c.parse_update_item(resp))
    })
}

/// Parse an HTTP response from a delete-item request.
#[unsafe(no_mangle)]
pub extern "C" fn item_parse_delete_item(
    client: *const FfiItemClient,
    response: *const FfiHttpResponse,
) -> *mut FfiItemResult {
    parse_with(client, response, "item_parse_delete_item", |c, resp| {
        mutation_result(FfiOperation::Delete, Notice::Deleted, c.parse_delete_item(resp))
    })
}

/// Build the result for a request the host could not execute at all
/// (connection refused, timeout). `message` may be null.
#[unsafe(no_mangle)]
pub extern "C" fn item_transport_failed(
    operation: FfiOperation,
    message: *const c_char,
) -> *mut FfiItemResult {
    catch_unwind(|| {
        let err = ApiError::Transport(read_str(message));
        let notice = operation.failure_notice(&err);
        FfiItemResult::from_error(err, notice)
    })
    .unwrap_or_else(|_| FfiItemResult::panic("panic in item_transport_failed"))
}

/// Render a list entry as `"{id}: {name} - {description}"`.
///
/// Null strings render as empty. Free the result with `item_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn item_format_entry(
    id: i64,
    name: *const c_char,
    description: *const c_char,
) -> *mut c_char {
    catch_unwind(|| {
        let item = Item {
            id,
            name: read_str(name),
            description: read_str(description),
        };
        c_string(item_core::format_entry(&item))
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by any `item_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn item_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        free_c_string(req.path);
        free_c_string(req.body);
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    req.headers,
                    req.headers_len as usize,
                ))
            };
            for h in headers.iter() {
                free_c_string(h.key);
                free_c_string(h.value);
            }
        }
    });
}

/// Free an `FfiItemResult` returned by any `item_parse_*` function.
/// Safe to call with null. Uses `data_tag` to determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn item_free_result(result: *mut FfiItemResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        free_c_string(result.notice);
        if !result.data.is_null() {
            match result.data_tag {
                FfiDataTag::ItemList => {
                    let list = unsafe { Box::from_raw(result.data as *mut FfiItemList) };
                    if !list.items.is_null() && list.len > 0 {
                        let items = unsafe {
                            Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                                list.items,
                                list.len as usize,
                            ))
                        };
                        for item in items.iter() {
                            free_c_string(item.name);
                            free_c_string(item.description);
                            free_c_string(item.entry);
                        }
                    }
                }
                FfiDataTag::None => {}
            }
        }
    });
}

fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn item_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| free_c_string(s));
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

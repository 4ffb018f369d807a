//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversion functions live here
//! to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use item_core::error::ApiError;
use item_core::http::HttpMethod;
use item_core::{Item, Notice};

/// Opaque handle to an `ItemClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiItemClient {
    pub(crate) inner: item_core::ItemClient,
}

/// Copy a Rust string into a heap C string. Interior NULs are dropped.
pub(crate) fn c_string(s: impl Into<String>) -> *mut c_char {
    let mut s = s.into();
    s.retain(|c| c != '\0');
    CString::new(s).unwrap_or_default().into_raw()
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
    Put = 2,
    Delete = 3,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
            HttpMethod::Put => FfiHttpMethod::Put,
            HttpMethod::Delete => FfiHttpMethod::Delete,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `item_build_*` functions. The C caller executes the request
/// and passes the response back through `item_parse_*`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub path: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: item_core::HttpRequest) -> *mut Self {
        let path = c_string(req.path);
        let body = match req.body {
            Some(b) => c_string(b),
            None => std::ptr::null_mut(),
        };

        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_headers: Box<[FfiHeader]> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: c_string(k),
                    value: c_string(v),
                })
                .collect();
            Box::into_raw(ffi_headers) as *mut FfiHeader
        };

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            path,
            headers,
            headers_len,
            body,
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing an HTTP request,
/// then passes a pointer to an `item_parse_*` function. The FFI layer reads
/// but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiItemResult`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    NotFound = 1,
    Http = 2,
    Deserialization = 3,
    Serialization = 4,
    Panic = 5,
    NullArg = 6,
    Transport = 7,
}

/// Tag that tells `item_free_result` what `FfiItemResult::data` points to.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiDataTag {
    None = 0,
    ItemList = 1,
}

/// A single item exposed to C.
#[repr(C)]
pub struct FfiItem {
    pub id: i64,
    pub name: *mut c_char,
    pub description: *mut c_char,
    /// Pre-rendered `"{id}: {name} - {description}"` list entry.
    pub entry: *mut c_char,
}

impl FfiItem {
    fn from_core(item: Item) -> Self {
        let entry = item_core::format_entry(&item);
        FfiItem {
            id: item.id,
            name: c_string(item.name),
            description: c_string(item.description),
            entry: c_string(entry),
        }
    }
}

/// A list of items exposed to C, in server order.
#[repr(C)]
pub struct FfiItemList {
    pub items: *mut FfiItem,
    pub len: u32,
}

/// Result envelope for all parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the parsed payload (tagged by `data_tag`). On failure
/// `error_code` describes the category, `error_message` is a diagnostic C
/// string, and `data` is null.
///
/// `notice` is always set when a parse function ran: the user-facing text
/// the host should show (confirmation or failure). It is null only for a
/// successful list, which updates the display instead.
#[repr(C)]
pub struct FfiItemResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub notice: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut std::ffi::c_void,
}

impl FfiItemResult {
    fn boxed(self) -> *mut Self {
        Box::into_raw(Box::new(self))
    }

    /// Build a success result carrying an `FfiItemList`.
    pub(crate) fn ok_item_list(items: Vec<Item>) -> *mut Self {
        let len = items.len() as u32;
        let items = if items.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_items: Box<[FfiItem]> = items.into_iter().map(FfiItem::from_core).collect();
            Box::into_raw(ffi_items) as *mut FfiItem
        };

        let ffi_list = Box::new(FfiItemList { items, len });
        FfiItemResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            notice: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::ItemList,
            data: Box::into_raw(ffi_list) as *mut std::ffi::c_void,
        }
        .boxed()
    }

    /// Build a success result with no data payload, carrying a confirmation.
    pub(crate) fn ok_notice(notice: Notice) -> *mut Self {
        FfiItemResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            notice: c_string(notice.to_string()),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        }
        .boxed()
    }

    /// Build an error result from an `ApiError` and the notice to show.
    pub(crate) fn from_error(err: ApiError, notice: Notice) -> *mut Self {
        let (error_code, http_status) = match &err {
            ApiError::Transport(_) => (FfiErrorCode::Transport, 0),
            ApiError::NotFound => (FfiErrorCode::NotFound, 404u16),
            ApiError::Status { status, .. } => (FfiErrorCode::Http, *status),
            ApiError::Deserialization(_) => (FfiErrorCode::Deserialization, 0),
            ApiError::Serialization(_) => (FfiErrorCode::Serialization, 0),
        };

        FfiItemResult {
            error_code,
            error_message: c_string(err.to_string()),
            notice: c_string(notice.to_string()),
            http_status,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        }
        .boxed()
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::internal(FfiErrorCode::NullArg, format!("null argument: {name}"))
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::internal(FfiErrorCode::Panic, msg.to_string())
    }

    fn internal(error_code: FfiErrorCode, msg: String) -> *mut Self {
        FfiItemResult {
            error_code,
            error_message: c_string(msg),
            notice: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        }
        .boxed()
    }
}

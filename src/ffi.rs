//! C ABI over JSON, for hosts that embed the solver in-process.
//!
//! Requests use the [`SolveRequest`] JSON shape:
//!
//! ```text
//! {"points": [{"id": "a", "lat": 13.75, "lng": 100.50}, ...],
//!  "fixedStartId": "a", "fixedEndId": "b"}
//! ```
//!
//! Responses are `{"ok": true, "tour": {...}}` or
//! `{"ok": false, "error": {"kind": "...", "message": "..."}}`. Every string
//! returned by this module must be released with [`u_itinerary_free_string`].

use std::ffi::{CStr, CString};
use std::ptr;

use libc::c_char;
use serde_json::json;

use crate::distance::haversine_km;
use crate::models::{Point, SolveRequest};
use crate::ordering::solve;

fn error_response(kind: &str, message: String) -> serde_json::Value {
    json!({ "ok": false, "error": { "kind": kind, "message": message } })
}

/// Safe core of [`u_itinerary_solve_json`].
pub fn solve_json(input: &str) -> String {
    let response = match serde_json::from_str::<SolveRequest>(input) {
        Ok(request) => match solve(&request) {
            Ok(tour) => json!({ "ok": true, "tour": tour }),
            Err(e) => error_response(e.kind(), e.to_string()),
        },
        Err(e) => error_response("InvalidRequest", e.to_string()),
    };
    response.to_string()
}

/// Solves a JSON request and returns a newly allocated JSON response.
///
/// Returns null if `request` is null.
///
/// # Safety
///
/// `request` must be null or point to a NUL-terminated string that stays
/// valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn u_itinerary_solve_json(request: *const c_char) -> *mut c_char {
    if request.is_null() {
        return ptr::null_mut();
    }
    let input = CStr::from_ptr(request).to_string_lossy();
    match CString::new(solve_json(&input)) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Haversine distance in km, or NaN if either coordinate pair is invalid.
#[no_mangle]
pub extern "C" fn u_itinerary_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let valid = Point::new("a", lat1, lon1).is_ok() && Point::new("b", lat2, lon2).is_ok();
    if valid {
        haversine_km(lat1, lon1, lat2, lon2)
    } else {
        f64::NAN
    }
}

/// Frees a string returned by this module. Null is ignored.
///
/// # Safety
///
/// `s` must be null or a pointer previously returned by this module and not
/// yet freed.
#[no_mangle]
pub unsafe extern "C" fn u_itinerary_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

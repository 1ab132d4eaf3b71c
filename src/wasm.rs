//! JavaScript bindings for the browser planner.

use js_sys::Error as JsError;
use wasm_bindgen::prelude::*;

use crate::distance::compute_distance_km;
use crate::error::RoutingError;
use crate::models::{Point, SolveOptions};
use crate::ordering::solve_ordering;

fn to_js_error(e: RoutingError) -> JsValue {
    let err = JsError::new(&e.to_string());
    err.set_name(e.kind());
    err.into()
}

fn serde_error(what: &str, e: serde_wasm_bindgen::Error) -> JsValue {
    let err = JsError::new(&format!("invalid {what}: {e}"));
    err.set_name("InvalidRequest");
    err.into()
}

/// Great-circle distance in km between two `{id, lat, lng}` objects.
#[wasm_bindgen(js_name = computeDistanceKm)]
pub fn compute_distance_km_js(a: JsValue, b: JsValue) -> Result<f64, JsValue> {
    let a: Point = serde_wasm_bindgen::from_value(a).map_err(|e| serde_error("point", e))?;
    let b: Point = serde_wasm_bindgen::from_value(b).map_err(|e| serde_error("point", e))?;
    compute_distance_km(&a, &b).map_err(to_js_error)
}

/// Orders `points` and returns `{order, indices, totalDistanceKm, kind}`.
///
/// `options` may be `undefined` or `{fixedStartId?, fixedEndId?}`. Errors are
/// thrown as `Error` objects whose `name` is the error kind.
#[wasm_bindgen(js_name = solveOrdering)]
pub fn solve_ordering_js(points: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let points: Vec<Point> =
        serde_wasm_bindgen::from_value(points).map_err(|e| serde_error("points", e))?;
    let options: SolveOptions = if options.is_undefined() || options.is_null() {
        SolveOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| serde_error("options", e))?
    };

    let tour = solve_ordering(&points, &options).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&tour).map_err(|e| serde_error("result", e))
}

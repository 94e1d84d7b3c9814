use wasm_bindgen::prelude::*;

use crate::direction::Direction;
use crate::occluder::BorderOccluder;
use crate::shift::ShiftInference;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

#[wasm_bindgen(typescript_custom_section)]
const TS_CONSTANTS_DIRECTION: &'static str = r#"
export const DIR_EAST = 1;
export const DIR_NORTH = 2;
export const DIR_WEST = 3;
export const DIR_SOUTH = 4;
export const DIR_REMOVE = 5;
export const DIR_START = 6;
export const DIR_EAST_POINT = 7;
export const DIR_NORTH_POINT = 8;
export const DIR_WEST_POINT = 9;
export const DIR_SOUTH_POINT = 10;
"#;

fn direction_from_code(code: u8) -> Result<Direction, JsValue> {
    Direction::from_code(code)
        .ok_or_else(|| JsValue::from_str(&format!("unknown direction code {code}")))
}

fn positions_from_flat(buffer: &[f64]) -> Result<Vec<[f64; 3]>, JsValue> {
    if buffer.len() % 3 != 0 {
        return Err(JsValue::from_str(
            "position buffer length must be a multiple of 3",
        ));
    }
    Ok(buffer
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect())
}

/// WASM wrapper for one border-layout session.
///
/// Corners and quads cross the boundary as flat `f64` buffers: 12 values per
/// tile (4 corners xyz) in, 12 values per quad (4 anti-clockwise points xyz)
/// out.
#[wasm_bindgen]
pub struct BorderSession {
    inner: BorderOccluder,
}

#[wasm_bindgen]
impl BorderSession {
    #[wasm_bindgen(constructor)]
    pub fn new(margin_width: f64, z_offset: f64) -> BorderSession {
        BorderSession {
            inner: BorderOccluder::new(margin_width, z_offset),
        }
    }

    /// Appends a placement event. `corners` holds the settled tile's four
    /// corner positions as 12 values.
    pub fn register(&mut self, direction: u8, corners: &[f64]) -> Result<(), JsValue> {
        if corners.len() != 12 {
            return Err(JsValue::from_str("expected 12 corner values (4 x xyz)"));
        }
        let direction = direction_from_code(direction)?;
        let mut snapshot = [[0.0; 3]; 4];
        for (dst, src) in snapshot.iter_mut().zip(corners.chunks_exact(3)) {
            *dst = [src[0], src[1], src[2]];
        }
        self.inner.register(direction, snapshot);
        Ok(())
    }

    #[wasm_bindgen(js_name = countRecords)]
    pub fn count_records(&self) -> usize {
        self.inner.trace().len()
    }

    /// Scans the trace and returns every occluder quad, 12 floats per quad.
    pub fn analyze(&self) -> Result<js_sys::Float64Array, JsValue> {
        let quads = self
            .inner
            .analyze()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mut flat = Vec::with_capacity(quads.len() * 12);
        for quad in &quads {
            for point in &quad.points {
                flat.extend_from_slice(point);
            }
        }
        Ok(js_sys::Float64Array::from(flat.as_slice()))
    }

    /// Scene-graph names of the quads returned by `analyze`, in the same
    /// order.
    #[wasm_bindgen(js_name = analyzeNames)]
    pub fn analyze_names(&self) -> Result<js_sys::Array, JsValue> {
        let quads = self
            .inner
            .analyze()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(quads
            .iter()
            .map(|q| JsValue::from_str(&q.name()))
            .collect())
    }
}

/// Infers the lattice shift for duplicating a tile group towards a cardinal
/// direction. `positions` holds xyz triplets; returns the shift as 3 floats.
#[wasm_bindgen(js_name = inferShift)]
pub fn infer_shift(
    direction: u8,
    positions: &[f64],
    tolerance: f64,
) -> Result<js_sys::Float64Array, JsValue> {
    let direction = direction_from_code(direction)?;
    let group = positions_from_flat(positions)?;
    let shift = ShiftInference::new(tolerance)
        .infer(direction, &group)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(js_sys::Float64Array::from(shift.as_slice()))
}

/// Stamps `times` shifted copies of the group; returns xyz triplets grouped
/// per source position.
#[wasm_bindgen(js_name = repeatPositions)]
pub fn repeat_positions(
    direction: u8,
    positions: &[f64],
    times: usize,
    tolerance: f64,
) -> Result<js_sys::Float64Array, JsValue> {
    let direction = direction_from_code(direction)?;
    let group = positions_from_flat(positions)?;
    let copies = ShiftInference::new(tolerance)
        .repeat(direction, &group, times)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mut flat = Vec::with_capacity(copies.len() * 3);
    for p in &copies {
        flat.extend_from_slice(p);
    }
    Ok(js_sys::Float64Array::from(flat.as_slice()))
}

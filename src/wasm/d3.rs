use crate::kdtree::SpatialIndex;
use crate::point::Point3;
use crate::wasm::utils::{js_count, parse_js_point};
use wasm_bindgen::prelude::*;

// --- Neighbors ---

/// Result of a nearest-neighbor query, nearest first.
#[wasm_bindgen(js_name = Neighbors3D)]
#[derive(Clone, Debug, Default)]
pub struct Neighbors3D {
    indices: Vec<u32>,
    ids: Vec<u32>,
    distances: Vec<f64>,
}

#[wasm_bindgen(js_class = Neighbors3D)]
impl Neighbors3D {
    /// Position of each neighbor in the buffers the index was built from.
    #[wasm_bindgen(getter)]
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn ids(&self) -> Vec<u32> {
        self.ids.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn distances(&self) -> Vec<f64> {
        self.distances.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.distances.len()
    }
}

// --- Index ---

/// WASM wrapper for a static 3D k-d tree keyed by numeric ids.
#[wasm_bindgen(js_name = NearestIndex3D)]
pub struct NearestIndex3D {
    inner: SpatialIndex<u32, usize>,
    ids: Vec<u32>,
}

#[wasm_bindgen(js_class = NearestIndex3D)]
impl NearestIndex3D {
    /// Builds the index from ids and a flat `[x0, y0, z0, x1, ...]` position buffer.
    #[wasm_bindgen(constructor)]
    pub fn new(ids: Vec<u32>, positions: &[f64]) -> Result<NearestIndex3D, JsValue> {
        let inner = SpatialIndex::from_flat(ids.clone(), positions)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(NearestIndex3D { inner, ids })
    }

    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen(getter)]
    pub fn depth(&self) -> usize {
        self.inner.depth()
    }

    pub fn k_nearest(&self, x: f64, y: f64, z: f64, k: i32, exclude: Option<u32>) -> Neighbors3D {
        self.query([x, y, z], k, exclude)
    }

    /// Same as `k_nearest` with the target given as a `[x, y, z]` array.
    /// Anything else yields an empty result.
    pub fn k_nearest_point(&self, target: JsValue, k: i32, exclude: Option<u32>) -> Neighbors3D {
        match parse_js_point::<3>(&target) {
            Some(point) => self.query(point, k, exclude),
            None => Neighbors3D::default(),
        }
    }
}

impl NearestIndex3D {
    fn query(&self, target: Point3, k: i32, exclude: Option<u32>) -> Neighbors3D {
        let found = self.inner.k_nearest(target, js_count(k), exclude.as_ref());
        let mut result = Neighbors3D {
            indices: Vec::with_capacity(found.len()),
            ids: Vec::with_capacity(found.len()),
            distances: Vec::with_capacity(found.len()),
        };
        for n in found {
            let index = *n.payload;
            result.indices.push(index as u32);
            result.ids.push(self.ids[index]);
            result.distances.push(n.distance);
        }
        result
    }

    /// The underlying index.
    pub fn index(&self) -> &SpatialIndex<u32, usize> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_maps_payloads_to_ids() {
        let index = NearestIndex3D::new(
            vec![10, 20, 30],
            &[0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0, 0.0],
        )
        .unwrap();
        let found = index.k_nearest(0.0, 0.0, 0.0, 5, Some(10));
        assert_eq!(found.ids(), vec![20, 30]);
        assert_eq!(found.indices(), vec![1, 2]);
        assert_eq!(found.distances(), vec![3.0, 4.0]);
        assert_eq!(index.count(), 3);
    }

    #[test]
    fn test_negative_count_is_empty() {
        let index = NearestIndex3D::new(vec![1], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(index.k_nearest(0.0, 0.0, 0.0, -3, None).count(), 0);
        assert_eq!(index.k_nearest(0.0, 0.0, 0.0, 0, None).count(), 0);
        assert_eq!(index.k_nearest(0.0, 0.0, 0.0, 1, None).count(), 1);
    }
}

use drape::{
    ClothTopology, GridConfig, MultiClothStage, PhysicsError, PinSelection, Simulator,
    SolverConfig, Surface, Vec3,
};
use wasm_bindgen::prelude::*;

fn to_js(err: PhysicsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Flat [x0, y0, z0, x1, y1, z1, ...] in grid order.
fn flatten(positions: &[Vec3<f32>]) -> Vec<f32> {
    let mut out = Vec::with_capacity(positions.len() * 3);
    for p in positions {
        out.push(p.x);
        out.push(p.y);
        out.push(p.z);
    }
    out
}

// ---- Flag Demo ----

#[wasm_bindgen]
pub struct FlagDemo {
    sim: Simulator<f32>,
}

#[wasm_bindgen]
impl FlagDemo {
    /// A flag hanging from its top edge, blown by the default gusts.
    #[wasm_bindgen(constructor)]
    pub fn new(cols: usize, rows: usize) -> Result<FlagDemo, JsValue> {
        let grid = GridConfig { cols, rows, ..GridConfig::default() };
        let topology = ClothTopology::flat(&grid).map_err(to_js)?;
        let sim = Simulator::new(SolverConfig::new(), topology).map_err(to_js)?;
        Ok(FlagDemo { sim })
    }

    /// Call once per animation frame with the page clock (ms).
    pub fn tick(&mut self, now: f32) {
        self.sim.tick(now);
    }

    pub fn positions(&self) -> Vec<f32> {
        flatten(&self.sim.positions())
    }

    /// Triangle indices for building the display mesh, three per face.
    pub fn indices(&self) -> Vec<u32> {
        self.sim
            .surface()
            .faces()
            .iter()
            .flat_map(|f| f.iter().map(|&i| i as u32))
            .collect()
    }

    pub fn particle_count(&self) -> usize {
        self.sim.topology().particle_count()
    }
}

// ---- Curtain Demo ----

#[wasm_bindgen]
pub struct CurtainDemo {
    stage: MultiClothStage<f32>,
}

#[wasm_bindgen]
impl CurtainDemo {
    /// `panels` curtains pinned at their corners, each with its own wind phase.
    #[wasm_bindgen(constructor)]
    pub fn new(panels: usize) -> Result<CurtainDemo, JsValue> {
        let mut stage = MultiClothStage::new();
        let grid = GridConfig { cols: 8, rows: 12, ..GridConfig::default() };
        for i in 0..panels {
            let topology = ClothTopology::flat(&grid).map_err(to_js)?;
            let config = SolverConfig::new().with_pins(PinSelection::Corners);
            stage
                .add_cloth(config, topology, i as f32 * 1700.0)
                .map_err(to_js)?;
        }
        Ok(CurtainDemo { stage })
    }

    pub fn tick(&mut self, now: f32) {
        self.stage.tick(now);
    }

    pub fn panel_count(&self) -> usize {
        self.stage.len()
    }

    /// Returns positions for the panel at `index` as flat [x0, y0, z0, ...]
    pub fn panel_positions(&self, index: usize) -> Vec<f32> {
        self.stage
            .cloth(index)
            .map(|c| flatten(&c.positions()))
            .unwrap_or_default()
    }
}

//! DerivedConfig - manufacturing parameters computed from a `BoxConfig`
//!
//! Every value here is a pure function of the borrowed config. Nothing is
//! cached; callers that need a stable record take a [`DerivedSnapshot`].

use serde::Serialize;

use crate::domain::entities::BoxConfig;
use crate::domain::services::tolerance::Tolerances;
use crate::domain::value_objects::{
    ConnectionType, DividerLayout, Mount, PatternPosition, PrintMode, RunePattern, WhiskerParams,
};

pub const MIN_WALL: f64 = 1.6;
pub const MAX_WALL: f64 = 4.8;
pub const MIN_CLEARANCE: f64 = 0.15;
pub const MIN_INNER_WIDTH: f64 = 40.0;

pub const RAIL_WIDTH: f64 = 5.0;
pub const RAIL_DEPTH: f64 = 4.0;
pub const DUST_LIP: f64 = 1.0;
pub const DUST_SHELF: f64 = 0.8;
pub const RAIL_WINDOW_SPACING: f64 = 35.0;

pub const STOP1_THICKNESS: f64 = 1.2;
pub const STOP1_LENGTH: f64 = 8.0;
pub const STOP2_HEIGHT: f64 = 3.0;
pub const RELEASE_SLOT_W: f64 = 15.0;
pub const RELEASE_SLOT_H: f64 = 5.0;

pub const CARTRIDGE_W: f64 = 30.0;
pub const CARTRIDGE_H: f64 = 25.0;
pub const CARTRIDGE_D: f64 = 12.0;

/// Press-fit pocket for 6x3 mm magnets
pub const MAGNET_DIA: f64 = 6.1;
pub const MAGNET_DEPTH: f64 = 3.1;

/// Universal slot shared by dividers and inserts
pub const SLOT_WIDTH: f64 = 2.4;
pub const SLOT_DEPTH: f64 = 3.0;

pub const V_GROOVE_DEPTH: f64 = 2.0;
pub const TOP_CLEARANCE: f64 = 2.0;
pub const FRONT_CLEARANCE: f64 = 10.0;
pub const NOZZLE: f64 = 0.4;

const MIN_CELL_WIDTH: f64 = 25.0;
const MIN_CELL_DEPTH: f64 = 30.0;
const MIN_DRAWER_INNER_DEPTH: f64 = 15.0;

/// Round to the nearest multiple of the nozzle width (ties to even)
pub fn round_to_nozzle(value: f64) -> f64 {
    (value / NOZZLE).round_ties_even() * NOZZLE
}

/// Wall thickness from external size, stacking and mount.
///
/// Shared by the derivation and the `wall_thickness` rule.
pub fn wall_thickness_for(config: &BoxConfig) -> f64 {
    let area = config.width * config.height / 1000.0;
    let mut base = if area > 160.0 {
        3.2
    } else if area > 100.0 {
        2.4
    } else {
        2.0
    };

    if config.stack_levels > 2 {
        base += 0.4;
    }
    if config.mount == Mount::Wall {
        base += 0.4;
    }

    round_to_nozzle(base)
}

/// Connector choice from mount, load, stacking and height.
///
/// Shared by the derivation and the `connection_type` rule.
pub fn connection_for(config: &BoxConfig) -> ConnectionType {
    if config.mount == Mount::Wall {
        return if config.width > 150.0 {
            ConnectionType::Magnet
        } else {
            ConnectionType::Clip
        };
    }
    if config.expected_weight > 1000.0 || config.stack_levels > 3 {
        return ConnectionType::Dovetail;
    }
    if config.height < 50.0 {
        return ConnectionType::Clip;
    }
    config.connection
}

/// Divider (columns, rows) for a drawer interior of the given size
pub fn divider_grid(
    layout: DividerLayout,
    target_cell: (f64, f64),
    inner_w: f64,
    inner_d: f64,
) -> (u32, u32) {
    if layout == DividerLayout::None {
        return (0, 0);
    }
    if let Some(grid) = layout.fixed_grid() {
        return grid;
    }

    let (target_w, target_d) = target_cell;
    (
        fit_count(inner_w, target_w, MIN_CELL_WIDTH),
        fit_count(inner_d, target_d, MIN_CELL_DEPTH),
    )
}

/// Dividers wanted for `target` cells, capped so no cell is under `min_cell`
fn fit_count(span: f64, target: f64, min_cell: f64) -> u32 {
    let wanted = (span / target).round_ties_even() - 1.0;
    if wanted.is_nan() {
        return 0;
    }
    let cap = (span / min_cell).floor() - 1.0;
    let mut n = wanted.min(cap).min(f64::from(u32::MAX));
    if n <= 0.0 {
        return 0;
    }

    // floor() can land one off the true cap near exact multiples
    while n > 0.0 && span / (n + 1.0) < min_cell {
        n -= 1.0;
    }
    while n < wanted && n < f64::from(u32::MAX) && span / (n + 2.0) >= min_cell {
        n += 1.0;
    }
    n as u32
}

/// Feature flags auto-disabled for small boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Features {
    pub label: bool,
    pub led_slot: bool,
    pub dividers: bool,
    pub smart_cartridge: bool,
    pub handle_large: bool,
    pub shadow_gap: bool,
    pub guide_cones: bool,
    pub service_channel: bool,
}

impl Features {
    /// (name, enabled) pairs in display order
    pub fn entries(&self) -> [(&'static str, bool); 8] {
        [
            ("label", self.label),
            ("led_slot", self.led_slot),
            ("dividers", self.dividers),
            ("smart_cartridge", self.smart_cartridge),
            ("handle_large", self.handle_large),
            ("shadow_gap", self.shadow_gap),
            ("guide_cones", self.guide_cones),
            ("service_channel", self.service_channel),
        ]
    }
}

/// Relief pattern parameters, present only when a pattern is selected
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternParams {
    #[serde(rename = "type")]
    pub kind: RunePattern,
    pub position: PatternPosition,
    pub spacing: f64,
    pub band_height: f64,
    pub groove_depth: f64,
    pub groove_width: f64,
}

/// Borrowing view computing every derived parameter on demand
#[derive(Debug, Clone, Copy)]
pub struct DerivedConfig<'a> {
    config: &'a BoxConfig,
}

impl<'a> DerivedConfig<'a> {
    pub fn new(config: &'a BoxConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a BoxConfig {
        self.config
    }

    pub fn base_tolerance(&self) -> f64 {
        self.config.material.base_tolerance()
    }

    pub fn tolerances(&self) -> Tolerances {
        Tolerances::from_slide(self.base_tolerance())
    }

    fn slide(&self) -> f64 {
        self.base_tolerance()
    }

    pub fn wall_thickness(&self) -> f64 {
        wall_thickness_for(self.config)
    }

    pub fn floor_thickness(&self) -> f64 {
        MIN_WALL.max(self.wall_thickness() * 0.8)
    }

    // Shell

    pub fn shell_inner_width(&self) -> f64 {
        self.config.width - 2.0 * self.wall_thickness()
    }

    pub fn shell_inner_depth(&self) -> f64 {
        self.config.depth - 2.0 * self.wall_thickness()
    }

    pub fn shell_inner_height(&self) -> f64 {
        self.config.height - self.floor_thickness()
    }

    pub fn space_between_rails(&self) -> f64 {
        self.shell_inner_width() - 2.0 * RAIL_WIDTH
    }

    /// Usable width between the rails, less sliding clearance
    pub fn effective_inner_width(&self) -> f64 {
        self.space_between_rails() - 2.0 * self.slide()
    }

    pub fn effective_inner_depth(&self) -> f64 {
        self.shell_inner_depth()
    }

    pub fn effective_inner_height(&self) -> f64 {
        self.shell_inner_height() - TOP_CLEARANCE
    }

    pub fn front_opening_width(&self) -> f64 {
        self.shell_inner_width()
    }

    pub fn front_opening_height(&self) -> f64 {
        self.effective_inner_height()
    }

    // Drawer

    pub fn drawer_width(&self) -> f64 {
        self.effective_inner_width()
    }

    pub fn drawer_depth(&self) -> f64 {
        self.effective_inner_depth() - FRONT_CLEARANCE
    }

    pub fn drawer_height(&self) -> f64 {
        self.effective_inner_height() - self.slide()
    }

    /// Drawer width including the V-groove runners on both sides
    pub fn drawer_body_width(&self) -> f64 {
        self.drawer_width() + 2.0 * V_GROOVE_DEPTH
    }

    pub fn drawer_wall_thickness(&self) -> f64 {
        MIN_WALL.max(round_to_nozzle(self.wall_thickness() * 0.8))
    }

    pub fn drawer_inner_width(&self) -> f64 {
        self.drawer_width() - 2.0 * self.drawer_wall_thickness()
    }

    pub fn drawer_inner_length(&self) -> f64 {
        self.drawer_depth() - 2.0 * self.drawer_wall_thickness()
    }

    /// Usable depth inside the drawer
    pub fn drawer_inner_depth(&self) -> f64 {
        self.drawer_height() - self.floor_thickness() - TOP_CLEARANCE
    }

    pub fn front_panel_thickness(&self) -> f64 {
        2.0_f64.max(self.wall_thickness())
    }

    pub fn divider_count(&self) -> (u32, u32) {
        let wall = self.wall_thickness();
        divider_grid(
            self.config.dividers,
            self.config.target_cell_size,
            self.drawer_width() - 2.0 * wall,
            self.drawer_depth() - 2.0 * wall,
        )
    }

    pub fn features_enabled(&self) -> Features {
        let inner_w = self.effective_inner_width();
        Features {
            label: inner_w >= 60.0,
            led_slot: inner_w >= 100.0,
            dividers: inner_w >= 50.0,
            smart_cartridge: inner_w >= 80.0,
            handle_large: inner_w >= 80.0,
            shadow_gap: self.config.print_mode != PrintMode::Draft,
            guide_cones: true,
            service_channel: self.config.mechanics.service_channel,
        }
    }

    pub fn connection_auto(&self) -> ConnectionType {
        connection_for(self.config)
    }

    /// Entry chamfer length on the rails
    pub fn lead_in_length(&self) -> f64 {
        15.0_f64.min(self.effective_inner_depth() * 0.1)
    }

    pub fn lead_in_tolerance(&self) -> f64 {
        0.1
    }

    /// Click tab (thickness, width, length) for the sound profile
    pub fn acoustic_tab_dims(&self) -> (f64, f64, f64) {
        (0.8, 6.0, 18.0)
    }

    pub fn whisker_params(&self) -> WhiskerParams {
        self.config.mechanics.whisker_variant.params()
    }

    pub fn shadow_gap_size(&self) -> f64 {
        match self.config.print_mode {
            PrintMode::Draft => 0.0,
            PrintMode::Normal => 0.4,
            PrintMode::Premium => 0.5,
        }
    }

    pub fn pattern_params(&self) -> Option<PatternParams> {
        let pattern = &self.config.pattern;
        if pattern.kind == RunePattern::None {
            return None;
        }
        Some(PatternParams {
            kind: pattern.kind,
            position: pattern.position,
            spacing: pattern.spacing,
            band_height: pattern.band_height,
            groove_depth: pattern.groove_depth,
            groove_width: pattern.groove_width,
        })
    }

    /// Derived-parameter warnings followed by the raw config warnings
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let wall = self.wall_thickness();
        if wall < MIN_WALL {
            warnings.push(format!("Wall thickness {wall:.1} < minimum {MIN_WALL}"));
        }
        if wall > MAX_WALL {
            warnings.push(format!("Wall thickness {wall:.1} > maximum {MAX_WALL}"));
        }

        let inner_w = self.effective_inner_width();
        if inner_w < MIN_INNER_WIDTH {
            warnings.push(format!(
                "Inner width {inner_w:.1} < minimum {MIN_INNER_WIDTH:.0}"
            ));
        }

        let drawer_inner_depth = self.drawer_inner_depth();
        if drawer_inner_depth < MIN_DRAWER_INNER_DEPTH {
            warnings.push(format!(
                "Drawer inner depth {drawer_inner_depth:.1} too shallow"
            ));
        }

        warnings.extend(self.config.validate());
        warnings
    }

    /// Fixed human-readable block.
    ///
    /// Reformatted for the terminal: lengths at one decimal, tolerances at two,
    /// and no blank lines around the block.
    pub fn summary(&self) -> String {
        let c = self.config;
        let tol = self.tolerances();
        let (cols, rows) = self.divider_count();
        let features = self.features_enabled();

        let mut out = String::new();
        out.push_str("Storage Box Configuration Summary\n");
        out.push_str("=================================\n");
        out.push_str(&format!(
            "External: {:?} × {:?} × {:?} mm\n",
            c.width, c.depth, c.height
        ));
        out.push_str(&format!(
            "Internal: {:.1} × {:.1} × {:.1} mm\n",
            self.effective_inner_width(),
            self.effective_inner_depth(),
            self.effective_inner_height()
        ));
        out.push_str(&format!(
            "Drawer: {:.1} × {:.1} × {:.1} mm\n",
            self.drawer_width(),
            self.drawer_depth(),
            self.drawer_height()
        ));
        out.push('\n');
        out.push_str(&format!("Wall thickness: {:.1} mm\n", self.wall_thickness()));
        out.push_str(&format!("Tolerance (slide): {:.2} mm\n", tol.slide));
        out.push_str(&format!("Tolerance (snap): {:.2} mm\n", tol.snap));
        out.push('\n');
        out.push_str(&format!("Dividers: {cols}×{rows}\n"));
        out.push_str(&format!("Connection: {}\n", self.connection_auto()));
        out.push('\n');
        out.push_str("Features enabled:\n");
        out.push_str(&format!("  - Label: {}\n", features.label));
        out.push_str(&format!("  - Smart cartridge: {}\n", features.smart_cartridge));
        out.push_str(&format!("  - Shadow gap: {}\n", features.shadow_gap));
        out.push_str(&format!("  - Service channel: {}", features.service_channel));
        out
    }

    pub fn snapshot(&self) -> DerivedSnapshot {
        let tol = self.tolerances();
        DerivedSnapshot {
            wall_thickness: self.wall_thickness(),
            floor_thickness: self.floor_thickness(),
            tolerances: tol,
            shell_inner_width: self.shell_inner_width(),
            shell_inner_depth: self.shell_inner_depth(),
            shell_inner_height: self.shell_inner_height(),
            space_between_rails: self.space_between_rails(),
            inner_width: self.effective_inner_width(),
            inner_depth: self.effective_inner_depth(),
            inner_height: self.effective_inner_height(),
            front_opening_width: self.front_opening_width(),
            front_opening_height: self.front_opening_height(),
            drawer_width: self.drawer_width(),
            drawer_depth: self.drawer_depth(),
            drawer_height: self.drawer_height(),
            drawer_body_width: self.drawer_body_width(),
            drawer_wall_thickness: self.drawer_wall_thickness(),
            drawer_inner_width: self.drawer_inner_width(),
            drawer_inner_length: self.drawer_inner_length(),
            drawer_inner_depth: self.drawer_inner_depth(),
            front_panel_thickness: self.front_panel_thickness(),
            divider_count: self.divider_count(),
            features: self.features_enabled(),
            connection: self.connection_auto(),
            lead_in_length: self.lead_in_length(),
            lead_in_tolerance: self.lead_in_tolerance(),
            acoustic_tab_dims: self.acoustic_tab_dims(),
            whisker: self.whisker_params(),
            shadow_gap_size: self.shadow_gap_size(),
            pattern: self.pattern_params(),
        }
    }
}

/// Every derived value, detached from the config
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedSnapshot {
    pub wall_thickness: f64,
    pub floor_thickness: f64,
    pub tolerances: Tolerances,
    pub shell_inner_width: f64,
    pub shell_inner_depth: f64,
    pub shell_inner_height: f64,
    pub space_between_rails: f64,
    pub inner_width: f64,
    pub inner_depth: f64,
    pub inner_height: f64,
    pub front_opening_width: f64,
    pub front_opening_height: f64,
    pub drawer_width: f64,
    pub drawer_depth: f64,
    pub drawer_height: f64,
    pub drawer_body_width: f64,
    pub drawer_wall_thickness: f64,
    pub drawer_inner_width: f64,
    pub drawer_inner_length: f64,
    pub drawer_inner_depth: f64,
    pub front_panel_thickness: f64,
    pub divider_count: (u32, u32),
    pub features: Features,
    pub connection: ConnectionType,
    pub lead_in_length: f64,
    pub lead_in_tolerance: f64,
    pub acoustic_tab_dims: (f64, f64, f64),
    pub whisker: WhiskerParams,
    pub shadow_gap_size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<PatternParams>,
}

//! Property tests for derived geometry.

use proptest::prelude::*;

use stowbox::application::{CheckUseCase, DesignReport, ManifestOptions, PrintManifest};
use stowbox::domain::value_objects::{
    DesignStyle, DividerLayout, MaterialType, Mount, PrintMode, PrinterProfile,
};
use stowbox::{BoxConfig, DerivedConfig, RulesEngine};

pub(crate) fn material() -> impl Strategy<Value = MaterialType> {
    proptest::sample::select(MaterialType::ALL.to_vec())
}

pub(crate) fn printer() -> impl Strategy<Value = PrinterProfile> {
    proptest::sample::select(PrinterProfile::ALL.to_vec())
}

pub(crate) fn style() -> impl Strategy<Value = DesignStyle> {
    proptest::sample::select(DesignStyle::ALL.to_vec())
}

pub(crate) fn mount() -> impl Strategy<Value = Mount> {
    proptest::sample::select(Mount::ALL.to_vec())
}

pub(crate) fn print_mode() -> impl Strategy<Value = PrintMode> {
    proptest::sample::select(PrintMode::ALL.to_vec())
}

pub(crate) fn dividers() -> impl Strategy<Value = DividerLayout> {
    proptest::sample::select(DividerLayout::ALL.to_vec())
}

/// Any finite size, including zero, negative and absurdly large values
fn dimension() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1e12f64..=0.0,
        0.0f64..1e-3,
        1.0f64..1000.0,
        1e3f64..1e12,
    ]
}

/// Cell targets from vanishing to huge, either sign
fn cell_size() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        -1e6f64..0.0,
        1e-12f64..1e-3,
        1.0f64..200.0,
        1e3f64..1e12,
    ]
}

/// Boxes with unvalidated values, as a hand-edited document can hold
pub(crate) fn any_box_config() -> impl Strategy<Value = BoxConfig> {
    (
        (dimension(), dimension(), dimension()),
        (material(), printer(), style(), mount(), print_mode()),
        (dividers(), cell_size(), cell_size()),
        (0u32..1000, -1e9f64..1e9, any::<bool>()),
    )
        .prop_map(
            |(
                (width, depth, height),
                (material, printer, design, mount, print_mode),
                (dividers, cell_w, cell_d),
                (stack, weight, sealed),
            )| BoxConfig {
                width,
                depth,
                height,
                material,
                printer,
                design,
                mount,
                print_mode,
                dividers,
                target_cell_size: (cell_w, cell_d),
                stack_levels: stack,
                expected_weight: weight,
                sealed,
                ..BoxConfig::default()
            },
        )
}

/// Printable boxes, from tiny to shelf-sized
pub(crate) fn box_config() -> impl Strategy<Value = BoxConfig> {
    (
        (40.0f64..500.0, 40.0f64..500.0, 15.0f64..300.0),
        (material(), printer(), style(), mount(), print_mode()),
        (1u32..6, 0.0f64..5000.0, any::<bool>()),
    )
        .prop_map(
            |((width, depth, height), (material, printer, design, mount, print_mode), (stack, weight, sealed))| {
                BoxConfig {
                    width,
                    depth,
                    height,
                    material,
                    printer,
                    design,
                    mount,
                    print_mode,
                    stack_levels: stack,
                    expected_weight: weight,
                    sealed,
                    ..BoxConfig::default()
                }
            },
        )
}

fn on_nozzle_grid(value: f64) -> bool {
    let steps = value / 0.4;
    (steps - steps.round()).abs() < 1e-9
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every derived value and rule is computable for any box.
    #[test]
    fn property_derivation_never_panics(config in any_box_config()) {
        let derived = DerivedConfig::new(&config);
        let _ = derived.snapshot();
        let _ = derived.validate();
        let _ = derived.summary();
        let _ = RulesEngine::new().evaluate_all(&config);
        let _ = CheckUseCase::default().execute(&config, &[]);
        let _ = DesignReport::build(&config, &RulesEngine::new());
    }

    /// PROPERTY: planning a print never panics and the totals cover every file.
    #[test]
    fn property_manifest_never_panics(config in any_box_config(), test_kit in any::<bool>()) {
        let derived = DerivedConfig::new(&config);
        let manifest = PrintManifest::build(&derived, &ManifestOptions { test_kit });
        for file in &manifest.files {
            prop_assert!(manifest.total_minutes >= file.minutes);
        }
    }

    /// PROPERTY: automatic dividers never leave a cell under the minimum size.
    #[test]
    fn property_auto_dividers_respect_minimum_cell(
        width in dimension(),
        depth in dimension(),
        cell_w in cell_size(),
        cell_d in cell_size(),
    ) {
        let (cols, rows) = stowbox::domain::services::derived::divider_grid(
            DividerLayout::Auto,
            (cell_w, cell_d),
            width,
            depth,
        );
        if cols > 0 && cols < u32::MAX {
            prop_assert!(width / (f64::from(cols) + 1.0) >= 25.0);
        }
        if rows > 0 && rows < u32::MAX {
            prop_assert!(depth / (f64::from(rows) + 1.0) >= 30.0);
        }
    }

    /// PROPERTY: walls are whole nozzle widths and stay positive.
    #[test]
    fn property_wall_is_on_nozzle_grid(config in box_config()) {
        let derived = DerivedConfig::new(&config);
        let wall = derived.wall_thickness();
        prop_assert!(wall > 0.0);
        prop_assert!(on_nozzle_grid(wall), "wall {wall} is not a multiple of 0.4");
        prop_assert!(derived.drawer_wall_thickness() <= wall);
    }

    /// PROPERTY: the drawer always fits inside the shell.
    #[test]
    fn property_drawer_fits_shell(config in box_config()) {
        let d = DerivedConfig::new(&config);
        prop_assert!(d.drawer_width() < d.space_between_rails());
        prop_assert!(d.drawer_depth() < d.shell_inner_depth());
        prop_assert!(d.drawer_height() < d.shell_inner_height());
        prop_assert!(d.drawer_inner_width() < d.drawer_width());
    }

    /// PROPERTY: the same config always derives the same values.
    #[test]
    fn property_derivation_is_deterministic(config in box_config()) {
        let a = serde_json::to_value(DerivedConfig::new(&config).snapshot()).unwrap();
        let b = serde_json::to_value(DerivedConfig::new(&config.clone()).snapshot()).unwrap();
        prop_assert_eq!(a, b);
    }
}

//! Interior layout and shell shape option sets

option_set! {
    /// Divider grid inside the drawer
    DividerLayout ("divider layout", default = Auto) {
        /// Derived from the target cell size
        Auto => "auto",
        Grid2x2 => "grid_2x2",
        Grid2x3 => "grid_2x3",
        Grid3x3 => "grid_3x3",
        None => "none",
    }
}

impl DividerLayout {
    /// Divider count (columns, rows) for fixed grids; `None` for `Auto`
    pub fn fixed_grid(&self) -> Option<(u32, u32)> {
        match self {
            DividerLayout::Auto => None,
            DividerLayout::Grid2x2 => Some((1, 1)),
            DividerLayout::Grid2x3 => Some((1, 2)),
            DividerLayout::Grid3x3 => Some((2, 2)),
            DividerLayout::None => Some((0, 0)),
        }
    }
}

option_set! {
    /// Divider attachment
    DividerMode ("divider mode", default = Snap) {
        /// Quick release by hand
        Snap => "snap",
        /// Locking, for the workshop
        Lock => "lock",
    }
}

option_set! {
    /// Outer shell shape
    ShellGeometry ("shell geometry", default = Rectangular) {
        Rectangular => "rectangular",
        /// Front lower than back
        SlopedTop => "sloped_top",
        SlopedBack => "sloped_back",
        Wedge => "wedge",
        CurvedTop => "curved_top",
        Stepped => "stepped",
        /// One side higher
        Asymmetric => "asymmetric",
    }
}

option_set! {
    /// Side that a sloped shell falls towards
    SlopeDirection ("slope direction", default = Front) {
        Front => "front",
        Left => "left",
        Right => "right",
    }
}

option_set! {
    /// Modular drawer bottom insert
    InsertType ("insert type", default = Flat) {
        Flat => "flat",
        Honeycomb => "honeycomb",
        CableWaves => "cable",
        BitHolder => "bits",
        CoinTray => "coins",
        FoamGrid => "foam",
        PencilGrooves => "pencils",
        WatchCushion => "watch",
        Velour => "velour",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_grids_map_to_divider_counts() {
        assert_eq!(DividerLayout::Grid2x2.fixed_grid(), Some((1, 1)));
        assert_eq!(DividerLayout::Grid2x3.fixed_grid(), Some((1, 2)));
        assert_eq!(DividerLayout::Grid3x3.fixed_grid(), Some((2, 2)));
        assert_eq!(DividerLayout::None.fixed_grid(), Some((0, 0)));
        assert_eq!(DividerLayout::Auto.fixed_grid(), None);
    }

    #[test]
    fn insert_wire_names_are_short_forms() {
        assert_eq!(InsertType::CableWaves.as_str(), "cable");
        assert_eq!("coins".parse::<InsertType>().unwrap(), InsertType::CoinTray);
    }
}

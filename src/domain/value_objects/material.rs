//! Material, printer and print-mode option sets

option_set! {
    /// Filament type; each has its own base clearance
    MaterialType ("material", default = HyperPla) {
        /// Hyper PLA, 0.30 mm
        HyperPla => "hyper_pla",
        /// PETG, 0.40 mm
        Petg => "petg",
        /// ABS, 0.35 mm
        Abs => "abs",
    }
}

impl MaterialType {
    /// Base sliding clearance in mm
    pub fn base_tolerance(&self) -> f64 {
        match self {
            MaterialType::HyperPla => 0.30,
            MaterialType::Petg => 0.40,
            MaterialType::Abs => 0.35,
        }
    }
}

option_set! {
    /// Printer profile used to scale clearances
    PrinterProfile ("printer", default = CrealityK1c) {
        /// Creality K1C (0.4 nozzle, 0.2 layer)
        CrealityK1c => "k1c",
        /// Generic FDM printer
        GenericFdm => "fdm",
        /// Fine-layer profile (0.12 layer)
        HighDetail => "hd",
    }
}

impl PrinterProfile {
    /// Multiplier applied to material clearances
    pub fn modifier(&self) -> f64 {
        match self {
            PrinterProfile::CrealityK1c => 1.0,
            PrinterProfile::GenericFdm => 1.1,
            PrinterProfile::HighDetail => 0.85,
        }
    }
}

option_set! {
    /// Quality/speed trade-off
    PrintMode ("print mode", default = Normal) {
        /// Fast, no fine details
        Draft => "draft",
        Normal => "normal",
        /// Maximum detail
        Premium => "premium",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_tolerances_per_material() {
        assert_eq!(MaterialType::HyperPla.base_tolerance(), 0.30);
        assert_eq!(MaterialType::Petg.base_tolerance(), 0.40);
        assert_eq!(MaterialType::Abs.base_tolerance(), 0.35);
    }

    #[test]
    fn printer_modifiers() {
        assert_eq!(PrinterProfile::CrealityK1c.modifier(), 1.0);
        assert_eq!(PrinterProfile::GenericFdm.modifier(), 1.1);
        assert_eq!(PrinterProfile::HighDetail.modifier(), 0.85);
    }

    #[test]
    fn printer_wire_names_are_short() {
        assert_eq!(PrinterProfile::wire_names(), vec!["k1c", "fdm", "hd"]);
    }
}

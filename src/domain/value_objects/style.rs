//! Visual style option sets

option_set! {
    /// Overall design language of the box
    DesignStyle ("design style", default = Nordic) {
        /// Soft corners, clean lines
        Nordic => "nordic",
        /// 45 degree chamfers, thin accent lines
        Techno => "techno",
        /// Geometry and contrast inserts
        Bauhaus => "bauhaus",
        /// Smooth curves
        Organic => "organic",
        /// Wave pattern on the sides
        Parametric => "parametric",
        /// Sharp edges, hidden connections
        Stealth => "stealth",
        /// Warm techno-sacral minimalism
        Belovodie => "belovodie",
    }
}

option_set! {
    /// Relief motif for the belovodie style
    RunePattern ("rune pattern", default = None) {
        None => "none",
        ChevronRune => "chevron",
        KnotLine => "knot",
        /// Broken wave, not a sine
        WaveRune => "wave",
        /// Grid with dots
        GridRune => "grid",
    }
}

option_set! {
    /// Where the relief pattern goes (exactly one zone)
    PatternPosition ("pattern position", default = BackEdge) {
        BackEdge => "back_edge",
        FrontBand => "front_band",
        LabelFrame => "label_frame",
    }
}

option_set! {
    /// Belovodie palette
    BelovodieColor ("color", default = MistWhite) {
        /// RAL 9016
        MistWhite => "mist_white",
        /// RAL 1015
        StoneSand => "stone_sand",
        /// RAL 7035
        AshGrey => "ash_grey",
        /// RAL 9005
        Obsidian => "obsidian",
        EmeraldDeep => "emerald_deep",
        BronzeWarm => "bronze_warm",
        RuneRed => "rune_red",
        FrostBlue => "frost_blue",
    }
}

option_set! {
    /// Named belovodie colorway and pattern bundle
    BelovodiePreset ("belovodie preset", default = Desk) {
        Desk => "desk",
        Workshop => "workshop",
        Med => "med",
        /// Full rune set, exhibition piece
        Sacred => "sacred",
    }
}

option_set! {
    /// Color insert slot for single-color printers
    ColorInsert ("color insert", default = LabelFrame) {
        LabelFrame => "label_frame",
        HandleAccent => "handle_accent",
        EdgeTrim => "edge_trim",
        StripeHorizontal => "stripe_h",
        StripeVertical => "stripe_v",
        CornerCaps => "corner_caps",
        CenterBadge => "badge",
        WavePattern => "wave",
        NumberPlate => "number",
        IconSymbol => "icon",
        ColorDot => "dot",
    }
}

option_set! {
    /// Label frame profile
    LabelFrameStyle ("label frame style", default = Flush) {
        Flush => "flush",
        Raised => "raised",
        Recessed => "recessed",
        RecessedPortal => "recessed_portal",
    }
}

option_set! {
    /// Handle profile chosen by a design style
    HandleProfile ("handle profile", default = Hook) {
        HiddenBottom => "hidden_bottom",
        HorizontalSlot => "horizontal_slot",
        Pinch => "pinch",
        Wave => "wave",
        Hook => "hook",
        Invisible => "invisible",
        HiddenHookRune => "hidden_hook_rune",
        RuneSlot => "rune_slot",
    }
}

option_set! {
    /// Decorative surface pattern chosen by a design style
    TokenPattern ("token pattern", default = None) {
        None => "none",
        Lines => "lines",
        Wave => "wave",
        SineWave => "sine_wave",
        Runes => "runes",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rune_pattern_wire_names_are_short() {
        assert_eq!(RunePattern::ChevronRune.as_str(), "chevron");
        assert_eq!(RunePattern::KnotLine.as_str(), "knot");
    }

    #[test]
    fn design_style_lists_seven_styles() {
        assert_eq!(DesignStyle::ALL.len(), 7);
        assert_eq!(DesignStyle::default(), DesignStyle::Nordic);
    }
}

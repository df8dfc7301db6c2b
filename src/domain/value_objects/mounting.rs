//! Connection, mounting, handle and accessory option sets

option_set! {
    /// How stacked boxes join each other
    ConnectionType ("connection", default = Dovetail) {
        Dovetail => "dovetail",
        /// Pockets for 6x3 mm magnets
        Magnet => "magnet",
        /// Snap clips
        Clip => "clip",
        None => "none",
    }
}

option_set! {
    /// Where the box lives
    Mount ("mount", default = Table) {
        Table => "table",
        Wall => "wall",
    }
}

option_set! {
    /// Wall mount hardware
    MountType ("mount type", default = FrenchCleat) {
        /// 45 degree cleat
        FrenchCleat => "french_cleat",
        Keyhole => "keyhole",
        /// Pegboard rail system
        RailSystem => "rail",
        /// Metal plate with magnets
        Magnetic => "magnetic",
        /// Adhesive strip platform
        Adhesive => "adhesive",
    }
}

option_set! {
    /// Handle shape on the drawer front
    HandleMode ("handle mode", default = Hook) {
        /// Narrow 12x60 mm slot
        Pinch => "pinch",
        /// Finger catch from below
        Hook => "hook",
        /// Enlarged for gloves
        Glove => "glove",
        /// Push latch or under-panel
        Invisible => "invisible",
        HiddenHookRune => "hidden_hook_rune",
        /// Hexagonal slot
        RuneSlot => "rune_slot",
    }
}

option_set! {
    /// Label system on the drawer front
    LabelSystem ("label system", default = PaperSlot) {
        /// Paper under a clear cover
        PaperSlot => "paper",
        /// 2.9" e-ink display mount
        EInkMount => "e_ink",
        DryErase => "dry_erase",
        Embossed => "embossed",
        Braille => "braille",
        QrCode => "qr",
        IconGrid => "icons",
    }
}

option_set! {
    /// Smart cartridge module in the back wall
    SmartCartridge ("smart cartridge", default = Plain) {
        /// Blank cover
        Plain => "plain",
        /// 13 mm NFC tag
        Nfc13mm => "nfc",
        /// Hall sensor or reed switch
        HallSensor => "hall",
        /// ESP32/ESP8266 with micro-USB
        EspModule => "esp",
        /// 5 mm cable pass-through
        CablePass => "cable",
        /// DHT22 temperature and humidity
        TempHumid => "dht",
    }
}

//! Application-wide constants
//!
//! This module contains the magic strings shared between the powercfg
//! integration, the position file, and the application shell.

/// Application identity constants
pub mod app {
    /// Binary / package name
    pub const NAME: &str = "power-plan-switcher";

    /// Title shown in the window decoration
    pub const WINDOW_TITLE: &str = "Power Options";

    /// Directory under the platform config dir holding our files
    pub const CONFIG_DIR: &str = "power-plan-switcher";
}

/// powercfg invocation and output-format constants
pub mod powercfg {
    /// Power-management tool executable
    pub const PROGRAM: &str = "powercfg";

    /// Subcommand that lists every installed plan
    pub const LIST: &str = "/list";

    /// Subcommand that prints the currently active plan
    pub const GET_ACTIVE: &str = "/getactivescheme";

    /// Subcommand that activates a plan by identifier
    pub const SET_ACTIVE: &str = "/setactive";

    /// Substring present on every plan line regardless of console language
    pub const GUID_MARKER: &str = "GUID";

    /// Marker appended to the active plan's parenthesized name
    pub const ACTIVE_MARKER: char = '*';
}

/// Position-file format constants
pub mod storage {
    /// File name under the config directory
    pub const FILE_NAME: &str = "window-positions.csv";

    /// Field separator between host name and offset string
    pub const DELIMITER: char = ',';

    /// Byte-order mark some editors and legacy writers prepend
    pub const BOM: char = '\u{feff}';
}

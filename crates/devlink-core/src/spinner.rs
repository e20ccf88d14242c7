//! Loading indicator.

use std::fmt;

/// Stateless loading indicator: a fixed image, centered, 200px wide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spinner;

impl Spinner {
    pub const SRC: &str = "/assets/spinner.gif";
    pub const WIDTH_PX: u32 = 200;
    pub const ALT: &str = "Loading....";
}

/// Renders the `<img>` markup.
impl fmt::Display for Spinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<img src="{}" style="width: {}px; margin: auto; display: block" alt="{}" />"#,
            Self::SRC,
            Self::WIDTH_PX,
            Self::ALT
        )
    }
}

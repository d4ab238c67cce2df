/// Settings that shape how a `GarageSession` talks to the console.
///
/// None of these change garage behaviour; they only affect decoration and
/// diagnostics.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Print the welcome banner before the first menu.
    pub show_banner: bool,
    /// Decorate headings and markers with ANSI colors.
    pub color: bool,
    /// Emit debug-level tracing to stderr.
    pub verbose: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            show_banner: true,
            color: true,
            verbose: false,
        }
    }
}

impl SessionSettings {
    /// Plain settings for driving a session from scripts and tests: no banner,
    /// no colors.
    pub fn plain() -> Self {
        Self {
            show_banner: false,
            color: false,
            verbose: false,
        }
    }

    /// Applies the color choice process-wide. `colored` also honours
    /// `NO_COLOR` on its own.
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

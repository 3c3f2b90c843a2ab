//! Configuration types for TypeScript emission.

/// Configuration for TypeScript emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Emit every declaration into the global scope, ignoring exposure
    pub(crate) force_global: bool,
    /// Add a unique brand member to interfaces, dictionaries and enums
    pub(crate) nominal: bool,
    /// Prefix of brand member names
    pub(crate) brand_prefix: String,
    /// Map `FrozenArray<T>` to `ReadonlyArray<T>` instead of `T[]`
    pub(crate) readonly_arrays: bool,
    /// Banner comment placed at the top of the output
    pub(crate) header: Option<String>,
    /// One level of indentation
    pub(crate) indent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            force_global: false,
            nominal: false,
            brand_prefix: "__brand_".to_string(),
            readonly_arrays: true,
            header: None,
            indent: "  ".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn force_global(mut self, value: bool) -> Self {
        self.force_global = value;
        self
    }

    /// Set whether to brand declarations nominally.
    pub fn nominal(mut self, value: bool) -> Self {
        self.nominal = value;
        self
    }

    pub fn brand_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.brand_prefix = prefix.into();
        self
    }

    pub fn readonly_arrays(mut self, value: bool) -> Self {
        self.readonly_arrays = value;
        self
    }

    /// Set a banner comment. Each line is emitted as a `//` comment.
    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(text.into());
        self
    }

    /// Set the indentation width, in spaces.
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = " ".repeat(width);
        self
    }
}

use crate::platform::Platform;
use config::PlaceholderStyle;
use select_tree::{PageBound, ParameterContainer, SqlError};
use serde_json::Value;

/// Whether values become placeholders or are inlined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Placeholders in the text, values collected in the parameter container
    Prepare(PlaceholderStyle),
    /// Values written into the text, nothing collected
    Literal,
}

/// Accumulates SQL text and bound parameters for one render call.
///
/// Parameter names are `{prefix}{base}`; the prefix is scoped with
/// [`SqlBuilder::with_prefix`] while a nested statement is rendered.
pub struct SqlBuilder<'p> {
    sql: String,
    params: ParameterContainer,
    mode: BuildMode,
    prefix: String,
    platform: &'p dyn Platform,
}

impl<'p> SqlBuilder<'p> {
    pub fn new(platform: &'p dyn Platform, mode: BuildMode) -> Self {
        Self {
            sql: String::new(),
            params: ParameterContainer::new(),
            mode,
            prefix: String::new(),
            platform,
        }
    }

    pub fn platform(&self) -> &'p dyn Platform {
        self.platform
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    /// Name prefix of the statement currently being rendered
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Push a string
    pub fn push_str<T: AsRef<str>>(&mut self, s: T) {
        self.sql.push_str(s.as_ref());
    }

    /// Push a character
    pub fn push(&mut self, c: char) {
        self.sql.push(c);
    }

    /// Push a single identifier quoted by the platform
    pub fn push_identifier<T: AsRef<str>>(&mut self, s: T) {
        let quoted = self.platform.quote_identifier(s.as_ref());
        self.sql.push_str(&quoted);
    }

    /// Push a dot-separated identifier chain quoted by the platform
    pub fn push_identifier_chain<T: AsRef<str>>(&mut self, s: T) {
        let quoted = self.platform.quote_identifier_chain(s.as_ref());
        self.sql.push_str(&quoted);
    }

    /// Push a value: a placeholder bound under `{prefix}{base}` when preparing,
    /// the platform's quoted literal otherwise
    pub fn push_param(&mut self, base: &str, value: Value) -> Result<(), SqlError> {
        match self.mode {
            BuildMode::Prepare(style) => self.bind(base, value, style),
            BuildMode::Literal => {
                let literal = self.platform.quote_value(&value);
                self.sql.push_str(&literal);
                Ok(())
            }
        }
    }

    /// Push a LIMIT/OFFSET bound. Literal mode writes the bound exactly as supplied, unquoted.
    pub fn push_page_bound(&mut self, base: &str, bound: &PageBound) -> Result<(), SqlError> {
        match self.mode {
            BuildMode::Prepare(style) => self.bind(base, bound.to_value(), style),
            BuildMode::Literal => {
                self.sql.push_str(&bound.to_string());
                Ok(())
            }
        }
    }

    fn bind(&mut self, base: &str, value: Value, style: PlaceholderStyle) -> Result<(), SqlError> {
        let name = format!("{}{}", self.prefix, base);
        if self.params.contains(&name) {
            return Err(SqlError::ParameterCollision(name));
        }

        match style {
            PlaceholderStyle::Positional => self.sql.push('?'),
            PlaceholderStyle::Named => {
                self.sql.push(':');
                self.sql.push_str(&name);
            }
        }
        self.params.set(name, value);
        Ok(())
    }

    /// Push elements of an iterator, separated by `sep`. The `mapping` function
    /// renders one element and may fail, which stops the iteration.
    pub fn push_iter<T>(
        &mut self,
        iter: impl Iterator<Item = T>,
        sep: &str,
        mut mapping: impl FnMut(&mut Self, T) -> Result<(), SqlError>,
    ) -> Result<(), SqlError> {
        for (i, item) in iter.enumerate() {
            if i > 0 {
                self.sql.push_str(sep);
            }
            mapping(self, item)?;
        }
        Ok(())
    }

    /// Execute the given function with `prefix` as the parameter name prefix,
    /// restoring the previous prefix afterwards
    pub fn with_prefix<F, R>(&mut self, prefix: String, func: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        let outer = std::mem::replace(&mut self.prefix, prefix);
        let ret = func(self);
        self.prefix = outer;
        ret
    }

    /// Get the SQL string and the bound parameters. This consumes the builder.
    pub fn into_sql(self) -> (String, ParameterContainer) {
        (self.sql, self.params)
    }
}

/// Tunables that govern validation, independent of any particular format
/// string.
///
/// Constructed with [`Config::default`] unless the caller (an SQL catalog
/// or DDL validator) needs a different output-width ceiling.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Config {
    /// Maximum length, in `char`s, of an accepted format string. Format
    /// strings longer than this are rejected with
    /// [`Error::FormatTooLong`][crate::Error::FormatTooLong] before tokenizing
    /// even begins.
    pub format_max_output_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format_max_output_width: 1024,
        }
    }
}

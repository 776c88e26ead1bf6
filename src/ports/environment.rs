/// Port for reading process environment values.
pub trait EnvSource {
    /// Value of `name`, or `None` when unset or not valid unicode.
    fn var(&self, name: &str) -> Option<String>;

    /// Like [`EnvSource::var`] but treats blank values as unset.
    fn non_blank(&self, name: &str) -> Option<String> {
        self.var(name).filter(|value| !value.trim().is_empty())
    }
}

use crate::ports::EnvSource;

/// Reads the real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARIABLE: &str = "INFRAGEN_TEST_PROCESS_ENV";

    #[test]
    #[serial]
    fn reads_and_filters_blank_values() {
        // SAFETY: serialized with every other environment-touching test.
        unsafe { std::env::set_var(VARIABLE, "  ") };
        assert_eq!(ProcessEnv.var(VARIABLE).as_deref(), Some("  "));
        assert_eq!(ProcessEnv.non_blank(VARIABLE), None);

        unsafe { std::env::set_var(VARIABLE, "value") };
        assert_eq!(ProcessEnv.non_blank(VARIABLE).as_deref(), Some("value"));

        unsafe { std::env::remove_var(VARIABLE) };
        assert_eq!(ProcessEnv.var(VARIABLE), None);
    }
}

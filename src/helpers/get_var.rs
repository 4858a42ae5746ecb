use std::collections::HashMap;

/// Returns the value of `name` in `vars`, or an empty string when it is absent.
pub fn get_var_or_empty(vars: &HashMap<String, String>, name: &str) -> String {
    vars.get(name).cloned().unwrap_or_default()
}
